//! Site configuration (config.yaml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Loaded once at startup and passed to whatever needs it. The personal
/// sections (`personal`, `skills`, `experience`, ...) are carried through
/// untouched for the presentation layer; `content` drives the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub personal: PersonalInfo,
    pub skills: Skills,
    pub experience: Experience,
    pub languages: Vec<SpokenLanguage>,
    pub interests: Vec<String>,
    pub content: ContentConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    pub base_url: String,
    /// Moment.js style format used when printing dates
    pub date_format: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            base_url: "http://localhost:4000".to_string(),
            date_format: "YYYY-MM-DD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub location: String,
    pub social: SocialLinks,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub databases: Vec<String>,
    pub frameworks: Vec<String>,
    pub cloud: Vec<String>,
    pub cicd: Vec<String>,
    pub analytics: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Experience {
    pub professional: Vec<Position>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Position {
    pub company: String,
    pub title: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub gpa: Option<String>,
    pub achievements: Vec<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpokenLanguage {
    pub name: String,
    pub proficiency: String,
}

/// Which URL prefix served assets live under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetRoute {
    /// `/content/{kind}/{slug}/...`, copied into the public dir at build time
    #[default]
    Content,
    /// `/api/content/{kind}/{slug}/...`, streamed by the server
    Api,
}

impl AssetRoute {
    pub fn prefix(self) -> &'static str {
        match self {
            AssetRoute::Content => "/content",
            AssetRoute::Api => "/api/content",
        }
    }
}

/// Content engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub content_dir: String,
    pub public_dir: String,
    /// Name of the entry document inside each item directory
    pub entry_file: String,
    pub asset_route: AssetRoute,
    pub highlight_theme: String,
    pub words_per_minute: usize,
    pub gallery_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            entry_file: "index.md".to_string(),
            asset_route: AssetRoute::Content,
            highlight_theme: "base16-ocean.dark".to_string(),
            words_per_minute: 200,
            gallery_file: "images.yaml".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.content.content_dir, "content");
        assert_eq!(config.content.entry_file, "index.md");
        assert_eq!(config.content.asset_route, AssetRoute::Content);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
site:
  title: Joel's Portfolio
  baseUrl: https://example.com
personal:
  name: Joel
  social:
    github: joel
skills:
  languages: [Go, Rust]
experience:
  education:
    - institution: Some University
      degree: BSc
      gpa: "3.9"
content:
  asset_route: api
  words_per_minute: 250
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.title, "Joel's Portfolio");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.date_format, "YYYY-MM-DD");
        assert_eq!(config.personal.social.github, "joel");
        assert_eq!(config.skills.languages, vec!["Go", "Rust"]);
        assert_eq!(
            config.experience.education[0].gpa.as_deref(),
            Some("3.9")
        );
        assert_eq!(config.content.asset_route, AssetRoute::Api);
        assert_eq!(config.content.words_per_minute, 250);
        assert_eq!(config.content.entry_file, "index.md");
    }

    #[test]
    fn test_asset_route_prefix() {
        assert_eq!(AssetRoute::Content.prefix(), "/content");
        assert_eq!(AssetRoute::Api.prefix(), "/api/content");
    }
}
