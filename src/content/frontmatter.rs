//! Front-matter parsing and validation

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::{ContentError, Result};
use super::item::{Author, ContentKind, Details};
use crate::helpers::parse_date;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OgImage {
    pub url: Option<String>,
}

/// Front-matter data of a post or project, as written by the author
///
/// Every key is optional. Type mismatches (a number where a list of
/// strings is expected, say) fail deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tech_stack: Vec<String>,
    pub is_featured: Option<bool>,
    pub show_tags: Option<bool>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub author: Option<Author>,
    pub og_image: Option<OgImage>,
}

/// Front matter after validation, with every default applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMeta {
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub show_tags: bool,
    pub details: Details,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // No front-matter found
        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading thematic break followed by prose is body text, not
        // metadata. Front matter needs at least one `key: value` line.
        let has_yaml_structure = yaml_content.lines().any(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return false;
            }
            if let Some(colon_pos) = trimmed.find(':') {
                let before_colon = &trimmed[..colon_pos];
                let is_valid_key = !before_colon.is_empty()
                    && before_colon
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                    && before_colon != "http"
                    && before_colon != "https"
                    && before_colon != "ftp";
                if is_valid_key {
                    let after_colon = &trimmed[colon_pos + 1..];
                    return after_colon.is_empty() || after_colon.starts_with(' ');
                }
            }
            false
        });

        if !has_yaml_structure {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    /// Check the metadata against the schema and apply defaults
    ///
    /// `today` stands in for a missing date.
    pub fn validate(self, kind: ContentKind, today: NaiveDate) -> Result<ValidatedMeta> {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => parse_date(raw).ok_or_else(|| ContentError::Validation {
                field: "date",
                message: format!("`{}` is not a recognizable date", raw),
            })?,
        };

        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| kind.untitled().to_string());

        let cover_image = self.cover_image.filter(|c| !c.trim().is_empty());

        // The kind's own key leads, the other one is appended
        let tags = match kind {
            ContentKind::Blog => [self.tech_stack, self.tags].concat(),
            ContentKind::Project => [self.tags, self.tech_stack].concat(),
        };
        if let Some(blank) = tags.iter().position(|t| t.trim().is_empty()) {
            return Err(ContentError::Validation {
                field: "tags",
                message: format!("entry {} is blank", blank),
            });
        }

        let details = match kind {
            ContentKind::Blog => Details::Blog {
                author: self.author,
                og_image: self.og_image.and_then(|o| o.url),
            },
            ContentKind::Project => Details::Project {
                github_url: self.github_url.filter(|u| !u.is_empty()),
                demo_url: self.demo_url.filter(|u| !u.is_empty()),
            },
        };

        Ok(ValidatedMeta {
            title,
            date,
            excerpt: self.excerpt.unwrap_or_default(),
            cover_image,
            tags,
            is_featured: self.is_featured.unwrap_or(false),
            show_tags: self.show_tags.unwrap_or(true),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
techStack:
  - rust
  - go
coverImage: ./assets/cover.png
isFeatured: true
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.date, Some("2024-01-15".to_string()));
        assert_eq!(fm.tech_stack, vec!["rust", "go"]);
        assert_eq!(fm.cover_image.as_deref(), Some("./assets/cover.png"));
        assert_eq!(fm.is_featured, Some(true));
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = "---\ntitle: One\ntags: Notes\n---\nBody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("# Just markdown\n").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, "# Just markdown\n");
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = "---\n\nSome text with a list:\n- Item 1\n\n---\nMore content.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("Some text"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody\n";
        assert!(matches!(
            FrontMatter::parse(content),
            Err(ContentError::FrontMatter(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let content = "---\ntitle: Typed\nisFeatured: maybe\ntags:\n  nested: map\n---\nBody\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_validate_defaults() {
        let meta = FrontMatter::default()
            .validate(ContentKind::Blog, today())
            .unwrap();
        assert_eq!(meta.title, "Untitled Post");
        assert_eq!(meta.date, today());
        assert_eq!(meta.excerpt, "");
        assert!(meta.cover_image.is_none());
        assert!(!meta.is_featured);
        assert!(meta.show_tags);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_validate_keeps_declared_date() {
        let fm = FrontMatter {
            date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let meta = fm.validate(ContentKind::Project, today()).unwrap();
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let fm = FrontMatter {
            date: Some("someday".to_string()),
            ..Default::default()
        };
        let err = fm.validate(ContentKind::Blog, today()).unwrap_err();
        assert!(matches!(err, ContentError::Validation { field: "date", .. }));
    }

    #[test]
    fn test_validate_tag_order_per_kind() {
        let fm = FrontMatter {
            tags: vec!["web".into()],
            tech_stack: vec!["rust".into(), "web".into()],
            ..Default::default()
        };
        let blog = fm.clone().validate(ContentKind::Blog, today()).unwrap();
        assert_eq!(blog.tags, vec!["rust", "web", "web"]);
        let project = fm.validate(ContentKind::Project, today()).unwrap();
        assert_eq!(project.tags, vec!["web", "rust", "web"]);
    }

    #[test]
    fn test_validate_details() {
        let content = "---\ngithubUrl: https://github.com/x/y\nauthor:\n  name: Joel\nogImage:\n  url: /og.png\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        let project = fm.clone().validate(ContentKind::Project, today()).unwrap();
        assert_eq!(
            project.details,
            Details::Project {
                github_url: Some("https://github.com/x/y".into()),
                demo_url: None
            }
        );
        let blog = fm.validate(ContentKind::Blog, today()).unwrap();
        assert_eq!(
            blog.details,
            Details::Blog {
                author: Some(Author {
                    name: Some("Joel".into()),
                    picture: None
                }),
                og_image: Some("/og.png".into())
            }
        );
    }

    #[test]
    fn test_explicit_show_tags_false() {
        let (fm, _) = FrontMatter::parse("---\nshowTags: false\n---\n").unwrap();
        let meta = fm.validate(ContentKind::Blog, today()).unwrap();
        assert!(!meta.show_tags);
    }
}
