//! Generator module - writes the JSON snapshot and copies content assets

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::content::{ContentItem, ContentKind, ContentRepository};
use crate::gallery::Gallery;

/// Counts reported after a build
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub items: usize,
    pub placeholders: usize,
    pub assets: usize,
    pub images: usize,
}

/// Writes every content record to the public directory
pub struct Generator {
    public_dir: PathBuf,
}

impl Generator {
    /// Create a new generator
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.public_dir.join("data")
    }

    /// Generate the whole snapshot
    pub fn generate(
        &self,
        repo: &ContentRepository,
        gallery: &Gallery,
        config: &SiteConfig,
    ) -> Result<BuildStats> {
        fs::create_dir_all(self.data_dir())?;
        let mut stats = BuildStats::default();

        for kind in ContentKind::ALL {
            let items = repo.load_all(kind);
            stats.items += items.len();
            stats.placeholders += items.iter().filter(|i| i.is_placeholder()).count();

            self.write_records(kind, &items)?;
            self.write_json(
                &format!("{}-tags.json", kind.dir_name()),
                &repo.collect_tags(kind),
            )?;

            for item in items.iter().filter(|i| !i.is_placeholder()) {
                stats.assets += self.copy_item_assets(repo, kind, &item.slug)?;
            }
        }

        self.write_json("gallery.json", gallery)?;
        stats.images = gallery.images.len();

        self.write_json("site.json", &SiteData::from(config))?;

        tracing::info!(
            "Generated {} items ({} placeholders), copied {} assets",
            stats.items,
            stats.placeholders,
            stats.assets
        );
        Ok(stats)
    }

    /// `data/{kind}.json` plus one file per item
    fn write_records(&self, kind: ContentKind, items: &[ContentItem]) -> Result<()> {
        self.write_json(&format!("{}.json", kind.dir_name()), items)?;

        let kind_dir = self.data_dir().join(kind.dir_name());
        fs::create_dir_all(&kind_dir)?;
        for item in items {
            let output_path = kind_dir.join(format!("{}.json", item.slug));
            fs::write(&output_path, serde_json::to_string_pretty(item)?)?;
            tracing::debug!("Generated: {:?}", output_path);
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let output_path = self.data_dir().join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&output_path, json)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy every non-entry file of an item under `content/{kind}/{slug}`
    fn copy_item_assets(
        &self,
        repo: &ContentRepository,
        kind: ContentKind,
        slug: &str,
    ) -> Result<usize> {
        let item_dir = repo.resolver().item_dir(kind, slug);
        let dest_dir = self
            .public_dir
            .join("content")
            .join(kind.dir_name())
            .join(slug);
        copy_tree(&item_dir, &dest_dir, repo.entry_file())
    }
}

/// Copy files under `src` to `dest`, skipping the entry document at the top
fn copy_tree(src: &Path, dest: &Path, entry_file: &str) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(src)?;
        if relative == Path::new(entry_file) {
            continue;
        }

        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        copied += 1;
    }
    Ok(copied)
}

/// Presentation data from `config.yaml`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteData<'a> {
    site: &'a crate::config::SiteInfo,
    personal: &'a crate::config::PersonalInfo,
    skills: &'a crate::config::Skills,
    experience: &'a crate::config::Experience,
    languages: &'a [crate::config::SpokenLanguage],
    interests: &'a [String],
}

impl<'a> From<&'a SiteConfig> for SiteData<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            site: &config.site,
            personal: &config.personal,
            skills: &config.skills,
            experience: &config.experience,
            languages: &config.languages,
            interests: &config.interests,
        }
    }
}
