//! Content repository - loads blog posts and projects from the content root

use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::assets::AssetResolver;
use super::error::{ContentError, Result};
use super::frontmatter::FrontMatter;
use super::item::{ContentItem, ContentKind, LoadStatus};
use super::markdown::MarkdownRenderer;
use super::toc::extract_headings;
use crate::config::ContentConfig;
use crate::helpers::{is_external, reading_time};

lazy_static! {
    static ref MD_IMAGE_REF: Regex = Regex::new(r"!\[[^\]]*\]\(([^)\s]+)[^)]*\)").unwrap();
    static ref HTML_MEDIA_REF: Regex = Regex::new(r#"\b(?:src|poster)=["']([^"']+)["']"#).unwrap();
}

/// Loads typed content records for one content root
///
/// All items loaded through one repository share a load date, which
/// stands in for missing front-matter dates.
pub struct ContentRepository {
    content_dir: PathBuf,
    entry_file: String,
    words_per_minute: usize,
    load_date: NaiveDate,
    resolver: AssetResolver,
    renderer: MarkdownRenderer,
}

impl ContentRepository {
    /// Create a repository over `content_dir`, dated today
    pub fn new(content_dir: impl Into<PathBuf>, config: &ContentConfig) -> Self {
        let content_dir = content_dir.into();
        Self {
            resolver: AssetResolver::new(&content_dir, config.asset_route),
            renderer: MarkdownRenderer::with_theme(config.asset_route, &config.highlight_theme),
            entry_file: config.entry_file.clone(),
            words_per_minute: config.words_per_minute,
            load_date: Local::now().date_naive(),
            content_dir,
        }
    }

    /// Pin the load date of this pass
    pub fn with_load_date(mut self, date: NaiveDate) -> Self {
        self.load_date = date;
        self
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn load_date(&self) -> NaiveDate {
        self.load_date
    }

    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    pub fn entry_file(&self) -> &str {
        &self.entry_file
    }

    fn entry_path(&self, kind: ContentKind, slug: &str) -> PathBuf {
        self.resolver.item_dir(kind, slug).join(&self.entry_file)
    }

    /// Slugs of every item directory holding an entry document
    pub fn list_items(&self, kind: ContentKind) -> Vec<String> {
        let kind_dir = self.content_dir.join(kind.dir_name());
        let entries = match fs::read_dir(&kind_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("No {} directory at {:?}: {}", kind, kind_dir, e);
                return Vec::new();
            }
        };

        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().join(&self.entry_file).is_file())
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .collect()
    }

    /// Load one item, degrading to a placeholder on any failure
    pub fn load_item(&self, kind: ContentKind, slug: &str) -> ContentItem {
        match self.try_load_item(kind, slug) {
            Ok(item) => item,
            Err(e) => {
                tracing::error!("Failed to load {}/{}: {}", kind, slug, e);
                ContentItem::placeholder(kind, slug, self.load_date, e.to_string())
            }
        }
    }

    /// Load one item, reporting why it could not be loaded
    pub fn try_load_item(&self, kind: ContentKind, slug: &str) -> Result<ContentItem> {
        let (fm, body) = self.read_entry(kind, slug)?;
        let meta = fm.validate(kind, self.load_date)?;

        let cover_image = self
            .resolver
            .resolve_cover(meta.cover_image.as_deref(), kind, slug);
        for reference in self.missing_refs(kind, slug, body_refs(&body)) {
            tracing::warn!("Asset not found for {}/{}: {}", kind, slug, reference);
        }
        let rendered_content = self.renderer.render(&body, kind, slug);
        let table_of_contents = extract_headings(&rendered_content);

        Ok(ContentItem {
            kind,
            slug: slug.to_string(),
            title: meta.title,
            date: meta.date,
            excerpt: meta.excerpt,
            cover_image,
            reading_time: reading_time(&body, self.words_per_minute),
            raw_content: body,
            rendered_content,
            tags: meta.tags,
            is_featured: meta.is_featured,
            show_tags: meta.show_tags,
            table_of_contents,
            details: meta.details,
            status: LoadStatus::Loaded,
        })
    }

    fn read_entry(&self, kind: ContentKind, slug: &str) -> Result<(FrontMatter, String)> {
        let path = self.entry_path(kind, slug);
        if !path.is_file() {
            return Err(ContentError::MissingEntry(path));
        }
        let content = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
        let (fm, body) = FrontMatter::parse(&content)?;
        Ok((fm, body.to_string()))
    }

    /// Load every item of a kind, newest first
    pub fn load_all(&self, kind: ContentKind) -> Vec<ContentItem> {
        let slugs = self.list_items(kind);
        tracing::debug!("Loading {} {}", slugs.len(), kind);

        let mut items: Vec<ContentItem> = slugs
            .par_iter()
            .map(|slug| self.load_item(kind, slug))
            .collect();

        items.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        items
    }

    /// Featured items of a kind, in `load_all` order
    pub fn featured(&self, kind: ContentKind) -> Vec<ContentItem> {
        self.load_all(kind)
            .into_iter()
            .filter(|item| item.is_featured)
            .collect()
    }

    /// Sorted, de-duplicated tag vocabulary of a kind
    ///
    /// Only front matter is read. Items that fail to parse are skipped.
    pub fn collect_tags(&self, kind: ContentKind) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .list_items(kind)
            .iter()
            .filter_map(|slug| {
                self.read_entry(kind, slug)
                    .and_then(|(fm, _)| fm.validate(kind, self.load_date))
                    .map_err(|e| tracing::warn!("Skipping tags of {}/{}: {}", kind, slug, e))
                    .ok()
            })
            .flat_map(|meta| meta.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// Relative media references of an item that name no existing file
    pub fn find_missing_assets(&self, kind: ContentKind, slug: &str) -> Result<Vec<String>> {
        let (fm, body) = self.read_entry(kind, slug)?;
        let declared = fm.cover_image.iter().map(String::as_str);
        Ok(self.missing_refs(kind, slug, declared.chain(body_refs(&body))))
    }

    fn missing_refs<'a>(
        &self,
        kind: ContentKind,
        slug: &str,
        references: impl Iterator<Item = &'a str>,
    ) -> Vec<String> {
        let mut missing = Vec::new();
        for reference in references {
            let reference = reference.trim();
            if reference.is_empty() || reference.starts_with('/') || is_external(reference) {
                continue;
            }
            if !self.resolver.exists(kind, slug, reference)
                && !missing.iter().any(|m: &String| m.as_str() == reference)
            {
                missing.push(reference.to_string());
            }
        }
        missing
    }
}

/// Media paths named by markdown images and `src`/`poster` attributes
fn body_refs(body: &str) -> impl Iterator<Item = &str> {
    let markdown_refs = MD_IMAGE_REF
        .captures_iter(body)
        .filter_map(|c| c.get(1).map(|m| m.as_str()));
    let html_refs = HTML_MEDIA_REF
        .captures_iter(body)
        .filter_map(|c| c.get(1).map(|m| m.as_str()));
    markdown_refs.chain(html_refs)
}
