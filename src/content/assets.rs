//! Asset resolution for content items
//!
//! Maps asset references declared in a document (cover images, inline
//! images) to paths the web layer can serve, confirming on disk that the
//! file exists before handing out a URL.

use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::item::ContentKind;
use crate::config::AssetRoute;
use crate::helpers::{is_external, url_join};

/// Conventional cover locations, relative to the item directory
const COVER_CANDIDATES: [&str; 4] = [
    "assets/cover.jpg",
    "assets/cover.png",
    "cover.jpg",
    "cover.png",
];

/// One step of the cover image fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverStrategy {
    /// The `coverImage` front-matter value
    Declared,
    /// The first existing file among the conventional names
    Conventional,
    /// The stock image for the kind
    KindDefault,
}

impl CoverStrategy {
    pub const CHAIN: [CoverStrategy; 3] = [
        CoverStrategy::Declared,
        CoverStrategy::Conventional,
        CoverStrategy::KindDefault,
    ];
}

/// Resolves declared asset paths against the content root
#[derive(Debug, Clone)]
pub struct AssetResolver {
    content_dir: PathBuf,
    route: AssetRoute,
}

impl AssetResolver {
    pub fn new(content_dir: impl Into<PathBuf>, route: AssetRoute) -> Self {
        Self {
            content_dir: content_dir.into(),
            route,
        }
    }

    /// Directory holding an item's entry document and assets
    pub fn item_dir(&self, kind: ContentKind, slug: &str) -> PathBuf {
        self.content_dir.join(kind.dir_name()).join(slug)
    }

    /// Served URL of a file relative to the item directory
    pub fn served_url(&self, kind: ContentKind, slug: &str, relative: &str) -> String {
        url_join(self.route.prefix(), &[kind.dir_name(), slug, relative])
    }

    /// Resolve a declared reference to a servable path
    ///
    /// Absolute and external references pass through untouched. Relative
    /// ones must name an existing file inside the item directory.
    pub fn resolve(&self, declared: &str, kind: ContentKind, slug: &str) -> Option<String> {
        let declared = declared.trim();
        if declared.starts_with('/') || is_external(declared) {
            return Some(declared.to_string());
        }

        let relative = declared.strip_prefix("./").unwrap_or(declared);
        if !is_contained(relative) {
            tracing::warn!(
                "Asset path {:?} in {}/{} leaves the item directory",
                declared,
                kind,
                slug
            );
            return None;
        }

        if self.item_dir(kind, slug).join(relative).is_file() {
            Some(self.served_url(kind, slug, relative))
        } else {
            tracing::warn!("Asset not found: {} in {}/{}", relative, kind, slug);
            None
        }
    }

    /// Resolve the cover image through the fallback chain
    pub fn resolve_cover(&self, declared: Option<&str>, kind: ContentKind, slug: &str) -> String {
        for strategy in CoverStrategy::CHAIN {
            let resolved = match strategy {
                CoverStrategy::Declared => declared.and_then(|d| self.resolve(d, kind, slug)),
                CoverStrategy::Conventional => self.conventional_cover(kind, slug),
                CoverStrategy::KindDefault => Some(kind.default_cover().to_string()),
            };
            if let Some(path) = resolved {
                tracing::debug!("Cover for {}/{} via {:?}: {}", kind, slug, strategy, path);
                return path;
            }
        }
        kind.default_cover().to_string()
    }

    fn conventional_cover(&self, kind: ContentKind, slug: &str) -> Option<String> {
        let dir = self.item_dir(kind, slug);
        COVER_CANDIDATES
            .iter()
            .find(|candidate| dir.join(candidate).is_file())
            .map(|candidate| self.served_url(kind, slug, candidate))
    }

    /// Whether a relative reference names an existing file of the item
    pub fn exists(&self, kind: ContentKind, slug: &str, relative: &str) -> bool {
        let relative = relative.strip_prefix("./").unwrap_or(relative);
        is_contained(relative) && self.item_dir(kind, slug).join(relative).is_file()
    }

    /// Every file under the item's `assets/` directory, relative to it
    pub fn list_assets(&self, kind: ContentKind, slug: &str) -> Vec<String> {
        let assets_dir = self.item_dir(kind, slug).join("assets");
        if !assets_dir.is_dir() {
            return Vec::new();
        }

        let mut files: Vec<String> = WalkDir::new(&assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.path().strip_prefix(&assets_dir).ok().map(to_url_path))
            .collect();
        files.sort();
        files
    }
}

/// True when a relative path cannot climb out of its base directory
pub(crate) fn is_contained(relative: &str) -> bool {
    !relative.is_empty()
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn to_url_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
