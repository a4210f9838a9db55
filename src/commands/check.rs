//! Validate content items and their asset references

use anyhow::Result;
use std::fs;

use crate::content::ContentKind;
use crate::Folio;

/// Problems found by a check pass
#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: usize,
    /// `(kind/slug, reason)` for items that would load as placeholders
    pub invalid: Vec<(String, String)>,
    /// `(kind/slug, reference)` for asset references naming no file
    pub missing_assets: Vec<(String, String)>,
    pub created_dirs: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.missing_assets.is_empty()
    }
}

/// Check every item; with `fix`, create missing `assets/` directories
pub fn run(folio: &Folio, fix: bool) -> Result<CheckReport> {
    let repo = folio.repository();
    let mut report = CheckReport::default();

    for kind in ContentKind::ALL {
        for slug in repo.list_items(kind) {
            report.checked += 1;
            let id = format!("{}/{}", kind, slug);

            if fix {
                let assets_dir = repo.resolver().item_dir(kind, &slug).join("assets");
                if !assets_dir.exists() {
                    fs::create_dir_all(&assets_dir)?;
                    tracing::info!("Created assets directory for {}", id);
                    report.created_dirs += 1;
                }
            }

            if let Err(e) = repo.try_load_item(kind, &slug) {
                tracing::warn!("{} cannot be loaded: {}", id, e);
                report.invalid.push((id, e.to_string()));
                continue;
            }

            for reference in repo.find_missing_assets(kind, &slug)? {
                tracing::warn!("Asset {:?} not found in {}", reference, id);
                report.missing_assets.push((id.clone(), reference));
            }
        }
    }

    Ok(report)
}
