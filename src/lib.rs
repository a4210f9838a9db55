//! folio: content engine for a portfolio and blog site
//!
//! Reads front-matter-tagged markdown posts and projects from a content
//! root, renders them to sanitized HTML with highlighted code and a table
//! of contents, resolves their assets to servable URLs, and exposes the
//! typed records through a library API, a JSON snapshot and an HTTP server.

pub mod commands;
pub mod config;
pub mod content;
pub mod filter;
pub mod gallery;
pub mod generator;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::content::ContentRepository;
use crate::gallery::Gallery;
use crate::generator::BuildStats;

/// The main application handle
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding `blogs/`, `projects/` and the gallery index
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory, reading `config.yaml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("config.yaml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content.content_dir);
        let public_dir = base_dir.join(&config.content.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// A repository for one load pass
    pub fn repository(&self) -> ContentRepository {
        ContentRepository::new(&self.content_dir, &self.config.content)
    }

    pub fn gallery_path(&self) -> PathBuf {
        self.content_dir.join(&self.config.content.gallery_file)
    }

    /// Load the gallery index
    pub fn gallery(&self) -> Result<Gallery> {
        Ok(Gallery::load(self.gallery_path())?)
    }

    /// Generate the JSON snapshot
    pub fn generate(&self) -> Result<BuildStats> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
