//! Generate the JSON snapshot

use anyhow::Result;

use crate::generator::{BuildStats, Generator};
use crate::Folio;

/// Load all content and write it under the public directory
pub fn run(folio: &Folio) -> Result<BuildStats> {
    let start = std::time::Instant::now();

    let repo = folio.repository();
    let gallery = folio.gallery()?;
    tracing::info!(
        "Loading content from {:?} ({} gallery images)",
        folio.content_dir,
        gallery.images.len()
    );

    let stats = Generator::new(&folio.public_dir).generate(&repo, &gallery, &folio.config)?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(stats)
}
