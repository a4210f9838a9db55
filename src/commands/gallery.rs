//! Gallery index maintenance and queries

use anyhow::Result;
use std::path::Path;

use crate::gallery::{Gallery, ImageFilter};
use crate::Folio;

/// Rebuild `images.yaml` from the image files in `source_dir`
///
/// Curated entries (same `src`) are kept; files that disappeared are
/// dropped.
pub fn index(folio: &Folio, source_dir: &Path, url_prefix: &str) -> Result<usize> {
    let path = folio.gallery_path();
    let existing = Gallery::load(&path)?;
    let gallery = Gallery::index_directory(source_dir, url_prefix, &existing)?;
    gallery.save(&path)?;

    tracing::info!("Updated {:?} with {} images", path, gallery.images.len());
    Ok(gallery.images.len())
}

/// Print images matching the filter
pub fn list(folio: &Folio, filter: &ImageFilter) -> Result<()> {
    let gallery = folio.gallery()?;
    let images = gallery.filter(filter);

    println!("Images ({}):", images.len());
    for image in images {
        println!(
            "  {} - {} [{}]",
            image.date.as_deref().unwrap_or("----------"),
            image.name,
            image.tags.join(", ")
        );
    }
    Ok(())
}

/// Print the gallery tag vocabulary
pub fn tags(folio: &Folio) -> Result<()> {
    let tags = folio.gallery()?.tags();
    println!("Tags ({}):", tags.len());
    for tag in tags {
        println!("  {}", tag);
    }
    Ok(())
}
