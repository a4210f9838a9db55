//! List content items and tag vocabularies

use anyhow::Result;

use crate::content::{ContentItem, ContentKind};
use crate::helpers::{format_date, truncate};
use crate::Folio;

/// List items of a kind, newest first
pub fn run(folio: &Folio, kind: ContentKind, featured_only: bool) -> Result<()> {
    let repo = folio.repository();
    let items = if featured_only {
        repo.featured(kind)
    } else {
        repo.load_all(kind)
    };

    println!("{} ({}):", capitalize(kind.dir_name()), items.len());
    for item in &items {
        println!("  {}", summary_line(item, &folio.config.site.date_format));
        if !item.excerpt.is_empty() {
            println!("      {}", truncate(&item.excerpt, 80, None));
        }
    }

    Ok(())
}

/// Print the sorted tag vocabulary of a kind with usage counts
pub fn tags(folio: &Folio, kind: ContentKind) -> Result<()> {
    let repo = folio.repository();
    let vocabulary = repo.collect_tags(kind);
    let items = repo.load_all(kind);

    println!("Tags ({}):", vocabulary.len());
    for tag in vocabulary {
        let count = items.iter().filter(|i| i.tags.contains(&tag)).count();
        println!("  {} ({})", tag, count);
    }

    Ok(())
}

/// `2024-01-15 - Title [slug] *`
pub(crate) fn summary_line(item: &ContentItem, date_format: &str) -> String {
    let mut line = format!(
        "{} - {} [{}]",
        format_date(&item.date, date_format),
        item.title,
        item.slug
    );
    if item.is_featured {
        line.push_str(" *");
    }
    if item.is_placeholder() {
        line.push_str(" (failed to load)");
    }
    line
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
