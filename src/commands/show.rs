//! Show a single content item

use anyhow::Result;

use crate::content::ContentKind;
use crate::helpers::full_date;
use crate::Folio;

/// Print one item, either as JSON or as a readable outline
pub fn run(folio: &Folio, kind: ContentKind, slug: &str, json: bool) -> Result<()> {
    let repo = folio.repository();
    let item = repo.try_load_item(kind, slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    println!("{}", item.title);
    println!("  date:     {}", full_date(&item.date));
    println!("  cover:    {}", item.cover_image);
    println!("  reading:  {}", item.reading_time);
    if !item.tags.is_empty() {
        println!("  tags:     {}", item.tags.join(", "));
    }
    if !item.excerpt.is_empty() {
        println!("  excerpt:  {}", item.excerpt);
    }

    if !item.table_of_contents.is_empty() {
        println!("Contents:");
        for entry in &item.table_of_contents {
            let indent = "  ".repeat(entry.level.saturating_sub(1) as usize + 1);
            println!("{}{} (#{})", indent, entry.text, entry.id);
        }
    }

    let items = repo.load_all(kind);
    if let Some(newer) = item.prev(&items) {
        println!("Newer: {} [{}]", newer.title, newer.slug);
    }
    if let Some(older) = item.next(&items) {
        println!("Older: {} [{}]", older.title, older.slug);
    }

    let assets = repo.resolver().list_assets(kind, slug);
    if !assets.is_empty() {
        println!("Assets:");
        for asset in assets {
            let relative = format!("assets/{}", asset);
            println!("  {}", repo.resolver().served_url(kind, slug, &relative));
        }
    }

    Ok(())
}
