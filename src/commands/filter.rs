//! Filter and group items by tag

use anyhow::Result;

use crate::content::ContentKind;
use crate::filter::{filter_by_tags, group_by_tags};
use crate::Folio;

use super::list::summary_line;

/// Print items carrying every selected tag, optionally grouped
pub fn run(folio: &Folio, kind: ContentKind, selected: &[String], group: bool) -> Result<()> {
    let items = folio.repository().load_all(kind);
    let filtered = filter_by_tags(&items, selected);
    let date_format = &folio.config.site.date_format;

    if !group {
        println!("Matching {} ({}):", kind, filtered.len());
        for item in filtered {
            println!("  {}", summary_line(item, date_format));
        }
        return Ok(());
    }

    for group in group_by_tags(&filtered, selected) {
        let heading = if group.key.is_empty() {
            "(no matching tags)"
        } else {
            group.key.as_str()
        };
        println!("{} #{}", heading, group.anchor);
        for item in group.items {
            println!("  {}", summary_line(item, date_format));
        }
    }

    Ok(())
}
