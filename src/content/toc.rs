//! Heading slugs and table-of-contents extraction

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::item::TocEntry;
use crate::helpers::strip_html;

lazy_static! {
    static ref HEADING: Regex =
        Regex::new(r#"(?s)<h([1-6])\b[^>]*?\bid="([^"]*)"[^>]*>(.*?)</h[1-6]>"#).unwrap();
}

/// Converts heading text to a URL-safe slug following GitHub's convention.
///
/// Lowercases, keeps alphanumerics, `-` and `_`, turns each space into a
/// hyphen and drops everything else. Runs of hyphens are not collapsed.
///
/// ```
/// use folio::content::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("API Reference (v2)"), "api-reference-v2");
/// ```
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c == ' ' {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}

/// Hands out unique heading ids within one document
///
/// A repeated slug gets `-1`, `-2`, ... appended in order of appearance.
#[derive(Debug, Default)]
pub struct HeadingSlugger {
    occurrences: HashMap<String, usize>,
}

impl HeadingSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slug(&mut self, text: &str) -> String {
        let base = match slugify(text) {
            s if s.is_empty() => "section".to_string(),
            s => s,
        };

        let mut candidate = base.clone();
        while let Some(count) = self.occurrences.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }
        self.occurrences.insert(candidate.clone(), 0);
        candidate
    }
}

/// Scan rendered HTML for headings carrying an id, in document order
pub fn extract_headings(html: &str) -> Vec<TocEntry> {
    HEADING
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps[1].parse::<u8>().ok()?;
            let id = caps[2].to_string();
            if id.is_empty() {
                return None;
            }
            let text = strip_html(&caps[3]).trim().to_string();
            Some(TocEntry { id, text, level })
        })
        .collect()
}
