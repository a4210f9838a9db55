//! Content item model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter::Tagged;

/// The kinds of content the site carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Project,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Blog, ContentKind::Project];

    /// Directory under the content root, also the URL segment
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Blog => "blogs",
            ContentKind::Project => "projects",
        }
    }

    /// Served path of the stock cover image, assumed always present
    pub fn default_cover(self) -> &'static str {
        match self {
            ContentKind::Blog => "/images/default-blog-cover.svg",
            ContentKind::Project => "/images/default-project-cover.svg",
        }
    }

    pub fn untitled(self) -> &'static str {
        match self {
            ContentKind::Blog => "Untitled Post",
            ContentKind::Project => "Untitled Project",
        }
    }

    fn error_title(self) -> &'static str {
        match self {
            ContentKind::Blog => "Error Loading Post",
            ContentKind::Project => "Error Loading Project",
        }
    }

    fn error_excerpt(self) -> &'static str {
        match self {
            ContentKind::Blog => "This post could not be loaded.",
            ContentKind::Project => "This project could not be loaded.",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blog" | "blogs" | "post" | "posts" => Ok(ContentKind::Blog),
            "project" | "projects" => Ok(ContentKind::Project),
            other => Err(format!(
                "unknown content kind `{}` (expected blog or project)",
                other
            )),
        }
    }
}

/// One entry of a table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Author {
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Fields only one kind of item carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Details {
    #[serde(rename_all = "camelCase")]
    Blog {
        author: Option<Author>,
        og_image: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Project {
        github_url: Option<String>,
        demo_url: Option<String>,
    },
}

impl Details {
    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Blog => Details::Blog {
                author: None,
                og_image: None,
            },
            ContentKind::Project => Details::Project {
                github_url: None,
                demo_url: None,
            },
        }
    }
}

/// Whether the record came from its document or stands in for a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadStatus {
    Loaded,
    Placeholder { reason: String },
}

/// A blog post or a project, ready for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub kind: ContentKind,

    /// Directory name of the item
    pub slug: String,

    pub title: String,

    /// Publication date, newest first when sorted
    pub date: NaiveDate,

    pub excerpt: String,

    /// Served path of the cover image
    pub cover_image: String,

    /// Markdown body as read from disk
    pub raw_content: String,

    /// Sanitized HTML rendered from `raw_content`
    pub rendered_content: String,

    /// Tags (projects) or tech stack (blogs)
    pub tags: Vec<String>,

    pub is_featured: bool,

    pub show_tags: bool,

    pub table_of_contents: Vec<TocEntry>,

    pub reading_time: String,

    pub details: Details,

    pub status: LoadStatus,
}

impl ContentItem {
    /// Stand-in record for an item that failed to load
    pub fn placeholder(kind: ContentKind, slug: &str, date: NaiveDate, reason: String) -> Self {
        Self {
            kind,
            slug: slug.to_string(),
            title: kind.error_title().to_string(),
            date,
            excerpt: kind.error_excerpt().to_string(),
            cover_image: kind.default_cover().to_string(),
            raw_content: String::new(),
            rendered_content: String::new(),
            tags: Vec::new(),
            is_featured: false,
            show_tags: false,
            table_of_contents: Vec::new(),
            reading_time: String::new(),
            details: Details::empty(kind),
            status: LoadStatus::Placeholder { reason },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.status, LoadStatus::Placeholder { .. })
    }

    /// Get the previous (newer) item in a sorted list
    pub fn prev<'a>(&self, items: &'a [ContentItem]) -> Option<&'a ContentItem> {
        let pos = items.iter().position(|i| i.slug == self.slug)?;
        if pos > 0 {
            Some(&items[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) item in a sorted list
    pub fn next<'a>(&self, items: &'a [ContentItem]) -> Option<&'a ContentItem> {
        let pos = items.iter().position(|i| i.slug == self.slug)?;
        items.get(pos + 1)
    }
}

impl Tagged for ContentItem {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn show_tags(&self) -> bool {
        self.show_tags
    }
}
