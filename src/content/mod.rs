//! Content module - blog posts, projects and their processing pipeline

pub mod assets;
mod error;
mod frontmatter;
mod item;
mod markdown;
mod repository;
mod toc;

pub use assets::{AssetResolver, CoverStrategy};
pub use error::{ContentError, Result};
pub use frontmatter::{FrontMatter, OgImage, ValidatedMeta};
pub use item::{Author, ContentItem, ContentKind, Details, LoadStatus, TocEntry};
pub use markdown::{rewrite_asset_refs, MarkdownRenderer};
pub use repository::ContentRepository;
pub use toc::{extract_headings, slugify, HeadingSlugger};
