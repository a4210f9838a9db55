//! Small shared helpers for dates, text and URLs

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
