//! CLI command implementations

pub mod check;
pub mod clean;
pub mod filter;
pub mod gallery;
pub mod generate;
pub mod list;
pub mod new;
pub mod show;
