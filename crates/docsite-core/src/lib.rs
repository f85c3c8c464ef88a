//! docsite Core Library
//!
//! Site configuration, frontmatter, page records and error handling shared by
//! the docsite plugins and CLI.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod page;

pub use self::config::SiteConfig;
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use page::Page;
