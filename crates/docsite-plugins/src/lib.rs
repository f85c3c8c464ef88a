//! docsite Plugins Library
//!
//! Page hooks run after a page record is built and before it is rendered.
//!
//! # Modules
//!
//! - [`plugin`] - The `Plugin` hook trait
//! - [`clean_urls`] - Strips `.html` and trailing slashes from page paths
//! - [`registry`] - Ordered plugin list built from site configuration
//! - [`collector`] - Walks the docs directory into page records

pub mod clean_urls;
pub mod collector;
pub mod plugin;
pub mod registry;

use std::path::PathBuf;

pub use clean_urls::{CleanUrls, clean_path};
pub use collector::PageCollector;
use docsite_core::CoreError;
pub use plugin::Plugin;
pub use registry::PluginRegistry;
use thiserror::Error;

/// Plugin pipeline errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A configured plugin name has no implementation.
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    /// A plugin hook rejected a page.
    #[error("plugin {plugin} failed on {path}: {source}")]
    Hook {
        plugin: &'static str,
        path: String,
        #[source]
        source: CoreError,
    },

    /// Walking the docs directory failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Reading a source file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Core error while building a page.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;
