//! CLI command implementations.

pub mod check;
pub mod normalize;
pub mod routes;

use std::path::Path;

use docsite_core::{Result, SiteConfig};

/// Load site configuration the same way for every command, with
/// `DOCSITE__*` environment overrides applied.
pub fn load_config(config_path: &Path) -> Result<SiteConfig> {
    SiteConfig::load_with_env(config_path)
}
