//! Site configuration management.
//!
//! The values here are consumed opaquely by the site generator; docsite only
//! loads them, checks a few shape rules and hands them on.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure, usually read from `docsite.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Names of page plugins to enable, in registration order.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Site metadata.
    pub site: SiteMeta,

    /// Theme reference and options.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site title.
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Base path the site is deployed under (e.g. "/terminalle/").
    #[serde(default = "default_base")]
    pub base: String,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name or package reference.
    #[serde(default = "default_theme")]
    pub name: String,

    /// Source repository URL shown by the theme.
    #[serde(default)]
    pub repo: Option<String>,

    /// Documentation root, relative to the project root.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme(),
            repo: None,
            docs_dir: default_docs_dir(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `DOCSITE__*` environment overrides.
    ///
    /// `DOCSITE__SITE__BASE=/preview/` overrides `site.base`, and so on.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("DOCSITE").separator("__"))
            .build()?;

        let config: SiteConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without validating it.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if !self.site.base.starts_with('/') {
            return Err(CoreError::config(format!(
                "site.base must start with '/': {}",
                self.site.base
            )));
        }

        if !self.site.base.ends_with('/') {
            tracing::warn!(base = %self.site.base, "site.base should end with a slash");
        }

        if self.theme.docs_dir.is_empty() {
            return Err(CoreError::config("theme.docs_dir cannot be empty"));
        }

        Ok(())
    }

    /// Get the site-relative URL for a page path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
