//! Ordered plugin list.

use docsite_core::{Page, SiteConfig};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{PluginError, Result, clean_urls::CleanUrls, plugin::Plugin};

/// Plugins in the order they run on each page.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the `plugins` list in site configuration.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let mut registry = Self::new();

        for name in &config.plugins {
            if registry.contains(name) {
                warn!(plugin = %name, "plugin listed more than once, ignoring duplicate");
                continue;
            }

            let plugin: Box<dyn Plugin> = match name.as_str() {
                CleanUrls::NAME => Box::new(CleanUrls),
                other => return Err(PluginError::UnknownPlugin(other.to_string())),
            };
            registry.register(plugin);
        }

        info!(plugins = ?registry.names(), "plugins registered");
        Ok(registry)
    }

    /// Append a plugin.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        debug!(plugin = plugin.name(), "registering plugin");
        self.plugins.push(plugin);
    }

    /// Whether a plugin with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Registered plugin names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run every plugin on one page.
    pub fn apply(&self, page: &mut Page) -> Result<()> {
        for plugin in &self.plugins {
            plugin
                .extends_page(page)
                .map_err(|source| PluginError::Hook {
                    plugin: plugin.name(),
                    path: page.path.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Run every plugin on each page in parallel.
    pub fn apply_all(&self, pages: &mut [Page]) -> Result<()> {
        pages.par_iter_mut().try_for_each(|page| self.apply(page))
    }
}
