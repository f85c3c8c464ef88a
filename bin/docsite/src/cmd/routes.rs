//! Routes command - list page routes after plugins run

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use docsite_core::{Page, SiteConfig};
use docsite_plugins::{PageCollector, PluginRegistry};

/// Collect pages under the project root and run the configured plugins.
pub fn collect_routes(config: &SiteConfig, root: &Path) -> Result<Vec<Page>> {
    let registry = PluginRegistry::from_config(config).wrap_err("Failed to register plugins")?;

    let mut pages = PageCollector::from_config(config, root)
        .collect()
        .wrap_err("Failed to collect pages")?;

    registry
        .apply_all(&mut pages)
        .wrap_err("Plugin pipeline failed")?;

    Ok(pages)
}

/// Run the routes command.
///
/// `root` defaults to the directory holding the configuration file.
pub fn run(config_path: &Path, root: Option<&Path>) -> Result<()> {
    let root = root
        .or_else(|| config_path.parent())
        .unwrap_or(Path::new("."));
    tracing::info!(?config_path, ?root, "Listing routes");

    let config = super::load_config(config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let pages = collect_routes(&config, root)?;

    for page in &pages {
        let source = page
            .source
            .as_deref()
            .map(|s| s.display().to_string())
            .unwrap_or_default();
        println!("{source:<32} {}", config.url_for(&page.path));
    }

    println!();
    println!("  {} page(s) under {}", pages.len(), config.site.base);

    Ok(())
}
