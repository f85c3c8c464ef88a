//! Check command - validate configuration and docs

use std::{collections::HashMap, path::Path};

use color_eyre::eyre::{Result, bail};
use docsite_core::{Page, SiteConfig};
use docsite_plugins::{PageCollector, PluginRegistry};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validate a loaded configuration against the project root.
pub fn validate(config: &SiteConfig, root: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    check_config_values(config, &mut result);

    let registry = match PluginRegistry::from_config(config) {
        Ok(registry) => Some(registry),
        Err(e) => {
            result.add_error(format!("Plugin error: {e}"));
            None
        }
    };

    let collector = PageCollector::from_config(config, root);
    if !collector.docs_dir().is_dir() {
        result.add_error(format!(
            "Docs directory missing: {}",
            collector.docs_dir().display()
        ));
        return result;
    }

    let mut pages = match collector.collect() {
        Ok(pages) => pages,
        Err(e) => {
            result.add_error(format!("Page error: {e}"));
            return result;
        }
    };

    if pages.is_empty() {
        result.add_warning("Docs directory contains no pages");
    }

    if let Some(registry) = registry {
        if let Err(e) = registry.apply_all(&mut pages) {
            result.add_error(format!("Plugin error: {e}"));
            return result;
        }
    }

    check_route_conflicts(&pages, &mut result);

    result
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and docs");

    println!("Checking configuration...");
    let result = match super::load_config(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            let root = config_path.parent().unwrap_or(Path::new("."));
            println!("\nChecking docs...");
            validate(&config, root)
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            let mut result = ValidationResult::default();
            result.add_error(format!("Configuration error: {e}"));
            result
        }
    };

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check configuration values for common issues.
fn check_config_values(config: &SiteConfig, result: &mut ValidationResult) {
    if !config.site.base.ends_with('/') {
        result.add_warning("site.base should end with '/'");
    }

    if config.site.description.is_none() {
        result.add_warning("site.description is not set");
    }

    if let Some(repo) = &config.theme.repo {
        if !repo.starts_with("http://") && !repo.starts_with("https://") {
            result.add_warning(format!("theme.repo should be an http(s) URL: {repo}"));
        }
    }
}

/// Two sources that end up on the same route shadow each other,
/// e.g. `guide.md` and `guide/README.md` under clean URLs.
fn check_route_conflicts(pages: &[Page], result: &mut ValidationResult) {
    let mut by_path: HashMap<&str, Vec<String>> = HashMap::new();
    for page in pages {
        let source = page
            .source
            .as_deref()
            .map(|s| s.display().to_string())
            .unwrap_or_default();
        by_path.entry(page.path.as_str()).or_default().push(source);
    }

    let mut conflicts: Vec<_> = by_path
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .collect();
    conflicts.sort();

    for (path, sources) in conflicts {
        result.add_warning(format!(
            "Route {path} is produced by several sources: {}",
            sources.join(", ")
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn site(plugins: &str) -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = SiteConfig::from_toml_str(&format!(
            "plugins = {plugins}\n[site]\ntitle = \"T\"\ndescription = \"d\"\nbase = \"/t/\"\n"
        ))
        .expect("parse");
        (dir, config)
    }

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, "# page").expect("write");
    }

    #[test]
    fn test_run_loads_config_with_shared_loader() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "docs/README.md");
        let config_path = dir.path().join("docsite.toml");
        fs::write(
            &config_path,
            "plugins = [\"clean-urls\"]\n[site]\ntitle = \"T\"\ndescription = \"d\"\nbase = \"/t/\"\n",
        )
        .expect("write");

        run(&config_path, true).expect("check passes");
    }

    #[test]
    fn test_run_missing_config() {
        let err = run(Path::new("/nonexistent/docsite.toml"), false).unwrap_err();
        assert!(err.to_string().contains("1 error(s)"));
    }

    #[test]
    fn test_missing_docs_dir() {
        let (dir, config) = site("[]");
        let result = validate(&config, dir.path());
        assert!(result.has_errors());
        assert!(result.errors[0].contains("Docs directory missing"));
    }

    #[test]
    fn test_clean_site() {
        let (dir, config) = site(r#"["clean-urls"]"#);
        write(dir.path(), "docs/README.md");
        write(dir.path(), "docs/install.md");

        let result = validate(&config, dir.path());
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }

    #[test]
    fn test_unknown_plugin() {
        let (dir, config) = site(r#"["nope"]"#);
        write(dir.path(), "docs/README.md");

        let result = validate(&config, dir.path());
        assert!(result.errors.iter().any(|e| e.contains("unknown plugin: nope")));
    }

    #[test]
    fn test_clean_urls_route_conflict() {
        let (dir, config) = site(r#"["clean-urls"]"#);
        write(dir.path(), "docs/guide.md");
        write(dir.path(), "docs/guide/README.md");

        let result = validate(&config, dir.path());
        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Route /guide"));
    }

    #[test]
    fn test_no_conflict_without_clean_urls() {
        let (dir, config) = site("[]");
        write(dir.path(), "docs/guide.md");
        write(dir.path(), "docs/guide/README.md");

        let result = validate(&config, dir.path());
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }
}
