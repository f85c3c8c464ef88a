//! Normalize command - print the clean form of page paths

use color_eyre::eyre::{Result, bail};
use docsite_core::Page;
use docsite_plugins::{CleanUrls, Plugin};

/// Apply the clean URL rule to each path.
///
/// Invalid paths are reported together after every valid path is cleaned.
pub fn normalize(paths: &[String]) -> Result<Vec<String>> {
    let mut cleaned = Vec::with_capacity(paths.len());
    let mut invalid = Vec::new();

    for path in paths {
        let mut page = Page::new(path.as_str());
        match CleanUrls.extends_page(&mut page) {
            Ok(()) => cleaned.push(page.path),
            Err(e) => invalid.push(e.to_string()),
        }
    }

    if !invalid.is_empty() {
        for err in &invalid {
            tracing::error!("{err}");
        }
        bail!("{} invalid path(s)", invalid.len());
    }

    Ok(cleaned)
}

/// Run the normalize command.
pub fn run(paths: &[String]) -> Result<()> {
    tracing::info!(count = paths.len(), "Normalizing paths");

    for (input, output) in paths.iter().zip(normalize(paths)?) {
        println!("{input} -> {output}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_normalize_paths() {
        let out = normalize(&strings(&["/", "/a/b.html", "/a/b/", "/a/b.html/"])).expect("ok");
        assert_eq!(out, vec!["/", "/a/b", "/a/b", "/a/b.html"]);
    }

    #[test]
    fn test_normalize_rejects_invalid() {
        let err = normalize(&strings(&["/ok.html", "", "rel/"])).unwrap_err();
        assert!(err.to_string().contains("2 invalid path(s)"));
    }
}
