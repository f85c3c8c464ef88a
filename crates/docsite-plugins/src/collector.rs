//! Page collection.
//!
//! Walks the docs directory and builds a page record for each source file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use docsite_core::{Page, SiteConfig, page::is_page_source};
use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::{PluginError, Result};

/// Collects pages from a docs directory.
#[derive(Debug)]
pub struct PageCollector {
    docs_dir: PathBuf,
}

impl PageCollector {
    /// Create a collector rooted at a docs directory.
    #[must_use]
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
        }
    }

    /// Create a collector for `theme.docs_dir` under a project root.
    #[must_use]
    pub fn from_config(config: &SiteConfig, root: &Path) -> Self {
        Self::new(root.join(&config.theme.docs_dir))
    }

    /// The docs directory being collected.
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Collect every page, sorted by output path.
    pub fn collect(&self) -> Result<Vec<Page>> {
        info!(dir = %self.docs_dir.display(), "collecting pages");

        let files = self.find_sources()?;
        info!(count = files.len(), "found page sources");

        let mut pages = files
            .par_iter()
            .map(|relative| self.load(relative))
            .collect::<Result<Vec<_>>>()?;

        pages.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(pages)
    }

    /// Find page sources relative to the docs directory.
    fn find_sources(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.docs_dir)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_page_source(entry.path()) {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&self.docs_dir) {
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    fn load(&self, relative: &Path) -> Result<Page> {
        let full = self.docs_dir.join(relative);
        let content = fs::read_to_string(&full).map_err(|source| PluginError::Read {
            path: full.clone(),
            source,
        })?;

        let page = Page::from_source(relative, &content)?;
        debug!(source = %relative.display(), path = %page.path, "loaded page");
        Ok(page)
    }
}

/// Dot-prefixed entries such as `.vuepress/` hold generator config, not pages.
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
