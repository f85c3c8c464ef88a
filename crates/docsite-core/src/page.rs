//! Page records handed to plugins.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    frontmatter::{Frontmatter, parse_frontmatter},
};

/// File extensions treated as page sources.
const SOURCE_EXTENSIONS: &[&str] = &["md", "markdown"];

/// A documentation page as seen by the plugin pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Output path for this page (e.g. "/guide/install.html").
    pub path: String,

    /// Author metadata, absent when the source has no frontmatter block.
    #[serde(default)]
    pub frontmatter: Option<Frontmatter>,

    /// Source file relative to the docs directory.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl Page {
    /// Create a page with a path and no metadata.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            frontmatter: None,
            source: None,
        }
    }

    /// Attach frontmatter.
    #[must_use]
    pub fn with_frontmatter(mut self, frontmatter: Frontmatter) -> Self {
        self.frontmatter = Some(frontmatter);
        self
    }

    /// Attach the originating source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Build a page from a docs-relative source file and its contents.
    ///
    /// A non-empty permalink becomes the page path as written; otherwise the
    /// path is derived with [`source_to_path`].
    pub fn from_source(relative: &Path, content: &str) -> Result<Self> {
        let (frontmatter, _body) = parse_frontmatter(content, relative)?;

        let path = match frontmatter.as_ref().and_then(Frontmatter::permalink) {
            Some(permalink) => permalink.to_string(),
            None => source_to_path(relative)?,
        };

        Ok(Self {
            path,
            frontmatter,
            source: Some(relative.to_path_buf()),
        })
    }

    /// The permalink override, or `None` when the frontmatter is missing,
    /// omits the key, or sets it to an empty string.
    pub fn permalink(&self) -> Option<&str> {
        self.frontmatter.as_ref()?.permalink()
    }

    /// Check that the path is non-empty and rooted at `/`.
    pub fn validate_path(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(CoreError::invalid_path(&self.path, "page path is empty"));
        }
        if !self.path.starts_with('/') {
            return Err(CoreError::invalid_path(
                &self.path,
                "page path must start with '/'",
            ));
        }
        Ok(())
    }
}

/// Whether a file looks like a page source.
pub fn is_page_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Derive the generator output path for a docs-relative source file.
///
/// - `README.md` / `index.md` -> the directory path with a trailing `/`
/// - `guide/install.md` -> `/guide/install.html`
pub fn source_to_path(relative: &Path) -> Result<String> {
    if !is_page_source(relative) {
        return Err(CoreError::UnsupportedSource(relative.to_path_buf()));
    }

    let mut segments = Vec::new();
    for component in relative.parent().unwrap_or(Path::new("")).components() {
        match component {
            Component::Normal(segment) => {
                let segment = segment
                    .to_str()
                    .ok_or_else(|| CoreError::UnsupportedSource(relative.to_path_buf()))?;
                segments.push(segment);
            }
            Component::CurDir => {}
            _ => return Err(CoreError::UnsupportedSource(relative.to_path_buf())),
        }
    }

    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CoreError::UnsupportedSource(relative.to_path_buf()))?;

    let dir = if segments.is_empty() {
        String::from("/")
    } else {
        format!("/{}/", segments.join("/"))
    };

    if stem.eq_ignore_ascii_case("readme") || stem == "index" {
        Ok(dir)
    } else {
        Ok(format!("{dir}{stem}.html"))
    }
}
