//! Clean URL plugin.
//!
//! Rewrites `/guide/install.html` to `/guide/install` and `/guide/` to
//! `/guide`, unless the page pins its own path with a permalink.

use docsite_core::Page;
use tracing::trace;

use crate::plugin::Plugin;

/// Clean URL page plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanUrls;

impl CleanUrls {
    /// Registration name.
    pub const NAME: &'static str = "clean-urls";
}

/// Return the clean form of a page path.
///
/// Both suffix checks run against the input. At most one suffix is removed,
/// `.html` first, and the root path `/` is left as is.
pub fn clean_path(path: &str) -> &str {
    let html_stripped = path.strip_suffix(".html");
    let slash_stripped = if path == "/" {
        None
    } else {
        path.strip_suffix('/')
    };

    match (html_stripped, slash_stripped) {
        (Some(stem), _) => stem,
        (None, Some(dir)) => dir,
        (None, None) => path,
    }
}

impl Plugin for CleanUrls {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extends_page(&self, page: &mut Page) -> docsite_core::Result<()> {
        if let Some(permalink) = page.permalink() {
            trace!(path = %page.path, permalink, "permalink set, keeping path");
            return Ok(());
        }

        page.validate_path()?;

        // The clean form is always a prefix of the original path.
        let len = clean_path(&page.path).len();
        if len != page.path.len() {
            trace!(from = %page.path, to = &page.path[..len], "cleaned page path");
            page.path.truncate(len);
        }

        Ok(())
    }
}
