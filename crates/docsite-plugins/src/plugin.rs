//! Page plugin hook.

use std::fmt::Debug;

use docsite_core::Page;

/// A named hook that may rewrite a page after it is constructed.
///
/// Implementations are called concurrently across pages and must not keep
/// mutable state between calls.
pub trait Plugin: Debug + Send + Sync {
    /// Registration name, as written in the `plugins` config list.
    fn name(&self) -> &'static str;

    /// Inspect and optionally rewrite a single page.
    fn extends_page(&self, page: &mut Page) -> docsite_core::Result<()>;
}
