//! Static page renderer for the Audiere project website.
//!
//! Every page is rendered the same way: a shared header with navigation
//! (the requested page marked active), the page body, and a shared footer.
//! Page bodies are auto-escaping templates that format repeated list items
//! (developers, mailing lists, downloads) through small pure formatters.
//!
//! - **[`core`]**: Pure logic (records, escaping, formatters, page registry).
//!   No I/O.
//! - **[`render`]**: Template environment and the page dispatcher.
//! - **[`io`]**: Config file and static build output.
//! - **[`pages`]**: The built-in site content.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pages;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Result, SiteError};
pub use render::SiteRenderer;

/// Load config from `config_path` and build a renderer over the built-in pages.
pub fn load_site(config_path: &std::path::Path) -> anyhow::Result<SiteRenderer> {
    let cfg = io::config::load_config(config_path)?;
    let renderer = SiteRenderer::new(pages::default_registry()?, cfg.settings()?)?;
    Ok(renderer)
}
