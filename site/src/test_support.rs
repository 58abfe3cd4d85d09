//! Test-only helpers for building small sites.

use crate::core::registry::{Page, PageRegistry};
use crate::core::settings::{Links, Mode, SiteSettings};
use crate::render::SiteRenderer;

/// Links pointing at the SourceForge services the default config uses.
pub fn sample_links() -> Links {
    Links::parse(
        "http://prdownloads.sourceforge.net/audiere",
        "http://lists.sourceforge.net/lists/listinfo",
        "http://sourceforge.net/mailarchive/forum.php",
        "lists.sf.net",
    )
    .expect("sample links should parse")
}

/// Settings titled "Audiere" with `.html` hrefs.
pub fn sample_settings(mode: Mode) -> SiteSettings {
    SiteSettings {
        site_title: "Audiere".to_string(),
        page_extension: "html".to_string(),
        mode,
        links: sample_links(),
    }
}

/// Renderer over the given pages, in order.
pub fn renderer_with(pages: &[Page], mode: Mode) -> SiteRenderer {
    let registry = PageRegistry::from_pages(pages.iter().copied()).expect("valid registry");
    SiteRenderer::new(registry, sample_settings(mode)).expect("templates should compile")
}
