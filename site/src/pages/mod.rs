//! The Audiere project pages, in navigation order.

use crate::core::registry::{Page, PageRegistry};
use crate::error::Result;

pub const PAGES: [Page; 8] = [
    Page::new("home", "Home", include_str!("home.html")),
    Page::new("features", "Features", include_str!("features.html")),
    Page::new("download", "Download", include_str!("download.html")),
    Page::new(
        "documentation",
        "Documentation",
        include_str!("documentation.html"),
    ),
    Page::new("users", "Users", include_str!("users.html")),
    Page::new("development", "Development", include_str!("development.html")),
    Page::new("lists", "Mailing Lists", include_str!("lists.html")),
    Page::new("contact", "Contact", include_str!("contact.html")),
];

/// Registry of every built-in page.
pub fn default_registry() -> Result<PageRegistry> {
    PageRegistry::from_pages(PAGES)
}
