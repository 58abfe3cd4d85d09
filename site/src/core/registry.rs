//! Ordered page registry.
//!
//! Pages are registered once at startup and the registry is read-only from
//! then on. Registration order is navigation order; the first page is the
//! site index.

use serde::Serialize;

use crate::error::{Result, SiteError};

/// One static content unit.
///
/// `template` is the page body: an HTML template that may call the list
/// helpers (`developer`, `mailing_list`, `download`) and `page_href`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub id: &'static str,
    pub title: &'static str,
    pub template: &'static str,
}

impl Page {
    pub const fn new(id: &'static str, title: &'static str, template: &'static str) -> Self {
        Self {
            id,
            title,
            template,
        }
    }
}

/// Navigation-facing view of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from pages in navigation order.
    pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Result<Self> {
        let mut registry = Self::new();
        for page in pages {
            registry.register(page)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, page: Page) -> Result<()> {
        if !is_valid_id(page.id) {
            return Err(SiteError::InvalidPageId {
                id: page.id.to_string(),
            });
        }
        if self.contains(page.id) {
            return Err(SiteError::DuplicatePage {
                id: page.id.to_string(),
            });
        }
        self.pages.push(page);
        Ok(())
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The index page, if any page is registered.
    pub fn first(&self) -> Option<&Page> {
        self.pages.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.iter().map(|page| page.id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Ids double as file names and URL path segments.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}
