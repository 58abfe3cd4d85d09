//! Shared page chrome: header with navigation, and footer.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::core::registry::PageRegistry;
use crate::core::settings::SiteSettings;

pub(crate) const HEADER: &str = "layout/header.html";
pub(crate) const FOOTER: &str = "layout/footer.html";

const HEADER_TEMPLATE: &str = include_str!("templates/header.html");
const FOOTER_TEMPLATE: &str = include_str!("templates/footer.html");

pub(crate) fn add_templates(env: &mut Environment<'static>) -> Result<(), minijinja::Error> {
    env.add_template(HEADER, HEADER_TEMPLATE)?;
    env.add_template(FOOTER, FOOTER_TEMPLATE)?;
    Ok(())
}

/// One navigation link; at most one entry per header is `active`.
#[derive(Debug, Clone, Serialize)]
struct NavEntry<'a> {
    id: &'a str,
    title: &'a str,
    href: String,
    active: bool,
}

fn nav_entries<'a>(
    registry: &'a PageRegistry,
    settings: &SiteSettings,
    active_id: &str,
) -> Vec<NavEntry<'a>> {
    registry
        .iter()
        .map(|page| NavEntry {
            id: page.id,
            title: page.title,
            href: settings.page_href(page.id),
            active: page.id == active_id,
        })
        .collect()
}

pub(crate) fn render_header(
    env: &Environment<'static>,
    registry: &PageRegistry,
    settings: &SiteSettings,
    active_id: &str,
) -> Result<String, minijinja::Error> {
    let page_title = registry.get(active_id).map(|page| page.title);
    let index_href = registry.first().map(|page| settings.page_href(page.id));
    env.get_template(HEADER)?.render(context! {
        site_title => &settings.site_title,
        page_title => page_title,
        index_href => index_href,
        nav => nav_entries(registry, settings, active_id),
    })
}

pub(crate) fn render_footer(
    env: &Environment<'static>,
    settings: &SiteSettings,
) -> Result<String, minijinja::Error> {
    env.get_template(FOOTER)?.render(context! {
        site_title => &settings.site_title,
    })
}
