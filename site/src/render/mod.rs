//! Page rendering: layout, template helpers and the dispatcher.
//!
//! A [`SiteRenderer`] owns the page registry and a compiled template
//! environment. It is built once and shared read-only; every call renders a
//! complete document from scratch.

mod helpers;
mod layout;

use std::io::Write;
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use tracing::debug;

use crate::core::registry::{Page, PageRegistry, PageSummary};
use crate::core::settings::SiteSettings;
use crate::error::{Result, SiteError};

pub struct SiteRenderer {
    env: Environment<'static>,
    registry: Arc<PageRegistry>,
    settings: Arc<SiteSettings>,
}

impl SiteRenderer {
    /// Compile the layout and every page template.
    pub fn new(registry: PageRegistry, settings: SiteSettings) -> Result<Self> {
        let registry = Arc::new(registry);
        let settings = Arc::new(settings);

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        layout::add_templates(&mut env)?;
        for page in registry.iter() {
            env.add_template(page.id, page.template)?;
        }
        helpers::register(&mut env, Arc::clone(&registry), &settings);

        Ok(Self {
            env,
            registry,
            settings,
        })
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Pages in navigation order with their hrefs.
    pub fn pages(&self) -> Vec<PageSummary> {
        self.registry
            .iter()
            .map(|page| PageSummary {
                id: page.id.to_string(),
                title: page.title.to_string(),
                href: self.settings.page_href(page.id),
            })
            .collect()
    }

    /// Document head and navigation. An unregistered `active_id` marks no
    /// entry as active.
    pub fn render_header(&self, active_id: &str) -> Result<String> {
        layout::render_header(&self.env, &self.registry, &self.settings, active_id)
            .map_err(helpers::into_site_error)
    }

    pub fn render_footer(&self) -> Result<String> {
        layout::render_footer(&self.env, &self.settings).map_err(helpers::into_site_error)
    }

    fn render_content(&self, page: &Page) -> Result<String> {
        let template = self.env.get_template(page.id)?;
        template
            .render(context! {
                site_title => &self.settings.site_title,
                page => context! { id => page.id, title => page.title },
            })
            .map_err(helpers::into_site_error)
    }

    /// Render a complete document for a registered page.
    pub fn render_page(&self, id: &str) -> Result<String> {
        let page = self.registry.get(id).ok_or_else(|| SiteError::UnknownPage {
            id: id.to_string(),
        })?;

        let header = self.render_header(page.id)?;
        let content = self.render_content(page)?;
        let footer = self.render_footer()?;

        let mut html = String::with_capacity(header.len() + content.len() + footer.len() + 3);
        html.push_str(&header);
        html.push('\n');
        html.push_str(&content);
        html.push('\n');
        html.push_str(&footer);
        html.push('\n');

        debug!(page = id, bytes = html.len(), "rendered page");
        Ok(html)
    }

    /// Render into a sink. Nothing is written unless the render succeeds.
    pub fn render_page_into<W: Write>(&self, id: &str, out: &mut W) -> Result<()> {
        let html = self.render_page(id)?;
        out.write_all(html.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Mode;
    use crate::test_support::{renderer_with, sample_settings};

    const CONTACT: &str = r#"<ul>
{{ developer("Chad Austin", "http://aegisknight.org/", "Developer and Project Manager") }}
{{ developer("<script>", "http://example.org/", "x & y") }}
</ul>
<p>See the <a href="{{ page_href("lists") }}">mailing lists</a>.</p>"#;

    const LISTS: &str = r#"<table>
{{ mailing_list("audiere-devel", "292", "Developer discussion.") }}
</table>"#;

    const DOWNLOAD: &str = r#"<ul>
{{ download("audiere-1.9.2.tar.gz", "UNIX Source Release") }}
</ul>"#;

    fn renderer(mode: Mode) -> SiteRenderer {
        renderer_with(
            &[
                Page::new("home", "Home", "<p>Welcome to {{ site_title }}.</p>"),
                Page::new("download", "Download", DOWNLOAD),
                Page::new("lists", "Mailing Lists", LISTS),
                Page::new("contact", "Contact", CONTACT),
            ],
            mode,
        )
    }

    #[test]
    fn page_has_layout_once_and_one_active_entry() {
        let renderer = renderer(Mode::Development);
        for id in ["home", "download", "lists", "contact"] {
            let html = renderer.render_page(id).expect("render");
            assert_eq!(html.matches("<!DOCTYPE html>").count(), 1, "{id}");
            assert_eq!(html.matches(r#"<nav id="navigation">"#).count(), 1, "{id}");
            assert_eq!(html.matches(r#"<div id="footer">"#).count(), 1, "{id}");
            assert_eq!(html.matches("</html>").count(), 1, "{id}");
            assert_eq!(html.matches(r#"class="active""#).count(), 1, "{id}");
            let active = format!(r#"<li class="active"><a href="{id}.html" aria-current="page">"#);
            assert!(html.contains(&active), "{id}");
        }
    }

    #[test]
    fn nav_lists_pages_in_registration_order() {
        let html = renderer(Mode::Development).render_header("home").expect("header");
        let positions: Vec<usize> = ["home.html", "download.html", "lists.html", "contact.html"]
            .iter()
            .map(|href| html.find(href).expect(href))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains(r#"<li><a href="contact.html">Contact</a></li>"#));
    }

    #[test]
    fn header_for_unregistered_id_marks_nothing_active() {
        let html = renderer(Mode::Development).render_header("missing").expect("header");
        assert!(!html.contains(r#"class="active""#));
        assert!(html.contains("<title>Audiere</title>"));
    }

    #[test]
    fn unknown_page_is_an_error() {
        let err = renderer(Mode::Production).render_page("Contact").expect_err("unknown");
        assert!(matches!(err, SiteError::UnknownPage { ref id } if id == "Contact"));
        assert!(err.is_not_found());
    }

    #[test]
    fn render_into_writes_nothing_for_unknown_page() {
        let mut out = Vec::new();
        let err = renderer(Mode::Production)
            .render_page_into("nope", &mut out)
            .expect_err("unknown");
        assert!(err.is_not_found());
        assert!(out.is_empty());
    }

    #[test]
    fn render_into_matches_render() {
        let renderer = renderer(Mode::Production);
        let mut out = Vec::new();
        renderer.render_page_into("lists", &mut out).expect("render");
        let expected = renderer.render_page("lists").expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), expected);
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = renderer(Mode::Production);
        let first = renderer.render_page("contact").expect("render");
        let second = renderer.render_page("contact").expect("render");
        assert_eq!(first, second);
    }

    #[test]
    fn helpers_emit_escaped_markup() {
        let html = renderer(Mode::Development).render_page("contact").expect("render");
        assert!(html.contains(concat!(
            r#"<li><a href="http://aegisknight.org/">Chad Austin</a>"#,
            " - Developer and Project Manager</li>"
        )));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x &amp; y"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"<a href="lists.html">mailing lists</a>"#));
    }

    #[test]
    fn list_and_download_helpers_build_links() {
        let renderer = renderer(Mode::Development);
        let lists = renderer.render_page("lists").expect("lists");
        assert!(lists.contains("http://lists.sourceforge.net/lists/listinfo/audiere-devel"));
        assert!(lists.contains("forum_id=292"));

        let download = renderer.render_page("download").expect("download");
        assert!(download.contains(concat!(
            r#"<a href="http://prdownloads.sourceforge.net/audiere/audiere-1.9.2.tar.gz">"#,
            "UNIX Source Release</a>"
        )));
    }

    #[test]
    fn text_in_page_context_is_escaped() {
        let mut settings = sample_settings(Mode::Production);
        settings.site_title = "A&B <Audio>".to_string();
        let renderer = SiteRenderer::new(
            PageRegistry::from_pages([Page::new("home", "Home", "<p>{{ site_title }}</p>")])
                .expect("registry"),
            settings,
        )
        .expect("renderer");
        let html = renderer.render_page("home").expect("render");
        assert!(html.contains("<p>A&amp;B &lt;Audio&gt;</p>"));
    }

    #[test]
    fn malformed_record_fails_in_development() {
        let page = Page::new("contact", "Contact", r#"{{ developer("", "http://x.org/", "d") }}"#);
        let err = renderer_with(&[page], Mode::Development)
            .render_page("contact")
            .expect_err("malformed");
        match err {
            SiteError::MalformedRecord(record) => assert_eq!(record.field, "name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_record_is_dropped_in_production() {
        let page = Page::new(
            "download",
            "Download",
            r#"<ul>{{ download("", "Missing") }}{{ download("a.zip", "A") }}</ul>"#,
        );
        let html = renderer_with(&[page], Mode::Production)
            .render_page("download")
            .expect("render");
        assert!(!html.contains("Missing"));
        assert!(html.contains(concat!(
            r#"<ul><li><a href="http://prdownloads.sourceforge.net/audiere/a.zip">"#,
            "A</a></li></ul>"
        )));
    }

    #[test]
    fn broken_link_depends_on_mode() {
        let page = Page::new("home", "Home", r#"<a href="{{ page_href("nowhere") }}">x</a>"#);

        let err = renderer_with(&[page], Mode::Development)
            .render_page("home")
            .expect_err("broken link");
        assert!(matches!(err, SiteError::BrokenLink(ref link) if link.target == "nowhere"));

        let html = renderer_with(&[page], Mode::Production)
            .render_page("home")
            .expect("render");
        assert!(html.contains(r#"<a href="nowhere.html">x</a>"#));
    }

    #[test]
    fn template_syntax_errors_surface_at_construction() {
        let registry =
            PageRegistry::from_pages([Page::new("home", "Home", "{% if %}")]).expect("registry");
        let err = SiteRenderer::new(registry, sample_settings(Mode::Production))
            .err()
            .expect("syntax error");
        assert!(matches!(err, SiteError::Template(_)));
    }

    #[test]
    fn summaries_follow_nav_order() {
        let pages = renderer(Mode::Production).pages();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].id, "home");
        assert_eq!(pages[0].href, "home.html");
        assert_eq!(pages[2].title, "Mailing Lists");
    }
}
