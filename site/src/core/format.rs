//! List formatters: one record in, one escaped markup fragment out.
//!
//! Formatters never validate. Whatever the record holds is escaped and
//! emitted; URLs derived from a record go through [`url::Url`] so segments
//! and query values are percent-encoded.

use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::core::escape::{Markup, escape_html};
use crate::core::records::{Developer, Download, MailingList};
use crate::core::settings::Links;

/// `<li><a href="{url}">{name}</a> - {description}</li>`
pub fn format_developer(developer: &Developer) -> Markup {
    Markup::new(format!(
        r#"<li><a href="{}">{}</a> - {}</li>"#,
        escape_html(&developer.url),
        escape_html(&developer.name),
        escape_html(&developer.description),
    ))
}

/// Table row with mailto, subscribe and archive links plus the description.
pub fn format_mailing_list(links: &Links, list: &MailingList) -> Markup {
    let mailto = mailto_url(links, &list.name);
    let subscribe = subscribe_url(links, &list.name);
    let archive = archive_url(links, &list.archive_id);
    Markup::new(format!(
        concat!(
            "<tr>",
            r#"<td><a href="{mailto}">{name}</a></td>"#,
            "<td>",
            r#"[<a href="{subscribe}">subscribe</a>]<br />"#,
            r#"[<a href="{archive}">archive</a>]"#,
            "</td>",
            "<td>{description}</td>",
            "</tr>"
        ),
        mailto = escape_html(&mailto),
        name = escape_html(&list.name),
        subscribe = escape_html(subscribe.as_str()),
        archive = escape_html(archive.as_str()),
        description = escape_html(&list.description),
    ))
}

/// `<li><a href="{download_base}/{filename}">{label}</a></li>`
pub fn format_download(links: &Links, download: &Download) -> Markup {
    let href = download_url(links, &download.filename);
    Markup::new(format!(
        r#"<li><a href="{}">{}</a></li>"#,
        escape_html(href.as_str()),
        escape_html(&download.label),
    ))
}

/// `{mailing_list_base}/{name}`
pub fn subscribe_url(links: &Links, name: &str) -> Url {
    append_segment(&links.mailing_list_base, name)
}

/// `{archive_base}?forum_id={id}`, keeping any query the base already has.
pub fn archive_url(links: &Links, archive_id: &str) -> Url {
    let mut url = links.archive_base.clone();
    url.query_pairs_mut().append_pair("forum_id", archive_id);
    url
}

/// `{download_base}/{filename}`
pub fn download_url(links: &Links, filename: &str) -> Url {
    append_segment(&links.download_base, filename)
}

/// `mailto:{name}@{mail_domain}` with the local part form-encoded.
pub fn mailto_url(links: &Links, name: &str) -> String {
    let local: String = byte_serialize(name.as_bytes()).collect();
    format!("mailto:{}@{}", local, links.mail_domain)
}

fn append_segment(base: &Url, segment: &str) -> Url {
    let mut url = base.clone();
    // `Links::parse` rejects cannot-be-a-base URLs, so this always succeeds.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(segment);
    }
    url
}
