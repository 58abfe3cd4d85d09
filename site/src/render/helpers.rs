//! Functions available to page templates.
//!
//! `developer`, `mailing_list` and `download` wrap the list formatters;
//! `page_href` links to another registered page. In development mode an
//! incomplete record or unknown link target fails the render. In production
//! the helper degrades (empty fragment, or the unchecked href) and logs.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};
use tracing::warn;

use crate::core::escape::Markup;
use crate::core::format::{format_developer, format_download, format_mailing_list};
use crate::core::records::{Developer, Download, MailingList};
use crate::core::registry::PageRegistry;
use crate::core::settings::{Mode, SiteSettings};
use crate::error::{BrokenLink, MalformedRecord, SiteError};

pub(crate) fn register(
    env: &mut Environment<'static>,
    registry: Arc<PageRegistry>,
    settings: &Arc<SiteSettings>,
) {
    let mode = settings.mode;

    env.add_function(
        "developer",
        move |name: String, url: String, description: String| -> Result<Value, Error> {
            let record = Developer {
                name,
                url,
                description,
            };
            if admit(mode, record.validate())? {
                Ok(format_developer(&record).into())
            } else {
                Ok(Markup::empty().into())
            }
        },
    );

    let site = Arc::clone(settings);
    env.add_function(
        "mailing_list",
        move |name: String, archive_id: String, description: String| -> Result<Value, Error> {
            let record = MailingList {
                name,
                archive_id,
                description,
            };
            if admit(mode, record.validate())? {
                Ok(format_mailing_list(&site.links, &record).into())
            } else {
                Ok(Markup::empty().into())
            }
        },
    );

    let site = Arc::clone(settings);
    env.add_function(
        "download",
        move |filename: String, label: String| -> Result<Value, Error> {
            let record = Download { filename, label };
            if admit(mode, record.validate())? {
                Ok(format_download(&site.links, &record).into())
            } else {
                Ok(Markup::empty().into())
            }
        },
    );

    let site = Arc::clone(settings);
    env.add_function("page_href", move |target: String| -> Result<String, Error> {
        if !registry.contains(&target) {
            let link = BrokenLink { target };
            if mode.is_strict() {
                return Err(Error::new(ErrorKind::InvalidOperation, link.to_string())
                    .with_source(link));
            }
            warn!(target = %link.target, "link to unregistered page");
            return Ok(site.page_href(&link.target));
        }
        Ok(site.page_href(&target))
    });
}

/// Apply the record policy: `Ok(true)` renders, `Ok(false)` drops.
fn admit(mode: Mode, check: Result<(), MalformedRecord>) -> Result<bool, Error> {
    match check {
        Ok(()) => Ok(true),
        Err(record) if mode.is_strict() => {
            Err(Error::new(ErrorKind::InvalidOperation, record.to_string()).with_source(record))
        }
        Err(record) => {
            warn!(kind = %record.kind, field = record.field, "dropped malformed record");
            Ok(false)
        }
    }
}

/// Recover helper failures from a template error so callers see them typed.
pub(crate) fn into_site_error(err: Error) -> SiteError {
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        if let Some(record) = cause.downcast_ref::<MalformedRecord>() {
            return SiteError::MalformedRecord(record.clone());
        }
        if let Some(link) = cause.downcast_ref::<BrokenLink>() {
            return SiteError::BrokenLink(link.clone());
        }
        source = cause.source();
    }
    SiteError::Template(err)
}
