//! Validated, immutable settings consumed by formatters and the renderer.
//!
//! These are built from the on-disk config (`io::config`) once at startup.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SiteError};

/// How template helpers treat incomplete records and broken internal links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fail the render.
    Development,
    /// Drop the fragment and log a warning.
    #[default]
    Production,
}

impl Mode {
    pub fn is_strict(self) -> bool {
        matches!(self, Mode::Development)
    }
}

/// Base URLs for the external services list items link to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub download_base: Url,
    pub mailing_list_base: Url,
    pub archive_base: Url,
    pub mail_domain: String,
}

impl Links {
    pub fn parse(
        download_base: &str,
        mailing_list_base: &str,
        archive_base: &str,
        mail_domain: &str,
    ) -> Result<Self> {
        let mail_domain = mail_domain.trim();
        if mail_domain.is_empty() || mail_domain.contains(char::is_whitespace) {
            return Err(SiteError::InvalidBaseUrl {
                field: "mail_domain",
                reason: format!("{mail_domain:?} is not a domain"),
            });
        }
        Ok(Self {
            download_base: parse_base("download_base_url", download_base)?,
            mailing_list_base: parse_base("mailing_list_base_url", mailing_list_base)?,
            archive_base: parse_base("archive_base_url", archive_base)?,
            mail_domain: mail_domain.to_string(),
        })
    }
}

/// Base URLs must be hierarchical http(s) URLs so segments can be appended.
fn parse_base(field: &'static str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|err| SiteError::InvalidBaseUrl {
        field,
        reason: format!("{raw:?}: {err}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(SiteError::InvalidBaseUrl {
            field,
            reason: format!("{raw:?} is not an http(s) base URL"),
        });
    }
    Ok(url)
}

/// Everything the renderer needs besides the page registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_title: String,
    /// Extension used for navigation hrefs and build output, without the dot.
    pub page_extension: String,
    pub mode: Mode,
    pub links: Links,
}

impl SiteSettings {
    /// Href of a page as linked from navigation: `{id}.{ext}`.
    pub fn page_href(&self, id: &str) -> String {
        format!("{}.{}", id, self.page_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(download: &str) -> Result<Links> {
        Links::parse(
            download,
            "http://lists.sourceforge.net/lists/listinfo",
            "http://sourceforge.net/mailarchive/forum.php",
            "lists.sf.net",
        )
    }

    #[test]
    fn parses_http_bases() {
        let links = links("http://prdownloads.sourceforge.net/audiere").expect("links");
        assert_eq!(links.download_base.host_str(), Some("prdownloads.sourceforge.net"));
        assert_eq!(links.mail_domain, "lists.sf.net");
    }

    #[test]
    fn rejects_non_http_base() {
        let err = links("mailto:someone@example.org").expect_err("mailto base");
        assert!(matches!(
            err,
            SiteError::InvalidBaseUrl {
                field: "download_base_url",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(links("not a url").is_err());
    }

    #[test]
    fn rejects_blank_mail_domain() {
        let err = Links::parse(
            "http://a.example/",
            "http://b.example/",
            "http://c.example/",
            " ",
        )
        .expect_err("blank domain");
        assert!(matches!(
            err,
            SiteError::InvalidBaseUrl {
                field: "mail_domain",
                ..
            }
        ));
    }

    #[test]
    fn mode_defaults_to_production() {
        assert_eq!(Mode::default(), Mode::Production);
        assert!(Mode::Development.is_strict());
        assert!(!Mode::Production.is_strict());
    }
}
