//! Site configuration stored in `site.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::settings::{Links, Mode, SiteSettings};

/// Site configuration (TOML).
///
/// Edited by humans; every field has a default so a missing file or a
/// partial file still yields a usable site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the page header, footer and `<title>`.
    pub site_title: String,

    /// Extension for navigation hrefs and built files, without the dot.
    pub page_extension: String,

    /// `development` fails renders on malformed records and broken links;
    /// `production` drops them with a warning.
    pub mode: Mode,

    pub links: LinksConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    /// Release files are linked as `{download_base_url}/{filename}`.
    pub download_base_url: String,

    /// Subscribe pages are linked as `{mailing_list_base_url}/{list}`.
    pub mailing_list_base_url: String,

    /// Archives are linked as `{archive_base_url}?forum_id={id}`.
    pub archive_base_url: String,

    /// Posting addresses are `{list}@{mail_domain}`.
    pub mail_domain: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            download_base_url: "http://prdownloads.sourceforge.net/audiere".to_string(),
            mailing_list_base_url: "http://lists.sourceforge.net/lists/listinfo".to_string(),
            archive_base_url: "http://sourceforge.net/mailarchive/forum.php".to_string(),
            mail_domain: "lists.sf.net".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Audiere".to_string(),
            page_extension: "html".to_string(),
            mode: Mode::default(),
            links: LinksConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        self.settings().map(|_| ())
    }

    /// Validate and convert into the settings the renderer consumes.
    pub fn settings(&self) -> Result<SiteSettings> {
        if self.site_title.trim().is_empty() {
            return Err(anyhow!("site_title must not be empty"));
        }
        if self.page_extension.is_empty()
            || !self.page_extension.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(anyhow!(
                "page_extension must be ASCII letters or digits without a dot, got {:?}",
                self.page_extension
            ));
        }
        let links = Links::parse(
            &self.links.download_base_url,
            &self.links.mailing_list_base_url,
            &self.links.archive_base_url,
            &self.links.mail_domain,
        )
        .context("invalid [links] section")?;
        Ok(SiteSettings {
            site_title: self.site_title.trim().to_string(),
            page_extension: self.page_extension.clone(),
            mode: self.mode,
            links,
        })
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SiteConfig::default()`.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        let cfg = SiteConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SiteConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SiteConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    super::write_atomic(path, buf.as_bytes())
}
