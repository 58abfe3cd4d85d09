//! Static build: every page rendered to `{out}/{id}.{ext}`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::render::SiteRenderer;

/// Files written by [`build_site`], in navigation order, index last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

/// Render all registered pages into `out_dir`, plus `index.{ext}` holding
/// the first page. Each file is replaced atomically.
pub fn build_site(renderer: &SiteRenderer, out_dir: &Path) -> Result<BuildReport> {
    let Some(index) = renderer.registry().first() else {
        bail!("no pages registered");
    };
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let ext = &renderer.settings().page_extension;
    let mut written = Vec::with_capacity(renderer.registry().len() + 1);

    for id in renderer.registry().ids() {
        let html = renderer
            .render_page(id)
            .with_context(|| format!("render page {id}"))?;
        let path = out_dir.join(format!("{id}.{ext}"));
        super::write_atomic(&path, html.as_bytes())?;
        info!(page = id, path = %path.display(), "wrote page");
        written.push(path);
    }

    if !renderer.registry().contains("index") {
        let html = renderer
            .render_page(index.id)
            .with_context(|| format!("render index page {}", index.id))?;
        let path = out_dir.join(format!("index.{ext}"));
        super::write_atomic(&path, html.as_bytes())?;
        info!(page = index.id, path = %path.display(), "wrote index");
        written.push(path);
    }

    Ok(BuildReport { written })
}
