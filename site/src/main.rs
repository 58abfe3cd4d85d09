//! Static page renderer CLI.
//!
//! Renders the Audiere website pages to stdout or to a directory of static
//! files. Configuration lives in `site.toml` (defaults apply when missing).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use site::exit_codes;
use site::io::build::build_site;
use site::io::config::{SiteConfig, write_config};
use site::{SiteError, load_site};

#[derive(Parser)]
#[command(name = "site", version, about = "Render the project website")]
struct Cli {
    /// Path to the site configuration file.
    #[arg(long, global = true, default_value = "site.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `site.toml` if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print registered pages in navigation order.
    List {
        /// Print JSON instead of `id<TAB>title` lines.
        #[arg(long)]
        json: bool,
    },
    /// Render one page to stdout.
    Render {
        /// Page id, e.g. `contact`.
        page: String,
    },
    /// Render every page into a directory.
    Build {
        /// Output directory.
        #[arg(short, long, default_value = "public")]
        out: PathBuf,
    },
}

fn main() {
    site::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::List { json } => cmd_list(&cli.config, json),
        Command::Render { page } => cmd_render(&cli.config, &page),
        Command::Build { out } => cmd_build(&cli.config, &out),
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SiteError>() {
        Some(site_err) if site_err.is_not_found() => exit_codes::NOT_FOUND,
        _ => exit_codes::INVALID,
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        return Ok(());
    }
    write_config(config_path, &SiteConfig::default())
        .with_context(|| format!("write {}", config_path.display()))
}

fn cmd_list(config_path: &Path, json: bool) -> Result<()> {
    let renderer = load_site(config_path)?;
    let pages = renderer.pages();
    let mut stdout = io::stdout().lock();
    if json {
        let payload = serde_json::to_string_pretty(&pages).context("serialize page list")?;
        writeln!(stdout, "{payload}")?;
    } else {
        for page in pages {
            writeln!(stdout, "{}\t{}", page.id, page.title)?;
        }
    }
    Ok(())
}

fn cmd_render(config_path: &Path, page: &str) -> Result<()> {
    let renderer = load_site(config_path)?;
    let mut stdout = io::stdout().lock();
    renderer.render_page_into(page, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn cmd_build(config_path: &Path, out: &Path) -> Result<()> {
    let renderer = load_site(config_path)?;
    let report = build_site(&renderer, out)?;
    println!("wrote {} files to {}", report.written.len(), out.display());
    Ok(())
}
