//! Site server - serves the rendered project pages over HTTP.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "site-server")]
#[command(about = "Serve the project website pages")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Site configuration file (defaults apply when missing)
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Directory with stylesheets and images, served for non-page paths
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_server=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let renderer = site::load_site(&args.config)?;
    info!(
        config = %args.config.display(),
        pages = renderer.registry().len(),
        "loaded site"
    );
    let state = AppState::new(renderer);

    let static_dir = args.static_dir.filter(|dir| {
        let exists = dir.exists();
        if exists {
            info!(static_dir = %dir.display(), "serving static files");
        } else {
            info!(static_dir = %dir.display(), "static directory not found, pages only");
        }
        exists
    });

    let app = routes::app(state, static_dir.as_deref()).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
