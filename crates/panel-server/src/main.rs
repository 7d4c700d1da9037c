use anyhow::{Context, Result};
use clap::Parser;
use panel_application::{Templates, ViewContext};
use panel_infrastructure::{ConfigService, HttpBackend};
use panel_server::state::signing_key;
use panel_server::{AppState, build_router, logging};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "panel")]
#[command(about = "Panel - web dashboard for the Tsuru platform", long_about = None)]
struct Cli {
    /// Config file (default: $PANEL_CONFIG, then ~/.config/panel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    bind: Option<String>,

    /// Base URL of the Tsuru API
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = service.load().context("Failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }

    let _guard = logging::init(&config.logging)?;

    let backend = HttpBackend::new(config.backend.url.clone());
    let templates = Templates::new().context("Failed to compile templates")?;
    let key = signing_key(config.server.session_secret.as_deref());
    let state = AppState::new(ViewContext::new(Arc::new(backend)), templates, key);

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    tracing::info!(
        bind = %config.server.bind,
        backend = %config.backend.url,
        "Panel listening"
    );

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
