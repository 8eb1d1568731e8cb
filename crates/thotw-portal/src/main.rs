//! THOTW Portal server

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use thotw_portal::{build_router, AppState, PortalConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "thotw-portal")]
#[command(version)]
#[command(about = "THOTW healthcare site and patient dashboard", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.thotw/config.toml)
    #[arg(long, env = "THOTW_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(long, env = "THOTW_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = PortalConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    let addr = config.bind_addr.clone();
    let app = build_router(AppState::new(config)?);

    tracing::info!("THOTW portal listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
