use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tax_api::config::AppConfig;
use tax_api::state::AppState;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// HTTP service for progressive personal income tax calculations.
///
/// Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(long)]
    port: Option<u16>,

    /// Deduction regime (`rent-relief` or `consolidated-relief`).
    #[arg(long)]
    regime: Option<String>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(regime) = self.regime {
            config.tax.regime = regime;
        }

        Ok(config)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    tax_api::logging::init_logging(&config.logging)?;

    let calculator = config
        .calculator()
        .with_context(|| format!("Failed to build regime '{}'", config.tax.regime))?;
    info!("using regime {}", calculator.regime().name);

    let app = tax_api::app(AppState::new(calculator));

    let addr = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}:{}", addr.0, addr.1))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
