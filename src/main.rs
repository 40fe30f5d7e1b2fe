//! Submission gateway binary.
//!
//! A thin edge handler in front of a backend web app:
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────┐
//!     ─────────────────────────▶│ gating: OPTIONS → action → POST  │
//!                               │        → config → shared secret  │
//!                               │              │                   │
//!                               │              ▼                   │
//!     Client Response           │  forward raw body upstream,      │
//!     ◀─────────────────────────│  relay status/body/content-type  │
//!                               └──────────────────────────────────┘
//! ```
//!
//! One outbound call per accepted submission; no retries, no state.

use std::path::PathBuf;

use clap::Parser;
use submit_gateway::config::load_config;
use submit_gateway::http::HttpServer;
use submit_gateway::lifecycle::{signals, Shutdown};
use submit_gateway::observability::{logging, metrics};
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(name = "submit-gateway", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_configured = config.upstream.url.is_some(),
        secret_enforced = config.security.worker_key.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    let server_task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    signals::wait_for_termination().await;
    shutdown.trigger();

    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
