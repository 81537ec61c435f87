//! nexmem-mcp - Entry point
//!
//! Stdio MCP bridge for the NexMemory knowledge base. Configuration comes
//! from the environment (`NEXMEMORY_API_KEY`, `NEXMEMORY_API_URL`,
//! `NEXMEMORY_DEBUG`); the process runs until stdin closes or a
//! termination signal arrives, and exits 0 either way.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nexmem::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Stdout carries protocol lines exclusively; all diagnostics go to
    // stderr. Bridge debug traces are gated on the NEXMEMORY_DEBUG toggle.
    let filter = if config.debug {
        EnvFilter::new("nexmem=debug,nexmem_mcp=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tokio::select! {
        result = nexmem::run_mcp_server(&config) => result,
        _ = shutdown_signal() => {
            tracing::debug!("Termination signal received, shutting down");
            Ok(())
        }
    }
}

/// Resolves when SIGINT or SIGTERM arrives. In-flight requests are simply
/// abandoned; errors are reported in-band, so the exit status stays 0.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(_) => return std::future::pending::<()>().await,
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
