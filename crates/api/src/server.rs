//! Server startup shared by the binary and the tests.

use std::future::Future;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::build_app_router;
use crate::state::AppState;

/// Bind the configured address. Fails if the address is in use.
pub async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = config.bind_addr()?;
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Build state, bind, and serve until `shutdown` resolves.
///
/// Any startup failure is returned before a connection is accepted.
pub async fn run<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::from_config(config.clone()).await?;
    let app = build_app_router(state, &config);

    let listener = bind(&config).await?;
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}
