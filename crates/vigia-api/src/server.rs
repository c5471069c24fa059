//! Server startup and graceful shutdown.

use std::path::PathBuf;

use vigia_core::{Config, Result};
use vigia_query::Engine;

use crate::routes::router;

/// Connects the configured data source and serves the API until ctrl-c.
pub async fn serve(config: Config) -> Result<()> {
    let source = vigia_store::connect(&config).await?;
    let engine = Engine::new(source);
    let app = router(engine, PathBuf::from(&config.reports.root));

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "vigia api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("vigia api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
    }
}
