use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use actord::{build_router, ApiState, DaemonConfig, ProcessExecutor};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,actord=info")),
        )
        .init();

    let config = DaemonConfig::from_env().map_err(anyhow::Error::msg)?;
    let executor = Arc::new(ProcessExecutor::from_config(&config));
    let state = ApiState::new(executor, config.verbose);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    let app = build_router(state);

    tracing::info!(
        "actord listening on http://{} runner={}",
        config.server_addr,
        config.runner.display()
    );
    axum::serve(listener, app).await?;
    Ok(())
}
