//! Server binary: config, pool, schema bootstrap, serve.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portal_api::{create_router, ApiConfig, AppState};
use portal_db::DbConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();

    let pool = portal_db::connect(&DbConfig::from_env())
        .await
        .context("failed to connect to PostgreSQL")?;
    portal_db::ensure_schema(&pool)
        .await
        .context("failed to apply database schema")?;

    let port = config.port;
    let state = AppState::new(config, pool);
    let router = create_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "HR portal API listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
