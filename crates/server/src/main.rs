use std::sync::Arc;

use server::{AppState, router};
use store::ProjectStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

const ADDR_ENV: &str = "PROJECTS_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState::new(Arc::new(ProjectStore::new()));

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "projects api listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
