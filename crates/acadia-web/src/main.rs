//! Acadia Web Server
//!
//! Run with: cargo run -p acadia-web

use std::sync::Arc;

use acadia_common::Config;
use acadia_web::state::{spawn_session_sweeper, AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Acadia Web Server...");

    let config = Config::load()?;
    let addr = config.bind_addr();

    // Create app state; optional collaborators are probed here
    let state = Arc::new(AppState::new(config)?);
    spawn_session_sweeper(Arc::clone(&state));

    // Build router
    let app = acadia_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
