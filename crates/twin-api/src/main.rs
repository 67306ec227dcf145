//! Digital twin gateway server.

use std::sync::Arc;

use brain_core::Brain;
use database::Database;
use gemini_brain::GeminiBrain;
use memory_service::MemoryService;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twin_api::{AppState, Config};
use vapi_client::VapiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting digital twin API");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build components
    let brain: Arc<dyn Brain> = Arc::new(GeminiBrain::new(config.gemini.clone()));
    let vapi = VapiClient::new(config.vapi.clone())?;
    let memory = MemoryService::new(db, Arc::clone(&brain));
    let state = AppState::new(brain, vapi, memory);

    let app = twin_api::app(state, &config.frontend_url);

    info!(addr = %config.addr, "Digital twin API listening");
    info!("Webhook endpoint: POST /vapi/webhook");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
