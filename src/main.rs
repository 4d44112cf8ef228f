//! Staybook server entry point.
//!
//! Loads environment configuration, connects to the SQLite database (running
//! pending migrations), wires the session layer and the advisory client into
//! shared state, and serves the HTTP API.

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod openapi;
mod router;
mod service;
mod startup;
mod state;

use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{config::Config, error::AppError, service::advisor::AdvisorClient, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staybook=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_http_client()?;

    let advisor = AdvisorClient::new(http_client, config.gemini_api_key.clone());

    let app = router::router()
        .with_state(AppState::new(db, advisor))
        .layer(session_layer)
        .layer(CorsLayer::very_permissive());

    info!("listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
