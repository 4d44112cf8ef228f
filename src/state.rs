use sea_orm::DatabaseConnection;

use crate::service::advisor::AdvisorClient;

/// Application state shared across all request handlers.
///
/// Initialized once during startup and cloned cheaply per request through
/// Axum's state extraction: `DatabaseConnection` is a pooled handle and
/// `AdvisorClient` wraps a reference-counted HTTP client.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// Client for the external generative-AI advisory service.
    pub advisor: AdvisorClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, advisor: AdvisorClient) -> Self {
        Self { db, advisor }
    }
}
