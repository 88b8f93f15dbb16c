use std::sync::Arc;

use clinic_db::PatientStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Patient record store (PostgreSQL in production).
    pub store: Arc<dyn PatientStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
