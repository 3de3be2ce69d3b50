use std::sync::Arc;

use rolodex_db::repositories::ContactRepository;

use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the route layer holds no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Contact storage backend.
    pub contacts: Arc<dyn ContactRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
