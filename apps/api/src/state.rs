use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::profiles::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable after startup; read concurrently without locks.
    pub catalog: Arc<Catalog>,
    /// `None` when `DATABASE_URL` is not configured.
    pub profiles: Option<Arc<dyn ProfileStore>>,
    pub config: Config,
}
