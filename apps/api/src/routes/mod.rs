pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::estimator::handlers as estimator_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/salary/vocabulary",
            get(catalog_handlers::handle_vocabulary),
        )
        .route(
            "/api/v1/salary/catalog",
            get(catalog_handlers::handle_catalog_summary),
        )
        .route(
            "/api/v1/salary/estimate",
            post(estimator_handlers::handle_estimate)
                .get(estimator_handlers::handle_estimate_for_user),
        )
        .with_state(state)
}
