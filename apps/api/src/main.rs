use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use careerpath_api::config::Config;
use careerpath_api::db::create_pool;
use careerpath_api::profiles::{PgProfileStore, ProfileStore};
use careerpath_api::routes::build_router;
use careerpath_api::state::AppState;
use careerpath_api::{init_tracing, load_or_generate_catalog};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting CareerPath salary API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_or_generate_catalog(&config.catalog_path, config.catalog_seed).await?;

    // Profile store is optional; without it only the body-based estimate works
    let profiles: Option<Arc<dyn ProfileStore>> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url).await?;
            Some(Arc::new(PgProfileStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; stored-profile lookups are disabled");
            None
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        profiles,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
