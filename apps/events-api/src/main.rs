//! Events API - REST server for events with HAL links

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_events::{EventService, InMemoryEventRepository, PgEventRepository};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(database) => {
            info!("Connecting to PostgreSQL");
            let db = connect_from_config_with_retry(database)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
            run_migrations::<Migrator>(&db, config.app.name).await?;
            Some(db)
        }
        None => {
            warn!("DATABASE_URL is not set, events are kept in memory");
            None
        }
    };

    let api_routes = match &db {
        Some(db) => api::routes(EventService::new(PgEventRepository::new(db.clone()))),
        None => api::routes(EventService::new(InMemoryEventRepository::new())),
    };

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.server)?;

    let state = AppState { config, db };

    // - /health: liveness check with app name/version
    // - /ready: readiness check, pings the database when there is one
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = db {
                info!("Shutting down: closing database connections");
                match db.close().await {
                    Ok(_) => info!("PostgreSQL connection closed successfully"),
                    Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Events API shutdown complete");
    Ok(())
}
