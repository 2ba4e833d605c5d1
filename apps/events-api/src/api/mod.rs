use axum::{Router, routing::get};
use domain_events::{EventRepository, EventService, handlers};

pub mod health;
pub mod index;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes<R: EventRepository + 'static>(events: EventService<R>) -> Router {
    Router::new()
        .route("/", get(index::index))
        .nest("/events", handlers::router(events))
}

/// Router with the `/ready` endpoint, merged next to `/health`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
