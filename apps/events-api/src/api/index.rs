//! API entry point

use axum_helpers::{Hal, Link, Links};
use domain_events::EVENTS_PATH;
use serde::Serialize;
use utoipa::ToSchema;

/// Links to the top-level resources, e.g. `{"_links": {"events": {"href": "/api/events"}}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct Index {
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    links: Links,
}

/// API index
#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    responses(
        (status = 200, description = "Links to the top-level resources", body = Index, content_type = "application/hal+json")
    )
)]
pub async fn index() -> Hal<Index> {
    Hal(Index {
        links: Links::from(vec![Link::new("events", EVENTS_PATH)]),
    })
}
