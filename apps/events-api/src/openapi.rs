//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        version = "0.1.0",
        description = "Event management API with HAL links, validation and paging"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    paths(crate::api::index::index),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::index::Index)
    ),
    nest(
        (path = "/events", api = domain_events::handlers::ApiDoc)
    ),
    tags(
        (name = "index", description = "API entry point")
    )
)]
pub struct ApiDoc;
