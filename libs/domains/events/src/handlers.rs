use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    BoundJson, Hal, IdPath, Link, PageRequest, PagedResources, Resource,
    errors::responses::{
        BadRequestPathResponse, BadRequestQueryResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::links::{EVENT_LIST_REL, EVENTS_PATH, EventLinks, PROFILE_LIST, event_href};
use crate::models::{Event, EventDto, EventStatus};
use crate::repository::EventRepository;
use crate::service::EventService;

const TAG: &str = "events";

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, get_event, update_event),
    components(
        schemas(Event, EventDto, EventStatus),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestPathResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Event management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the event router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}", get(get_event).put(update_event))
        .with_state(shared_service)
}

/// List events, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("page" = Option<u64>, Query, description = "0-based page number (default 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default 20, at most 2000)"),
        ("sort" = Option<String>, Query, description = "`property[,ASC|DESC]`, e.g. `name,DESC`")
    ),
    responses(
        (status = 200, description = "Page of events under `_embedded.eventList`", body = Vec<Event>, content_type = "application/hal+json"),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    request: PageRequest,
) -> EventResult<impl IntoResponse> {
    let page = service.list_events(&request).await?;

    let resources =
        PagedResources::assemble(page, &request, EVENTS_PATH, EVENT_LIST_REL, &EventLinks::Item)
            .with_link(Link::new("profile", PROFILE_LIST));

    Ok(Hal(resources))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = EventDto,
    responses(
        (status = 201, description = "Event created", body = Event, content_type = "application/hal+json",
            headers(("Location" = String, description = "URI of the new event"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    BoundJson(body): BoundJson<EventDto>,
) -> EventResult<impl IntoResponse> {
    let event = service.create_event(body).await?;

    let location = event_href(event.id);
    let resource = Resource::build(event, &EventLinks::Created);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Hal(resource)))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event found", body = Event, content_type = "application/hal+json"),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    IdPath(id): IdPath,
) -> EventResult<impl IntoResponse> {
    let event = service.get_event(id).await?;
    Ok(Hal(Resource::build(event, &EventLinks::Fetched)))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = EventDto,
    responses(
        (status = 200, description = "Event updated", body = Event, content_type = "application/hal+json"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    IdPath(id): IdPath,
    BoundJson(body): BoundJson<EventDto>,
) -> EventResult<impl IntoResponse> {
    let event = service.update_event(id, body).await?;
    Ok(Hal(Resource::build(event, &EventLinks::Updated)))
}
