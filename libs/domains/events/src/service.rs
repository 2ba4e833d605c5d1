use axum_helpers::{BindTarget, Errors, Page, PageRequest};
use std::sync::Arc;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventDto, EventInput, EventOrder};
use crate::repository::EventRepository;
use crate::validation::EventValidator;

/// Service layer for Event business logic
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
    validator: EventValidator,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            validator: EventValidator::new(),
        }
    }

    /// Bind, validate and store a new draft event.
    ///
    /// `body` is the decoded request body, or the errors from decoding it.
    pub async fn create_event(&self, body: Result<EventDto, Errors>) -> EventResult<Event> {
        let input = self.check(body)?;
        self.repository.create(Event::new(input)).await
    }

    /// Get an event by ID
    pub async fn get_event(&self, id: i32) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// One page of events; an unknown sort property is an error.
    pub async fn list_events(&self, request: &PageRequest) -> EventResult<Page<Event>> {
        let order = EventOrder::from_sort(request.sort.as_ref())?;
        self.repository.list(request, order).await
    }

    /// Overwrite an existing event.
    ///
    /// A missing event is reported before anything is said about the payload.
    pub async fn update_event(
        &self,
        id: i32,
        body: Result<EventDto, Errors>,
    ) -> EventResult<Event> {
        let mut event = self.get_event(id).await?;
        let input = self.check(body)?;

        event.apply(input);
        self.repository.update(event).await
    }

    /// Structural pass, then business rules.
    fn check(&self, body: Result<EventDto, Errors>) -> EventResult<EventInput> {
        let input = body
            .and_then(EventDto::bind)
            .map_err(EventError::Binding)?;

        let mut errors = Errors::new(EventDto::OBJECT_NAME);
        self.validator.validate(&input, &mut errors);
        errors.into_result(input).map_err(EventError::Validation)
    }
}
