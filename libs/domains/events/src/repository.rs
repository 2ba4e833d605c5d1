use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventOrder};

/// Repository trait for Event persistence
///
/// Implementations assign ids on `create` and never change them afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event and return it with its assigned id
    async fn create(&self, event: Event) -> EventResult<Event>;

    /// Get an event by ID
    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>>;

    /// One page of events in the given order
    async fn list(&self, request: &PageRequest, order: EventOrder) -> EventResult<Page<Event>>;

    /// Replace a stored event; `NotFound` if its id is unknown
    async fn update(&self, event: Event) -> EventResult<Event>;
}

#[derive(Default)]
struct Store {
    events: HashMap<i32, Event>,
    next_id: i32,
}

/// In-memory implementation of EventRepository (for testing/development)
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, mut event: Event) -> EventResult<Event> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        event.id = store.next_id;
        store.events.insert(event.id, event.clone());

        tracing::info!(event_id = event.id, "Created event");
        Ok(event)
    }

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>> {
        let store = self.store.read().await;
        Ok(store.events.get(&id).cloned())
    }

    async fn list(&self, request: &PageRequest, order: EventOrder) -> EventResult<Page<Event>> {
        let store = self.store.read().await;

        let mut events: Vec<&Event> = store.events.values().collect();
        events.sort_by(|a, b| order.compare(a, b));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = events
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, request, store.events.len() as u64))
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let mut store = self.store.write().await;

        let slot = store
            .events
            .get_mut(&event.id)
            .ok_or(EventError::NotFound(event.id))?;
        *slot = event.clone();

        tracing::info!(event_id = event.id, "Updated event");
        Ok(event)
    }
}
