//! Events Domain
//!
//! Conference/meetup style events exposed as HAL resources.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, HAL decoration (links)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Binding, business validation, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (in-memory or PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Event entity, EventDto, derived flags
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, InMemoryEventRepository, EventService};
//!
//! let repository = InMemoryEventRepository::new();
//! let service = EventService::new(repository);
//!
//! // Mounted under `/api/events` by the application
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod links;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{EventError, EventResult};
pub use links::{EventLinks, EVENTS_PATH, EVENT_LIST_REL, INDEX_PATH};
pub use models::{Event, EventDto, EventInput, EventOrder, EventSortField, EventStatus};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
pub use validation::EventValidator;
