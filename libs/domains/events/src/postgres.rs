use async_trait::async_trait;
use axum_helpers::{Page, PageRequest, SortDirection};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::{EventError, EventResult},
    models::{Event, EventOrder, EventSortField},
    repository::EventRepository,
};

pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn sort_column(field: EventSortField) -> entity::Column {
    match field {
        EventSortField::Id => entity::Column::Id,
        EventSortField::Name => entity::Column::Name,
        EventSortField::Description => entity::Column::Description,
        EventSortField::BeginEnrollmentDateTime => entity::Column::BeginEnrollmentDateTime,
        EventSortField::CloseEnrollmentDateTime => entity::Column::CloseEnrollmentDateTime,
        EventSortField::BeginEventDateTime => entity::Column::BeginEventDateTime,
        EventSortField::EndEventDateTime => entity::Column::EndEventDateTime,
        EventSortField::Location => entity::Column::Location,
        EventSortField::BasePrice => entity::Column::BasePrice,
        EventSortField::MaxPrice => entity::Column::MaxPrice,
        EventSortField::LimitOfEnrollment => entity::Column::LimitOfEnrollment,
        EventSortField::Offline => entity::Column::Offline,
        EventSortField::Free => entity::Column::Free,
        EventSortField::EventStatus => entity::Column::EventStatus,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: Event) -> EventResult<Event> {
        let mut active_model: entity::ActiveModel = event.into();
        active_model.id = NotSet;

        let model = active_model.insert(&self.db).await?;

        tracing::info!(event_id = model.id, "Created event");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, request: &PageRequest, order: EventOrder) -> EventResult<Page<Event>> {
        let query = entity::Entity::find()
            .order_by(sort_column(order.field), sort_order(order.direction))
            .order_by_asc(entity::Column::Id);

        let total = query.clone().count(&self.db).await?;
        let offset = request.offset();
        if offset >= total {
            return Ok(Page::new(Vec::new(), request, total));
        }

        let models = query
            .offset(offset)
            .limit(request.size)
            .all(&self.db)
            .await?;

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            request,
            total,
        ))
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let id = event.id;
        let active_model: entity::ActiveModel = event.into();

        let model = match active_model.update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(EventError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(event_id = id, "Updated event");
        Ok(model.into())
    }
}
