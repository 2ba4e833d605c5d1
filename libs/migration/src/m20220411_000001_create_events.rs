use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(EventStatus::Enum)
                    .values([
                        EventStatus::Draft,
                        EventStatus::Published,
                        EventStatus::BeganEnrollment,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::Name))
                    .col(text(Events::Description))
                    .col(timestamp(Events::BeginEnrollmentDateTime))
                    .col(timestamp(Events::CloseEnrollmentDateTime))
                    .col(timestamp(Events::BeginEventDateTime))
                    .col(timestamp(Events::EndEventDateTime))
                    .col(string_null(Events::Location))
                    .col(integer(Events::BasePrice).default(0))
                    .col(integer(Events::MaxPrice).default(0))
                    .col(integer(Events::LimitOfEnrollment).default(0))
                    .col(boolean(Events::Offline).default(false))
                    .col(boolean(Events::Free).default(true))
                    .col(
                        ColumnDef::new(Events::EventStatus)
                            .enumeration(
                                EventStatus::Enum,
                                [
                                    EventStatus::Draft,
                                    EventStatus::Published,
                                    EventStatus::BeganEnrollment,
                                ],
                            )
                            .not_null()
                            .default("DRAFT"),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing sorts by name as often as by id.
        manager
            .create_index(
                Index::create()
                    .name("idx_events_name")
                    .table(Events::Table)
                    .col(Events::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_begin_event_date_time")
                    .table(Events::Table)
                    .col(Events::BeginEventDateTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(EventStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    Description,
    BeginEnrollmentDateTime,
    CloseEnrollmentDateTime,
    BeginEventDateTime,
    EndEventDateTime,
    Location,
    BasePrice,
    MaxPrice,
    LimitOfEnrollment,
    Offline,
    Free,
    EventStatus,
}

#[derive(DeriveIden)]
enum EventStatus {
    #[sea_orm(iden = "event_status")]
    Enum,
    #[sea_orm(iden = "DRAFT")]
    Draft,
    #[sea_orm(iden = "PUBLISHED")]
    Published,
    #[sea_orm(iden = "BEGAN_ENROLLMENT")]
    BeganEnrollment,
}
