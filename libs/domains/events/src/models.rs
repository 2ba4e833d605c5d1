use axum_helpers::{BindTarget, Errors, Sort, SortDirection};
use chrono::NaiveDateTime;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{EventError, EventResult};

/// Wire format of event timestamps (local time, no zone).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Publication state of an event
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Created but not visible yet
    #[default]
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
    #[sea_orm(string_value = "BEGAN_ENROLLMENT")]
    BeganEnrollment,
}

/// Event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned on creation, `0` before the event is stored
    pub id: i32,
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub end_event_date_time: NaiveDateTime,
    /// No location means the event is held online
    pub location: Option<String>,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    /// Derived: location is present and not blank
    pub offline: bool,
    /// Derived: both prices are zero
    pub free: bool,
    pub event_status: EventStatus,
}

impl Event {
    /// Build a new draft event from bound input.
    pub fn new(input: EventInput) -> Self {
        let mut event = Self {
            id: 0,
            name: input.name,
            description: input.description,
            begin_enrollment_date_time: input.begin_enrollment_date_time,
            close_enrollment_date_time: input.close_enrollment_date_time,
            begin_event_date_time: input.begin_event_date_time,
            end_event_date_time: input.end_event_date_time,
            location: input.location,
            base_price: input.base_price,
            max_price: input.max_price,
            limit_of_enrollment: input.limit_of_enrollment,
            offline: false,
            free: false,
            event_status: EventStatus::Draft,
        };
        event.update();
        event
    }

    /// Overwrite every client-writable field. Id and status are kept.
    pub fn apply(&mut self, input: EventInput) {
        self.name = input.name;
        self.description = input.description;
        self.begin_enrollment_date_time = input.begin_enrollment_date_time;
        self.close_enrollment_date_time = input.close_enrollment_date_time;
        self.begin_event_date_time = input.begin_event_date_time;
        self.end_event_date_time = input.end_event_date_time;
        self.location = input.location;
        self.base_price = input.base_price;
        self.max_price = input.max_price;
        self.limit_of_enrollment = input.limit_of_enrollment;
        self.update();
    }

    /// Recompute the derived `free` and `offline` flags.
    pub fn update(&mut self) {
        self.free = self.base_price == 0 && self.max_price == 0;
        self.offline = self
            .location
            .as_deref()
            .is_some_and(|location| !location.trim().is_empty());
    }
}

/// Request body for creating or updating an event.
///
/// Everything is optional at the decoding stage so that missing fields are
/// reported as field errors rather than as a decoding failure. Unknown
/// fields (`id`, `free`, `offline`, `eventStatus`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[validate(
        length(min = 1, message = "must not be empty"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, message = "must not be empty"),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_date_time")]
    #[schema(value_type = Option<String>, example = "2030-11-23T14:21:00")]
    pub begin_enrollment_date_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient_date_time")]
    #[schema(value_type = Option<String>, example = "2030-11-24T14:21:00")]
    pub close_enrollment_date_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient_date_time")]
    #[schema(value_type = Option<String>, example = "2030-11-25T14:21:00")]
    pub begin_event_date_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient_date_time")]
    #[schema(value_type = Option<String>, example = "2030-11-26T14:21:00")]
    pub end_event_date_time: Option<NaiveDateTime>,

    pub location: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub base_price: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub max_price: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub limit_of_enrollment: i32,
}

impl BindTarget for EventDto {
    const OBJECT_NAME: &'static str = "eventDto";
}

impl EventDto {
    /// Structural validation: field constraints plus required fields.
    pub fn bind(self) -> Result<EventInput, Errors> {
        let mut errors = Errors::new(Self::OBJECT_NAME);

        if let Err(validation) = self.validate() {
            errors.extend_from_validation(&validation);
        }

        let required = [
            ("name", self.name.is_none()),
            ("description", self.description.is_none()),
            ("beginEnrollmentDateTime", self.begin_enrollment_date_time.is_none()),
            ("closeEnrollmentDateTime", self.close_enrollment_date_time.is_none()),
            ("beginEventDateTime", self.begin_event_date_time.is_none()),
            ("endEventDateTime", self.end_event_date_time.is_none()),
        ];
        for (field, missing) in required {
            if missing {
                errors.reject_value(field, "required", "must not be null", None);
            }
        }

        match (
            self.name,
            self.description,
            self.begin_enrollment_date_time,
            self.close_enrollment_date_time,
            self.begin_event_date_time,
            self.end_event_date_time,
        ) {
            (
                Some(name),
                Some(description),
                Some(begin_enrollment_date_time),
                Some(close_enrollment_date_time),
                Some(begin_event_date_time),
                Some(end_event_date_time),
            ) if !errors.has_errors() => Ok(EventInput {
                name,
                description,
                begin_enrollment_date_time,
                close_enrollment_date_time,
                begin_event_date_time,
                end_event_date_time,
                location: self.location,
                base_price: self.base_price,
                max_price: self.max_price,
                limit_of_enrollment: self.limit_of_enrollment,
            }),
            _ => Err(errors),
        }
    }
}

/// Whitespace-only text is rejected like empty text; `""` is left to `length`.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.trim().is_empty() {
        return Ok(());
    }

    let mut error = ValidationError::new("length");
    error.message = Some("must not be blank".into());
    error.add_param("value".into(), &value);
    Err(error)
}

/// Bound event fields, structurally valid.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub end_event_date_time: NaiveDateTime,
    pub location: Option<String>,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
}

/// Accepts `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DDTHH:MM`.
fn lenient_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| parse_date_time(&value).map_err(serde::de::Error::custom))
        .transpose()
}

fn parse_date_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("invalid date-time '{}', expected YYYY-MM-DDTHH:MM:SS", value))
}

/// Properties an event collection can be sorted by, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum EventSortField {
    #[default]
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

impl EventSortField {
    /// Ascending comparison of two events on this property.
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        match self {
            EventSortField::Id => a.id.cmp(&b.id),
            EventSortField::Name => a.name.cmp(&b.name),
            EventSortField::Description => a.description.cmp(&b.description),
            EventSortField::BeginEnrollmentDateTime => a
                .begin_enrollment_date_time
                .cmp(&b.begin_enrollment_date_time),
            EventSortField::CloseEnrollmentDateTime => a
                .close_enrollment_date_time
                .cmp(&b.close_enrollment_date_time),
            EventSortField::BeginEventDateTime => {
                a.begin_event_date_time.cmp(&b.begin_event_date_time)
            }
            EventSortField::EndEventDateTime => a.end_event_date_time.cmp(&b.end_event_date_time),
            EventSortField::Location => a.location.cmp(&b.location),
            EventSortField::BasePrice => a.base_price.cmp(&b.base_price),
            EventSortField::MaxPrice => a.max_price.cmp(&b.max_price),
            EventSortField::LimitOfEnrollment => a.limit_of_enrollment.cmp(&b.limit_of_enrollment),
            EventSortField::Offline => a.offline.cmp(&b.offline),
            EventSortField::Free => a.free.cmp(&b.free),
            EventSortField::EventStatus => a.event_status.cmp(&b.event_status),
        }
    }
}

/// Resolved sort order for listing events. Ties are broken by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOrder {
    pub field: EventSortField,
    pub direction: SortDirection,
}

impl EventOrder {
    pub fn new(field: EventSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolve a requested sort; no sort means ascending id.
    pub fn from_sort(sort: Option<&Sort>) -> EventResult<Self> {
        match sort {
            None => Ok(Self::default()),
            Some(sort) => {
                let field = sort
                    .property
                    .parse::<EventSortField>()
                    .map_err(|_| EventError::InvalidSort(sort.property.clone()))?;
                Ok(Self::new(field, sort.direction))
            }
        }
    }

    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let ordering = match self.direction {
            SortDirection::Asc => self.field.compare(a, b),
            SortDirection::Desc => self.field.compare(a, b).reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 11, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn input() -> EventInput {
        EventInput {
            name: "Spring".to_string(),
            description: "REST API Development with Spring".to_string(),
            begin_enrollment_date_time: at(23, 14),
            close_enrollment_date_time: at(24, 14),
            begin_event_date_time: at(25, 14),
            end_event_date_time: at(26, 14),
            location: Some("Gangnam station D2 startup factory".to_string()),
            base_price: 100,
            max_price: 200,
            limit_of_enrollment: 100,
        }
    }

    #[test]
    fn test_free_requires_both_prices_zero() {
        let cases = [(0, 0, true), (100, 0, false), (0, 100, false), (100, 200, false)];

        for (base_price, max_price, expected) in cases {
            let event = Event::new(EventInput {
                base_price,
                max_price,
                ..input()
            });
            assert_eq!(event.free, expected, "base={} max={}", base_price, max_price);
        }
    }

    #[test]
    fn test_offline_requires_non_blank_location() {
        let cases = [
            (Some("Gangnam"), true),
            (None, false),
            (Some(""), false),
            (Some("   "), false),
        ];

        for (location, expected) in cases {
            let event = Event::new(EventInput {
                location: location.map(str::to_string),
                ..input()
            });
            assert_eq!(event.offline, expected, "location={:?}", location);
        }
    }

    #[test]
    fn test_new_event_is_unsaved_draft() {
        let event = Event::new(input());
        assert_eq!(event.id, 0);
        assert_eq!(event.event_status, EventStatus::Draft);
    }

    #[test]
    fn test_apply_recomputes_flags_and_keeps_identity() {
        let mut event = Event::new(input());
        event.id = 7;
        event.event_status = EventStatus::Published;

        event.apply(EventInput {
            location: None,
            base_price: 0,
            max_price: 0,
            ..input()
        });

        assert_eq!(event.id, 7);
        assert_eq!(event.event_status, EventStatus::Published);
        assert!(event.free);
        assert!(!event.offline);
    }

    #[test]
    fn test_event_serializes_with_wire_names() {
        let value = serde_json::to_value(Event::new(input())).unwrap();
        assert_eq!(value["beginEnrollmentDateTime"], "2030-11-23T14:00:00");
        assert_eq!(value["limitOfEnrollment"], 100);
        assert_eq!(value["eventStatus"], "DRAFT");
    }

    #[test]
    fn test_dto_ignores_read_only_fields() {
        let dto: EventDto = serde_json::from_value(json!({
            "id": 100,
            "name": "Spring",
            "description": "REST",
            "beginEnrollmentDateTime": "2030-11-23T14:21:00",
            "closeEnrollmentDateTime": "2030-11-24T14:21",
            "beginEventDateTime": "2030-11-25T14:21:00",
            "endEventDateTime": "2030-11-26T14:21:00.000",
            "free": true,
            "offline": false,
            "eventStatus": "PUBLISHED"
        }))
        .unwrap();

        let input = dto.bind().unwrap();
        assert_eq!(input.name, "Spring");
        assert_eq!(input.base_price, 0);
        assert_eq!(input.location, None);
    }

    #[test]
    fn test_dto_rejects_malformed_timestamp() {
        let result = serde_json::from_value::<EventDto>(json!({
            "beginEnrollmentDateTime": "next tuesday"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_bind_reports_missing_fields() {
        let errors = EventDto::default().bind().unwrap_err();

        assert_eq!(errors.object_name(), "eventDto");
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.field_error("name").unwrap().code, "required");
        assert_eq!(errors.field_error("endEventDateTime").unwrap().code, "required");
    }

    #[test]
    fn test_bind_reports_empty_and_negative_fields() {
        let dto = EventDto {
            name: Some(String::new()),
            description: Some("REST".to_string()),
            begin_enrollment_date_time: Some(at(23, 14)),
            close_enrollment_date_time: Some(at(24, 14)),
            begin_event_date_time: Some(at(25, 14)),
            end_event_date_time: Some(at(26, 14)),
            location: None,
            base_price: -1,
            max_price: 0,
            limit_of_enrollment: 0,
        };

        let errors = dto.bind().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.field_error("name").unwrap().code, "length");

        let price = errors.field_error("basePrice").unwrap();
        assert_eq!(price.code, "range");
        assert_eq!(price.rejected_value, Some(json!(-1)));
    }

    #[test]
    fn test_bind_rejects_whitespace_only_text() {
        let dto = EventDto {
            name: Some("   ".to_string()),
            description: Some("\t".to_string()),
            begin_enrollment_date_time: Some(at(23, 14)),
            close_enrollment_date_time: Some(at(24, 14)),
            begin_event_date_time: Some(at(25, 14)),
            end_event_date_time: Some(at(26, 14)),
            ..EventDto::default()
        };

        let errors = dto.bind().unwrap_err();
        assert_eq!(errors.len(), 2);

        let name = errors.field_error("name").unwrap();
        assert_eq!(name.code, "length");
        assert_eq!(name.rejected_value, Some(json!("   ")));
        assert_eq!(errors.field_error("description").unwrap().code, "length");
    }

    #[test]
    fn test_sort_field_uses_wire_names() {
        assert_eq!(
            "endEventDateTime".parse::<EventSortField>().unwrap(),
            EventSortField::EndEventDateTime
        );
        assert_eq!("name".parse::<EventSortField>().unwrap(), EventSortField::Name);
        assert!("color".parse::<EventSortField>().is_err());
    }

    #[test]
    fn test_order_from_sort() {
        assert_eq!(EventOrder::from_sort(None).unwrap(), EventOrder::default());

        let sort = Sort::new("basePrice", SortDirection::Desc);
        assert_eq!(
            EventOrder::from_sort(Some(&sort)).unwrap(),
            EventOrder::new(EventSortField::BasePrice, SortDirection::Desc)
        );

        let sort = Sort::new("color", SortDirection::Asc);
        assert!(matches!(
            EventOrder::from_sort(Some(&sort)),
            Err(EventError::InvalidSort(property)) if property == "color"
        ));
    }

    #[test]
    fn test_descending_order_breaks_ties_by_ascending_id() {
        let mut a = Event::new(input());
        a.id = 1;
        let mut b = Event::new(input());
        b.id = 2;

        let order = EventOrder::new(EventSortField::Name, SortDirection::Desc);
        assert_eq!(order.compare(&a, &b), Ordering::Less);
    }
}
