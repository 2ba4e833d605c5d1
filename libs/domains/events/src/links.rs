//! Hypermedia links for event resources.

use axum_helpers::{Link, LinkBuilder};

use crate::models::Event;

pub const INDEX_PATH: &str = "/api";
pub const EVENTS_PATH: &str = "/api/events";

/// Relation name of the embedded event collection.
pub const EVENT_LIST_REL: &str = "eventList";

pub const PROFILE_CREATE: &str = "/docs/index.html#resource-events-create";
pub const PROFILE_LIST: &str = "/docs/index.html#resource-events-list";
pub const PROFILE_GET: &str = "/docs/index.html#resource-events-get";
pub const PROFILE_UPDATE: &str = "/docs/index.html#resource-events-update";

pub fn event_href(id: i32) -> String {
    format!("{}/{}", EVENTS_PATH, id)
}

/// Link sets for an event, by the operation that produced the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLinks {
    /// Collection item: `self` only
    Item,
    Created,
    Fetched,
    Updated,
}

impl LinkBuilder<Event> for EventLinks {
    fn links(&self, event: &Event) -> Vec<Link> {
        let href = event_href(event.id);
        let mut links = vec![Link::self_link(href.clone())];

        match self {
            EventLinks::Item => {}
            EventLinks::Created => {
                links.push(Link::new("query-events", EVENTS_PATH));
                links.push(Link::new("update-events", href));
                links.push(Link::new("profile", PROFILE_CREATE));
            }
            EventLinks::Fetched => links.push(Link::new("profile", PROFILE_GET)),
            EventLinks::Updated => links.push(Link::new("profile", PROFILE_UPDATE)),
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;
    use chrono::NaiveDateTime;

    fn event(id: i32) -> Event {
        Event {
            id,
            name: "Spring".to_string(),
            description: "REST".to_string(),
            begin_enrollment_date_time: NaiveDateTime::default(),
            close_enrollment_date_time: NaiveDateTime::default(),
            begin_event_date_time: NaiveDateTime::default(),
            end_event_date_time: NaiveDateTime::default(),
            location: None,
            base_price: 0,
            max_price: 0,
            limit_of_enrollment: 0,
            offline: false,
            free: true,
            event_status: EventStatus::Draft,
        }
    }

    fn rels(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.rel.as_str()).collect()
    }

    #[test]
    fn test_created_links() {
        let links = EventLinks::Created.links(&event(7));
        assert_eq!(rels(&links), vec!["self", "query-events", "update-events", "profile"]);
        assert_eq!(links[0].href, "/api/events/7");
        assert_eq!(links[1].href, "/api/events");
        assert_eq!(links[2].href, "/api/events/7");
        assert_eq!(links[3].href, PROFILE_CREATE);
    }

    #[test]
    fn test_item_has_only_self() {
        let links = EventLinks::Item.links(&event(3));
        assert_eq!(links, vec![Link::self_link("/api/events/3")]);
    }

    #[test]
    fn test_fetched_and_updated_profiles() {
        let fetched = EventLinks::Fetched.links(&event(1));
        assert_eq!(fetched[1], Link::new("profile", PROFILE_GET));

        let updated = EventLinks::Updated.links(&event(1));
        assert_eq!(updated[1], Link::new("profile", PROFILE_UPDATE));
    }
}
