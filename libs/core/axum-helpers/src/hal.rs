//! HAL (Hypertext Application Language) representations.
//!
//! Resources are plain serializable values wrapped with a `_links` map.
//! Links are built explicitly by a [`LinkBuilder`] per resource kind; there
//! is no reflection over routes.

use crate::pagination::{Page, PageRequest};
use axum::{
    Json,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeMap};

pub const HAL_JSON: &str = "application/hal+json";

/// A single relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new("self", href)
    }
}

/// Ordered set of links, serialized as `{"rel": {"href": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn push(&mut self, link: Link) {
        self.0.push(link);
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|l| l.rel == rel)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }
}

impl From<Vec<Link>> for Links {
    fn from(links: Vec<Link>) -> Self {
        Self(links)
    }
}

#[derive(Serialize)]
struct Href<'a> {
    href: &'a str,
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(&link.rel, &Href { href: &link.href })?;
        }
        map.end()
    }
}

/// Builds the links for one kind of resource.
pub trait LinkBuilder<T> {
    fn links(&self, resource: &T) -> Vec<Link>;
}

/// A resource with its content inlined next to `_links`.
#[derive(Debug, Clone, Serialize)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> Resource<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            links: Links::default(),
        }
    }

    /// Wrap `content` with the links `builder` produces for it.
    pub fn build<B: LinkBuilder<T>>(content: T, builder: &B) -> Self {
        let links = builder.links(&content).into();
        Self { content, links }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }
}

/// `size`, `totalElements`, `totalPages`, `number` block of a paged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

/// One page of resources under `_embedded.<rel>`, with navigation links.
#[derive(Debug, Clone)]
pub struct PagedResources<T> {
    pub embedded_rel: &'static str,
    pub content: Vec<Resource<T>>,
    pub links: Links,
    pub page: PageMetadata,
}

impl<T> PagedResources<T> {
    /// Assemble a page: every item gets the links from `item_links`, the
    /// collection gets `first`/`prev`/`self`/`next`/`last` pointing at `base_href`.
    pub fn assemble<B: LinkBuilder<T>>(
        page: Page<T>,
        request: &PageRequest,
        base_href: &str,
        embedded_rel: &'static str,
        item_links: &B,
    ) -> Self {
        let metadata = PageMetadata {
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.number,
        };

        let href = |number: u64| format!("{}?{}", base_href, request.query_for_page(number));
        let last = metadata.total_pages.saturating_sub(1);

        let mut links = Links::default();
        links.push(Link::new("first", href(0)));
        if metadata.number > 0 {
            links.push(Link::new("prev", href(metadata.number - 1)));
        }
        links.push(Link::self_link(href(metadata.number)));
        if metadata.number < last {
            links.push(Link::new("next", href(metadata.number + 1)));
        }
        links.push(Link::new("last", href(last)));

        let content = page
            .content
            .into_iter()
            .map(|item| Resource::build(item, item_links))
            .collect();

        Self {
            embedded_rel,
            content,
            links,
            page: metadata,
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

struct Embedded<'a, T> {
    rel: &'static str,
    content: &'a [Resource<T>],
}

impl<T: Serialize> Serialize for Embedded<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.rel, self.content)?;
        map.end()
    }
}

impl<T: Serialize> Serialize for PagedResources<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.content.is_empty() {
            map.serialize_entry(
                "_embedded",
                &Embedded {
                    rel: self.embedded_rel,
                    content: &self.content,
                },
            )?;
        }
        map.serialize_entry("_links", &self.links)?;
        map.serialize_entry("page", &self.page)?;
        map.end()
    }
}

/// JSON response with the `application/hal+json` content type.
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();
        // A serialization failure comes back as a plain-text 500.
        if response.status().is_success() {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{Sort, SortDirection};
    use serde_json::json;

    #[derive(Debug, Clone, Serialize)]
    struct Item {
        id: u32,
    }

    struct ItemLinks;

    impl LinkBuilder<Item> for ItemLinks {
        fn links(&self, item: &Item) -> Vec<Link> {
            vec![Link::self_link(format!("/items/{}", item.id))]
        }
    }

    fn page_of(number: u64, size: u64, total: u64) -> Page<Item> {
        let start = number * size;
        let end = (start + size).min(total);
        Page {
            content: (start..end).map(|id| Item { id: id as u32 }).collect(),
            number,
            size,
            total_elements: total,
        }
    }

    #[test]
    fn test_resource_flattens_content_with_links() {
        let resource = Resource::build(Item { id: 3 }, &ItemLinks)
            .with_link(Link::new("profile", "/docs#items"));

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "_links": {
                    "self": {"href": "/items/3"},
                    "profile": {"href": "/docs#items"}
                }
            })
        );
    }

    #[test]
    fn test_middle_page_has_all_navigation_links() {
        let request = PageRequest::new(1, 10);
        let paged = PagedResources::assemble(page_of(1, 10, 30), &request, "/items", "itemList", &ItemLinks);

        let value = serde_json::to_value(&paged).unwrap();
        assert_eq!(value["_embedded"]["itemList"].as_array().unwrap().len(), 10);
        assert_eq!(value["_embedded"]["itemList"][0]["_links"]["self"]["href"], "/items/10");
        assert_eq!(value["_links"]["first"]["href"], "/items?page=0&size=10");
        assert_eq!(value["_links"]["prev"]["href"], "/items?page=0&size=10");
        assert_eq!(value["_links"]["self"]["href"], "/items?page=1&size=10");
        assert_eq!(value["_links"]["next"]["href"], "/items?page=2&size=10");
        assert_eq!(value["_links"]["last"]["href"], "/items?page=2&size=10");
        assert_eq!(
            value["page"],
            json!({"size": 10, "totalElements": 30, "totalPages": 3, "number": 1})
        );
    }

    #[test]
    fn test_sort_is_carried_into_links() {
        let request = PageRequest::new(0, 5).with_sort(Sort::new("name", SortDirection::Desc));
        let paged = PagedResources::assemble(page_of(0, 5, 6), &request, "/items", "itemList", &ItemLinks);

        assert_eq!(
            paged.links.get("next").unwrap().href,
            "/items?page=1&size=5&sort=name,DESC"
        );
        assert!(paged.links.get("prev").is_none());
    }

    #[test]
    fn test_empty_page_omits_embedded() {
        let request = PageRequest::default();
        let paged = PagedResources::assemble(page_of(0, 20, 0), &request, "/items", "itemList", &ItemLinks);

        let value = serde_json::to_value(&paged).unwrap();
        assert!(value.get("_embedded").is_none());
        assert_eq!(value["page"]["totalPages"], 0);
        assert_eq!(value["_links"]["last"]["href"], "/items?page=0&size=20");
        assert!(value["_links"].get("next").is_none());
    }

    #[test]
    fn test_hal_sets_content_type() {
        let response = Hal(json!({"ok": true})).into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            HAL_JSON
        );
    }
}
