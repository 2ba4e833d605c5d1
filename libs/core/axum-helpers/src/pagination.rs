//! Page requests and pages.
//!
//! Query parameters:
//! - `page`: 0-based page number, defaults to 0; negative values become 0
//! - `size`: items per page, defaults to [`DEFAULT_PAGE_SIZE`]; values below 1
//!   fall back to the default, values above [`MAX_PAGE_SIZE`] are capped
//! - `sort`: `property[,ASC|DESC]`, direction defaults to ascending
//!
//! ```
//! use axum_helpers::pagination::{PageRequest, Sort, SortDirection};
//!
//! let request = PageRequest::new(2, 10).with_sort(Sort::new("name", SortDirection::Desc));
//! assert_eq!(request.offset(), 20);
//! assert_eq!(request.query_for_page(3), "page=3&size=10&sort=name,DESC");
//! ```

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// Sort order on a single property, by its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(property: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }
}

impl FromStr for Sort {
    type Err = String;

    /// Parse `name` or `name,DESC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let property = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| format!("Invalid sort: '{}'", s))?;

        let direction = match parts.next() {
            Some(d) if !d.is_empty() => d.parse()?,
            _ => SortDirection::Asc,
        };

        if parts.next().is_some() {
            return Err(format!("Invalid sort: '{}'", s));
        }

        Ok(Sort::new(property, direction))
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<i64>,
    size: Option<i64>,
    sort: Option<String>,
}

/// A request for one page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Option<Sort>,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        let size = if size == 0 { DEFAULT_PAGE_SIZE } else { size.min(MAX_PAGE_SIZE) };
        // Keeps `page * size` within u64.
        let page = page.min(u64::MAX / size);
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Query string addressing `page` with the same size and sort.
    pub fn query_for_page(&self, page: u64) -> String {
        match &self.sort {
            Some(sort) => format!("page={}&size={}&sort={}", page, self.size, sort),
            None => format!("page={}&size={}", page, self.size),
        }
    }

    fn from_params(params: PageParams) -> Result<Self, String> {
        let page = params.page.unwrap_or(0).max(0) as u64;
        let size = match params.size {
            Some(size) if size >= 1 => size as u64,
            _ => DEFAULT_PAGE_SIZE,
        };

        let sort = match params.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<Sort>()?),
        };

        let mut request = Self::new(page, size);
        request.sort = sort;
        Ok(request)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state).await?;
        PageRequest::from_params(params).map_err(AppError::InvalidQuery)
    }
}

/// One page of results plus what is needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<PageRequest, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        PageRequest::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_defaults() {
        let request = extract("/events").await.unwrap();
        assert_eq!(request, PageRequest::new(0, 20));
        assert!(request.sort.is_none());
    }

    #[tokio::test]
    async fn test_page_size_and_sort() {
        let request = extract("/events?page=1&size=10&sort=name,DESC").await.unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.size, 10);
        assert_eq!(request.sort, Some(Sort::new("name", SortDirection::Desc)));
    }

    #[tokio::test]
    async fn test_out_of_range_values_are_normalized() {
        let request = extract("/events?page=-3&size=0").await.unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);

        let request = extract("/events?size=50000").await.unwrap();
        assert_eq!(request.size, MAX_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_huge_page_keeps_offset_in_range() {
        let request = extract("/events?page=9223372036854775807").await.unwrap();
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
        assert!(request.page.checked_mul(request.size).is_some());
        assert_eq!(request.offset(), request.page * request.size);
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_rejected() {
        let err = extract("/events?page=abc").await.unwrap_err();
        assert!(matches!(err, AppError::QueryExtractorRejection(_)));
    }

    #[tokio::test]
    async fn test_bad_direction_is_rejected() {
        let err = extract("/events?sort=name,sideways").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("id".parse::<Sort>().unwrap(), Sort::new("id", SortDirection::Asc));
        assert_eq!(
            "name,desc".parse::<Sort>().unwrap(),
            Sort::new("name", SortDirection::Desc)
        );
        assert!(",ASC".parse::<Sort>().is_err());
        assert!("a,ASC,b".parse::<Sort>().is_err());
    }

    #[test]
    fn test_total_pages() {
        let request = PageRequest::new(0, 10);
        assert_eq!(Page::<u8>::new(vec![], &request, 0).total_pages(), 0);
        assert_eq!(Page::<u8>::new(vec![], &request, 30).total_pages(), 3);
        assert_eq!(Page::<u8>::new(vec![], &request, 31).total_pages(), 4);
    }
}
