//! JSON extractor that never rejects.
//!
//! Handlers sometimes need to check other preconditions (the target resource
//! exists) before reporting a malformed body, so a decoding failure is handed
//! to the handler as an [`Errors`] value instead of short-circuiting.

use crate::errors::Errors;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// Code of the global error recorded when the body cannot be decoded.
pub const INVALID_PAYLOAD: &str = "invalidPayload";

/// Types that can be bound from a request body.
pub trait BindTarget: DeserializeOwned {
    /// Object name reported in binding errors (e.g. `eventDto`).
    const OBJECT_NAME: &'static str;
}

/// The decoded body, or the binding errors describing why it could not be decoded.
///
/// # Example
/// ```ignore
/// async fn create(BoundJson(body): BoundJson<EventDto>) -> Response {
///     match body {
///         Ok(dto) => /* ... */,
///         Err(errors) => ErrorsResource::new(errors, "/api").into_response(),
///     }
/// }
/// ```
pub struct BoundJson<T>(pub Result<T, Errors>);

impl<T, S> FromRequest<S> for BoundJson<T>
where
    T: BindTarget,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(BoundJson(Ok(value))),
            Err(rejection) => {
                tracing::debug!(object = T::OBJECT_NAME, "Payload rejected: {}", rejection);
                let mut errors = Errors::new(T::OBJECT_NAME);
                errors.reject(INVALID_PAYLOAD, rejection.body_text());
                Ok(BoundJson(Err(errors)))
            }
        }
    }
}
