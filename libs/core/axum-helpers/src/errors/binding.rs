//! Request-body binding and validation errors.
//!
//! An [`Errors`] value collects everything wrong with one submitted object,
//! either as [`FieldError`]s tied to a property or as [`GlobalError`]s about
//! the object as a whole. It renders as
//!
//! ```json
//! {
//!   "errors": [
//!     {"objectName": "eventDto", "field": "name", "defaultMessage": "...", "code": "required"},
//!     {"objectName": "eventDto", "code": "wrongPrices", "defaultMessage": "..."}
//!   ],
//!   "_links": {"index": {"href": "/api"}}
//! }
//! ```
//!
//! Field errors always come first, ordered by field name; global errors follow
//! in the order they were rejected.

use crate::hal::{Hal, Link, Links};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeSeq};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

/// Error about a single property of the submitted object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub object_name: String,
    pub field: String,
    #[serde(rename = "defaultMessage")]
    pub message: String,
    pub code: String,
    #[serde(rename = "rejectValue", skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<Value>,
}

/// Error about the submitted object as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalError {
    pub object_name: String,
    pub code: String,
    #[serde(rename = "defaultMessage")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectError {
    Field(FieldError),
    Global(GlobalError),
}

/// Error sink for one bound object.
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    object_name: String,
    errors: Vec<ObjectError>,
}

impl Errors {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            errors: Vec::new(),
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Record a global error.
    pub fn reject(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ObjectError::Global(GlobalError {
            object_name: self.object_name.clone(),
            code: code.into(),
            message: message.into(),
        }));
    }

    /// Record an error on `field`, optionally carrying the value that was rejected.
    pub fn reject_value(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        rejected_value: Option<Value>,
    ) {
        self.errors.push(ObjectError::Field(FieldError {
            object_name: self.object_name.clone(),
            field: field.into(),
            message: message.into(),
            code: code.into(),
            rejected_value,
        }));
    }

    /// Copy every field error out of a `validator` result.
    ///
    /// Field names are converted to camelCase to match the wire format.
    pub fn extend_from_validation(&mut self, validation: &ValidationErrors) {
        for (field, errors) in validation.field_errors() {
            let field = to_camel_case(&field.to_string());
            for error in errors.iter() {
                self.reject_value(
                    field.clone(),
                    error.code.to_string(),
                    validation_message(&field, error),
                    error.params.get("value").cloned(),
                );
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter_map(|e| match e {
            ObjectError::Field(f) => Some(f),
            ObjectError::Global(_) => None,
        })
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &GlobalError> {
        self.errors.iter().filter_map(|e| match e {
            ObjectError::Global(g) => Some(g),
            ObjectError::Field(_) => None,
        })
    }

    /// First error recorded against `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors().find(|e| e.field == field)
    }

    /// Errors in response order: field errors by field name, then globals.
    pub fn ordered(&self) -> Vec<ObjectError> {
        let mut fields: Vec<&FieldError> = self.field_errors().collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        fields
            .into_iter()
            .cloned()
            .map(ObjectError::Field)
            .chain(self.global_errors().cloned().map(ObjectError::Global))
            .collect()
    }

    /// Turn the sink into a `Result`: `Ok(value)` when nothing was rejected.
    pub fn into_result<T>(self, value: T) -> Result<T, Errors> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s) on '{}'",
            self.errors.len(),
            self.object_name
        )?;
        for error in self.ordered() {
            match error {
                ObjectError::Field(e) => write!(f, "; {}: {}", e.field, e.code)?,
                ObjectError::Global(e) => write!(f, "; {}", e.code)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ordered = self.ordered();
        let mut seq = serializer.serialize_seq(Some(ordered.len()))?;
        for error in &ordered {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

fn validation_message(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => match error.code.as_ref() {
            "length" => format!("{field} must not be empty"),
            "range" => format!("{field} must not be negative"),
            code => format!("{field} is invalid ({code})"),
        },
    }
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Validation errors decorated with a link back to the API index.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResource {
    #[schema(value_type = Vec<Object>)]
    errors: Errors,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    links: Links,
}

impl ErrorsResource {
    pub fn new(errors: Errors, index_href: impl Into<String>) -> Self {
        Self {
            errors,
            links: Links::from(vec![Link::new("index", index_href)]),
        }
    }
}

impl IntoResponse for ErrorsResource {
    fn into_response(self) -> Response {
        tracing::info!(object = self.errors.object_name(), "Rejected request: {}", self.errors);
        (StatusCode::BAD_REQUEST, Hal(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        display_name: String,
        #[validate(range(min = 0))]
        base_price: i32,
    }

    #[test]
    fn test_field_errors_serialize_before_global_errors() {
        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "Values of prices are wrong");
        errors.reject_value("name", "required", "name is required", None);

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!([
                {"objectName": "eventDto", "field": "name", "defaultMessage": "name is required", "code": "required"},
                {"objectName": "eventDto", "code": "wrongPrices", "defaultMessage": "Values of prices are wrong"}
            ])
        );
    }

    #[test]
    fn test_field_errors_are_ordered_by_field() {
        let mut errors = Errors::new("eventDto");
        errors.reject_value("name", "required", "name is required", None);
        errors.reject_value("description", "required", "description is required", None);

        let fields: Vec<String> = errors
            .ordered()
            .into_iter()
            .filter_map(|e| match e {
                ObjectError::Field(f) => Some(f.field),
                ObjectError::Global(_) => None,
            })
            .collect();
        assert_eq!(fields, vec!["description", "name"]);
    }

    #[test]
    fn test_rejected_value_is_serialized_when_present() {
        let mut errors = Errors::new("eventDto");
        errors.reject_value(
            "endEventDateTime",
            "wrongValue",
            "endEventDateTime is wrong",
            Some(json!("2024-01-01T10:00:00")),
        );

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value[0]["rejectValue"], "2024-01-01T10:00:00");
    }

    #[test]
    fn test_extend_from_validation_uses_camel_case_fields() {
        let payload = Payload {
            display_name: String::new(),
            base_price: -5,
        };
        let validation = payload.validate().unwrap_err();

        let mut errors = Errors::new("payload");
        errors.extend_from_validation(&validation);

        let name = errors.field_error("displayName").unwrap();
        assert_eq!(name.code, "length");

        let price = errors.field_error("basePrice").unwrap();
        assert_eq!(price.code, "range");
        assert_eq!(price.rejected_value, Some(json!(-5)));
    }

    #[test]
    fn test_into_result() {
        let errors = Errors::new("eventDto");
        assert_eq!(errors.into_result(5), Ok(5));

        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "Values of prices are wrong");
        assert!(errors.into_result(5).is_err());
    }

    #[test]
    fn test_errors_resource_links_to_index() {
        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "Values of prices are wrong");

        let value = serde_json::to_value(ErrorsResource::new(errors, "/api")).unwrap();
        assert_eq!(value["_links"]["index"]["href"], "/api");
        assert_eq!(value["errors"][0]["code"], "wrongPrices");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("limit_of_enrollment"), "limitOfEnrollment");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("basePrice"), "basePrice");
    }
}
