//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ErrorsResource};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Binding or business validation failed",
    content_type = "application/hal+json",
    example = json!({
        "errors": [
            {
                "objectName": "eventDto",
                "field": "endEventDateTime",
                "defaultMessage": "endEventDateTime is wrong",
                "code": "wrongValue",
                "rejectValue": "2018-11-23T14:21:00"
            },
            {
                "objectName": "eventDto",
                "code": "wrongPrices",
                "defaultMessage": "Values of prices are wrong"
            }
        ],
        "_links": {"index": {"href": "/api"}}
    })
)]
pub struct BadRequestValidationResponse(pub ErrorsResource);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid path parameter",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_PATH_PARAM",
        "message": "Invalid id: abc"
    })
)]
pub struct BadRequestPathResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid paging or sorting parameter",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "INVALID_QUERY",
        "message": "Unknown sort property: color"
    })
)]
pub struct BadRequestQueryResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Event with id 7 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "code": 1011,
        "error": "SERVICE_UNAVAILABLE",
        "message": "Service is temporarily unavailable"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
