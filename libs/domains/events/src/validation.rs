//! Business rules for event payloads.
//!
//! Runs after binding succeeded. Every rule is checked and reported; a
//! violation never stops the remaining rules.

use axum_helpers::Errors;
use serde_json::Value;

use crate::models::{DATE_TIME_FORMAT, EventInput};

pub const WRONG_PRICES: &str = "wrongPrices";
pub const WRONG_VALUE: &str = "wrongValue";

#[derive(Debug, Clone, Copy, Default)]
pub struct EventValidator;

impl EventValidator {
    pub fn new() -> Self {
        Self
    }

    /// Record every business-rule violation of `input` into `errors`.
    pub fn validate(&self, input: &EventInput, errors: &mut Errors) {
        // A max price of 0 means "no upper bound".
        if input.base_price > input.max_price && input.max_price != 0 {
            errors.reject(WRONG_PRICES, "Values of prices are wrong");
        }

        let end = input.end_event_date_time;
        if end < input.begin_event_date_time
            || end < input.close_enrollment_date_time
            || end < input.begin_enrollment_date_time
        {
            errors.reject_value(
                "endEventDateTime",
                WRONG_VALUE,
                "endEventDateTime is wrong",
                Some(Value::String(end.format(DATE_TIME_FORMAT).to_string())),
            );
        }
    }
}
