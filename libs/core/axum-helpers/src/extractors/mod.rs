//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod bound_json;
pub mod id_path;

pub use bound_json::{BindTarget, BoundJson};
pub use id_path::IdPath;
