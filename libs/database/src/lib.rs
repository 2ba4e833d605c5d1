//! PostgreSQL connection management for the events service.
//!
//! - [`postgres`]: pool configuration from the environment, connect with
//!   retry, migrations, health check
//! - [`common`]: error type and retry/backoff helper
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(&config).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "events-api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
