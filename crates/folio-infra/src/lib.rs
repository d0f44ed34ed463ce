//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`, plus
//! configuration and telemetry setup.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - SeaORM repositories, connection pool and table bootstrap
//! - `minimal` - No database, in-memory repositories only

pub mod config;
pub mod memory;
pub mod telemetry;

#[cfg(feature = "postgres")]
pub mod database;

pub use config::{ConfigError, DatabaseConfig, TelemetryConfig};
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};
pub use telemetry::init_telemetry;

#[cfg(feature = "postgres")]
pub use database::{SeaAuthorRepository, SeaPostRepository};
