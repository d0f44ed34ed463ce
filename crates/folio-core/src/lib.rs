//! # Folio Core
//!
//! The domain layer of Folio: `Author` and `Post` records and the field rules
//! they enforce on every assignment.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError, Violation};
