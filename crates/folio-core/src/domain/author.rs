use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{validate_author_name, validate_phone_number};
use crate::error::DomainError;

pub type AuthorId = i32;

/// Author entity - a person who writes posts.
///
/// Fields are private so every change goes through a validating setter.
/// Name uniqueness needs the store and is enforced by `AuthorService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Option<AuthorId>,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new, not yet persisted author.
    pub fn new(name: impl Into<String>, phone_number: Option<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_author_name(&name)?;
        if let Some(phone_number) = &phone_number {
            validate_phone_number(phone_number)?;
        }

        let now = Utc::now();
        Ok(Self {
            id: None,
            name,
            phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild an author from a stored row. Stored values are trusted.
    pub fn from_storage(
        id: AuthorId,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        validate_author_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Set or clear the phone number. `None` clears it; `Some("")` is rejected.
    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> Result<(), DomainError> {
        if let Some(phone_number) = &phone_number {
            validate_phone_number(phone_number)?;
        }
        self.phone_number = phone_number;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Author(id={}, name={})", id, self.name),
            None => write!(f, "Author(id=None, name={})", self.name),
        }
    }
}
