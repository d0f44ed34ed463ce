use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::validation::validate_author_name;
use crate::domain::{Author, AuthorId};
use crate::error::{DomainError, RepoError, Violation};
use crate::ports::AuthorRepository;

const ENTITY: &str = "Author";

fn duplicate_name() -> DomainError {
    DomainError::invalid("name", Violation::Duplicate, "This name already exists.")
}

/// Author use cases: every write validates its fields and keeps names unique.
///
/// Uniqueness is checked twice. The lookup before the write produces the
/// error in the common case; a concurrent writer can still slip past it, so a
/// `RepoError::Constraint` from the store is reported as the same error.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// Create and store a new author.
    ///
    /// Fields are checked in assignment order: name (required, then unique),
    /// then phone number.
    pub async fn create(
        &self,
        name: impl Into<String>,
        phone_number: Option<String>,
    ) -> Result<Author, DomainError> {
        let name = name.into();
        validate_author_name(&name)?;
        self.ensure_name_available(&name, None).await?;

        let author = Author::new(name, phone_number)?;
        let saved = self.persist(author).await?;

        info!(author_id = ?saved.id(), "Author created");
        Ok(saved)
    }

    pub async fn get(&self, id: AuthorId) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_name(name).await?)
    }

    pub async fn list(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.authors.find_all().await?)
    }

    /// Give an existing author a new name.
    ///
    /// Keeping the author's current name is not a conflict.
    pub async fn rename(
        &self,
        id: AuthorId,
        name: impl Into<String>,
    ) -> Result<Author, DomainError> {
        let name = name.into();
        validate_author_name(&name)?;

        let mut author = self.get(id).await?;
        self.ensure_name_available(&name, Some(id)).await?;
        author.set_name(name)?;

        let saved = self.persist(author).await?;
        info!(author_id = id, "Author renamed");
        Ok(saved)
    }

    /// Set or clear an author's phone number.
    pub async fn update_phone_number(
        &self,
        id: AuthorId,
        phone_number: Option<String>,
    ) -> Result<Author, DomainError> {
        let mut author = self.get(id).await?;
        author.set_phone_number(phone_number)?;

        let saved = self.persist(author).await?;
        info!(author_id = id, "Author phone number updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: AuthorId) -> Result<(), DomainError> {
        self.authors.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: ENTITY,
                id,
            },
            other => other.into(),
        })?;

        info!(author_id = id, "Author deleted");
        Ok(())
    }

    async fn ensure_name_available(
        &self,
        name: &str,
        current: Option<AuthorId>,
    ) -> Result<(), DomainError> {
        if let Some(existing) = self.authors.find_by_name(name).await? {
            if existing.id() != current {
                debug!(existing_id = ?existing.id(), "Author name already taken");
                return Err(duplicate_name());
            }
        }
        Ok(())
    }

    async fn persist(&self, author: Author) -> Result<Author, DomainError> {
        self.authors.save(author).await.map_err(|e| match e {
            RepoError::Constraint(detail) => {
                debug!(%detail, "Author name rejected by store constraint");
                duplicate_name()
            }
            other => other.into(),
        })
    }
}
