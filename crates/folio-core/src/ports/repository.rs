use async_trait::async_trait;

use crate::domain::{Author, AuthorId, Category, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List every stored entity, ordered by ID.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity: insert when it has no ID yet, update otherwise.
    ///
    /// Returns the stored entity, with its generated ID after an insert.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository with domain-specific methods.
///
/// Implementations must reject a second author with an existing name with
/// `RepoError::Constraint`, the same way the `authors.name` unique index does.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, AuthorId> {
    /// Find an author by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
