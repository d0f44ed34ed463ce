use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::RepoError;
use folio_core::domain::{Author, AuthorId};
use folio_core::ports::{AuthorRepository, BaseRepository};

use super::Table;

/// In-memory author store.
///
/// Names are unique, mirroring the `authors.name` unique index: saving a
/// second author with a taken name fails with `RepoError::Constraint`.
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn name_taken(table: &Table<Author>, name: &str, except: Option<AuthorId>) -> bool {
    table
        .rows
        .iter()
        .any(|(id, author)| Some(*id) != except && author.name() == name)
}

#[async_trait]
impl BaseRepository<Author, AuthorId> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepoError> {
        Ok(self.table.read().await.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.table.read().await.all())
    }

    async fn save(&self, author: Author) -> Result<Author, RepoError> {
        // Single write lock: the uniqueness check and the write are atomic here.
        let mut table = self.table.write().await;

        if name_taken(&table, author.name(), author.id()) {
            return Err(RepoError::Constraint(format!(
                "authors.name {:?} already exists",
                author.name()
            )));
        }

        let id = match author.id() {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(RepoError::NotFound),
            None => table.next_id(),
        };

        let stored = Author::from_storage(
            id,
            author.name().to_string(),
            author.phone_number().map(str::to_string),
            author.created_at(),
            author.updated_at(),
        );
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: AuthorId) -> Result<(), RepoError> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.name() == name).cloned())
    }
}
