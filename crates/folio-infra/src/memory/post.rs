use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::RepoError;
use folio_core::domain::{Category, Post, PostId};
use folio_core::ports::{BaseRepository, PostRepository};

use super::Table;

/// In-memory post store.
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.all())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = match post.id() {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(RepoError::NotFound),
            None => table.next_id(),
        };

        let stored = Post::from_storage(
            id,
            post.title().to_string(),
            post.content().map(str::to_string),
            post.summary().map(str::to_string),
            post.category(),
            post.created_at(),
            post.updated_at(),
        );
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| p.category() == Some(category))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use folio_core::domain::NewPost;

    use super::*;

    fn post(title: &str, category: Option<&str>) -> Post {
        Post::new(NewPost {
            title: title.to_string(),
            category: category.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let repo = InMemoryPostRepository::new();
        repo.save(post("Top Novels", Some("Fiction"))).await.unwrap();
        repo.save(post("Secret History", Some("Non-Fiction"))).await.unwrap();
        repo.save(post("Guess Again", None)).await.unwrap();

        let fiction = repo.find_by_category(Category::Fiction).await.unwrap();
        assert_eq!(fiction.len(), 1);
        assert_eq!(fiction[0].title(), "Top Novels");
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let mut saved = repo.save(post("Top Novels", None)).await.unwrap();
        repo.delete(saved.id().unwrap()).await.unwrap();

        saved.set_title("Top Novels, Revised").unwrap();
        assert!(matches!(repo.save(saved).await, Err(RepoError::NotFound)));
    }
}
