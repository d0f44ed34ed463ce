use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Category, NewPost, Post, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post use cases.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, fields: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(fields).inspect_err(|e| debug!(error = %e, "Post rejected"))?;
        let saved = self.posts.save(post).await?;

        info!(post_id = ?saved.id(), "Post created");
        Ok(saved)
    }

    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_category(category).await?)
    }

    /// Load a post, apply `change` through its validating setters and store it.
    ///
    /// If `change` fails nothing is written.
    ///
    /// # Example
    /// ```ignore
    /// posts.update(id, |post| post.set_category(Some("Fiction"))).await?;
    /// ```
    pub async fn update<F>(&self, id: PostId, change: F) -> Result<Post, DomainError>
    where
        F: FnOnce(&mut Post) -> Result<(), DomainError> + Send,
    {
        let mut post = self.get(id).await?;
        change(&mut post).inspect_err(|e| debug!(post_id = id, error = %e, "Post update rejected"))?;

        let saved = self.posts.save(post).await?;
        info!(post_id = id, "Post updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: ENTITY,
                id,
            },
            other => other.into(),
        })?;

        info!(post_id = id, "Post deleted");
        Ok(())
    }
}
