//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use folio_core::RepoError;
use folio_core::domain::{Author, Category, Post};
use folio_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::sea_base::{SeaRepository, map_db_err};

/// SeaORM author repository.
pub type SeaAuthorRepository = SeaRepository<AuthorEntity>;

/// SeaORM post repository.
pub type SeaPostRepository = SeaRepository<PostEntity>;

#[async_trait]
impl AuthorRepository for SeaAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_name = %name, "Finding author by name");

        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for SeaPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Category.eq(post::Category::from(category)))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
