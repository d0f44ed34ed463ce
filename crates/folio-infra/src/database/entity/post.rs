//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

/// Stored form of `folio_core::domain::Category`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Category {
    #[sea_orm(string_value = "Fiction")]
    Fiction,
    #[sea_orm(string_value = "Non-Fiction")]
    NonFiction,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<Category>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Category> for folio_core::domain::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Fiction => Self::Fiction,
            Category::NonFiction => Self::NonFiction,
        }
    }
}

impl From<folio_core::domain::Category> for Category {
    fn from(category: folio_core::domain::Category) -> Self {
        match category {
            folio_core::domain::Category::Fiction => Self::Fiction,
            folio_core::domain::Category::NonFiction => Self::NonFiction,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for folio_core::domain::Post {
    fn from(model: Model) -> Self {
        Self::from_storage(
            model.id,
            model.title,
            model.content,
            model.summary,
            model.category.map(Into::into),
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<folio_core::domain::Post> for ActiveModel {
    fn from(post: folio_core::domain::Post) -> Self {
        Self {
            id: post.id().map_or(NotSet, Set),
            title: Set(post.title().to_string()),
            content: Set(post.content().map(str::to_string)),
            summary: Set(post.summary().map(str::to_string)),
            category: Set(post.category().map(Into::into)),
            created_at: Set(post.created_at().into()),
            updated_at: Set(post.updated_at().into()),
        }
    }
}
