//! Table bootstrap from the entity definitions.
//!
//! Creates missing tables on a fresh database (and in tests). Changing an
//! existing schema is left to an external migration tool.

use sea_orm::{ConnectionTrait, DbConn, DbErr, EntityTrait, Schema};

use super::entity::{author, post};

async fn create_table<E: EntityTrait>(db: &DbConn, schema: &Schema, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Create the `authors` and `posts` tables if they do not exist.
///
/// `authors.name` gets its unique constraint from the entity definition.
pub async fn create_tables(db: &DbConn) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, author::Entity).await?;
    create_table(db, &schema, post::Entity).await?;

    tracing::info!("Database tables ready");
    Ok(())
}
