//! Database access through SeaORM.

mod connections;
mod schema;
mod sea_base;
mod sea_repo;

pub mod entity;

pub use connections::connect;
pub use schema::create_tables;
pub use sea_base::SeaRepository;
pub use sea_repo::{SeaAuthorRepository, SeaPostRepository};
