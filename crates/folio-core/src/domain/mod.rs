//! Domain entities - the core business objects.

mod author;
mod post;
pub mod validation;

pub use author::{Author, AuthorId};
pub use post::{Category, NewPost, Post, PostId};
