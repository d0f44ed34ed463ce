//! Use cases that combine field validation with the repository ports.

mod author_service;
mod post_service;

pub use author_service::AuthorService;
pub use post_service::PostService;
