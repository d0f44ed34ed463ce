//! SeaORM entity definitions.

pub mod author;
pub mod post;
