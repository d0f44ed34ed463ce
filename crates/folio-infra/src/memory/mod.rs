//! In-memory repositories - used by tests and when no database is configured.
//!
//! Data is lost on process restart.

mod author;
mod post;

use std::collections::BTreeMap;

pub use author::InMemoryAuthorRepository;
pub use post::InMemoryPostRepository;

/// Rows keyed by a generated integer ID, starting at 1 like a serial column.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}
