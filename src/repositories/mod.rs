//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for the `books` table.

mod book_repo;

pub use book_repo::{BookRepository, BookStore};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub books: BookRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            books: BookRepository::new(pool),
        }
    }
}
