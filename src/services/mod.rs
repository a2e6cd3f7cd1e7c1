//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod book_service;

pub use book_service::BookService;

use std::sync::Arc;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since every service only holds `Arc` handles.
#[derive(Clone)]
pub struct Services {
    pub books: BookService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            books: BookService::new(Arc::new(repos.books)),
        }
    }
}
