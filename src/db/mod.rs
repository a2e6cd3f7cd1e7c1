//! Database connection pool and migration module.
//!
//! Provides async PostgreSQL connection pooling using diesel_async with bb8,
//! plus the embedded schema migrations for the `books` table.

mod migrations;
mod pool;

pub use migrations::{
    MIGRATIONS, count_pending_migrations, revert_migrations, run_pending_migrations,
};
pub use pool::{AsyncDbPool, establish_async_connection_pool};
