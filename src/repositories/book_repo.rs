//! Book repository for async database operations.
//!
//! Provides CRUD operations for the books table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{Book, NewBook, UpdateBook};

const ENTITY: &str = "book";

/// Storage operations the book service depends on.
///
/// Each method maps to exactly one storage call. Implementations perform no
/// existence checks of their own beyond what the storage reports.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns every stored book.
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Returns the book with the given id, or `NotFound`.
    async fn find_by_id(&self, book_id: i32) -> AppResult<Book>;

    /// Inserts a book and returns it with its generated id.
    async fn create(&self, new_book: NewBook) -> AppResult<Book>;

    /// Overwrites all mutable fields of the row identified by `book.id`.
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Deletes the row identified by `book.id` and returns the deleted row.
    async fn delete(&self, book: &Book) -> AppResult<Book>;
}

/// Book repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment).
#[derive(Clone)]
pub struct BookRepository {
    pool: AsyncDbPool,
}

impl BookRepository {
    /// Creates a new BookRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

fn not_found(book_id: i32) -> AppError {
    AppError::not_found(ENTITY, "id", book_id)
}

fn convert(operation: &str) -> impl FnOnce(diesel::result::Error) -> AppError + '_ {
    move |e| DatabaseErrorConverter::convert_diesel_error(e, ENTITY, operation)
}

#[async_trait]
impl BookStore for BookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        books
            .order(id.asc())
            .select(Book::as_select())
            .load(&mut conn)
            .await
            .map_err(convert("list books"))
    }

    async fn find_by_id(&self, book_id: i32) -> AppResult<Book> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        books
            .filter(id.eq(book_id))
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(convert("find book"))?
            .ok_or_else(|| not_found(book_id))
    }

    async fn create(&self, new_book: NewBook) -> AppResult<Book> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(books)
            .values(&new_book)
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(convert("insert book"))
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(books.filter(id.eq(book.id)))
            .set(&UpdateBook::from(book))
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(convert("update book"))?
            .ok_or_else(|| not_found(book.id))
    }

    async fn delete(&self, book: &Book) -> AppResult<Book> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(books.filter(id.eq(book.id)))
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(convert("delete book"))?
            .ok_or_else(|| not_found(book.id))
    }
}
