#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use serde_json::Value;
use tower::ServiceExt;

use bookshelf::AppState;
use bookshelf::api::routes::create_router;
use bookshelf::error::{AppError, AppResult};
use bookshelf::models::{Book, NewBook};
use bookshelf::repositories::BookStore;
use bookshelf::services::{BookService, Services};

/// In-process `BookStore` with serial ids starting at 1.
#[derive(Default)]
pub struct MemoryBookStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Book>,
    last_id: i32,
}

fn not_found(id: i32) -> AppError {
    AppError::not_found("book", "id", id)
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, book_id: i32) -> AppResult<Book> {
        let inner = self.inner.lock().unwrap();
        inner
            .rows
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
            .ok_or_else(|| not_found(book_id))
    }

    async fn create(&self, new_book: NewBook) -> AppResult<Book> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let book = Book {
            id: inner.last_id,
            title: new_book.title,
            description: new_book.description,
            rating: new_book.rating,
            price: new_book.price,
        };
        inner.rows.push(book.clone());
        Ok(book)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or_else(|| not_found(book.id))?;
        *row = book.clone();
        Ok(row.clone())
    }

    async fn delete(&self, book: &Book) -> AppResult<Book> {
        let mut inner = self.inner.lock().unwrap();
        let index = inner
            .rows
            .iter()
            .position(|b| b.id == book.id)
            .ok_or_else(|| not_found(book.id))?;
        Ok(inner.rows.remove(index))
    }
}

pub fn book_service() -> BookService {
    BookService::new(Arc::new(MemoryBookStore::default()))
}

pub fn app() -> Router {
    create_router(AppState::from_services(Services {
        books: book_service(),
    }))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Sends `body` verbatim so numbers keep their exact source text.
pub async fn send_text(app: &Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
