//! Book request handlers, plus the root and query echo endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::BOOK_TAG;
use crate::api::dto::{
    BookResponse, DataResponse, ErrorResponse, ProfileResponse, QueryParams, QueryResponse,
};
use crate::error::AppResult;
use crate::models::BookRequest;
use crate::state::AppState;
use crate::utils::{PathId, ValidatedJson};

/// Creates every `/v1` route.
pub fn book_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(root))
        .routes(routes!(query))
        .routes(routes!(list_books, create_book))
        .routes(routes!(get_book, update_book, delete_book))
}

/// GET /v1/ - Static identity payload
#[utoipa::path(
    get,
    path = "/v1/",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Service identity", body = ProfileResponse)
    )
)]
async fn root() -> Json<ProfileResponse> {
    Json(ProfileResponse::default())
}

/// GET /v1/query - Echo the `title` query parameter
#[utoipa::path(
    get,
    path = "/v1/query",
    tag = BOOK_TAG,
    params(QueryParams),
    responses(
        (status = 200, description = "The title as received", body = QueryResponse)
    )
)]
async fn query(Query(params): Query<QueryParams>) -> Json<QueryResponse> {
    Json(QueryResponse {
        title: params.title.unwrap_or_default(),
    })
}

/// GET /v1/books - List all books
#[utoipa::path(
    get,
    path = "/v1/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "All stored books", body = DataResponse<Vec<BookResponse>>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_books(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BookResponse>>>> {
    let books = state.services.books.find_all().await?;
    let responses: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();
    Ok(Json(DataResponse::new(responses)))
}

/// GET /v1/books/{id} - Get one book
#[utoipa::path(
    get,
    path = "/v1/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = DataResponse<BookResponse>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
async fn get_book(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<BookResponse>>> {
    let book = state.services.books.find_by_id(id).await?;
    Ok(Json(DataResponse::new(book.into())))
}

/// POST /v1/books - Create a book
#[utoipa::path(
    post,
    path = "/v1/books",
    tag = BOOK_TAG,
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book created", body = DataResponse<BookResponse>),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> AppResult<Json<DataResponse<BookResponse>>> {
    let book = state.services.books.create(request).await?;
    Ok(Json(DataResponse::new(book.into())))
}

/// PUT /v1/books/{id} - Overwrite a book
#[utoipa::path(
    put,
    path = "/v1/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = DataResponse<BookResponse>),
        (status = 400, description = "Invalid ID or payload", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
async fn update_book(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> AppResult<Json<DataResponse<BookResponse>>> {
    let book = state.services.books.update(id, request).await?;
    Ok(Json(DataResponse::new(book.into())))
}

/// DELETE /v1/books/{id} - Delete a book, returning it
#[utoipa::path(
    delete,
    path = "/v1/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = DataResponse<BookResponse>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
async fn delete_book(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<BookResponse>>> {
    let book = state.services.books.delete(id).await?;
    Ok(Json(DataResponse::new(book.into())))
}
