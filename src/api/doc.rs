use utoipa::OpenApi;

pub const BOOK_TAG: &str = "Books";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf",
        description = "CRUD API for book records",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::ErrorBody,
        )
    ),
    tags(
        (name = BOOK_TAG, description = "Book endpoints"),
    )
)]
pub struct ApiDoc;
