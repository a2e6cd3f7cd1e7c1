//! Book DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Book;

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Go 101")]
    pub title: String,
    #[schema(example = "intro")]
    pub description: String,
    #[schema(example = 4)]
    pub rating: i32,
    #[schema(example = 10000)]
    pub price: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            description: book.description,
            rating: book.rating,
            price: book.price,
        }
    }
}

/// Static identity payload served at the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Ajulll")]
    pub name: String,
    #[schema(example = "Mahasiswa")]
    pub bio: String,
}

impl Default for ProfileResponse {
    fn default() -> Self {
        Self {
            name: "Ajulll".to_string(),
            bio: "Mahasiswa".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueryParams {
    /// Echoed back unchanged
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueryResponse {
    pub title: String,
}
