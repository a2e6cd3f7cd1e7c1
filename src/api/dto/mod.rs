//! Data Transfer Objects for API requests and responses.
//!
//! - `book` - Book response DTOs and the static profile/query payloads
//! - `envelope` - `{"data": ...}` success wrapper
//! - `error` - `{"errors": ...}` error body

mod book;
mod envelope;
mod error;

pub use book::{BookResponse, ProfileResponse, QueryParams, QueryResponse};
pub use envelope::DataResponse;
pub use error::{ErrorBody, ErrorResponse};
