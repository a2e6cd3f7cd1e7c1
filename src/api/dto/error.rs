//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body: `{"errors": "message"}` or `{"errors": ["message", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(String),
    Messages(Vec<String>),
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: ErrorBody::Message(message.into()),
        }
    }

    /// One entry per failed field rule
    pub fn messages(messages: Vec<String>) -> Self {
        Self {
            errors: ErrorBody::Messages(messages),
        }
    }
}
