use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success body: the payload under a `data` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T> From<T> for DataResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}
