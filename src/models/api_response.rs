use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope used for error bodies and non-record responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[schema(nullable = false)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: Option<T>, error: Option<String>) -> Self {
        Self {
            success: error.is_none(),
            data,
            error,
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(Some(data), None)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(None, Some(message.into()))
    }
}
