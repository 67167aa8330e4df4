use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nx_core::Error;
use serde_json::json;

/// Maps crate errors onto JSON `{"error": ...}` responses
#[derive(Debug)]
pub enum ApiError {
    Core(Error),
    NotFound(String),
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError::Core(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Core(Error::InvalidUrl(_)) | ApiError::Core(Error::UnknownCatalog(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(Error::Busy) => StatusCode::CONFLICT,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Core(e) => e.to_string(),
            ApiError::NotFound(what) => format!("{} not found", what),
        };
        if status.is_server_error() {
            tracing::error!("❌ {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
