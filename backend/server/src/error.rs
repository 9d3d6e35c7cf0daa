use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redis::RedisError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Review {0} not found")]
    NotFound(u64),

    #[error("Database error: {0}")]
    Database(#[from] RedisError),

    #[error("Search error: {0}")]
    Search(#[from] meilisearch_sdk::errors::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database { .. }
            | AppError::Search { .. }
            | AppError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            error!("{self}");
            "Internal error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::AppError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MalformedPayload("rating".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound(4).status(), StatusCode::NOT_FOUND);

        let serde_error = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(
            AppError::from(serde_error).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response() {
        let response = AppError::NotFound(9).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
