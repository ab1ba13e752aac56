use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can report. Rendered once, as
/// `{success: false, error: <code>, message: <string>}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a persistence failure to 422, logging the cause.
    pub fn unprocessable(err: sqlx::Error) -> Self {
        tracing::error!("Persistence failure: {}", err);
        AppError::Unprocessable(err.to_string())
    }

    /// Map a persistence failure to 400, logging the cause.
    pub fn bad_request(err: sqlx::Error) -> Self {
        tracing::error!("Persistence failure: {}", err);
        AppError::BadRequest("bad request".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Only 400s carry their specific text.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) => msg.as_str(),
            AppError::NotFound => "resource not found",
            AppError::MethodNotAllowed => "method not allowed",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::Internal(_) => "internal server error",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Persistence failure: {}", err);
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}
