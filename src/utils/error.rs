use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    InvalidId(String),
    InvalidDocument(String),
    InvalidBody(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::InvalidId(msg) => write!(f, "Invalid id: {}", msg),
            AppError::InvalidDocument(msg) => write!(f, "Invalid document: {}", msg),
            AppError::InvalidBody(msg) => write!(f, "Invalid request body: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for AppError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        AppError::InvalidId(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InvalidDocument(err.to_string())
    }
}

/// Converts a failed result into an `AppError`, logging it under `context`.
pub trait LogFailure<T> {
    fn log_failure(self, context: &str) -> Result<T, AppError>;
}

impl<T, E: Into<AppError>> LogFailure<T> for Result<T, E> {
    fn log_failure(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| {
            let err: AppError = e.into();
            log::error!("❌ {}: {}", context, err);
            err
        })
    }
}

/// Every failure reaching a client goes through here, so the response shape
/// stays the same no matter which handler failed or why.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status == StatusCode::BAD_REQUEST {
            "Bad Request"
        } else {
            "Internal Server Error"
        };

        HttpResponse::build(status).json(serde_json::json!({ "message": message }))
    }
}
