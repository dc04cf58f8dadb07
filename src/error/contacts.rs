use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ContactsError {
    #[error("Contact not found")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Birthday window of {days} days is outside the supported calendar range")]
    DateOutOfRange { days: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl ContactsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactsError::NotFound => StatusCode::NOT_FOUND,
            ContactsError::DateOutOfRange { .. } => StatusCode::BAD_REQUEST,
            ContactsError::ServerError(_)
            | ContactsError::ConfigError(_)
            | ContactsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<figment::Error> for ContactsError {
    fn from(err: figment::Error) -> Self {
        ContactsError::ConfigError(err.to_string())
    }
}

impl IntoResponse for ContactsError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let error_body = match self {
            ContactsError::NotFound => ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message: "Contact not found".to_string(),
                details: None,
            },

            ContactsError::ServerError(message) => ApiErrorObject {
                code: "SERVER_ERROR".to_string(),
                message,
                details: None,
            },

            ContactsError::DateOutOfRange { days } => ApiErrorObject {
                code: "INVALID_WINDOW".to_string(),
                message: "Birthday window is too large.".to_string(),
                details: Some(serde_json::json!({ "days": days })),
            },

            ContactsError::ConfigError(_) | ContactsError::DatabaseError(_) => ApiErrorObject {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred.".to_string(),
                details: None,
            },
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Debug, Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
