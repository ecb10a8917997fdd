//! Defines the app level error type and its conversions to JSON and HTML responses.

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use crate::html::error_view;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The fields submitted for an expense were missing or invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be parsed as JSON.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the expense has not already been deleted.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

/// The reasons an expense submission is rejected.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// No amount was given, or it was an empty string.
    #[error("Amount is required")]
    MissingAmount,

    /// The amount was not a finite, non-negative number.
    #[error("Amount must be a non-negative number, got \"{0}\"")]
    InvalidAmount(String),

    /// The amount was larger than [MAX_AMOUNT](crate::expense::MAX_AMOUNT).
    #[error("Amount must be at most 1,000,000,000,000, got \"{0}\"")]
    AmountTooLarge(String),

    /// No category was given, or it was blank.
    #[error("Category is required")]
    MissingCategory,

    /// No date was given, or it was an empty string.
    #[error("Date is required")]
    MissingDate,

    /// The date was not in the `YYYY-MM-DD` format.
    #[error("Date must be in the format YYYY-MM-DD, got \"{0}\"")]
    InvalidDate(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// A JSON body holding a single message, used for errors and confirmations.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// A human readable message.
    pub message: String,
}

impl MessageBody {
    /// Wrap `message` in a [MessageBody].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Error {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::InvalidTimezone(_) | Error::DatabaseLockError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message that is safe to show to the client.
    ///
    /// Internal errors are logged and replaced with a generic message.
    fn client_message(&self) -> String {
        match self {
            Error::Validation(error) => error.to_string(),
            Error::InvalidJson(_) => self.to_string(),
            Error::NotFound => "Expense not found".to_owned(),
            Error::InvalidTimezone(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            Error::DatabaseLockError | Error::SqlError(_) => {
                tracing::error!("An unexpected error occurred: {}", self);
                "Sorry, something went wrong. Try again later or check the server logs".to_owned()
            }
        }
    }

    /// Convert the error into an HTML error page.
    pub fn into_page_response(self) -> Response {
        let status_code = self.status_code();
        let description = match status_code {
            StatusCode::NOT_FOUND => "Sorry, we could not find what you were looking for.",
            StatusCode::BAD_REQUEST => "Sorry, that request was invalid.",
            _ => "Sorry, something went wrong.",
        };
        let page = error_view(
            status_code.canonical_reason().unwrap_or("Error"),
            status_code.as_str(),
            description,
            &self.client_message(),
        );

        (status_code, Html(page.into_string())).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(MessageBody::new(self.client_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use super::{Error, ValidationError};

    async fn response_json(error: Error) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn no_rows_converts_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }

    #[tokio::test]
    async fn validation_error_is_bad_request() {
        let (status, body) = response_json(ValidationError::MissingCategory.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Category is required"}));
    }

    #[tokio::test]
    async fn not_found_has_message() {
        let (status, body) = response_json(Error::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Expense not found"}));
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) = response_json(Error::SqlError(rusqlite::Error::InvalidQuery)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["message"].as_str().unwrap().contains("SQL"));
    }

    #[tokio::test]
    async fn page_response_renders_html() {
        let response = Error::NotFound.into_page_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("404"));
    }
}
