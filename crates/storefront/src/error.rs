//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::actions::ActionError;
use crate::validation::FieldError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store or product action failed.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Malformed request (unparseable body or query string).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Action(ActionError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Action(ActionError::DuplicateName(_)) => StatusCode::CONFLICT,
            Self::Action(ActionError::Query(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let body = match &self {
            Self::Action(ActionError::Validation(err)) => json!({
                "error": err.to_string(),
                "issues": err.issues.iter().map(issue_json).collect::<Vec<_>>(),
            }),
            Self::Action(ActionError::Query(_)) => json!({ "error": "Internal server error" }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

fn issue_json(issue: &FieldError) -> serde_json::Value {
    json!({ "field": issue.field, "message": issue.message })
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
