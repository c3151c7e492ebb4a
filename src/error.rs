//! # Error Handling
//!
//! Request-time errors and their conversion into JSON HTTP responses.
//! Startup errors don't go through here; `main` propagates them as
//! `anyhow::Error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The session store couldn't load or save the caller's session
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Convert AppError into an HTTP response
///
/// Details are logged; the client only gets a generic message in the
/// `{ "error": ... }` body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Session(e) => {
                tracing::error!("Session error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Session error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
