use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use scribe_core::{FormErrors, PageError};
use scribe_store::StoreError;
use thiserror::Error;

use crate::redirect::found;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid form: {0}")]
    Validation(FormErrors),
    /// Refused without an error page; the visitor is sent elsewhere.
    #[error("redirect to {0}")]
    Redirect(String),
    #[error("malformed request: {0}")]
    BadRequest(String),
    #[error("request too large: {0}")]
    TooLarge(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Redirect(_) => StatusCode::FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A non-author touching a post is bounced to the post page.
    pub fn back_to_post(err: StoreError, username: &str, post_id: i32) -> Self {
        match err {
            StoreError::NotAuthor { .. } => Self::Redirect(format!("/{username}/{post_id}/")),
            other => other.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::NotFound(what),
            StoreError::Validation(errors) => Self::Validation(errors),
            StoreError::NotAuthor { post_id, author } => {
                Self::Redirect(format!("/{author}/{post_id}/"))
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        Self::NotFound(format!("page ({err})"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Redirect(location) => found(&location),
            Self::Validation(errors) => {
                (status, Json(serde_json::json!({ "errors": errors }))).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                status.into_response()
            }
            Self::NotFound(what) => {
                tracing::debug!(%what, "not found");
                status.into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}
