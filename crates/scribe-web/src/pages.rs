use axum::Json;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Replace the body of every 404 and 500 with the JSON error page.
pub async fn error_pages(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let status = response.status();
    let error = match status {
        StatusCode::NOT_FOUND => "not found",
        StatusCode::INTERNAL_SERVER_ERROR => "internal server error",
        _ => return response,
    };
    (
        status,
        Json(serde_json::json!({
            "status": status.as_u16(),
            "error": error,
            "path": path,
        })),
    )
        .into_response()
}

/// Fallback for paths no route matches.
pub async fn not_found(request: Request) -> AppError {
    AppError::NotFound(format!("route `{}`", request.uri().path()))
}
