//! Who is making the request.
//!
//! Authentication happens upstream; the proxy forwards the username in the
//! header named by `viewerHeader`. The username is resolved against the
//! users table once per request and kept in the request extensions.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use scribe_core::UserRef;

use crate::error::AppError;
use crate::redirect::{found, login_location};
use crate::state::AppState;

/// The resolved viewer, `None` when anonymous.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<UserRef>);

/// An authenticated viewer. Anonymous requests are redirected to the login
/// page with a `next` parameter pointing back here.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserRef);

impl FromRequestParts<AppState> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(viewer) = parts.extensions.get::<Viewer>() {
            return Ok(viewer.clone());
        }

        let username = parts
            .headers
            .get(state.config.viewer_header.as_str())
            // usernames may hold non-ASCII letters, sent as raw UTF-8
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
            .map(str::trim)
            .filter(|name| !name.is_empty());
        let user = match username {
            Some(name) => {
                let user = state.store.find_user(name).await?;
                if user.is_none() {
                    tracing::debug!(username = name, "forwarded user has no local account");
                }
                user
            }
            None => None,
        };

        let viewer = Viewer(user);
        parts.extensions.insert(viewer.clone());
        Ok(viewer)
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Viewer(user) = Viewer::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        match user {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map_or("/", |pq| pq.as_str());
                Err(found(&login_location(&state.config.login_url, next)))
            }
        }
    }
}
