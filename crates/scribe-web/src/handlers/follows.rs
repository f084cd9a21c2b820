use axum::extract::{Path, State};
use axum::response::Response;

use super::profile_path;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::redirect::found;
use crate::state::AppState;

pub async fn follow(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    let author = state.store.follow(&user, &username).await?;
    state.cache.clear();
    Ok(found(&profile_path(&author.username)))
}

pub async fn unfollow(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    let author = state.store.unfollow(&user, &username).await?;
    state.cache.clear();
    Ok(found(&profile_path(&author.username)))
}
