use axum::extract::{Path, State};
use axum::response::Response;
use axum::{Form, Json};
use scribe_core::{CommentForm, PostDetail};

use super::{parse_post_id, post_path};
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::redirect::found;
use crate::state::AppState;

/// The post page with an empty comment form.
pub async fn comment_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<Json<PostDetail>, AppError> {
    let post_id = parse_post_id(&post_id)?;
    Ok(Json(
        state.store.get_post(Some(&user), &username, post_id).await?,
    ))
}

pub async fn add_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, post_id)): Path<(String, String)>,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let post_id = parse_post_id(&post_id)?;
    state.store.add_comment(&user, post_id, form).await?;
    state.cache.clear();
    Ok(found(&post_path(&username, post_id)))
}
