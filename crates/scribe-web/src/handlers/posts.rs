use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::response::Response;
use scribe_core::PostFormContext;

use super::{parse_post_id, post_path};
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::forms::read_post_form;
use crate::redirect::found;
use crate::state::AppState;

pub async fn new_post_form(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
) -> Result<Json<PostFormContext>, AppError> {
    Ok(Json(state.store.post_form_context().await?))
}

pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = read_post_form(multipart).await?;
    state.store.create_post(&user, form).await?;
    state.cache.clear();
    Ok(found("/"))
}

pub async fn edit_post_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<Json<PostFormContext>, AppError> {
    let post_id = parse_post_id(&post_id)?;
    let context = state
        .store
        .edit_form_context(&user, post_id)
        .await
        .map_err(|err| AppError::back_to_post(err, &username, post_id))?;
    Ok(Json(context))
}

pub async fn update_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, post_id)): Path<(String, String)>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let post_id = parse_post_id(&post_id)?;
    let form = read_post_form(multipart).await?;
    state
        .store
        .update_post(&user, post_id, form)
        .await
        .map_err(|err| AppError::back_to_post(err, &username, post_id))?;
    state.cache.clear();
    Ok(found(&post_path(&username, post_id)))
}

/// Deleting takes a POST. A GET only leads back to the post.
pub async fn delete_post_redirect(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let post_id = parse_post_id(&post_id)?;
    state.store.ensure_post(post_id).await?;
    Ok(found(&post_path(&username, post_id)))
}

pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let post_id = parse_post_id(&post_id)?;
    state
        .store
        .delete_post(&user, post_id)
        .await
        .map_err(|err| AppError::back_to_post(err, &username, post_id))?;
    state.cache.clear();
    Ok(found("/"))
}
