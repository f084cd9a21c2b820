use axum::Json;
use axum::extract::{Path, Query, State};
use scribe_core::{GroupFeed, Page, PostDetail, PostItem, ProfileFeed};

use super::{PageQuery, parse_post_id};
use crate::auth::{CurrentUser, Viewer};
use crate::error::AppError;
use crate::state::AppState;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<PostItem>>, AppError> {
    Ok(Json(state.store.list_recent_posts(query.request()?).await?))
}

pub async fn group_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<GroupFeed>, AppError> {
    Ok(Json(
        state.store.list_group_posts(&slug, query.request()?).await?,
    ))
}

pub async fn follow_index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<PostItem>>, AppError> {
    Ok(Json(
        state
            .store
            .list_followed_posts(&user, query.request()?)
            .await?,
    ))
}

pub async fn profile(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ProfileFeed>, AppError> {
    Ok(Json(
        state
            .store
            .list_user_posts(viewer.as_ref(), &username, query.request()?)
            .await?,
    ))
}

pub async fn post_detail(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<Json<PostDetail>, AppError> {
    let post_id = parse_post_id(&post_id)?;
    Ok(Json(
        state
            .store
            .get_post(viewer.as_ref(), &username, post_id)
            .await?,
    ))
}
