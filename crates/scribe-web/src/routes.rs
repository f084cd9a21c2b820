use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::cache::cache_page;
use crate::handlers::{comments, feed, follows, posts};
use crate::pages::{error_pages, not_found};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cached_index =
        get(feed::index).layer(middleware::from_fn_with_state(state.clone(), cache_page));

    Router::new()
        .route("/", cached_index)
        .route("/group/{slug}/", get(feed::group_posts))
        .route("/new/", get(posts::new_post_form).post(posts::create_post))
        .route("/follow/", get(feed::follow_index))
        .route("/{username}/follow/", get(follows::follow))
        .route("/{username}/unfollow/", get(follows::unfollow))
        .route("/{username}/", get(feed::profile))
        .route("/{username}/{post_id}/", get(feed::post_detail))
        .route(
            "/{username}/{post_id}/edit/",
            get(posts::edit_post_form).post(posts::update_post),
        )
        .route(
            "/{username}/{post_id}/delete/",
            get(posts::delete_post_redirect).post(posts::delete_post),
        )
        .route(
            "/{username}/{post_id}/comment",
            get(comments::comment_form).post(comments::add_comment),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
