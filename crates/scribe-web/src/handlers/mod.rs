pub mod comments;
pub mod feed;
pub mod follows;
pub mod posts;

use serde::Deserialize;

use crate::error::AppError;
use scribe_core::PageRequest;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn request(&self) -> Result<PageRequest, AppError> {
        Ok(PageRequest::parse(self.page.as_deref())?)
    }
}

/// Post ids in paths are plain digits; anything else matches no post.
pub fn parse_post_id(raw: &str) -> Result<i32, AppError> {
    let not_found = || AppError::NotFound(format!("post `{raw}`"));
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse().map_err(|_| not_found())
}

pub fn post_path(username: &str, post_id: i32) -> String {
    format!("/{username}/{post_id}/")
}

pub fn profile_path(username: &str) -> String {
    format!("/{username}/")
}
