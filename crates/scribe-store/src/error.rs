use scribe_core::{FormErrors, PageError};
use scribe_schema::SchemaError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid input: {0}")]
    Validation(FormErrors),
    #[error("post {post_id} belongs to {author}")]
    NotAuthor { post_id: i32, author: String },
    #[error("{0} already exists")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("media storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl StoreError {
    pub(crate) fn not_found(what: impl std::fmt::Display) -> Self {
        StoreError::NotFound(what.to_string())
    }
}

impl From<FormErrors> for StoreError {
    fn from(errors: FormErrors) -> Self {
        StoreError::Validation(errors)
    }
}

/// A page number that does not exist is reported like any missing page.
impl From<PageError> for StoreError {
    fn from(err: PageError) -> Self {
        StoreError::NotFound(format!("page ({err})"))
    }
}
