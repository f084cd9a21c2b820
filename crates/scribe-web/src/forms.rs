//! Decoding submitted forms.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use scribe_core::{PostForm, Upload};

use crate::error::AppError;

/// Read a multipart post form: `text`, `group`, `image`, and `image-clear`.
/// A file input left empty arrives as a nameless, empty part and counts as
/// no upload.
pub async fn read_post_form(mut multipart: Multipart) -> Result<PostForm, AppError> {
    let mut form = PostForm::default();
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "text" => form.text = field.text().await.map_err(malformed)?,
            "group" => form.group = Some(field.text().await.map_err(malformed)?),
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(malformed)?;
                if !(filename.is_empty() && bytes.is_empty()) {
                    form.image = Some(Upload::new(filename, bytes.to_vec()));
                }
            }
            "image-clear" => {
                let value = field.text().await.map_err(malformed)?;
                form.clear_image = matches!(value.as_str(), "on" | "true" | "1");
            }
            _ => {}
        }
    }
    Ok(form)
}

fn malformed(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::TooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
