//! Image uploads attached to posts.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use thiserror::Error;

/// A file received from a multipart form, before any checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("upload is empty")]
    Empty,
    #[error("unrecognized image format")]
    UnknownFormat,
    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// An upload that decoded cleanly as an image.
#[derive(Debug, Clone)]
pub struct VerifiedImage {
    pub filename: String,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl VerifiedImage {
    /// Canonical extension for the detected format, whatever the client
    /// named the file.
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("img")
    }

    /// `posts/<stem>_<suffix>.<ext>`, relative to the media root.
    pub fn storage_path(&self, suffix: &str) -> String {
        format!(
            "posts/{}_{}.{}",
            scribe_naming::sanitize_upload_stem(&self.filename),
            suffix,
            self.extension()
        )
    }
}

/// Sniff the format from the content and decode the whole image.
pub fn verify_image(upload: Upload) -> Result<VerifiedImage, ImageError> {
    if upload.bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(upload.bytes.as_slice())).with_guessed_format()?;
    let format = reader.format().ok_or(ImageError::UnknownFormat)?;
    let decoded = reader.decode()?;

    Ok(VerifiedImage {
        width: decoded.width(),
        height: decoded.height(),
        format,
        filename: upload.filename,
        bytes: upload.bytes,
    })
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}
