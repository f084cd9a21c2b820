//! Post and comment forms.
//!
//! Forms carry raw submitted values. `clean` turns them into values the
//! store can persist, or into [`FormErrors`] keyed by field name.

use crate::error::{EMPTY_FILE, FormErrors, INVALID_CHOICE, INVALID_IMAGE, REQUIRED};
use crate::upload::{ImageError, Upload, VerifiedImage, verify_image};

pub const CLEAR_CONFLICT: &str =
    "Please either submit a file or check the clear checkbox, not both.";

/// Raw post form submission.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub text: String,
    /// Group id as submitted; empty or absent means no group.
    pub group: Option<String>,
    pub image: Option<Upload>,
    /// `image-clear` checkbox.
    pub clear_image: bool,
}

/// What to do with the stored image of a post.
#[derive(Debug, Clone)]
pub enum ImageChange {
    Keep,
    Replace(VerifiedImage),
    Clear,
}

#[derive(Debug, Clone)]
pub struct CleanedPost {
    pub text: String,
    pub group_id: Option<i32>,
    pub image: ImageChange,
}

/// The submitted `group` is not a usable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChoice;

impl PostForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_group(mut self, group_id: i32) -> Self {
        self.group = Some(group_id.to_string());
        self
    }

    pub fn with_image(mut self, upload: Upload) -> Self {
        self.image = Some(upload);
        self
    }

    /// Parsed group id. `Ok(None)` when no group was chosen.
    pub fn group_id(&self) -> Result<Option<i32>, InvalidChoice> {
        match self.group.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| InvalidChoice),
        }
    }

    /// Validate every field. `group_exists` reports whether the chosen
    /// group id is one the form offers.
    pub fn clean(self, group_exists: bool) -> Result<CleanedPost, FormErrors> {
        let mut errors = FormErrors::new();

        let text = self.text.trim().to_string();
        if text.is_empty() {
            errors.add("text", REQUIRED);
        }

        let group_id = match self.group_id() {
            Ok(id) if id.is_none() || group_exists => id,
            _ => {
                errors.add("group", INVALID_CHOICE);
                None
            }
        };

        let image = match (self.image, self.clear_image) {
            (Some(_), true) => {
                errors.add("image", CLEAR_CONFLICT);
                ImageChange::Keep
            }
            (Some(upload), false) => match verify_image(upload) {
                Ok(image) => ImageChange::Replace(image),
                Err(ImageError::Empty) => {
                    errors.add("image", EMPTY_FILE);
                    ImageChange::Keep
                }
                Err(_) => {
                    errors.add("image", INVALID_IMAGE);
                    ImageChange::Keep
                }
            },
            (None, true) => ImageChange::Clear,
            (None, false) => ImageChange::Keep,
        };

        errors.into_result(CleanedPost {
            text,
            group_id,
            image,
        })
    }
}

/// Raw comment form submission. Blank text is accepted.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub text: String,
}

impl CommentForm {
    pub fn clean(self) -> String {
        self.text.trim().to_string()
    }
}
