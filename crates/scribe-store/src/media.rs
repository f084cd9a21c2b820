//! Image files under the media root.

use std::io;
use std::path::{Component, Path, PathBuf};

use scribe_core::VerifiedImage;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute location of a stored path, `None` if it would escape the root.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let relative = Path::new(relative);
        relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
            .then(|| self.root.join(relative))
    }

    /// Write the image under a fresh name and return its stored path.
    pub async fn save(&self, image: &VerifiedImage) -> io::Result<String> {
        let suffix = Uuid::new_v4().simple().to_string();
        let relative = image.storage_path(&suffix[..8]);
        let target = self.root.join(&relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &image.bytes).await?;
        tracing::debug!(
            path = %relative,
            width = image.width,
            height = image.height,
            bytes = image.bytes.len(),
            "stored image"
        );
        Ok(relative)
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, relative: &str) -> io::Result<bool> {
        let Some(target) = self.resolve(relative) else {
            tracing::warn!(path = relative, "refusing to remove media outside the root");
            return Ok(false);
        };
        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = relative, "media file already missing");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn exists(&self, relative: &str) -> bool {
        match self.resolve(relative) {
            Some(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
            None => false,
        }
    }
}
