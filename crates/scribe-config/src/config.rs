use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::DatabaseBackend;
use crate::log_format::LogFormat;

/// Default database: a SQLite file next to the config, created on first use.
pub fn default_database_url() -> String {
    "sqlite://scribe.db?mode=rwc".to_string()
}

/// Top-level scribe configuration, read from `scribe.json`.
///
/// Every key is optional; missing keys take the value from [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ScribeConfig {
    /// Socket address the HTTP server listens on.
    pub bind: String,
    /// SeaORM connection URL.
    pub database_url: String,
    /// Upper bound of the connection pool.
    pub max_connections: u32,
    /// Root directory for uploaded images.
    pub media_dir: PathBuf,
    /// Public URL prefix under which `media_dir` is served.
    pub media_url: String,
    /// Posts per page on every feed.
    pub page_size: u64,
    /// Lifetime of cached index pages, in seconds. Zero disables the cache.
    pub cache_ttl_secs: u64,
    /// Where unauthenticated visitors are sent.
    pub login_url: String,
    /// Trusted request header carrying the authenticated username.
    pub viewer_header: String,
    /// Largest accepted request body for post forms.
    pub max_upload_bytes: usize,
    pub log_format: LogFormat,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            database_url: default_database_url(),
            max_connections: 10,
            media_dir: PathBuf::from("media"),
            media_url: "/media/".to_string(),
            page_size: 10,
            cache_ttl_secs: 20,
            login_url: "/auth/login/".to_string(),
            viewer_header: "x-remote-user".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
        }
    }
}

impl ScribeConfig {
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Page size, never below one.
    pub fn page_size(&self) -> u64 {
        self.page_size.max(1)
    }

    /// Cache lifetime, `None` when caching is disabled.
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }

    /// Backend inferred from `database_url`.
    pub fn backend(&self) -> Option<DatabaseBackend> {
        DatabaseBackend::from_url(&self.database_url)
    }

    /// Public URL of a stored media file (`posts/x.png` → `/media/posts/x.png`).
    pub fn media_url_for(&self, path: &str) -> String {
        if self.media_url.ends_with('/') {
            format!("{}{}", self.media_url, path)
        } else {
            format!("{}/{}", self.media_url, path)
        }
    }
}
