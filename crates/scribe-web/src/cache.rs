//! Whole-response cache for the index page.
//!
//! Entries are keyed by request URI and live for a fixed TTL. Expired
//! entries are dropped when looked up and by a sweep every
//! `SWEEP_INTERVAL` inserts. Any successful write clears the cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const SWEEP_INTERVAL: u64 = 64;

#[derive(Debug, Clone)]
struct CachedPage {
    stored: Instant,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Debug)]
pub struct PageCache {
    ttl: Option<Duration>,
    entries: RwLock<HashMap<String, CachedPage>>,
    inserts: AtomicU64,
}

impl PageCache {
    /// `None` disables caching.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            inserts: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.ttl.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh `200 OK` for `key`, if one is stored.
    pub fn get(&self, key: &str) -> Option<Response> {
        let ttl = self.ttl?;
        let page = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            entries.get(key).cloned()?
        };
        if page.stored.elapsed() >= ttl {
            self.entries
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(key);
            return None;
        }
        let mut response = Response::new(Body::from(page.body));
        *response.headers_mut() = page.headers;
        Some(response)
    }

    pub fn insert(&self, key: String, headers: HeaderMap, body: Bytes) {
        let Some(ttl) = self.ttl else {
            return;
        };
        let count = self.inserts.fetch_add(1, Ordering::Relaxed);
        if count > 0 && count % SWEEP_INTERVAL == 0 {
            self.sweep(ttl);
        }
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key,
                CachedPage {
                    stored: Instant::now(),
                    headers,
                    body,
                },
            );
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn sweep(&self, ttl: Duration) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, page| page.stored.elapsed() < ttl);
        tracing::debug!(removed = before - entries.len(), "swept page cache");
    }
}

/// Serve `GET` requests from the cache, storing successful responses.
pub async fn cache_page(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.cache.is_enabled() || request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = request.uri().to_string();
    if let Some(hit) = state.cache.get(&key) {
        tracing::debug!(%key, "page cache hit");
        return hit;
    }

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }
    let (parts, body) = response.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            state.cache.insert(key, parts.headers.clone(), bytes.clone());
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            tracing::error!(%err, "failed to buffer response for caching");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &'static str) -> Bytes {
        Bytes::from_static(body.as_bytes())
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = PageCache::new(None);
        cache.insert("/".into(), HeaderMap::new(), page("x"));
        assert!(cache.is_empty());
        assert!(cache.get("/").is_none());
    }

    #[tokio::test]
    async fn test_hit_returns_stored_body() {
        let cache = PageCache::new(Some(Duration::from_secs(60)));
        cache.insert("/?page=2".into(), HeaderMap::new(), page("second"));

        let hit = cache.get("/?page=2").unwrap();
        assert_eq!(hit.status(), StatusCode::OK);
        let body = axum::body::to_bytes(hit.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "second");
        assert!(cache.get("/").is_none());
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let cache = PageCache::new(Some(Duration::ZERO));
        cache.insert("/".into(), HeaderMap::new(), page("old"));
        assert!(cache.get("/").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_sweep_runs_periodically() {
        let cache = PageCache::new(Some(Duration::ZERO));
        for i in 0..=SWEEP_INTERVAL {
            cache.insert(format!("/?page={i}"), HeaderMap::new(), page("x"));
        }
        // the sweep on the last insert removed everything stored before it
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = PageCache::new(Some(Duration::from_secs(60)));
        cache.insert("/".into(), HeaderMap::new(), page("x"));
        cache.clear();
        assert!(cache.is_empty());
    }
}
