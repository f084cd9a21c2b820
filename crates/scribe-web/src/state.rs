use std::sync::Arc;

use scribe_config::ScribeConfig;
use scribe_store::Store;

use crate::cache::PageCache;

/// Shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<ScribeConfig>,
    pub cache: Arc<PageCache>,
}

impl AppState {
    pub fn new(store: Store, config: ScribeConfig) -> Self {
        Self {
            store,
            cache: Arc::new(PageCache::new(config.cache_ttl())),
            config: Arc::new(config),
        }
    }
}
