//! In-memory memo of canonical title → artwork URL.
//!
//! Lives for the whole process: no eviction, no expiry, nothing written to
//! disk. Keys are always cleaned titles, so release variants of one title
//! share an entry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe title → image URL map.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<String, String>>,
}

/// Cache handle shared between the resolver and anything that inspects it.
pub type SharedCache = Arc<ResolutionCache>;

/// Create a new, empty shared cache.
pub fn shared_cache() -> SharedCache {
    Arc::new(ResolutionCache::new())
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, title: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(title)
            .cloned()
    }

    /// Insert or overwrite. Concurrent writers for one title: last write wins.
    pub fn put(&self, title: impl Into<String>, url: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(title.into(), url.into());
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
}
