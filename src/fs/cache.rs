//! Folder path → node id cache.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;

use crate::error::{PanError, Result};

/// Default number of folder paths kept per session.
pub const DEFAULT_CAPACITY: usize = 256;

const DEFAULT_NON_ZERO: NonZeroUsize = NonZeroUsize::new(DEFAULT_CAPACITY).unwrap();

/// Fixed-capacity least-recently-used map from normalized folder path to
/// node id.
///
/// Only folder paths are stored. A hit is trusted as-is: the id is not
/// re-validated against the remote.
pub struct PathCache {
    inner: Mutex<LruCache<String, String>>,
}

impl PathCache {
    /// Create an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| PanError::Config("cache capacity must be non-zero".to_string()))?;
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Look up a folder path, promoting it to most-recently-used on a hit.
    pub fn get(&self, path: &str) -> Option<String> {
        self.lock().get(path).cloned()
    }

    /// Insert or update a folder path, evicting the least-recently-used
    /// entry when full.
    pub fn put(&self, path: impl Into<String>, id: impl Into<String>) {
        self.lock().put(path.into(), id.into());
    }

    /// Drop `path` and every cached path beneath it.
    pub(crate) fn forget_subtree(&self, path: &str) {
        let prefix = format!("{}/", path);
        let mut cache = self.lock();
        let stale: Vec<String> = cache
            .iter()
            .map(|(k, _)| k)
            .filter(|k| k.as_str() == path || k.starts_with(&prefix))
            .cloned()
            .collect();
        for key in stale {
            cache.pop(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    // Poisoning is recovered: every LRU mutation completes before any panic point.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, String>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self {
            inner: Mutex::new(LruCache::new(DEFAULT_NON_ZERO)),
        }
    }
}

impl std::fmt::Debug for PathCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
