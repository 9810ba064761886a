// File: src/client.rs
// Purpose: Boundary to the externally-owned data-fetching client

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Data-fetching client boundary
///
/// The cache itself is owned and implemented outside this crate; routes only
/// ever read from it and write through it inside their loader/action hooks.
pub trait QueryCache: Send + Sync + 'static {
    /// Returns the cached value for a key, if present
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores a value under a key, replacing any previous value
    fn set(&self, key: &str, value: Value);

    /// Drops the cached value for a key
    fn invalidate(&self, key: &str);
}

/// Stable identity of a client, usable as a memoization key
///
/// Two handles share an identity exactly when they wrap the same underlying
/// cache object. Cloning a handle preserves identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(usize);

/// Cheap-to-clone handle over a shared [`QueryCache`]
///
/// One handle is threaded into every route's loader/action hooks at
/// router-build time. The handle never mutates the cache on its own; all
/// access happens through the hooks it was given to.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<dyn QueryCache>,
}

impl QueryClient {
    /// Wraps an externally-owned cache
    pub fn new(cache: Arc<dyn QueryCache>) -> Self {
        Self { inner: cache }
    }

    /// The memoization key callers use to decide when to rebuild a router
    pub fn identity(&self) -> ClientId {
        ClientId(Arc::as_ptr(&self.inner) as *const () as usize)
    }

    /// Reads a cached value
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.get(key)
    }

    /// Writes a value into the cache
    pub fn set(&self, key: &str, value: Value) {
        self.inner.set(key, value);
    }

    /// Invalidates a cached value
    pub fn invalidate(&self, key: &str) {
        self.inner.invalidate(key);
    }
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("identity", &self.identity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryCache(Mutex<HashMap<String, Value>>);

    impl QueryCache for MemoryCache {
        fn get(&self, key: &str) -> Option<Value> {
            self.0.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: Value) {
            self.0.lock().unwrap().insert(key.to_string(), value);
        }

        fn invalidate(&self, key: &str) {
            self.0.lock().unwrap().remove(key);
        }
    }

    #[test]
    fn test_clones_share_identity() {
        let client = QueryClient::new(Arc::new(MemoryCache::default()));
        assert_eq!(client.identity(), client.clone().identity());
    }

    #[test]
    fn test_handles_over_the_same_cache_share_identity() {
        let cache: Arc<dyn QueryCache> = Arc::new(MemoryCache::default());
        let a = QueryClient::new(cache.clone());
        let b = QueryClient::new(cache);
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_distinct_caches_have_distinct_identities() {
        let a = QueryClient::new(Arc::new(MemoryCache::default()));
        let b = QueryClient::new(Arc::new(MemoryCache::default()));
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn test_handle_delegates_to_cache() {
        let client = QueryClient::new(Arc::new(MemoryCache::default()));
        client.set("user", json!({"name": "ada"}));
        assert_eq!(client.get("user"), Some(json!({"name": "ada"})));
        client.invalidate("user");
        assert_eq!(client.get("user"), None);
    }
}
