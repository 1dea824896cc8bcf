//! Shared Cache Module
//!
//! The public thread-safe cache handle. One reader/writer lock guards the
//! key index and the recency list as a single unit; entries inserted with a
//! TTL additionally arm a per-entry watcher task.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tracing::debug;

use crate::cache::store::Store;
use crate::cache::watcher::spawn_expiry_watcher;
use crate::error::{CacheError, Result};

// == Cache ==
/// Thread-safe, fixed-capacity LRU cache with optional per-entry TTL.
///
/// Cloning the handle is cheap; every clone operates on the same underlying
/// cache. Pure size reads take the lock shared, while every structural
/// change, including the promote-to-front step of [`get`](Cache::get), runs
/// in a single exclusive critical section.
#[derive(Debug)]
pub struct Cache<K, V> {
    store: Arc<RwLock<Store<K, V>>>,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }
        Ok(Self {
            store: Arc::new(RwLock::new(Store::new(capacity))),
        })
    }

    // == Capacity ==
    /// Returns the fixed capacity.
    pub async fn capacity(&self) -> usize {
        self.store.read().await.capacity()
    }

    // == Len ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Add ==
    /// Inserts `key` with `value` and no TTL, making it the most recently
    /// used entry.
    ///
    /// A new key arriving at capacity evicts the least recently used entry
    /// first. Re-adding an existing key replaces its value in place, stops
    /// any TTL watcher armed for it, and never evicts.
    pub async fn add(&self, key: K, value: V) {
        let mut store = self.store.write().await;
        store.insert(key, value, None);
    }

    // == Add With TTL ==
    /// Inserts `key` with `value` and arms a watcher that removes the entry
    /// once `ttl` elapses, unless the entry is removed, overwritten, or
    /// evicted first.
    ///
    /// Insertion and eviction behave exactly as in [`add`](Cache::add).
    /// A zero `ttl` means immediate expiry: the entry may be observed
    /// briefly until its watcher runs.
    pub async fn add_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let generation = {
            let mut store = self.store.write().await;
            store.insert(key.clone(), value, Some(cancel_tx))
        };
        spawn_expiry_watcher(Arc::clone(&self.store), key, generation, ttl, cancel_rx);
    }

    // == Get ==
    /// Returns a clone of the value under `key` and marks the entry as most
    /// recently used. Returns `None` when the key is absent.
    pub async fn get(&self, key: &K) -> Option<V> {
        {
            let store = self.store.read().await;
            if !store.contains(key) {
                return None;
            }
        }
        // The promote step needs the write lock. The key may have vanished
        // between the two sections, so presence is re-checked and a removed
        // key reported as a miss.
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Remove ==
    /// Removes `key` and stops its TTL watcher, if any. Absent keys are a
    /// no-op.
    pub async fn remove(&self, key: &K) {
        let mut store = self.store.write().await;
        store.remove(key);
    }

    // == Clear ==
    /// Discards every entry, stopping all outstanding TTL watchers, and
    /// leaves the cache empty with its capacity unchanged.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        let dropped = store.len();
        store.clear();
        debug!(dropped, "cache cleared");
    }
}
