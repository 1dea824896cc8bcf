//! Cache Store Module
//!
//! Single-threaded cache core combining the key index with the recency list.
//! The thread-safe [`Cache`](crate::cache::Cache) handle drives a `Store`
//! from behind one lock; everything here assumes exclusive access and keeps
//! the two structures in step: one index entry per linked node, never more
//! than `capacity` of either.

use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::oneshot;
use tracing::debug;

use crate::cache::entry::Entry;
use crate::cache::list::{NodeId, RecencyList};

// == Cache Store ==
/// Fixed-capacity LRU store owning the key index and the recency list.
#[derive(Debug)]
pub(crate) struct Store<K, V> {
    /// Key -> node handle. Always the same size as `order`.
    index: HashMap<K, NodeId>,
    /// Recency order, front = most recently touched, back = eviction candidate.
    order: RecencyList<Entry<K, V>>,
    /// Maximum number of live entries, fixed at construction.
    capacity: usize,
    /// Stamp handed to the next inserted entry. Never reset, not even by
    /// `clear`, so a watcher armed before a clear cannot match an entry
    /// inserted after it.
    next_generation: u64,
}

impl<K, V> Store<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty store. The caller validates that `capacity` is
    /// non-zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            capacity,
            next_generation: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Insert ==
    /// Inserts or replaces the entry for `key` at the front of the recency
    /// order and returns the generation stamped onto it.
    ///
    /// Replacing an existing key is never an admission: the back node is
    /// only evicted when a new key arrives at capacity.
    pub fn insert(&mut self, key: K, value: V, cancel: Option<oneshot::Sender<()>>) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;

        if let Some(&node) = self.index.get(&key) {
            let entry = self.order.get_mut(node);
            entry.value = value;
            entry.generation = generation;
            // Dropping the previous sender wakes any watcher still armed
            // for the replaced entry.
            entry.cancel = cancel;
            self.order.move_to_front(node);
            return generation;
        }

        if self.len() == self.capacity {
            self.evict_back();
        }

        let node = self
            .order
            .push_front(Entry::new(key.clone(), value, generation, cancel));
        self.index.insert(key, node);
        generation
    }

    /// Drops the least recently used entry from both structures.
    fn evict_back(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            // The index entry is dropped by the insert key the node
            // retained, not by the entry's value.
            self.index.remove(&evicted.key);
            debug!(capacity = self.capacity, "evicted least recently used entry");
        }
    }

    // == Get ==
    /// Looks up `key`, promotes its node to the front, and clones the value
    /// out. Absent keys are a miss, so callers that peeked under a shared
    /// lock can call this to re-validate under the exclusive one.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let node = *self.index.get(key)?;
        self.order.move_to_front(node);
        Some(self.order.get(node).value.clone())
    }

    // == Remove ==
    /// Removes `key` if present. Dropping the entry drops its cancellation
    /// sender, which stops any armed TTL watcher.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(node) => {
                let _ = self.order.remove(node);
                true
            }
            None => false,
        }
    }

    // == Remove Expired ==
    /// Removal path used by TTL watchers. Removes the entry only if `key`
    /// is still held by the generation the watcher was armed with; a newer
    /// entry under the same key is left untouched.
    pub fn remove_expired(&mut self, key: &K, generation: u64) -> bool {
        match self.index.get(key) {
            Some(&node) if self.order.get(node).generation == generation => self.remove(key),
            _ => false,
        }
    }

    // == Clear ==
    /// Discards every entry. Each dropped entry drops its watcher sender,
    /// so outstanding watchers stop instead of acting on the emptied cache.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    /// Number of linked recency nodes; must track `len()` at all times.
    #[cfg(test)]
    pub fn order_len(&self) -> usize {
        self.order.len()
    }
}
