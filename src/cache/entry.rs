//! Cache Entry Module
//!
//! The node payload held in the recency list.

use tokio::sync::oneshot;

// == Cache Entry ==
/// A single cache entry.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    /// Key the entry was inserted under. Retained on the node so evicting
    /// the back of the recency list can drop the matching index entry.
    pub key: K,
    /// The stored value.
    pub value: V,
    /// Monotonic insertion stamp. A TTL watcher only removes the entry
    /// carrying the generation it was armed with.
    pub generation: u64,
    /// Cancellation side of the entry's TTL watcher, `None` for entries
    /// without a TTL. Dropping the sender wakes the watcher, which then
    /// exits without touching the cache.
    pub cancel: Option<oneshot::Sender<()>>,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V, generation: u64, cancel: Option<oneshot::Sender<()>>) -> Self {
        Self {
            key,
            value,
            generation,
            cancel,
        }
    }

    /// True while a TTL watcher is armed for this entry.
    #[allow(dead_code)]
    pub fn has_watcher(&self) -> bool {
        self.cancel.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_ttl_has_no_watcher() {
        let entry = Entry::new("key", 1, 0, None);
        assert!(!entry.has_watcher());
    }

    #[test]
    fn test_dropping_entry_closes_cancel_channel() {
        let (tx, mut rx) = oneshot::channel();
        let entry = Entry::new("key", 1, 0, Some(tx));
        assert!(entry.has_watcher());

        drop(entry);

        assert!(matches!(
            rx.try_recv(),
            Err(oneshot::error::TryRecvError::Closed)
        ));
    }
}
