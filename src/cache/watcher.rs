//! TTL Watcher Module
//!
//! One background task per TTL entry. The task races the entry's timer
//! against its cancellation signal and removes the entry through the
//! normal removal path when the timer wins.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::cache::store::Store;

/// Spawns the expiry watcher for one TTL entry.
///
/// The task sleeps for `ttl`, then removes the entry, unless the
/// cancellation receiver resolves first. The sender side lives on the entry
/// itself, so removal, overwrite, eviction and clear all cancel the watcher
/// by dropping it. A watcher whose timer fires anyway finds a different
/// generation (or no entry) under its key and leaves the cache alone.
///
/// The returned handle is not needed for cancellation; dropping it leaves
/// the task running to completion.
pub(crate) fn spawn_expiry_watcher<K, V>(
    store: Arc<RwLock<Store<K, V>>>,
    key: K,
    generation: u64,
    ttl: Duration,
    cancel: oneshot::Receiver<()>,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(ttl) => {
                let mut store = store.write().await;
                if store.remove_expired(&key, generation) {
                    debug!(generation, "entry expired and was removed");
                } else {
                    trace!(generation, "stale expiry ignored");
                }
            }
            _ = cancel => {}
        }
    })
}
