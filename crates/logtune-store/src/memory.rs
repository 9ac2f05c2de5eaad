//! In-memory profile store
//!
//! Records live in a shared map; change events fan out over a broadcast
//! channel to every open watch. Serves single-process embeddings and is the
//! scriptable event source used by tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc, RwLock};
use tracing::warn;

use logtune_core::{LogProfile, ProfileEvent, ProfileRepository, ProfileWatch, RepoResult};

/// Fan-out capacity shared by all watchers
const EVENT_CAPACITY: usize = 256;

/// In-memory implementation of [`ProfileRepository`].
///
/// Cloning is cheap; clones share the same records and watchers.
#[derive(Clone)]
pub struct MemoryProfileStore {
    inner: Arc<Inner>,
}

struct Inner {
    profiles: RwLock<HashMap<String, LogProfile>>,
    changes: broadcast::Sender<(String, ProfileEvent)>,
}

impl MemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                profiles: RwLock::new(HashMap::new()),
                changes,
            }),
        }
    }

    /// Remove a record, notifying watchers. Returns whether one existed.
    pub async fn remove(&self, name: &str) -> RepoResult<bool> {
        let mut profiles = self.inner.profiles.write().await;
        if profiles.remove(name).is_none() {
            return Ok(false);
        }
        let _ = self
            .inner
            .changes
            .send((name.to_string(), ProfileEvent::Deleted));
        Ok(true)
    }
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileStore {
    async fn get(&self, name: &str) -> RepoResult<Option<LogProfile>> {
        Ok(self.inner.profiles.read().await.get(name).cloned())
    }

    async fn put(&self, profile: &LogProfile) -> RepoResult<()> {
        let payload = serde_json::to_vec(profile)?;
        let mut profiles = self.inner.profiles.write().await;
        let event = if profiles
            .insert(profile.name.clone(), profile.clone())
            .is_some()
        {
            ProfileEvent::Updated(payload)
        } else {
            ProfileEvent::Added(payload)
        };
        // Sent while holding the write lock so watchers observe writes in
        // store order.
        let _ = self.inner.changes.send((profile.name.clone(), event));
        Ok(())
    }

    async fn watch(&self, name: &str) -> RepoResult<ProfileWatch> {
        let (tx, rx) = mpsc::channel(EVENT_CAPACITY);

        // Subscribe before snapshotting so a write landing in between is
        // relayed rather than lost.
        let mut changes = self.inner.changes.subscribe();
        let initial = {
            let profiles = self.inner.profiles.read().await;
            profiles.get(name).map(serde_json::to_vec).transpose()?
        };
        if let Some(payload) = initial {
            let _ = tx.send(ProfileEvent::Added(payload)).await;
        }

        let watch_name = name.to_string();
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok((event_name, event)) => {
                        if event_name != watch_name {
                            continue;
                        }
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "[MemoryStore] Watch lagged, events dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(ProfileWatch::new(rx, None))
    }
}
