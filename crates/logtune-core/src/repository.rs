//! Repository trait for profile storage and change notification
//!
//! Defines the interface the core consumes without fixing the backing store
//! (file directory, in-memory feed, remote config service, ...).

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::LogProfile;

/// Result type for repository operations
pub type RepoResult<T> = anyhow::Result<T>;

/// A change to a watched profile record.
///
/// Payloads are raw record bytes: decoding happens in the subscription
/// worker, so a malformed record is a per-event warning rather than a
/// stream error.
#[derive(Debug, Clone)]
pub enum ProfileEvent {
    /// Record appeared. Includes the synthetic event delivered for a record
    /// that already existed when the watch opened.
    Added(Vec<u8>),

    /// Record was replaced
    Updated(Vec<u8>),

    /// Record is gone
    Deleted,
}

/// An open watch on a profile record.
///
/// Events arrive in the order the store observed them. Dropping the watch
/// releases whatever transport resources the store tied to it (file watcher
/// handles, forwarder tasks).
pub struct ProfileWatch {
    events: mpsc::Receiver<ProfileEvent>,
    _guard: Option<Box<dyn std::any::Any + Send>>,
}

impl ProfileWatch {
    /// Build a watch from a channel receiver and an optional transport guard
    /// that must stay alive as long as events should flow.
    pub fn new(
        events: mpsc::Receiver<ProfileEvent>,
        guard: Option<Box<dyn std::any::Any + Send>>,
    ) -> Self {
        Self {
            events,
            _guard: guard,
        }
    }

    /// Next event, or `None` once the store side has shut down.
    pub async fn next(&mut self) -> Option<ProfileEvent> {
        self.events.recv().await
    }
}

/// Profile repository trait
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get a profile by name (`None` when the record does not exist)
    async fn get(&self, name: &str) -> RepoResult<Option<LogProfile>>;

    /// Create the profile if absent, otherwise replace it wholesale
    async fn put(&self, profile: &LogProfile) -> RepoResult<()>;

    /// Open an ordered change stream for the named profile.
    ///
    /// Implementations deliver a synthetic [`ProfileEvent::Added`] first when
    /// the record already exists, so a late-starting watcher converges
    /// without waiting for the next write.
    async fn watch(&self, name: &str) -> RepoResult<ProfileWatch>;
}
