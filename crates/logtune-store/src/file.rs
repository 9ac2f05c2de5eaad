//! File-backed profile store
//!
//! Each profile is a JSON document named `<profile>.json` inside a shared
//! directory (typically a mounted config volume). Writes go through a temp
//! file and rename so watchers only ever read complete documents. `watch`
//! turns OS file notifications into the ordered event stream the core
//! consumes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use logtune_core::{LogProfile, ProfileEvent, ProfileRepository, ProfileWatch, RepoResult};

/// Per-watch channel capacity
const EVENT_CAPACITY: usize = 100;

/// File-backed implementation of [`ProfileRepository`].
pub struct FileProfileStore {
    dir: PathBuf,
}

impl FileProfileStore {
    /// Open a store over `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create profile directory {:?}", dir))?;
        }
        Ok(Self { dir })
    }

    /// Directory holding the record files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record file for `name`
    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Remove a record file, notifying watchers through the OS.
    /// Returns whether the file existed.
    pub async fn remove(&self, name: &str) -> RepoResult<bool> {
        let path = self.profile_path(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("failed to remove {:?}", path)),
        }
    }

    fn open_watcher(
        &self,
        path: PathBuf,
        tx: mpsc::Sender<ProfileEvent>,
    ) -> Result<RecommendedWatcher> {
        let mut watcher =
            notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
                Ok(event) => handle_fs_event(&path, &tx, event),
                Err(e) => {
                    error!(error = %e, "[FileStore] Watch backend error");
                }
            })
            .context("failed to create file watcher")?;

        watcher
            .watch(&self.dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch profile directory {:?}", self.dir))?;

        Ok(watcher)
    }
}

#[async_trait]
impl ProfileRepository for FileProfileStore {
    async fn get(&self, name: &str) -> RepoResult<Option<LogProfile>> {
        let path = self.profile_path(name);
        let payload = match tokio::fs::read(&path).await {
            Ok(payload) => payload,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("failed to read {:?}", path)),
        };
        let profile = serde_json::from_slice(&payload)
            .with_context(|| format!("failed to parse profile record {:?}", path))?;
        Ok(Some(profile))
    }

    async fn put(&self, profile: &LogProfile) -> RepoResult<()> {
        let path = self.profile_path(&profile.name);
        let payload = serde_json::to_vec_pretty(profile)?;

        // Write-then-rename keeps watchers from ever seeing a half-written
        // document.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &payload)
            .await
            .with_context(|| format!("failed to write {:?}", tmp))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("failed to replace {:?}", path))?;

        debug!(profile = %profile.name, ?path, "[FileStore] Stored profile record");
        Ok(())
    }

    async fn watch(&self, name: &str) -> RepoResult<ProfileWatch> {
        let (tx, rx) = mpsc::channel(EVENT_CAPACITY);
        let path = self.profile_path(name);

        let watcher = self.open_watcher(path.clone(), tx.clone())?;

        // Synthetic initial event: an already-existing record applies
        // immediately instead of waiting for the next write. The watcher is
        // already running, so a write racing this read is delivered too.
        match tokio::fs::read(&path).await {
            Ok(payload) => {
                let _ = tx.send(ProfileEvent::Added(payload)).await;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).with_context(|| format!("failed to read {:?}", path)),
        }

        info!(?path, "[FileStore] Watching profile record");
        Ok(ProfileWatch::new(rx, Some(Box::new(watcher))))
    }
}

/// Runs on the notify callback thread. The record is re-read on every
/// matching notification; the current file state decides between a payload
/// event and a delete, whatever the exact rename/create kind was.
fn handle_fs_event(path: &Path, tx: &mpsc::Sender<ProfileEvent>, event: Event) {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return;
    }

    // Filename comparison: the watch is non-recursive, and backend paths may
    // differ from ours in symlink resolution.
    if !event
        .paths
        .iter()
        .any(|p| p.file_name() == path.file_name())
    {
        return;
    }

    let change = match std::fs::read(path) {
        Ok(payload) => {
            if matches!(event.kind, EventKind::Create(_)) {
                ProfileEvent::Added(payload)
            } else {
                ProfileEvent::Updated(payload)
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ProfileEvent::Deleted,
        Err(e) => {
            warn!(?path, error = %e, "[FileStore] Failed to read changed record");
            return;
        }
    };

    if let Err(e) = tx.blocking_send(change) {
        debug!(error = %e, "[FileStore] Watch closed, dropping event");
    }
}
