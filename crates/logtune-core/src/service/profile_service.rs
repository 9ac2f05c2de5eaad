//! Profile Service
//!
//! Operator-facing mutations of the shared profile record. Each command is a
//! read-modify-write against the repository; the record is created lazily by
//! the first assignment and never deleted here.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::info;

use crate::domain::{Component, ComponentSetting, LogLevel, LogProfile, DEFAULT_PROFILE};
use crate::repository::{ProfileRepository, RepoResult};

/// Service for reading and mutating verbosity assignments.
///
/// # Example
/// ```ignore
/// let service = ProfileService::new(store);
/// service.set_level(Component::new("eng", "ui"), LogLevel::Debug).await?;
/// let removed = service.unset_level(&Component::new("eng", "ui")).await?;
/// ```
pub struct ProfileService {
    store: Arc<dyn ProfileRepository>,
    profile: String,
}

impl ProfileService {
    /// Service over the default profile record
    pub fn new(store: Arc<dyn ProfileRepository>) -> Self {
        Self::with_profile(store, DEFAULT_PROFILE)
    }

    /// Service over a named profile record
    pub fn with_profile(store: Arc<dyn ProfileRepository>, profile: impl Into<String>) -> Self {
        Self {
            store,
            profile: profile.into(),
        }
    }

    /// Assign `level` to `component`, replacing an existing entry in place or
    /// appending a new one. Creates the profile record on first use.
    ///
    /// `NotSet` is not a valid assignment; use
    /// [`unset_level`](Self::unset_level) to remove one.
    pub async fn set_level(&self, component: Component, level: LogLevel) -> RepoResult<()> {
        if !level.is_assigned() {
            bail!("cannot assign the unset level; use unset to remove an assignment");
        }

        let mut profile = self.load_or_new().await?;
        profile.set(component.clone(), level);
        self.store
            .put(&profile)
            .await
            .with_context(|| format!("failed to store profile '{}'", self.profile))?;

        info!(
            component = %component,
            level = %level,
            "[Profile] Updated verbosity assignment"
        );
        Ok(())
    }

    /// Remove the assignment for `component`, reporting whether one existed.
    ///
    /// Removing a missing assignment is a successful no-op and does not
    /// create the record.
    pub async fn unset_level(&self, component: &Component) -> RepoResult<bool> {
        let Some(mut profile) = self
            .store
            .get(&self.profile)
            .await
            .with_context(|| format!("failed to load profile '{}'", self.profile))?
        else {
            return Ok(false);
        };

        if !profile.unset(component) {
            return Ok(false);
        }

        self.store
            .put(&profile)
            .await
            .with_context(|| format!("failed to store profile '{}'", self.profile))?;

        info!(component = %component, "[Profile] Removed verbosity assignment");
        Ok(true)
    }

    /// All assignments sorted by (namespace, identifier) for display.
    ///
    /// A missing record reads as empty.
    pub async fn list_settings(&self) -> RepoResult<Vec<ComponentSetting>> {
        let profile = self.load_or_new().await?;
        Ok(profile.sorted_settings())
    }

    async fn load_or_new(&self) -> RepoResult<LogProfile> {
        let existing = self
            .store
            .get(&self.profile)
            .await
            .with_context(|| format!("failed to load profile '{}'", self.profile))?;
        Ok(existing.unwrap_or_else(|| LogProfile::new(self.profile.as_str())))
    }
}
