//! Log profile - the shared verbosity configuration record

use serde::{Deserialize, Serialize};

use super::{Component, LogLevel};

/// Name of the single profile record every watcher follows.
pub const DEFAULT_PROFILE: &str = "default";

/// One (component, level) assignment inside a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSetting {
    /// Which component this assignment targets
    pub component: Component,

    /// Assigned level; absent in JSON means `NotSet`
    #[serde(default)]
    pub level: LogLevel,
}

/// The shared configuration aggregate: a named, ordered list of settings.
///
/// Operator tooling keeps at most one setting per component (`set` replaces
/// in place). Records written by other tools may carry duplicates; resolution
/// stays deterministic because the last assigned match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogProfile {
    /// Record name (`"default"` for the shared profile)
    pub name: String,

    /// Ordered component assignments
    #[serde(default)]
    pub settings: Vec<ComponentSetting>,
}

impl LogProfile {
    /// Create an empty profile
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: Vec::new(),
        }
    }

    /// Assign `level` to `component`, replacing an existing entry in place
    /// or appending a new one.
    pub fn set(&mut self, component: Component, level: LogLevel) {
        for setting in &mut self.settings {
            if setting.component == component {
                setting.level = level;
                return;
            }
        }
        self.settings.push(ComponentSetting { component, level });
    }

    /// Remove the setting for `component`. Returns whether one was present.
    pub fn unset(&mut self, component: &Component) -> bool {
        let before = self.settings.len();
        self.settings.retain(|s| &s.component != component);
        self.settings.len() != before
    }

    /// Last assigned level for `component`, if any entry matches.
    ///
    /// The scan never stops early, so a later entry for the same component
    /// overrides an earlier one. `NotSet` entries can neither match nor mask
    /// an earlier match.
    pub fn level_for(&self, component: &Component) -> Option<LogLevel> {
        let mut found = None;
        for setting in &self.settings {
            if setting.level.is_assigned() && &setting.component == component {
                found = Some(setting.level);
            }
        }
        found
    }

    /// Settings sorted by (namespace, identifier) for display.
    ///
    /// Stored order is left untouched; resolution depends on it.
    pub fn sorted_settings(&self) -> Vec<ComponentSetting> {
        let mut sorted = self.settings.clone();
        sorted.sort_by(|a, b| {
            a.component
                .namespace
                .cmp(&b.component.namespace)
                .then_with(|| a.component.identifier.cmp(&b.component.identifier))
        });
        sorted
    }
}

impl Default for LogProfile {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE)
    }
}
