//! Level resolution - from a profile record to a numeric threshold

use crate::domain::{Component, LogProfile, SeverityMap};

/// Resolve the effective verbosity for `component` under `profile`.
///
/// Every setting is scanned without stopping early, so a later assigned
/// entry for the same component overrides an earlier one. Entries whose
/// level is `NotSet` are ignored. With no assigned match the fallback
/// threshold applies.
pub fn resolve(profile: &LogProfile, component: &Component, severity: &SeverityMap) -> u32 {
    match profile.level_for(component) {
        Some(level) => severity.threshold(level),
        None => severity.fallback,
    }
}
