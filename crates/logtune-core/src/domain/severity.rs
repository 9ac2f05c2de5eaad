//! Numeric severity thresholds for symbolic levels

use serde::{Deserialize, Serialize};

use super::LogLevel;

/// Threshold applied for `LogLevel::Info`
pub const INFO_VERBOSITY: u32 = 0;

/// Threshold applied for `LogLevel::Debug`
pub const DEBUG_VERBOSITY: u32 = 5;

/// Threshold applied for `LogLevel::Verbose`
pub const VERBOSE_VERBOSITY: u32 = 10;

/// Numeric thresholds for each symbolic level, plus the fallback used when a
/// component has no assignment.
///
/// Higher means chattier by convention; nothing enforces monotonicity, so an
/// embedder may invert or flatten the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityMap {
    /// Threshold for `Info` assignments
    pub info: u32,

    /// Threshold for `Debug` assignments
    pub debug: u32,

    /// Threshold for `Verbose` assignments
    pub verbose: u32,

    /// Applied when no setting matches the registered component
    pub fallback: u32,
}

impl SeverityMap {
    /// Threshold for an assigned level. `NotSet` maps to the fallback.
    pub fn threshold(&self, level: LogLevel) -> u32 {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Debug => self.debug,
            LogLevel::Verbose => self.verbose,
            LogLevel::NotSet => self.fallback,
        }
    }
}

impl Default for SeverityMap {
    fn default() -> Self {
        Self {
            info: INFO_VERBOSITY,
            debug: DEBUG_VERBOSITY,
            verbose: VERBOSE_VERBOSITY,
            fallback: INFO_VERBOSITY,
        }
    }
}
