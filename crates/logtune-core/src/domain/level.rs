//! Symbolic verbosity levels

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic verbosity level assignable to a component.
///
/// `NotSet` is the unassigned placeholder: it never matches during
/// resolution and the write path rejects it as an assignment target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// No level assigned
    #[default]
    NotSet,

    /// Standard operational logging
    Info,

    /// Diagnostic logging
    Debug,

    /// Maximum detail
    Verbose,
}

impl LogLevel {
    /// Whether this is a real assignment (anything but `NotSet`)
    pub fn is_assigned(&self) -> bool {
        !matches!(self, LogLevel::NotSet)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::NotSet => "not_set",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
        };
        f.write_str(s)
    }
}
