//! Component identity - which process a verbosity setting targets

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a process that consumes verbosity settings.
///
/// Both fields are free-form strings; equality is exact match on both.
/// A setting targets a component only when namespace and identifier agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    /// Deployment scope (cluster namespace, environment name, ...)
    pub namespace: String,

    /// Role or binary name within the namespace
    pub identifier: String,
}

impl Component {
    /// Create a component identity
    pub fn new(namespace: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.identifier)
    }
}
