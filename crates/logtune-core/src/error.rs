//! Typed registration errors

use thiserror::Error;

/// Errors surfaced by [`Registration::register`](crate::Registration::register).
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Opening the change subscription failed. Registration did not happen;
    /// the guard stays empty so a later call can retry.
    #[error("failed to open profile watch: {source}")]
    WatchSetup {
        #[source]
        source: anyhow::Error,
    },
}
