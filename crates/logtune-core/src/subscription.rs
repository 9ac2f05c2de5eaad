//! Change subscription worker
//!
//! A single task per registration consumes the profile watch in arrival
//! order and applies each event to the registry. Decode failures are logged
//! and skipped; cancellation and stream end both stop the worker cleanly.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::LogProfile;
use crate::registry::LogRegistry;
use crate::repository::{ProfileEvent, ProfileWatch};

/// Spawn the subscription worker feeding `registry` from `watch`.
pub(crate) fn spawn(registry: Arc<LogRegistry>, watch: ProfileWatch) -> JoinHandle<()> {
    tokio::spawn(run(registry, watch))
}

async fn run(registry: Arc<LogRegistry>, mut watch: ProfileWatch) {
    let cancel = registry.cancel_token();
    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!(
                    component = %registry.component(),
                    "[Subscription] Cancelled, stopping worker"
                );
                break;
            }
            event = watch.next() => {
                match event {
                    Some(event) => handle_event(&registry, event),
                    None => {
                        debug!(
                            component = %registry.component(),
                            "[Subscription] Watch closed, stopping worker"
                        );
                        break;
                    }
                }
            }
        }
    }
}

/// Events are applied inline on the worker task; ordering follows arrival
/// order with no coalescing.
fn handle_event(registry: &LogRegistry, event: ProfileEvent) {
    match event {
        ProfileEvent::Added(payload) | ProfileEvent::Updated(payload) => {
            match serde_json::from_slice::<LogProfile>(&payload) {
                Ok(profile) => registry.apply_profile(&profile),
                Err(e) => {
                    warn!(
                        component = %registry.component(),
                        error = %e,
                        "[Subscription] Skipping undecodable profile payload"
                    );
                }
            }
        }
        ProfileEvent::Deleted => registry.apply_fallback(),
    }
}
