//! Registration guard and the process-local verbosity registry
//!
//! A process registers its identity once; the returned [`LogRegistry`] owns
//! the change subscription and exposes the effective verbosity threshold as
//! a lock-free gauge. The guard is injectable state owned by the composition
//! root, not a process global, so embedders and tests control its lifetime.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{Component, LogProfile, SeverityMap, DEFAULT_PROFILE};
use crate::error::RegisterError;
use crate::repository::ProfileRepository;
use crate::resolver;
use crate::subscription;

/// Hook invoked with the new threshold whenever an applied event changes
/// the gauge.
pub type ChangeHook = Arc<dyn Fn(u32) + Send + Sync>;

/// Options for [`Registration::register`].
pub struct RegisterOptions {
    /// Identity to resolve settings for
    pub component: Component,

    /// Name of the profile record to watch
    pub profile: String,

    /// Initial numeric thresholds
    pub severity: SeverityMap,

    /// Invoked after each applied change of the gauge
    pub change_hook: Option<ChangeHook>,
}

impl RegisterOptions {
    /// Options for `component` against the default profile record with
    /// default thresholds.
    pub fn new(component: Component) -> Self {
        Self {
            component,
            profile: DEFAULT_PROFILE.to_string(),
            severity: SeverityMap::default(),
            change_hook: None,
        }
    }

    /// Watch a named profile record instead of the default one
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Start from custom numeric thresholds
    pub fn with_severity(mut self, severity: SeverityMap) -> Self {
        self.severity = severity;
        self
    }

    /// Observe gauge changes (e.g. to reload a subscriber filter)
    pub fn with_change_hook(mut self, hook: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.change_hook = Some(Arc::new(hook));
        self
    }
}

/// Atomic rendering of [`SeverityMap`]: mutators store individual fields
/// while the subscription worker snapshots all four.
struct SeverityCells {
    info: AtomicU32,
    debug: AtomicU32,
    verbose: AtomicU32,
    fallback: AtomicU32,
}

impl SeverityCells {
    fn new(map: SeverityMap) -> Self {
        Self {
            info: AtomicU32::new(map.info),
            debug: AtomicU32::new(map.debug),
            verbose: AtomicU32::new(map.verbose),
            fallback: AtomicU32::new(map.fallback),
        }
    }

    // Independent counters with no payload behind them; relaxed loads and
    // stores are sufficient.
    fn snapshot(&self) -> SeverityMap {
        SeverityMap {
            info: self.info.load(Ordering::Relaxed),
            debug: self.debug.load(Ordering::Relaxed),
            verbose: self.verbose.load(Ordering::Relaxed),
            fallback: self.fallback.load(Ordering::Relaxed),
        }
    }
}

/// Cloneable lock-free view of the effective verbosity threshold.
///
/// Hand this to logging call sites; reads are a single atomic load.
#[derive(Clone)]
pub struct VerbosityGauge {
    value: Arc<AtomicU32>,
}

impl VerbosityGauge {
    /// Current threshold
    pub fn get(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }

    /// Whether a message at `verbosity` should be emitted
    pub fn enabled(&self, verbosity: u32) -> bool {
        verbosity <= self.get()
    }
}

/// Process-local registry: the registered identity, its severity table, and
/// the effective verbosity gauge fed by the change subscription.
pub struct LogRegistry {
    component: Component,
    severity: SeverityCells,
    verbosity: Arc<AtomicU32>,
    change_hook: Option<ChangeHook>,
    cancel: CancellationToken,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl LogRegistry {
    /// Identity this registry resolves for
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Current effective verbosity threshold
    pub fn verbosity(&self) -> u32 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Cloneable handle onto the gauge for logging call sites
    pub fn gauge(&self) -> VerbosityGauge {
        VerbosityGauge {
            value: self.verbosity.clone(),
        }
    }

    /// Snapshot of the current numeric thresholds
    pub fn severity(&self) -> SeverityMap {
        self.severity.snapshot()
    }

    /// Override the threshold applied for `Info` assignments.
    ///
    /// Safe to call while the subscription runs; the next delivered event
    /// resolves with the new number. The gauge is not recomputed eagerly.
    pub fn set_info_verbosity(&self, value: u32) {
        self.severity.info.store(value, Ordering::Relaxed);
    }

    /// Override the threshold applied for `Debug` assignments
    pub fn set_debug_verbosity(&self, value: u32) {
        self.severity.debug.store(value, Ordering::Relaxed);
    }

    /// Override the threshold applied for `Verbose` assignments
    pub fn set_verbose_verbosity(&self, value: u32) {
        self.severity.verbose.store(value, Ordering::Relaxed);
    }

    /// Override the threshold applied when no setting matches
    pub fn set_fallback_verbosity(&self, value: u32) {
        self.severity.fallback.store(value, Ordering::Relaxed);
    }

    /// Resolve `profile` for the registered identity and store the result
    /// in the gauge.
    pub(crate) fn apply_profile(&self, profile: &LogProfile) {
        let severity = self.severity.snapshot();
        self.apply(resolver::resolve(profile, &self.component, &severity));
    }

    /// Store the fallback threshold in the gauge (profile record deleted).
    pub(crate) fn apply_fallback(&self) {
        self.apply(self.severity.snapshot().fallback);
    }

    fn apply(&self, threshold: u32) {
        let previous = self.verbosity.swap(threshold, Ordering::Relaxed);
        if previous == threshold {
            return;
        }
        debug!(
            component = %self.component,
            previous,
            threshold,
            "[Registry] Effective verbosity changed"
        );
        if let Some(hook) = &self.change_hook {
            hook(threshold);
        }
    }

    pub(crate) fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stop the subscription worker and wait for it to exit. Idempotent;
    /// after the first call further invocations return immediately.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(
                    component = %self.component,
                    error = %e,
                    "[Registry] Subscription worker ended abnormally"
                );
            }
        }
    }
}

/// Exactly-once registration guard.
///
/// Owned by the composition root and shared wherever registration may be
/// triggered; every caller gets the same [`LogRegistry`] back. Concurrent
/// callers block until the first construction completes, then observe the
/// same handle.
///
/// # Example
/// ```ignore
/// let registration = Registration::new();
/// let registry = registration
///     .register(RegisterOptions::new(Component::new("eng", "ui")), store)
///     .await?;
/// let gauge = registry.gauge();
/// ```
pub struct Registration {
    cell: OnceCell<Arc<LogRegistry>>,
}

impl Registration {
    /// Create an empty guard
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Register `options.component` and start the change subscription.
    ///
    /// The first call constructs the registry, opens the watch, and spawns
    /// the subscription worker. Every later call returns the same handle
    /// without re-running construction, whatever options it carries. A watch
    /// setup failure leaves the guard empty so registration can be retried.
    pub async fn register(
        &self,
        options: RegisterOptions,
        store: Arc<dyn ProfileRepository>,
    ) -> Result<Arc<LogRegistry>, RegisterError> {
        self.cell
            .get_or_try_init(|| async move {
                info!(
                    component = %options.component,
                    profile = %options.profile,
                    "[Registry] Registering for verbosity updates"
                );

                let watch = store
                    .watch(&options.profile)
                    .await
                    .map_err(|source| RegisterError::WatchSetup { source })?;

                let registry = Arc::new(LogRegistry {
                    component: options.component,
                    severity: SeverityCells::new(options.severity),
                    verbosity: Arc::new(AtomicU32::new(options.severity.fallback)),
                    change_hook: options.change_hook,
                    cancel: CancellationToken::new(),
                    worker: Mutex::new(None),
                });

                let handle = subscription::spawn(registry.clone(), watch);
                *registry.worker.lock() = Some(handle);

                Ok(registry)
            })
            .await
            .cloned()
    }

    /// Registry handle, if registration has completed
    pub fn registered(&self) -> Option<Arc<LogRegistry>> {
        self.cell.get().cloned()
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::new()
    }
}
