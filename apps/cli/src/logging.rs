//! Tracing setup for the CLI
//!
//! One-shot commands get a compact console subscriber on stderr. Watch mode
//! installs a reloadable filter instead, so the change subscription can raise
//! and lower this process's own logging as the profile changes.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Environment filter for log levels.
/// RUST_LOG takes precedence, with sensible defaults for our crates.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default filter when RUST_LOG is not set
        EnvFilter::new("info")
            .add_directive("logtune_core=debug".parse().unwrap())
            .add_directive("logtune_store=debug".parse().unwrap())
    })
}

/// Console layer on stderr so command output on stdout stays pipeable.
fn console_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .compact()
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
}

/// Initialize console logging for one-shot commands.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer())
        .init();
}

/// Handle for swapping the active filter at runtime.
pub struct ReloadHandle {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl ReloadHandle {
    /// Replace the filter with a new directive string.
    pub fn reload(&self, directive: &str) -> Result<()> {
        self.handle
            .modify(|filter| {
                *filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::default());
            })
            .context("failed to reload log filter")?;
        Ok(())
    }
}

/// Initialize console logging with a reloadable filter and return the handle
/// for swapping it.
pub fn init_reloadable() -> ReloadHandle {
    let (filter, handle) = reload::Layer::new(env_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer())
        .init();

    ReloadHandle { handle }
}
