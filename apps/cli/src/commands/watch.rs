//! `logtune watch` - register a component and follow its verbosity live
//!
//! Demonstrates the full loop: the process registers its identity, the
//! change subscription keeps the gauge current, and the change hook swaps
//! this process's own tracing filter to match.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use logtune_core::{Component, RegisterOptions, Registration, DEBUG_VERBOSITY, VERBOSE_VERBOSITY};
use logtune_store::FileProfileStore;

use crate::cli::TargetArgs;
use crate::logging;

/// Tracing directive for a numeric threshold.
fn directive_for(threshold: u32) -> &'static str {
    if threshold >= VERBOSE_VERBOSITY {
        "trace"
    } else if threshold >= DEBUG_VERBOSITY {
        "debug"
    } else {
        "info"
    }
}

pub async fn run(store: Arc<FileProfileStore>, args: TargetArgs) -> Result<()> {
    let reload = logging::init_reloadable();
    let component = Component::new(args.namespace, args.identifier);

    let registration = Registration::new();
    let options = RegisterOptions::new(component.clone()).with_change_hook(move |threshold| {
        let directive = directive_for(threshold);
        println!("Effective verbosity is now {} ({})", threshold, directive);
        if let Err(e) = reload.reload(directive) {
            eprintln!("Failed to reload log filter: {}", e);
        }
    });

    let registry = registration.register(options, store).await?;
    println!(
        "Watching verbosity for {} (current threshold {}), press Ctrl-C to stop",
        component,
        registry.verbosity()
    );

    tokio::signal::ctrl_c().await?;
    info!("[Watch] Interrupt received, shutting down");
    registry.shutdown().await;
    Ok(())
}
