//! `logtune unset` - remove a component's verbosity assignment

use std::sync::Arc;

use anyhow::Result;

use logtune_core::{Component, ProfileService};
use logtune_store::FileProfileStore;

use crate::cli::TargetArgs;

pub async fn run(store: Arc<FileProfileStore>, args: TargetArgs) -> Result<()> {
    let service = ProfileService::new(store);
    let component = Component::new(args.namespace, args.identifier);

    if service.unset_level(&component).await? {
        println!("Removed assignment for {}", component);
    } else {
        println!("No assignment for {}", component);
    }
    Ok(())
}
