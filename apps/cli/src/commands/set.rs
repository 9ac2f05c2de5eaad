//! `logtune set` - assign a verbosity level to a component

use std::sync::Arc;

use anyhow::Result;

use logtune_core::{Component, ProfileService};
use logtune_store::FileProfileStore;

use crate::cli::SetArgs;

pub async fn run(store: Arc<FileProfileStore>, args: SetArgs) -> Result<()> {
    let service = ProfileService::new(store);
    let component = Component::new(args.target.namespace, args.target.identifier);
    let level = args.level.level();

    service.set_level(component.clone(), level).await?;
    println!("Set {} to {}", component, level);
    Ok(())
}
