//! `logtune show` - list current verbosity assignments

use std::sync::Arc;

use anyhow::Result;

use logtune_core::ProfileService;
use logtune_store::FileProfileStore;

pub async fn run(store: Arc<FileProfileStore>) -> Result<()> {
    let service = ProfileService::new(store);
    let settings = service.list_settings().await?;

    if settings.is_empty() {
        println!("No verbosity assignments");
        return Ok(());
    }

    println!("{:<24} {:<24} {}", "NAMESPACE", "IDENTIFIER", "VERBOSITY");
    for setting in settings {
        println!(
            "{:<24} {:<24} {}",
            setting.component.namespace, setting.component.identifier, setting.level
        );
    }
    Ok(())
}
