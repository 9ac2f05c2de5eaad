//! logtune - operator CLI for runtime verbosity profiles

mod cli;
mod commands;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use logtune_store::FileProfileStore;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let dir = resolve_profile_dir(cli.dir)?;
    let store = Arc::new(FileProfileStore::open(&dir)?);

    match cli.command {
        Command::Set(args) => {
            logging::init();
            commands::set::run(store, args).await
        }
        Command::Unset(args) => {
            logging::init();
            commands::unset::run(store, args).await
        }
        Command::Show => {
            logging::init();
            commands::show::run(store).await
        }
        // Watch installs its own reloadable subscriber.
        Command::Watch(args) => commands::watch::run(store, args).await,
    }
}

/// Profile directory resolution: `--dir` flag, then `LOGTUNE_DIR`, then the
/// per-user data directory.
fn resolve_profile_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("LOGTUNE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_local_dir()
        .context("could not determine a per-user data directory; pass --dir")?;
    Ok(base.join("logtune").join("profiles"))
}
