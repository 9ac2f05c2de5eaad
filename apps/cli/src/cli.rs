//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use logtune_core::LogLevel;

/// Runtime log-verbosity control for distributed components.
///
/// Components register against a shared profile record; `logtune` edits that
/// record and running processes pick the change up without restarting.
#[derive(Parser, Debug)]
#[command(name = "logtune")]
#[command(about = "Manage runtime log-verbosity assignments")]
#[command(version)]
pub struct Cli {
    /// Directory holding profile records (default: LOGTUNE_DIR or the
    /// per-user data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assign a verbosity level to a component
    Set(SetArgs),

    /// Remove a component's verbosity assignment
    Unset(TargetArgs),

    /// List current verbosity assignments
    Show,

    /// Register a component and follow its effective verbosity live
    Watch(TargetArgs),
}

/// Component selection shared by the commands.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Component namespace
    #[arg(long)]
    pub namespace: String,

    /// Component identifier
    #[arg(long)]
    pub identifier: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub level: LevelFlags,
}

/// Level selection; exactly one flag must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct LevelFlags {
    /// Assign the info level
    #[arg(long)]
    pub info: bool,

    /// Assign the debug level
    #[arg(long)]
    pub debug: bool,

    /// Assign the verbose level
    #[arg(long)]
    pub verbose: bool,
}

impl LevelFlags {
    /// The selected level
    pub fn level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Verbose
        } else if self.debug {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}
