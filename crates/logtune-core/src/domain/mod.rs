//! Domain types for verbosity configuration
//!
//! This module contains all domain-level types for logtune:
//! - `Component` - identity of a watching process
//! - `LogLevel` - symbolic verbosity levels
//! - `LogProfile` / `ComponentSetting` - the shared configuration record
//! - `SeverityMap` - numeric thresholds for symbolic levels

mod component;
mod level;
mod profile;
mod severity;

pub use component::*;
pub use level::*;
pub use profile::*;
pub use severity::*;
