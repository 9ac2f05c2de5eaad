//! # Logtune Core Library
//!
//! Runtime log-verbosity control: a process registers its identity once,
//! then a background subscription keeps an atomic verbosity gauge in sync
//! with a shared configuration record.
//!
//! ## Modules
//!
//! - `domain` - Core types (Component, LogLevel, LogProfile, SeverityMap)
//! - `repository` - Storage and watch traits
//! - `registry` - Registration guard and the verbosity registry
//! - `resolver` - Profile-to-threshold resolution
//! - `service` - Operator-facing profile mutations
//! - `error` - Typed registration errors

pub mod domain;
pub mod error;
pub mod registry;
pub mod repository;
pub mod resolver;
pub mod service;

mod subscription;

// Re-export commonly used types
pub use domain::*;
pub use error::RegisterError;
pub use registry::{ChangeHook, LogRegistry, RegisterOptions, Registration, VerbosityGauge};
pub use repository::*;
pub use service::ProfileService;
