//! Logtune Storage Layer
//!
//! Concrete profile repositories behind the core trait.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │            Application / CLI / Registration          │
//! ├──────────────────────────────────────────────────────┤
//! │                 ProfileRepository                    │
//! │              (get / put / watch trait)               │
//! ├───────────────────────────┬──────────────────────────┤
//! │     MemoryProfileStore    │     FileProfileStore     │
//! │  (map + fan-out feeds)    │  (JSON files + notify)   │
//! └───────────────────────────┴──────────────────────────┘
//! ```
//!
//! [`MemoryProfileStore`] keeps records in process and feeds watchers
//! directly; it doubles as the event source for tests. [`FileProfileStore`]
//! keeps each record as a JSON document in a shared directory and turns OS
//! file notifications into the ordered event stream the core consumes.

mod file;
mod memory;

pub use file::FileProfileStore;
pub use memory::MemoryProfileStore;
