//! Operator command implementations

pub mod set;
pub mod show;
pub mod unset;
pub mod watch;
