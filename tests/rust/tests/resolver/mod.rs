//! Resolver tests
//!
//! The resolver is a pure function; these tests pin its contract from the
//! public API.

mod resolution;
