//! Domain models for Fundsight.
//!
//! These are the core types shared across all crates.

pub mod account;
pub mod client_id;
pub mod role;
pub mod session;
