//! Fundsight Core — domain models, repository traits, and shared
//! error types for the authentication core.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{FundsightError, FundsightResult};
