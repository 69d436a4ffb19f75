//! Authentication error types.
//!
//! Every variant is a recoverable, user-facing outcome — none is
//! fatal to the process. The UI layer is expected to render
//! `InvalidCredentials`, `SessionExpired`, and `Forbidden` as generic
//! messages; in particular, `InvalidCredentials` deliberately does
//! not distinguish an unknown username from a wrong password.

use fundsight_core::error::FundsightError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username already exists")]
    DuplicateUsername,

    #[error("password does not meet the minimum strength policy")]
    WeakPassword,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("session has expired")]
    SessionExpired,

    #[error("session not found")]
    SessionNotFound,

    #[error("not authenticated")]
    Unauthenticated,

    #[error("not authorized for this dashboard")]
    Forbidden,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error("repository error: {0}")]
    Repository(#[from] FundsightError),
}

pub type AuthResult<T> = Result<T, AuthError>;
