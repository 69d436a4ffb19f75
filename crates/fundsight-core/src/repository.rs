//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The backing store is shared
//! by concurrent request handlers, so every mutating operation must
//! be atomic with respect to concurrent callers — in particular, two
//! simultaneous creates of the same username must yield exactly one
//! success and one `AlreadyExists` failure.

use uuid::Uuid;

use crate::error::FundsightResult;
use crate::models::{
    account::{Account, CreateAccount},
    session::{CreateSession, Session},
};

/// Credential store: persists accounts and their password hashes.
pub trait AccountRepository: Send + Sync {
    /// Create an account, hashing the password and assigning a fresh
    /// role-matching client ID. Fails with `AlreadyExists` if the
    /// username is taken.
    fn create(&self, input: CreateAccount) -> impl Future<Output = FundsightResult<Account>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = FundsightResult<Account>> + Send;
    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = FundsightResult<Account>> + Send;
    /// Stamp `last_login_at` with the current time.
    fn record_login(&self, id: Uuid) -> impl Future<Output = FundsightResult<()>> + Send;
}

/// Session store: maps token digests to active sessions.
pub trait SessionRepository: Send + Sync {
    fn create(&self, input: CreateSession)
    -> impl Future<Output = FundsightResult<Session>> + Send;
    fn get_by_token_hash(
        &self,
        token_hash: &str,
    ) -> impl Future<Output = FundsightResult<Session>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = FundsightResult<()>> + Send;
    /// Idempotent: deleting an absent token is not an error.
    fn delete_by_token_hash(
        &self,
        token_hash: &str,
    ) -> impl Future<Output = FundsightResult<()>> + Send;
    /// Remove every session past its expiry, returning the count.
    fn delete_expired(&self) -> impl Future<Output = FundsightResult<u64>> + Send;
}
