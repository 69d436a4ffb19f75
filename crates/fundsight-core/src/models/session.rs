//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::client_id::ClientId;
use crate::models::role::Role;

/// An authenticated session.
///
/// `role` and `client_id` are denormalized copies of the owning
/// account's fields at issue time. The raw token is never persisted;
/// only its SHA-256 digest is kept in `token_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub token_hash: String,
    pub username: String,
    pub role: Role,
    pub client_id: ClientId,
    pub issued_at: DateTime<Utc>,
    /// Fixed, non-sliding expiry: `issued_at` plus the configured
    /// session lifetime.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateSession {
    pub token_hash: String,
    pub username: String,
    pub role: Role,
    pub client_id: ClientId,
    /// Stamped by the caller so that `expires_at` is exactly
    /// `issued_at` plus the configured lifetime.
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
