//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::client_id::ClientId;
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Unique, case-sensitive identifier chosen at registration.
    pub username: String,
    /// Argon2id PHC-format hash; the raw password is never stored.
    pub password_hash: String,
    pub role: Role,
    /// Role-prefixed dashboard scope, assigned once at creation.
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub username: String,
    /// Argon2id PHC-format hash. Hashing happens in the auth layer so
    /// the same pepper configuration drives hashing and verification.
    pub password_hash: String,
    pub role: Role,
}
