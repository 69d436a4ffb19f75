//! Client ID model and generation.
//!
//! A client ID scopes dashboard data to a single account. The format
//! is `{PREFIX}_{XXXXXX}_{YYYYMMDD}` where the prefix encodes the
//! account role (`INV` for Investor, `IVE` for Investee), `XXXXXX` is
//! a random suffix drawn from `[A-Z0-9]`, and the date is the UTC day
//! the account was created. The ID is assigned once at account
//! creation and never changes.

use std::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::role::Role;

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 6;

/// A role-prefixed client identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Generate a fresh client ID for the given role, dated today
    /// (UTC).
    ///
    /// The 36^6 suffix space makes collisions negligible at any
    /// realistic account volume; the storage layer additionally keeps
    /// a unique index on the column.
    pub fn generate(role: Role) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        let date = Utc::now().format("%Y%m%d");
        ClientId(format!("{}_{suffix}_{date}", role.client_id_prefix()))
    }

    /// Parse a stored client ID, validating the format.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mut parts = s.splitn(3, '_');
        let prefix = parts.next().unwrap_or_default();
        let suffix = parts.next().unwrap_or_default();
        let date = parts.next().unwrap_or_default();

        if !matches!(prefix, "INV" | "IVE") {
            return Err(format!("invalid client ID prefix: {s}"));
        }
        if suffix.len() != SUFFIX_LEN
            || !suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(format!("invalid client ID suffix: {s}"));
        }
        if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("invalid client ID date: {s}"));
        }

        Ok(ClientId(s.to_string()))
    }

    /// The role this client ID was issued for.
    pub fn role(&self) -> Role {
        if self.0.starts_with("INV") {
            Role::Investor
        } else {
            Role::Investee
        }
    }

    /// Whether this ID's prefix matches the given role.
    pub fn matches_role(&self, role: Role) -> bool {
        self.0.starts_with(role.client_id_prefix())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_matches_role_pattern() {
        let inv = ClientId::generate(Role::Investor);
        assert!(inv.as_str().starts_with("INV_"));
        assert!(inv.matches_role(Role::Investor));
        assert!(!inv.matches_role(Role::Investee));

        let ive = ClientId::generate(Role::Investee);
        assert!(ive.as_str().starts_with("IVE_"));
        assert_eq!(ive.role(), Role::Investee);
    }

    #[test]
    fn generated_id_parses_back() {
        let id = ClientId::generate(Role::Investor);
        let parsed = ClientId::parse(id.as_str()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn suffix_and_date_have_fixed_shape() {
        let id = ClientId::generate(Role::Investee);
        let parts: Vec<&str> = id.as_str().split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 6);
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(ClientId::parse("ADM_AB12CD_20240101").is_err());
        assert!(ClientId::parse("INV_ab12cd_20240101").is_err());
        assert!(ClientId::parse("INV_AB12CD_2024").is_err());
        assert!(ClientId::parse("INV_AB12CD").is_err());
        assert!(ClientId::parse("").is_err());
    }

    #[test]
    fn two_generated_ids_differ() {
        let a = ClientId::generate(Role::Investor);
        let b = ClientId::generate(Role::Investor);
        assert_ne!(a, b);
    }
}
