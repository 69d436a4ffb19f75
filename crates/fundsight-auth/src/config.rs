//! Authentication configuration.

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session lifetime in seconds (default: 86_400 = 24 hours).
    /// The window is fixed at issue time — no renewal on activity.
    pub session_lifetime_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id
    /// verification. Must match the pepper used at hashing time.
    pub pepper: Option<String>,
    /// Minimum password length for policy enforcement (default: 8).
    pub min_password_length: usize,
    /// Minimum number of character classes (lowercase, uppercase,
    /// digit, symbol) a password must mix (default: 3).
    pub min_password_classes: usize,
    /// Fixed password for the per-role demo accounts.
    pub demo_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_lifetime_secs: 86_400,
            pepper: None,
            min_password_length: 8,
            min_password_classes: 3,
            demo_password: "Demo-Fundsight-1".into(),
        }
    }
}
