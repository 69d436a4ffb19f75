//! Authentication service — registration, login, demo bootstrap,
//! logout, and role-scoped authorization orchestration.

use chrono::{DateTime, Duration, Utc};
use fundsight_core::error::FundsightError;
use fundsight_core::models::account::{Account, CreateAccount};
use fundsight_core::models::client_id::ClientId;
use fundsight_core::models::role::Role;
use fundsight_core::models::session::{CreateSession, Session};
use fundsight_core::repository::{AccountRepository, SessionRepository};

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::password;
use crate::token;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Successful authentication result.
#[derive(Debug)]
pub struct AuthOutput {
    /// Raw opaque session token (return to client, not stored).
    pub token: String,
    pub username: String,
    pub role: Role,
    pub client_id: ClientId,
    pub expires_at: DateTime<Utc>,
}

/// Authentication service.
///
/// Generic over repository implementations so that the auth layer
/// has no dependency on the database crate.
pub struct AuthService<A: AccountRepository, S: SessionRepository> {
    account_repo: A,
    session_repo: S,
    config: AuthConfig,
}

impl<A: AccountRepository, S: SessionRepository> AuthService<A, S> {
    pub fn new(account_repo: A, session_repo: S, config: AuthConfig) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    /// Register a new account and immediately issue a session.
    ///
    /// Fails with `DuplicateUsername` if the username is taken and
    /// with `WeakPassword` if the password fails the strength policy.
    pub async fn register(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        // 1. Reject empty input before touching the store.
        if input.username.is_empty() {
            return Err(AuthError::InvalidInput("username must not be empty".into()));
        }
        if input.password.is_empty() {
            return Err(AuthError::InvalidInput("password must not be empty".into()));
        }

        // 2. Enforce the password strength policy.
        password::check_strength(&input.password, &self.config)?;

        // 3. Hash with the configured pepper — the same config the
        //    login path verifies against.
        let password_hash =
            password::hash_password(&input.password, self.config.pepper.as_deref())?;

        // 4. Create the account. The store's uniqueness guarantee
        //    resolves concurrent duplicate registrations.
        let account = self
            .account_repo
            .create(CreateAccount {
                username: input.username,
                password_hash,
                role: input.role,
            })
            .await
            .map_err(|e| match e {
                FundsightError::AlreadyExists { .. } => AuthError::DuplicateUsername,
                other => other.into(),
            })?;

        // 5. Issue a session for the fresh account.
        self.issue_session(&account).await
    }

    /// Authenticate with username + password and issue a session.
    ///
    /// An unknown username and a wrong password produce the identical
    /// `InvalidCredentials` error so neither leaks which accounts
    /// exist.
    pub async fn login(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        // 1. Look up the account.
        let account = self
            .account_repo
            .get_by_username(&input.username)
            .await
            .map_err(|e| match e {
                FundsightError::NotFound { .. } => AuthError::InvalidCredentials,
                other => other.into(),
            })?;

        // 2. Verify the password.
        let valid = password::verify_password(
            &input.password,
            &account.password_hash,
            self.config.pepper.as_deref(),
        )?;

        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        // 3. Stamp last login and issue a session.
        self.account_repo.record_login(account.id).await?;
        self.issue_session(&account).await
    }

    /// Log in to the demo account for the given role, provisioning it
    /// on first use.
    ///
    /// Provisioning is create-if-absent: a duplicate failure (from an
    /// earlier call or a concurrent one) falls through to a normal
    /// login, so repeated calls always land on the same account.
    pub async fn demo_login(&self, role: Role) -> AuthResult<AuthOutput> {
        let username = role.demo_username();

        let password_hash =
            password::hash_password(&self.config.demo_password, self.config.pepper.as_deref())?;

        match self
            .account_repo
            .create(CreateAccount {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await
        {
            Ok(_) | Err(FundsightError::AlreadyExists { .. }) => {}
            Err(other) => return Err(other.into()),
        }

        self.login(LoginInput {
            username: username.to_string(),
            password: self.config.demo_password.clone(),
        })
        .await
    }

    /// Revoke a session (logout). Idempotent — revoking an unknown or
    /// already-revoked token is not an error.
    pub async fn logout(&self, raw_token: &str) -> AuthResult<()> {
        let token_hash = token::hash_session_token(raw_token);
        self.session_repo.delete_by_token_hash(&token_hash).await?;
        Ok(())
    }

    /// Validate a session token.
    ///
    /// A token past its expiry is deleted before `SessionExpired` is
    /// returned; an unknown token fails with `SessionNotFound`. The
    /// window is fixed — validation never extends it.
    pub async fn validate_session(&self, raw_token: &str) -> AuthResult<Session> {
        let token_hash = token::hash_session_token(raw_token);

        let session = self
            .session_repo
            .get_by_token_hash(&token_hash)
            .await
            .map_err(|e| match e {
                FundsightError::NotFound { .. } => AuthError::SessionNotFound,
                other => other.into(),
            })?;

        if session.expires_at <= Utc::now() {
            self.session_repo.delete(session.id).await?;
            return Err(AuthError::SessionExpired);
        }

        Ok(session)
    }

    /// Authorize a session for a dashboard view.
    ///
    /// Validation failures surface uniformly as `Unauthenticated`. An
    /// Investor session is authorized for any target client; an
    /// Investee session only for its own `client_id`, and never for a
    /// view that requires the Investor role.
    pub async fn authorize(
        &self,
        raw_token: &str,
        required_role: Role,
        target_client_id: &ClientId,
    ) -> AuthResult<Session> {
        let session = self.validate_session(raw_token).await.map_err(|e| match e {
            AuthError::SessionExpired | AuthError::SessionNotFound => AuthError::Unauthenticated,
            other => other,
        })?;

        match session.role {
            Role::Investor => Ok(session),
            Role::Investee => {
                if required_role == Role::Investor {
                    return Err(AuthError::Forbidden);
                }
                if session.client_id != *target_client_id {
                    return Err(AuthError::Forbidden);
                }
                Ok(session)
            }
        }
    }

    /// Mint a session for an authenticated account.
    async fn issue_session(&self, account: &Account) -> AuthResult<AuthOutput> {
        let raw_token = token::generate_session_token();
        let token_hash = token::hash_session_token(&raw_token);
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::seconds(self.config.session_lifetime_secs as i64);

        let session = self
            .session_repo
            .create(CreateSession {
                token_hash,
                username: account.username.clone(),
                role: account.role,
                client_id: account.client_id.clone(),
                issued_at,
                expires_at,
            })
            .await?;

        Ok(AuthOutput {
            token: raw_token,
            username: session.username,
            role: session.role,
            client_id: session.client_id,
            expires_at: session.expires_at,
        })
    }
}
