//! SurrealDB implementation of [`AccountRepository`].
//!
//! The store receives passwords already hashed — hashing and pepper
//! handling live in the auth layer so both sides of verification read
//! the same configuration.

use chrono::{DateTime, Utc};
use fundsight_core::error::FundsightResult;
use fundsight_core::models::account::{Account, CreateAccount};
use fundsight_core::models::client_id::ClientId;
use fundsight_core::models::role::Role;
use fundsight_core::repository::AccountRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct AccountRow {
    username: String,
    password_hash: String,
    role: String,
    client_id: String,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AccountRowWithId {
    record_id: String,
    username: String,
    password_hash: String,
    role: String,
    client_id: String,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

fn parse_role(s: &str) -> Result<Role, DbError> {
    s.parse::<Role>().map_err(DbError::Corrupt)
}

fn parse_client_id(s: &str) -> Result<ClientId, DbError> {
    ClientId::parse(s).map_err(DbError::Corrupt)
}

impl AccountRow {
    fn into_account(self, id: Uuid) -> Result<Account, DbError> {
        Ok(Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            role: parse_role(&self.role)?,
            client_id: parse_client_id(&self.client_id)?,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        })
    }
}

impl AccountRowWithId {
    fn try_into_account(self) -> Result<Account, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        Ok(Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            role: parse_role(&self.role)?,
            client_id: parse_client_id(&self.client_id)?,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        })
    }
}

/// SurrealDB implementation of the Account repository.
#[derive(Clone)]
pub struct SurrealAccountRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAccountRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> AccountRepository for SurrealAccountRepository<C> {
    async fn create(&self, input: CreateAccount) -> FundsightResult<Account> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let client_id = ClientId::generate(input.role);

        let result = self
            .db
            .query(
                "CREATE type::record('account', $id) SET \
                 username = $username, \
                 password_hash = $password_hash, \
                 role = $role, \
                 client_id = $client_id, \
                 last_login_at = NONE",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", input.username))
            .bind(("password_hash", input.password_hash))
            .bind(("role", input.role.as_str().to_string()))
            .bind(("client_id", client_id.as_str().to_string()))
            .await
            .map_err(DbError::from)?;

        // The unique username index makes concurrent duplicate creates
        // resolve to exactly one success. Violations surface as
        // statement errors naming the index, so anchor on the index
        // names rather than the surrounding prose.
        let mut result = result.check().map_err(|e| {
            let msg = e.to_string();
            if msg.contains("idx_account_username") || msg.contains("idx_account_client_id") {
                DbError::AlreadyExists {
                    entity: "account".into(),
                }
            } else {
                DbError::Surreal(e)
            }
        })?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id_str,
        })?;

        Ok(row.into_account(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> FundsightResult<Account> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('account', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id_str,
        })?;

        Ok(row.into_account(id)?)
    }

    async fn get_by_username(&self, username: &str) -> FundsightResult<Account> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM account \
                 WHERE username = $username",
            )
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: format!("username={username}"),
        })?;

        Ok(row.try_into_account()?)
    }

    async fn record_login(&self, id: Uuid) -> FundsightResult<()> {
        self.db
            .query("UPDATE type::record('account', $id) SET last_login_at = time::now()")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
