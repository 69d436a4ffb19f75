//! SurrealDB implementation of [`SessionRepository`].

use chrono::{DateTime, Utc};
use fundsight_core::error::FundsightResult;
use fundsight_core::models::client_id::ClientId;
use fundsight_core::models::role::Role;
use fundsight_core::models::session::{CreateSession, Session};
use fundsight_core::repository::SessionRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct SessionRow {
    token_hash: String,
    username: String,
    role: String,
    client_id: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct SessionRowWithId {
    record_id: String,
    token_hash: String,
    username: String,
    role: String,
    client_id: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

fn row_to_session(row: SessionRow, id: Uuid) -> Result<Session, DbError> {
    Ok(Session {
        id,
        token_hash: row.token_hash,
        username: row.username,
        role: row.role.parse::<Role>().map_err(DbError::Corrupt)?,
        client_id: ClientId::parse(&row.client_id).map_err(DbError::Corrupt)?,
        issued_at: row.created_at,
        expires_at: row.expires_at,
    })
}

impl SessionRowWithId {
    fn try_into_session(self) -> Result<Session, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        Ok(Session {
            id,
            token_hash: self.token_hash,
            username: self.username,
            role: self.role.parse::<Role>().map_err(DbError::Corrupt)?,
            client_id: ClientId::parse(&self.client_id).map_err(DbError::Corrupt)?,
            issued_at: self.created_at,
            expires_at: self.expires_at,
        })
    }
}

/// SurrealDB implementation of the Session repository.
#[derive(Clone)]
pub struct SurrealSessionRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealSessionRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> SessionRepository for SurrealSessionRepository<C> {
    async fn create(&self, input: CreateSession) -> FundsightResult<Session> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('session', $id) SET \
                 token_hash = $token_hash, \
                 username = $username, \
                 role = $role, \
                 client_id = $client_id, \
                 created_at = $issued_at, \
                 expires_at = $expires_at",
            )
            .bind(("id", id_str.clone()))
            .bind(("token_hash", input.token_hash))
            .bind(("username", input.username))
            .bind(("role", input.role.as_str().to_string()))
            .bind(("client_id", input.client_id.as_str().to_string()))
            .bind(("issued_at", input.issued_at))
            .bind(("expires_at", input.expires_at))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(DbError::Surreal)?;

        let rows: Vec<SessionRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "session".into(),
            id: id_str,
        })?;

        Ok(row_to_session(row, id)?)
    }

    async fn get_by_token_hash(&self, token_hash: &str) -> FundsightResult<Session> {
        let token_hash_owned = token_hash.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM session \
                 WHERE token_hash = $token_hash",
            )
            .bind(("token_hash", token_hash_owned.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SessionRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "session".into(),
            id: format!("token_hash={token_hash_owned}"),
        })?;

        Ok(row.try_into_session()?)
    }

    async fn delete(&self, id: Uuid) -> FundsightResult<()> {
        self.db
            .query("DELETE type::record('session', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> FundsightResult<()> {
        self.db
            .query("DELETE session WHERE token_hash = $token_hash")
            .bind(("token_hash", token_hash.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn delete_expired(&self) -> FundsightResult<u64> {
        // Single statement: the count is taken from the rows the
        // delete itself removed, so it cannot drift from the sweep.
        let mut result = self
            .db
            .query("DELETE session WHERE expires_at < time::now() RETURN BEFORE")
            .await
            .map_err(DbError::from)?;

        let removed: Vec<SessionRow> = result.take(0).map_err(DbError::from)?;
        Ok(removed.len() as u64)
    }
}
