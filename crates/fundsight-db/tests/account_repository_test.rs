//! Integration tests for the Account repository using in-memory
//! SurrealDB.

use fundsight_core::error::FundsightError;
use fundsight_core::models::account::CreateAccount;
use fundsight_core::models::role::Role;
use fundsight_core::repository::AccountRepository;
use fundsight_db::repository::SurrealAccountRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    fundsight_db::run_migrations(&db).await.unwrap();
    db
}

fn account_input(username: &str, role: Role) -> CreateAccount {
    CreateAccount {
        username: username.into(),
        password_hash: format!("$argon2id$stub-hash-for-{username}"),
        role,
    }
}

#[tokio::test]
async fn create_and_get_account() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo.create(account_input("alice", Role::Investor)).await.unwrap();

    assert_eq!(account.username, "alice");
    assert_eq!(account.role, Role::Investor);
    assert!(account.client_id.as_str().starts_with("INV_"));
    assert!(account.last_login_at.is_none());

    // The hash is persisted exactly as given — the store never
    // re-derives it.
    assert_eq!(account.password_hash, "$argon2id$stub-hash-for-alice");

    // Get by ID should return the same account.
    let fetched = repo.get_by_id(account.id).await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.username, "alice");
    assert_eq!(fetched.client_id, account.client_id);
    assert_eq!(fetched.password_hash, account.password_hash);
}

#[tokio::test]
async fn get_by_username() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let created = repo.create(account_input("bob", Role::Investee)).await.unwrap();

    let fetched = repo.get_by_username("bob").await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert!(fetched.client_id.as_str().starts_with("IVE_"));

    let err = repo.get_by_username("nobody").await.unwrap_err();
    assert!(matches!(err, FundsightError::NotFound { .. }));
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    repo.create(account_input("carol", Role::Investor)).await.unwrap();

    let err = repo
        .create(account_input("carol", Role::Investee))
        .await
        .unwrap_err();

    assert!(
        matches!(err, FundsightError::AlreadyExists { .. }),
        "expected AlreadyExists, got: {err:?}"
    );

    // The original account is untouched.
    let fetched = repo.get_by_username("carol").await.unwrap();
    assert_eq!(fetched.role, Role::Investor);
}

#[tokio::test]
async fn record_login_stamps_timestamp() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo.create(account_input("frank", Role::Investor)).await.unwrap();
    assert!(account.last_login_at.is_none());

    repo.record_login(account.id).await.unwrap();

    let fetched = repo.get_by_id(account.id).await.unwrap();
    assert!(fetched.last_login_at.is_some());
}
