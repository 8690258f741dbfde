/**
 * User Model and Credential Store
 *
 * This module persists user identities and their bcrypt password hashes and
 * checks login credentials against them.
 *
 * Username uniqueness is enforced by the unique index on `users.username`, so
 * two concurrent registrations for the same name cannot both succeed.
 * Plaintext passwords are hashed on a blocking thread and are never stored or
 * logged.
 */

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::server::database::{Database, StoreError};
use crate::shared::error::{require_non_empty, SharedError};

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Credential store failures
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Invalid(#[from] SharedError),

    #[error("username '{username}' is already taken")]
    DuplicateIdentity { username: String },

    #[error("user not found")]
    NotFound,

    #[error("password does not match")]
    InvalidCredential,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Register a new user
///
/// # Arguments
/// * `db` - Persistence handle
/// * `username` - Unique username
/// * `email` - User email
/// * `password` - Plaintext password, hashed with bcrypt at `cost`
///
/// # Returns
/// The new user's ID
pub async fn register_user(
    db: &Database,
    username: &str,
    email: &str,
    password: &str,
    cost: u32,
) -> Result<Uuid, CredentialError> {
    require_non_empty("username", username)?;
    require_non_empty("email", email)?;
    require_non_empty("password", password)?;
    if !email.contains('@') {
        return Err(SharedError::validation("email", "invalid email format").into());
    }

    let password_hash = hash_password(password, cost).await?;
    let id = Uuid::new_v4();

    let inserted = db
        .bounded(
            sqlx::query(
                r#"
                INSERT INTO users (id, username, email, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(username)
            .bind(email)
            .bind(&password_hash)
            .bind(Utc::now())
            .execute(db.pool()),
        )
        .await;

    match inserted {
        Ok(_) => {
            tracing::info!(user_id = %id, "User registered: {}", username);
            Ok(id)
        }
        Err(e) if e.is_unique_violation() => Err(CredentialError::DuplicateIdentity {
            username: username.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Check a username and password
///
/// Returns the stored user when the password matches.
pub async fn verify_credentials(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<User, CredentialError> {
    let user = get_user_by_username(db, username)
        .await?
        .ok_or(CredentialError::NotFound)?;

    let password = password.to_owned();
    let stored_hash = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| CredentialError::Hashing(e.to_string()))?
        .map_err(|e| CredentialError::Hashing(e.to_string()))?;

    if !matches {
        return Err(CredentialError::InvalidCredential);
    }

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    db: &Database,
    username: &str,
) -> Result<Option<User>, StoreError> {
    db.bounded(
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(db.pool()),
    )
    .await
}

/// Get user by ID
pub async fn get_user_by_id(db: &Database, id: Uuid) -> Result<Option<User>, StoreError> {
    db.bounded(
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db.pool()),
    )
    .await
}

async fn hash_password(password: &str, cost: u32) -> Result<String, CredentialError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| CredentialError::Hashing(e.to_string()))?
        .map_err(|e| CredentialError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_register_then_verify() {
        let db = Database::in_memory().await.unwrap();
        let id = register_user(&db, "alice", "alice@x.com", "pw123", TEST_COST)
            .await
            .unwrap();

        let user = verify_credentials(&db, "alice", "pw123").await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email, "alice@x.com");
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let db = Database::in_memory().await.unwrap();
        let id = register_user(&db, "alice", "alice@x.com", "pw123", TEST_COST)
            .await
            .unwrap();

        let user = get_user_by_id(&db, id).await.unwrap().unwrap();
        assert_ne!(user.password_hash, "pw123");
        assert!(user.password_hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credential() {
        let db = Database::in_memory().await.unwrap();
        register_user(&db, "alice", "alice@x.com", "pw123", TEST_COST)
            .await
            .unwrap();

        for attempt in ["pw1234", "PW123", ""] {
            let result = verify_credentials(&db, "alice", attempt).await;
            assert!(matches!(result, Err(CredentialError::InvalidCredential)));
        }
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let db = Database::in_memory().await.unwrap();
        let result = verify_credentials(&db, "nobody", "pw123").await;
        assert!(matches!(result, Err(CredentialError::NotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let db = Database::in_memory().await.unwrap();
        register_user(&db, "alice", "alice@x.com", "pw123", TEST_COST)
            .await
            .unwrap();

        let result = register_user(&db, "alice", "other@x.com", "pw456", TEST_COST).await;
        match result {
            Err(CredentialError::DuplicateIdentity { username }) => assert_eq!(username, "alice"),
            other => panic!("Expected DuplicateIdentity, got {:?}", other),
        }

        // the original password still works
        assert!(verify_credentials(&db, "alice", "pw123").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let db = Database::in_memory().await.unwrap();

        for (username, email, password) in [
            ("", "a@x.com", "pw"),
            ("alice", "", "pw"),
            ("alice", "a@x.com", ""),
            ("alice", "not-an-email", "pw"),
        ] {
            let result = register_user(&db, username, email, password, TEST_COST).await;
            assert!(matches!(result, Err(CredentialError::Invalid(_))));
        }
        assert!(get_user_by_username(&db, "alice").await.unwrap().is_none());
    }
}
