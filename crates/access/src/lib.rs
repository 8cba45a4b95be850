//! # Access Crate
//!
//! This crate is the central authority for identity and authentication in
//! the WordTrail application: user records, salted one-way password hashing,
//! and the signed session tokens issued at login.

pub mod token;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use turso::{Database, Error as TursoError, Row, params};

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Database error: {0}")]
    Database(#[from] TursoError),
    #[error("Username or email already exists")]
    Conflict,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Failed to sign token: {0}")]
    TokenSigning(String),
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}

/// Represents a user in the system.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Either 'user' or 'admin'.
    pub role: String,
    /// The timestamp when the user registered.
    pub created_at: DateTime<Utc>,
}

/// Expects the column order `id, username, email, role, created_at`.
impl TryFrom<&Row> for User {
    type Error = AccessError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        let created_at_str: String = row.get(4)?;
        let created_at =
            chrono::NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
                .map_err(|e| {
                    AccessError::DataIntegrity(format!(
                        "Failed to parse date '{created_at_str}': {e}"
                    ))
                })?;

        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
            created_at,
        })
    }
}

/// Matches the original service's bcrypt work factor.
const BCRYPT_COST: u32 = 12;

/// Hashes a plaintext password for storage. The plaintext is never
/// persisted or logged anywhere in this crate.
pub fn hash_password(password: &str) -> Result<String, AccessError> {
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Creates a new user row and returns its id.
///
/// Fails with `Conflict` when the username or email is already taken. The
/// existence check and the insert are not wrapped in a transaction, so two
/// concurrent registrations can race past the check; the UNIQUE constraints
/// backstop that case and are mapped to `Conflict` as well.
pub async fn register_user(
    db: &Database,
    username: &str,
    email: &str,
    password: &str,
) -> Result<i64, AccessError> {
    let conn = db.connect()?;

    let mut rows = conn
        .query(
            "SELECT 1 FROM users WHERE username = ? OR email = ?",
            params![username, email],
        )
        .await?;
    if rows.next().await?.is_some() {
        return Err(AccessError::Conflict);
    }

    let hashed = hash_password(password)?;
    conn.execute(
        "INSERT INTO users (username, email, password) VALUES (?, ?, ?)",
        params![username, email, hashed],
    )
    .await
    .map_err(|e| {
        if e.to_string().contains("UNIQUE") {
            AccessError::Conflict
        } else {
            AccessError::Database(e)
        }
    })?;

    let mut rows = conn.query("SELECT last_insert_rowid()", ()).await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| AccessError::DataIntegrity("missing last_insert_rowid".to_string()))?;
    let user_id: i64 = row.get(0)?;

    tracing::info!(user_id, username, "Registered new user");
    Ok(user_id)
}

/// Validates a username/password pair against the stored hash.
///
/// A missing user and a wrong password are indistinguishable to the caller;
/// both yield `InvalidCredentials`.
pub async fn verify_credentials(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<User, AccessError> {
    let conn = db.connect()?;

    let mut rows = conn
        .query(
            "SELECT id, username, email, role, created_at, password
             FROM users WHERE username = ?",
            params![username],
        )
        .await?;

    let Some(row) = rows.next().await? else {
        return Err(AccessError::InvalidCredentials);
    };

    let stored_hash: String = row.get(5)?;
    if !bcrypt::verify(password, &stored_hash)? {
        return Err(AccessError::InvalidCredentials);
    }

    User::try_from(&row)
}
