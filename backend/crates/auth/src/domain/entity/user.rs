//! User Entity
//!
//! Credential-store record for a single user. Users are provisioned
//! externally (seed data) and read-only at runtime; the auth service
//! only ever looks them up and verifies credentials.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal object id
    pub user_id: UserId,
    /// Username (unique, used for login)
    pub username: String,
    /// Argon2id PHC hash of the password
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an already-hashed credential
    pub fn new(username: String, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
