//! In-Memory Repository Implementation
//!
//! Backs the generic router in tests and local development. Same
//! observable semantics as the Mongo implementation, minus persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;

/// In-memory user repository
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user, hashing the password through the platform boundary
    pub fn seed(&self, username: &str, password: &str) -> AuthResult<()> {
        let hashed = ClearTextPassword::new_unchecked(password.to_string())
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(username.to_string(), hashed);
        self.users
            .write()
            .expect("user store lock poisoned")
            .insert(username.to_string(), user);

        Ok(())
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users
            .write()
            .expect("user store lock poisoned")
            .insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .expect("user store lock poisoned")
            .get(username)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        Ok(self
            .users
            .read()
            .expect("user store lock poisoned")
            .contains_key(username))
    }
}
