//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// User repository trait
///
/// The credential store is read-mostly: `create` exists only for seed
/// provisioning at startup and in tests.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user (seed provisioning)
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;

    /// Check if a username exists
    async fn exists_by_username(&self, username: &str) -> AuthResult<bool>;
}
