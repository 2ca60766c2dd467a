//! Authenticate Use Case
//!
//! Validates a username/password pair against the credential store and
//! issues a signed token. Stateless: no session record is created.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}

/// Authenticate output
pub struct AuthenticateOutput {
    /// Signed bearer token
    pub token: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens: TokenService::new(config),
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<AuthenticateOutput> {
        let user = self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Login accepts whatever the client submitted; policy checks only
        // apply at provisioning time.
        let password = ClearTextPassword::new_unchecked(input.password);

        let password_valid = user.password_hash.verify(&password)?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User authenticated"
        );

        Ok(AuthenticateOutput { token })
    }
}
