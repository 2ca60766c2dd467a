//! Token Service
//!
//! Stateless signed tokens (JWT, HS256) carrying user identity claims.
//! Tokens are never persisted; every request is verified against the
//! shared secret.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// JWT claims carried by every issued token
///
/// `exp` and `iat` are seconds since the Unix epoch; `exp` is enforced
/// by `jsonwebtoken` during [`TokenService::verify`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user object id (hex)
    pub sub: String,
    /// Username the token was issued for
    pub username: String,
    /// Issued-at timestamp
    pub iat: usize,
    /// Expiry timestamp
    pub exp: usize,
}

/// Issues and verifies bearer tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            config,
        }
    }

    /// Issue a signed token for an authenticated user
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: user.user_id.to_hex(),
            username: user.username.clone(),
            iat: now,
            exp: now + self.config.token_ttl_secs() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Verify a token and return its claims
    ///
    /// Fails with [`AuthError::InvalidToken`] on bad signature, wrong
    /// algorithm, malformed structure, or expiry.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims)
    }
}
