//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use kernel::response::Data;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateInput, AuthenticateUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::AuthRequest;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /auth
///
/// Issues a signed bearer token on valid credentials; 401 otherwise.
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<AuthRequest>,
) -> AuthResult<Json<Data<String>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let input = AuthenticateInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(Data::new(output.token)))
}
