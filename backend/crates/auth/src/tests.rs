//! Unit and handler-level tests for the auth crate

#[cfg(test)]
mod token_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::token::{Claims, TokenService};
    use crate::domain::entity::user::User;
    use crate::error::AuthError;
    use platform::password::ClearTextPassword;

    fn test_user() -> User {
        let hash = ClearTextPassword::new_unchecked("burberrydev".to_string())
            .hash()
            .unwrap();
        User::new("burberrydev".to_string(), hash)
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let config = Arc::new(AuthConfig::development());
        let service = TokenService::new(config);

        let user = test_user();
        let token = service.issue(&user).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user.user_id.to_hex());
        assert_eq!(claims.username, "burberrydev");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_forged_token_rejected() {
        let service = TokenService::new(Arc::new(AuthConfig::development()));
        let other = TokenService::new(Arc::new(AuthConfig::development()));

        let token = other.issue(&test_user()).unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new(Arc::new(AuthConfig::development()));

        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(service.verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

        let config = Arc::new(AuthConfig::development());
        let service = TokenService::new(config.clone());

        // Expired well past the default validation leeway
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "5ded15d11c9d4400007607bb".to_string(),
            username: "burberrydev".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }
}

#[cfg(test)]
mod authenticate_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenService;
    use crate::application::{AuthenticateInput, AuthenticateUseCase};
    use crate::error::AuthError;
    use crate::infra::memory::MemoryUserRepository;

    #[tokio::test]
    async fn test_authenticate_success() {
        let repo = MemoryUserRepository::new();
        repo.seed("burberrydev", "burberrydev").unwrap();

        let config = Arc::new(AuthConfig::development());
        let use_case = AuthenticateUseCase::new(Arc::new(repo), config.clone());

        let output = use_case
            .execute(AuthenticateInput {
                username: "burberrydev".to_string(),
                password: "burberrydev".to_string(),
            })
            .await
            .unwrap();

        // The issued token verifies against the same secret
        let claims = TokenService::new(config).verify(&output.token).unwrap();
        assert_eq!(claims.username, "burberrydev");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let repo = MemoryUserRepository::new();
        repo.seed("burberrydev", "burberrydev").unwrap();

        let use_case = AuthenticateUseCase::new(
            Arc::new(repo),
            Arc::new(AuthConfig::development()),
        );

        let result = use_case
            .execute(AuthenticateInput {
                username: "burberrydev".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let repo = MemoryUserRepository::new();

        let use_case = AuthenticateUseCase::new(
            Arc::new(repo),
            Arc::new(AuthConfig::development()),
        );

        let result = use_case
            .execute(AuthenticateInput {
                username: "nobody".to_string(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}

#[cfg(test)]
mod handler_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::MemoryUserRepository;
    use crate::presentation::router::auth_router_generic;

    fn test_router() -> axum::Router {
        let repo = MemoryUserRepository::new();
        repo.seed("burberrydev", "burberrydev").unwrap();
        auth_router_generic(repo, Arc::new(AuthConfig::development()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_auth_returns_token() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"username":"burberrydev","password":"burberrydev"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["data"].is_string());
        assert!(!body["data"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_auth_bad_credentials() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"username":"bad","password":"wrong"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }
}

#[cfg(test)]
mod middleware_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenService;
    use crate::domain::entity::user::User;
    use crate::presentation::middleware::{
        AuthenticatedUser, TokenVerifierState, require_bearer_token,
    };
    use platform::password::ClearTextPassword;

    fn protected_router(config: Arc<AuthConfig>) -> Router {
        let verifier = TokenVerifierState::new(config);

        Router::new()
            .route(
                "/protected",
                get(|Extension(user): Extension<AuthenticatedUser>| async move { user.username }),
            )
            .layer(middleware::from_fn_with_state(
                verifier,
                require_bearer_token,
            ))
    }

    fn issue_token(config: Arc<AuthConfig>) -> String {
        let hash = ClearTextPassword::new_unchecked("irrelevant".to_string())
            .hash()
            .unwrap();
        let user = User::new("burberrydev".to_string(), hash);
        TokenService::new(config).issue(&user).unwrap()
    }

    #[tokio::test]
    async fn test_no_header_rejected() {
        let response = protected_router(Arc::new(AuthConfig::development()))
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_forged_token_rejected() {
        // Token signed with a different secret
        let token = issue_token(Arc::new(AuthConfig::development()));

        let response = protected_router(Arc::new(AuthConfig::development()))
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        let config = Arc::new(AuthConfig::development());
        let token = issue_token(config.clone());

        let response = protected_router(config)
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"burberrydev");
    }
}
