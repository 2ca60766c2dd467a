//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{
    AuthConfig, MongoUserRepository, TokenVerifierState, auth_router, require_bearer_token,
};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use catalog::{MongoCatalogRepository, catalog_router};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let mongodb_uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongodb_db = env::var("MONGODB_DB").unwrap_or_else(|_| "shop".to_string());

    let client = mongodb::Client::with_uri_str(&mongodb_uri).await?;
    let db = client.database(&mongodb_db);

    tracing::info!(database = %mongodb_db, "Connected to database");

    // Token configuration
    let auth_config = if cfg!(debug_assertions) && env::var("JWT_SECRET").is_err() {
        tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive restart");
        Arc::new(AuthConfig::with_random_secret())
    } else {
        let secret = env::var("JWT_SECRET")?;
        Arc::new(AuthConfig::new(secret.into_bytes()))
    };

    let user_repo = MongoUserRepository::new(db.clone());
    let catalog_repo = MongoCatalogRepository::new(db.clone());

    // Startup seeding: provision the credential store from the environment.
    // Errors here should not prevent server startup.
    if let (Ok(username), Ok(password)) = (
        env::var("AUTH_SEED_USERNAME"),
        env::var("AUTH_SEED_PASSWORD"),
    ) {
        match seed_user(&user_repo, username, password).await {
            Ok(true) => tracing::info!("Seed user created"),
            Ok(false) => tracing::info!("Seed user already present, skipping"),
            Err(e) => tracing::warn!(error = %e, "Seed user creation failed, continuing anyway"),
        }
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router: every catalog route sits behind the bearer-token gate,
    // only POST /auth is public.
    let verifier = TokenVerifierState::new(auth_config.clone());

    let app = Router::new()
        .merge(
            catalog_router(catalog_repo)
                .layer(middleware::from_fn_with_state(verifier, require_bearer_token)),
        )
        .merge(auth_router(user_repo, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:2727".to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Create the seed user unless one with that username already exists.
/// Returns whether a user was created.
async fn seed_user(
    repo: &MongoUserRepository,
    username: String,
    password: String,
) -> anyhow::Result<bool> {
    use auth::domain::repository::UserRepository;
    use auth::models::User;
    use platform::password::ClearTextPassword;

    if repo.exists_by_username(&username).await? {
        return Ok(false);
    }

    let password_hash = ClearTextPassword::new(password)?.hash()?;
    repo.create(&User::new(username, password_hash)).await?;

    Ok(true)
}
