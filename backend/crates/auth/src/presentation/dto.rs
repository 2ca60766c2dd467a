//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// Authentication request (POST /auth)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

// The success body is the shared `{"data": "<token>"}` envelope from
// `kernel::response::Data`; no auth-specific response DTO is needed.
