//! Authentication models
//!
//! Data structures for owner accounts, JWT payloads, and the per-request
//! authentication context inserted by the server middleware.

use serde::{Deserialize, Serialize};

use villadesk_persistence::entity::users;

// Auth configuration keys
pub const TOKEN_SECRET_KEY: &str = "villadesk.auth.token.secret.key";
pub const TOKEN_EXPIRE_SECONDS: &str = "villadesk.auth.token.expire.seconds";
/// 7 days, matching the original sign-in session lifetime
pub const DEFAULT_TOKEN_EXPIRE_SECONDS: i64 = 604_800;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Basic owner account information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl From<users::Model> for Account {
    fn from(value: users::Model) -> Self {
        Self {
            id: value.id,
            email: value.email,
            password: value.password,
        }
    }
}

/// Owner account with a freshly issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedAccount {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
    pub token_ttl: i64,
}

/// JWT payload for owner authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VilladeskJwtPayload {
    /// Owner account id
    pub sub: String,
    pub exp: i64,
}

/// Per-request authentication context.
///
/// Inserted into request extensions by the authentication middleware for
/// every non-OPTIONS request. An empty `user_id` means the request carried
/// no valid token.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub user_id: String,
    pub token_provided: bool,
    pub jwt_error: Option<jsonwebtoken::errors::Error>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        !self.user_id.is_empty() && self.jwt_error.is_none()
    }
}
