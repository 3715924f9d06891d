//! Sign-in endpoint: verifies owner credentials and issues a JWT.

use actix_web::{HttpResponse, Responder, Scope, post, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use villadesk_auth::model::{AuthenticatedAccount, INVALID_CREDENTIALS_MESSAGE};
use villadesk_auth::service::{auth::encode_jwt_token, user};
use villadesk_common::error;
use villadesk_console::model::ApiResult;

use crate::model::AppState;

#[derive(Debug, Deserialize)]
struct SigninData {
    email: Option<String>,
    password: Option<String>,
}

pub fn routes() -> Scope {
    web::scope("/auth").service(signin)
}

#[post("/signin")]
async fn signin(
    data: web::Data<AppState>,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SigninData>,
) -> impl Responder {
    let email = body.email.as_deref().unwrap_or_default().trim();
    let password = body.password.as_deref().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return unauthorized();
    }

    let account = match user::find_by_email(&db, email).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            tracing::warn!(email = %email, "sign-in attempt for unknown account");
            return unauthorized();
        }
        Err(err) => {
            tracing::error!(error = %err, "account lookup failed");
            return ApiResult::http_error(&err);
        }
    };

    match user::verify_password(&account, password) {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(email = %email, "sign-in attempt with wrong password");
            return unauthorized();
        }
        Err(err) => {
            tracing::error!(error = %err, "password verification failed");
            return ApiResult::http_error(&err);
        }
    }

    let token_ttl = data.configuration.token_expire_seconds();
    let secret_key = data.configuration.token_secret_key();
    match encode_jwt_token(&account.id, &secret_key, token_ttl) {
        Ok(access_token) => ApiResult::http_success(AuthenticatedAccount {
            user_id: account.id,
            email: account.email,
            access_token,
            token_ttl,
        }),
        Err(err) => {
            tracing::error!(error = %err, "token issuance failed");
            ApiResult::http_error(&anyhow::Error::from(err))
        }
    }
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResult::<String> {
        code: error::ACCESS_DENIED.code,
        message: error::ACCESS_DENIED.message.to_string(),
        data: INVALID_CREDENTIALS_MESSAGE.to_string(),
    })
}
