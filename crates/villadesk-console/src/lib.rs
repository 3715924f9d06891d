//! Villadesk Console - HTTP surface of the property management service
//!
//! Endpoint modules:
//! - `v1`: owner-facing property CRUD and dashboard statistics
//! - `vapi`: webhook endpoints consumed by the voice-assistant platform
//!
//! Domain services live in `service` and run against a shared
//! `DatabaseConnection`; all coordination happens through the store.

pub mod model;
pub mod service;
pub mod v1;
pub mod vapi;

/// Resolve the authenticated owner id from the request's `AuthContext`,
/// or return an error response early.
///
/// The authentication middleware inserts an `AuthContext` for every
/// non-OPTIONS request; a request without a valid token resolves to an
/// unauthenticated context.
#[macro_export]
macro_rules! require_owner {
    ($req:expr) => {{
        let auth_context = actix_web::HttpMessage::extensions(&$req)
            .get::<villadesk_auth::model::AuthContext>()
            .cloned()
            .unwrap_or_default();

        if let Some(err) = auth_context.jwt_error {
            return actix_web::HttpResponse::Forbidden().json(
                $crate::model::ApiResult::<String> {
                    code: villadesk_common::error::ACCESS_DENIED.code,
                    message: "access denied".to_string(),
                    data: err.to_string(),
                },
            );
        }

        if !auth_context.is_authenticated() {
            return actix_web::HttpResponse::Unauthorized().json(
                $crate::model::ApiResult::<String> {
                    code: villadesk_common::error::ACCESS_DENIED.code,
                    message: "access denied".to_string(),
                    data: "authentication required".to_string(),
                },
            );
        }

        auth_context.user_id
    }};
}
