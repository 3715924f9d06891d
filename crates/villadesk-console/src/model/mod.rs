//! Request/response models shared across the console endpoints.

pub mod dashboard;
pub mod defaults;
pub mod property;
pub mod vapi;

use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

use villadesk_common::{FieldViolation, VilladeskError, error};

/// Statically configured identity of the voice-assistant integration.
///
/// A single shared secret; there is no per-caller identity, rotation, or
/// per-property scoping.
#[derive(Clone, Debug)]
pub struct VapiSettings {
    pub squad_id: String,
}

/// API result wrapper
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn http_success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data))
    }

    pub fn http_response(status: u16, code: i32, message: String, data: T) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
            .json(Self {
                code,
                message,
                data,
            })
    }
}

impl ApiResult<String> {
    /// Map a service error onto the HTTP taxonomy.
    ///
    /// Validation, not-found, conflict, and authorization failures carry
    /// their classification and message through. Storage failures and
    /// anything unclassified are logged and surfaced as a generic internal
    /// error without store-specific detail.
    pub fn http_error(err: &anyhow::Error) -> HttpResponse {
        match err.downcast_ref::<VilladeskError>() {
            Some(VilladeskError::Validation(violations)) => {
                ApiResult::http_violations(violations.clone())
            }
            Some(e @ VilladeskError::NotFound(_)) => ApiResult::http_response(
                StatusCode::NOT_FOUND.as_u16(),
                error::RESOURCE_NOT_FOUND.code,
                error::RESOURCE_NOT_FOUND.message.to_string(),
                e.to_string(),
            ),
            Some(e @ VilladeskError::Conflict(_)) => ApiResult::http_response(
                StatusCode::CONFLICT.as_u16(),
                error::RESOURCE_CONFLICT.code,
                error::RESOURCE_CONFLICT.message.to_string(),
                e.to_string(),
            ),
            Some(e @ VilladeskError::Unauthorized(_)) => ApiResult::http_response(
                StatusCode::UNAUTHORIZED.as_u16(),
                error::ACCESS_DENIED.code,
                error::ACCESS_DENIED.message.to_string(),
                e.to_string(),
            ),
            Some(e @ VilladeskError::Storage(_)) => {
                tracing::error!(error = %e, "storage failure");
                ApiResult::http_response(
                    StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    error::SERVER_ERROR.code,
                    error::SERVER_ERROR.message.to_string(),
                    "internal server error".to_string(),
                )
            }
            _ => {
                tracing::error!(error = %err, "request failed");
                ApiResult::http_response(
                    StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    error::SERVER_ERROR.code,
                    error::SERVER_ERROR.message.to_string(),
                    "internal server error".to_string(),
                )
            }
        }
    }
}

impl ApiResult<Vec<FieldViolation>> {
    /// Bad-request response carrying the per-field violations.
    pub fn http_violations(violations: Vec<FieldViolation>) -> HttpResponse {
        HttpResponse::BadRequest().json(Self {
            code: error::PARAMETER_VALIDATE_ERROR.code,
            message: error::PARAMETER_VALIDATE_ERROR.message.to_string(),
            data: violations,
        })
    }
}
