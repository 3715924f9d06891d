//! Interaction logging for the voice assistant.

use actix_web::{HttpResponse, post, web};

use villadesk_common::{FieldViolation, validation};
use villadesk_persistence::sea_orm::DatabaseConnection;

use crate::model::ApiResult;
use crate::model::vapi::{VapiInteractionRequest, VapiInteractionResponse};
use crate::service::{self, voice::NewInteraction};

#[post("/interaction")]
pub async fn log_interaction(
    db: web::Data<DatabaseConnection>,
    settings: web::Data<crate::model::VapiSettings>,
    body: web::Json<VapiInteractionRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let mut violations = Vec::new();
    if request
        .unit_id
        .as_deref()
        .is_none_or(|v| v.trim().is_empty())
    {
        violations.push(FieldViolation::new("unitId", "is required"));
    }
    match request.interaction_type.as_deref() {
        None => violations.push(FieldViolation::new("interactionType", "is required")),
        Some(interaction_type) => {
            if validation::validate_interaction_type(interaction_type).is_err() {
                violations.push(FieldViolation::new(
                    "interactionType",
                    "must be a non-empty classification",
                ));
            }
        }
    }
    if !violations.is_empty() {
        return ApiResult::http_violations(violations);
    }

    if let Err(err) = super::verify_squad(&settings, request.squad_id.as_deref()) {
        return ApiResult::http_error(&err);
    }

    let interaction = NewInteraction {
        unit_id: request.unit_id.unwrap_or_default(),
        interaction_type: request.interaction_type.unwrap_or_default(),
        issue: request.issue,
        caller_name: request.caller_name,
        guest_email: request.guest_email,
        phone_number: request.phone_number,
    };

    match service::voice::log_interaction(&db, interaction).await {
        Ok(logged) => {
            tracing::info!(
                unit_id = %logged.unit_id,
                interaction_type = %logged.interaction_type,
                "voice interaction logged"
            );
            HttpResponse::Ok().json(VapiInteractionResponse::from(logged))
        }
        Err(err) => ApiResult::http_error(&err),
    }
}
