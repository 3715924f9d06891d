//! Property lookup for an answered voice call.

use actix_web::{HttpResponse, post, web};

use villadesk_common::FieldViolation;
use villadesk_persistence::sea_orm::DatabaseConnection;

use crate::model::ApiResult;
use crate::model::vapi::{VapiLookupRequest, VapiLookupResponse};
use crate::service;

#[post("/lookup")]
pub async fn lookup(
    db: web::Data<DatabaseConnection>,
    settings: web::Data<crate::model::VapiSettings>,
    body: web::Json<VapiLookupRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    // Field check first, credential second, as the platform expects
    let Some(unit_id) = request.unit_id.filter(|v| !v.trim().is_empty()) else {
        return ApiResult::http_violations(vec![FieldViolation::new("unitId", "is required")]);
    };

    if let Err(err) = super::verify_squad(&settings, request.squad_id.as_deref()) {
        return ApiResult::http_error(&err);
    }

    match service::voice::resolve(&db, &unit_id).await {
        Ok((property, calls_this_week)) => {
            tracing::info!(unit_id = %property.unit_id, "voice lookup served");
            HttpResponse::Ok().json(VapiLookupResponse::new(&property, calls_this_week))
        }
        Err(err) => ApiResult::http_error(&err),
    }
}
