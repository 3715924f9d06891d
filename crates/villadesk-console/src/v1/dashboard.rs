//! Dashboard statistics endpoint.

use actix_web::{HttpRequest, HttpResponse, Scope, get, web};

use villadesk_persistence::sea_orm::DatabaseConnection;

use crate::model::ApiResult;
use crate::{require_owner, service};

pub fn routes() -> Scope {
    web::scope("/dashboard").service(stats)
}

#[get("/stats")]
pub async fn stats(req: HttpRequest, db: web::Data<DatabaseConnection>) -> HttpResponse {
    let owner_id = require_owner!(req);

    match service::dashboard::summarize(&db, &owner_id).await {
        Ok(stats) => ApiResult::http_success(stats),
        Err(err) => ApiResult::http_error(&err),
    }
}
