//! Property CRUD endpoints.

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};

use villadesk_persistence::sea_orm::DatabaseConnection;

use crate::model::ApiResult;
use crate::model::property::{CreatePropertyRequest, UpdatePropertyRequest};
use crate::{require_owner, service};

pub fn routes() -> Scope {
    web::scope("/properties")
        .service(list_properties)
        .service(create_property)
        .service(get_property)
        .service(update_property)
        .service(delete_property)
}

#[get("")]
pub async fn list_properties(req: HttpRequest, db: web::Data<DatabaseConnection>) -> HttpResponse {
    let owner_id = require_owner!(req);

    match service::property::list(&db, &owner_id).await {
        Ok(items) => ApiResult::http_success(items),
        Err(err) => ApiResult::http_error(&err),
    }
}

#[post("")]
pub async fn create_property(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePropertyRequest>,
) -> HttpResponse {
    let owner_id = require_owner!(req);

    match service::property::create(&db, &owner_id, body.into_inner()).await {
        Ok(created) => HttpResponse::Created().json(ApiResult::success(created)),
        Err(err) => ApiResult::http_error(&err),
    }
}

#[get("/{unit_id}")]
pub async fn get_property(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> HttpResponse {
    let owner_id = require_owner!(req);
    let unit_id = path.into_inner();

    match service::property::get(&db, &owner_id, &unit_id).await {
        Ok(property) => ApiResult::http_success(property),
        Err(err) => ApiResult::http_error(&err),
    }
}

#[put("/{unit_id}")]
pub async fn update_property(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdatePropertyRequest>,
) -> HttpResponse {
    let owner_id = require_owner!(req);
    let unit_id = path.into_inner();

    match service::property::update(&db, &owner_id, &unit_id, body.into_inner()).await {
        Ok(updated) => ApiResult::http_success(updated),
        Err(err) => ApiResult::http_error(&err),
    }
}

#[delete("/{unit_id}")]
pub async fn delete_property(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> HttpResponse {
    let owner_id = require_owner!(req);
    let unit_id = path.into_inner();

    match service::property::delete(&db, &owner_id, &unit_id).await {
        Ok(()) => ApiResult::http_success("deleted".to_string()),
        Err(err) => ApiResult::http_error(&err),
    }
}
