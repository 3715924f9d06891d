//! HTTP server setup.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};
use sea_orm::DatabaseConnection;

use villadesk_console::model::VapiSettings;
use villadesk_console::{v1, vapi};

use crate::{auth, middleware::auth::Authentication, model::AppState};

/// Creates and binds the HTTP server.
///
/// All routes live under the configured context path: the sign-in endpoint,
/// the owner-facing property and dashboard API, and the voice-gateway
/// webhooks. The authentication middleware runs for every request; the
/// voice-gateway routes ignore the owner context and check their own squad
/// credential instead.
///
/// The database connection arrives pre-wrapped in `web::Data` and is shared
/// across worker factories through that handle; the raw connection is never
/// cloned.
pub fn console_server(
    app_state: Arc<AppState>,
    database_connection: web::Data<DatabaseConnection>,
    vapi_settings: VapiSettings,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    let vapi_settings = web::Data::new(vapi_settings);

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Authentication)
            .app_data(web::Data::from(app_state.clone()))
            .app_data(database_connection.clone())
            .app_data(vapi_settings.clone())
            .service(
                web::scope(&context_path)
                    .service(auth::routes())
                    .service(v1::property::routes())
                    .service(v1::dashboard::routes())
                    .service(vapi::routes()),
            )
    })
    .bind((address, port))?
    .run())
}
