//! Main entry point for the Villadesk server.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use tracing::{error, info};

use villadesk_console::model::VapiSettings;
use villadesk_migration::{Migrator, MigratorTrait};
use villadesk_server::{
    model::{AppState, Configuration},
    startup::{self, GracefulShutdown},
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    let database_connection = configuration.database_connection().await?;

    if configuration.auto_migrate() {
        info!("Applying pending schema migrations");
        Migrator::up(&database_connection, None).await?;
    }

    if configuration.token_secret_key().is_empty() {
        error!("No token secret key configured; owner sign-in will not work");
    }
    if configuration.vapi_squad_id().is_empty() {
        info!("No squad credential configured; the voice gateway rejects all calls");
    }

    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let context_path = configuration.context_path();
    let vapi_settings = VapiSettings {
        squad_id: configuration.vapi_squad_id(),
    };

    // Hand the connection to actix once; workers share the Data handle
    let database_connection = web::Data::new(database_connection);
    let app_state = Arc::new(AppState { configuration });

    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let graceful_shutdown = GracefulShutdown::new(shutdown_signal, Duration::from_secs(30));

    info!("Starting Villadesk server on {server_address}:{server_port}");
    let server = startup::console_server(
        app_state,
        database_connection,
        vapi_settings,
        context_path,
        server_address,
        server_port,
    )?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = graceful_shutdown.wait_for_shutdown() => {
            info!("Server shutting down gracefully");
        }
    }

    info!("Villadesk server shutdown complete");
    Ok(())
}
