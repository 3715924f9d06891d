//! Shared application state.

use super::config::Configuration;

/// State shared across all request handlers.
///
/// The database connection is not carried here; it is shared separately as
/// `web::Data<DatabaseConnection>` so only the `Data` handle is ever cloned.
pub struct AppState {
    pub configuration: Configuration,
}
