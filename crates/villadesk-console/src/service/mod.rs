//! Domain services. Endpoint handlers call into these; every function takes
//! the shared `DatabaseConnection` and returns `anyhow::Result` carrying a
//! `VilladeskError` for the failures callers are expected to map.

pub mod dashboard;
pub mod property;
pub mod voice;

use villadesk_common::VilladeskError;
use villadesk_persistence::sea_orm::DbErr;

/// Backend failures surface as `Storage`; the handler layer renders those
/// as a generic internal error so driver detail never reaches callers.
pub(crate) fn storage(err: DbErr) -> VilladeskError {
    VilladeskError::Storage(err.to_string())
}
