//! Endpoints consumed by the external voice-assistant platform.
//!
//! These routes authenticate with a single shared squad credential instead
//! of an owner token; the credential grants read access to active property
//! records and append access to the interaction log, nothing else.

pub mod interaction;
pub mod lookup;

use actix_web::{Scope, web};

use villadesk_common::VilladeskError;

use crate::model::VapiSettings;

pub fn routes() -> Scope {
    web::scope("/vapi/frontdesk")
        .service(lookup::lookup)
        .service(interaction::log_interaction)
}

/// Constant-shape squad credential check. An empty configured secret
/// matches nothing, so an unconfigured deployment rejects all callers.
pub(crate) fn verify_squad(
    settings: &VapiSettings,
    squad_id: Option<&str>,
) -> anyhow::Result<()> {
    match squad_id {
        Some(id) if !settings.squad_id.is_empty() && id == settings.squad_id => Ok(()),
        _ => Err(VilladeskError::Unauthorized("invalid or missing squadId".to_string()).into()),
    }
}
