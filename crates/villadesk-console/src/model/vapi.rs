//! Request and response models for the voice-assistant endpoints.
//!
//! The lookup response flattens a property record into the caller-facing
//! vocabulary the voice platform was scripted against (`lockInstructions`,
//! `wifiNetwork`, `noSignalHelp`, ...), which differs from the console's
//! field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use villadesk_persistence::entity::{properties, voice_interactions};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VapiLookupRequest {
    pub unit_id: Option<String>,
    pub squad_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VapiInteractionRequest {
    pub unit_id: Option<String>,
    pub squad_id: Option<String>,
    pub interaction_type: Option<String>,
    pub issue: Option<String>,
    pub caller_name: Option<String>,
    pub guest_email: Option<String>,
    pub phone_number: Option<String>,
}

/// Property record projected into the voice platform's vocabulary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    // Access & security
    pub lock_code: Option<String>,
    pub lock_box: Option<String>,
    pub lock_instructions: Option<String>,
    pub gate_code: Option<String>,
    pub gate_instructions: Option<String>,

    // Network & technology
    pub wifi_network: Option<String>,
    pub wifi_password: Option<String>,
    pub router_info: Option<String>,
    pub tv_info: Option<String>,
    pub no_signal_help: Option<String>,

    // Amenities & supplies
    pub linen_info: Option<String>,
    pub washcloth_policy: Option<String>,
    pub pack_n_play_info: Option<String>,
    pub supplies_policy: Option<String>,
    pub dishwasher_instructions: Option<String>,
    pub coffee_maker_info: Option<String>,

    // Maintenance & operations
    pub garbage_info: Option<String>,
    pub jacuzzi_instructions: Option<String>,
    pub pool_heating_info: Option<String>,
    pub lost_and_found_policy: Option<String>,

    // Community access
    pub community_pass_location: Option<String>,
    pub parking_info: Option<String>,
    pub pool_code: Option<String>,
    pub community_pool_location: Option<String>,
    pub clubhouse_info: Option<String>,

    // Management & contact
    pub manager_email: Option<String>,
    pub manager_phone: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,

    // Policies
    pub delivery_policy: Option<String>,
    pub pet_policy: Option<String>,
    pub parking_policy: Option<String>,
}

impl From<&properties::Model> for PropertyInfo {
    fn from(property: &properties::Model) -> Self {
        Self {
            lock_code: property.lock_code.clone(),
            lock_box: property.lock_box.clone(),
            lock_instructions: property.lock_info.clone(),
            gate_code: property.gate_code.clone(),
            gate_instructions: property.gate_info.clone(),
            wifi_network: property.network_name.clone(),
            wifi_password: property.passcode.clone(),
            router_info: property.router_info.clone(),
            tv_info: property.tv_info.clone(),
            no_signal_help: property.no_sig.clone(),
            linen_info: property.linen_info.clone(),
            washcloth_policy: property.washcloths.clone(),
            pack_n_play_info: property.pack_n_play.clone(),
            supplies_policy: property.ex_supply_info.clone(),
            dishwasher_instructions: property.dishwasher.clone(),
            coffee_maker_info: property.coffee_maker.clone(),
            garbage_info: property.garbage_info.clone(),
            jacuzzi_instructions: property.jacuzzi.clone(),
            pool_heating_info: property.pool_heat.clone(),
            lost_and_found_policy: property.lost_and_found.clone(),
            community_pass_location: property.pass_loc.clone(),
            parking_info: property.parking.clone(),
            pool_code: property.pool_code.clone(),
            community_pool_location: property.com_pool_loc.clone(),
            clubhouse_info: property.clubhouse.clone(),
            manager_email: property.manager_email.clone(),
            manager_phone: property.manager_txt.clone(),
            check_in_time: property.check_in.clone(),
            check_out_time: property.check_out.clone(),
            delivery_policy: property.delivery_info.clone(),
            pet_policy: property.pet.clone(),
            parking_policy: property.parking_info.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupMetadata {
    pub status: String,
    pub voice_calls_this_week: i64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VapiLookupResponse {
    pub success: bool,
    pub unit_id: String,
    pub property_info: PropertyInfo,
    pub metadata: LookupMetadata,
}

impl VapiLookupResponse {
    /// Build the lookup response; `voice_calls_this_week` reflects the call
    /// being answered, so it carries the post-increment count.
    pub fn new(property: &properties::Model, calls_this_week: i64) -> Self {
        Self {
            success: true,
            unit_id: property.unit_id.clone(),
            property_info: PropertyInfo::from(property),
            metadata: LookupMetadata {
                status: property.status.clone(),
                voice_calls_this_week: calls_this_week,
                last_updated: property.updated_at,
            },
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInteraction {
    pub interaction_type: String,
    pub issue: Option<String>,
    pub caller_info: CallerInfo,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VapiInteractionResponse {
    pub success: bool,
    pub interaction_id: String,
    pub unit_id: String,
    pub logged: LoggedInteraction,
}

impl From<voice_interactions::Model> for VapiInteractionResponse {
    fn from(interaction: voice_interactions::Model) -> Self {
        Self {
            success: true,
            interaction_id: interaction.id,
            unit_id: interaction.unit_id,
            logged: LoggedInteraction {
                interaction_type: interaction.interaction_type,
                issue: interaction.issue,
                caller_info: CallerInfo {
                    name: interaction.caller_name,
                    email: interaction.guest_email,
                    phone: interaction.phone_number,
                },
                timestamp: interaction.timestamp,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_property() -> properties::Model {
        properties::Model {
            unit_id: "AB1234".to_string(),
            owner_id: "owner-1".to_string(),
            status: "active".to_string(),
            lock_code: Some("1234".to_string()),
            lock_info: Some("Enter the code exactly.".to_string()),
            network_name: Some("Spectrum95cDB9".to_string()),
            passcode: Some("HappyDays123".to_string()),
            no_sig: Some("bit.ly/flc_no_sig".to_string()),
            washcloths: Some("No washcloths supplied.".to_string()),
            pass_loc: Some("Kitchen drawer lanyard.".to_string()),
            manager_txt: Some("+1-555-0100".to_string()),
            voice_calls_this_week: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            ..empty_property()
        }
    }

    fn empty_property() -> properties::Model {
        properties::Model {
            unit_id: String::new(),
            owner_id: String::new(),
            status: String::new(),
            lock_code: None,
            lock_box: None,
            lock_info: None,
            gate_code: None,
            gate_info: None,
            network_name: None,
            passcode: None,
            router_info: None,
            tv_info: None,
            no_sig: None,
            linen_info: None,
            washcloths: None,
            pack_n_play: None,
            ex_supply_info: None,
            dishwasher: None,
            coffee_maker: None,
            garbage_info: None,
            jacuzzi: None,
            pool_heat: None,
            lost_and_found: None,
            pass_loc: None,
            parking: None,
            pool_code: None,
            com_pool_loc: None,
            clubhouse: None,
            manager_email: None,
            manager_txt: None,
            check_in: None,
            check_out: None,
            delivery_info: None,
            pet: None,
            parking_info: None,
            voice_calls_this_week: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_lookup_request_accepts_partial_payloads() {
        let request: VapiLookupRequest =
            serde_json::from_str(r#"{"unitId":"ab1234"}"#).unwrap();
        assert_eq!(request.unit_id.as_deref(), Some("ab1234"));
        assert!(request.squad_id.is_none());
    }

    #[test]
    fn test_property_info_renames_fields_for_the_caller() {
        let response = VapiLookupResponse::new(&sample_property(), 8);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["unitId"], "AB1234");
        assert_eq!(json["propertyInfo"]["lockInstructions"], "Enter the code exactly.");
        assert_eq!(json["propertyInfo"]["wifiNetwork"], "Spectrum95cDB9");
        assert_eq!(json["propertyInfo"]["wifiPassword"], "HappyDays123");
        assert_eq!(json["propertyInfo"]["noSignalHelp"], "bit.ly/flc_no_sig");
        assert_eq!(json["propertyInfo"]["washclothPolicy"], "No washcloths supplied.");
        assert_eq!(json["propertyInfo"]["communityPassLocation"], "Kitchen drawer lanyard.");
        assert_eq!(json["propertyInfo"]["managerPhone"], "+1-555-0100");
        assert_eq!(json["propertyInfo"]["gateCode"], serde_json::Value::Null);
        assert_eq!(json["metadata"]["status"], "active");
        assert_eq!(json["metadata"]["voiceCallsThisWeek"], 8);
    }

    #[test]
    fn test_interaction_response_echoes_logged_fields() {
        let now = Utc::now();
        let interaction = voice_interactions::Model {
            id: "a3f0b9a2-5b77-4f51-9d4e-0a1a2b3c4d5e".to_string(),
            unit_id: "AB1234".to_string(),
            interaction_type: "lockout_assistance".to_string(),
            issue: Some("Guest locked out after 11pm".to_string()),
            caller_name: Some("Jordan".to_string()),
            guest_email: None,
            phone_number: Some("+1-555-0199".to_string()),
            timestamp: now,
        };

        let json = serde_json::to_value(VapiInteractionResponse::from(interaction)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["interactionId"], "a3f0b9a2-5b77-4f51-9d4e-0a1a2b3c4d5e");
        assert_eq!(json["unitId"], "AB1234");
        assert_eq!(json["logged"]["interactionType"], "lockout_assistance");
        assert_eq!(json["logged"]["callerInfo"]["name"], "Jordan");
        assert_eq!(json["logged"]["callerInfo"]["email"], serde_json::Value::Null);
        assert_eq!(json["logged"]["callerInfo"]["phone"], "+1-555-0199");
    }
}
