//! Owner-facing property request models.

use serde::{Deserialize, Serialize};

use villadesk_common::{FieldViolation, unit_id, validation};

use super::defaults;

/// The descriptive free-text fields of a property record.
///
/// Flattened into both the create and update payloads; every field is
/// independently optional. `None` in an update means "leave untouched",
/// never "clear".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFields {
    // Access & security
    pub lock_code: Option<String>,
    pub lock_box: Option<String>,
    pub lock_info: Option<String>,
    pub gate_code: Option<String>,
    pub gate_info: Option<String>,

    // Network & technology
    pub network_name: Option<String>,
    pub passcode: Option<String>,
    pub router_info: Option<String>,
    pub tv_info: Option<String>,
    pub no_sig: Option<String>,

    // Amenities & supplies
    pub linen_info: Option<String>,
    pub washcloths: Option<String>,
    pub pack_n_play: Option<String>,
    pub ex_supply_info: Option<String>,
    pub dishwasher: Option<String>,
    pub coffee_maker: Option<String>,

    // Maintenance & operations
    pub garbage_info: Option<String>,
    pub jacuzzi: Option<String>,
    pub pool_heat: Option<String>,
    pub lost_and_found: Option<String>,

    // Community access
    pub pass_loc: Option<String>,
    pub parking: Option<String>,
    pub pool_code: Option<String>,
    pub com_pool_loc: Option<String>,
    pub clubhouse: Option<String>,

    // Management & contact
    pub manager_email: Option<String>,
    pub manager_txt: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,

    // Policies & rules
    pub delivery_info: Option<String>,
    pub pet: Option<String>,
    pub parking_info: Option<String>,
}

impl PropertyFields {
    /// Field-level checks shared by create and update: length limits on the
    /// free text, email format on `managerEmail`.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for (name, value) in self.text_fields() {
            if let Some(value) = value
                && validation::validate_text_field(value).is_err()
            {
                violations.push(FieldViolation::new(
                    name,
                    &format!(
                        "must be at most {} characters",
                        validation::MAX_TEXT_FIELD_LENGTH
                    ),
                ));
            }
        }

        if let Some(email) = self.manager_email.as_deref()
            && validation::validate_email(email).is_err()
        {
            violations.push(FieldViolation::new(
                "managerEmail",
                "must be a valid email address",
            ));
        }

        violations
    }

    /// Fill omitted fields with the starter texts. Applied once, at
    /// creation; `pool_heat`, `manager_email` and `manager_txt` stay unset.
    pub fn with_creation_defaults(mut self) -> Self {
        fn fill(slot: &mut Option<String>, text: &str) {
            if slot.is_none() {
                *slot = Some(text.to_string());
            }
        }

        fill(&mut self.lock_code, defaults::LOCK_CODE);
        fill(&mut self.lock_box, defaults::LOCK_BOX);
        fill(&mut self.lock_info, defaults::LOCK_INFO);
        fill(&mut self.gate_code, defaults::GATE_CODE);
        fill(&mut self.gate_info, defaults::GATE_INFO);
        fill(&mut self.network_name, defaults::NETWORK_NAME);
        fill(&mut self.passcode, defaults::PASSCODE);
        fill(&mut self.router_info, defaults::ROUTER_INFO);
        fill(&mut self.tv_info, defaults::TV_INFO);
        fill(&mut self.no_sig, defaults::NO_SIG);
        fill(&mut self.linen_info, defaults::LINEN_INFO);
        fill(&mut self.washcloths, defaults::WASHCLOTHS);
        fill(&mut self.pack_n_play, defaults::PACK_N_PLAY);
        fill(&mut self.ex_supply_info, defaults::EX_SUPPLY_INFO);
        fill(&mut self.dishwasher, defaults::DISHWASHER);
        fill(&mut self.coffee_maker, defaults::COFFEE_MAKER);
        fill(&mut self.garbage_info, defaults::GARBAGE_INFO);
        fill(&mut self.jacuzzi, defaults::JACUZZI);
        fill(&mut self.lost_and_found, defaults::LOST_AND_FOUND);
        fill(&mut self.pass_loc, defaults::PASS_LOC);
        fill(&mut self.parking, defaults::PARKING);
        fill(&mut self.pool_code, defaults::POOL_CODE);
        fill(&mut self.com_pool_loc, defaults::COM_POOL_LOC);
        fill(&mut self.clubhouse, defaults::CLUBHOUSE);
        fill(&mut self.check_in, defaults::CHECK_IN);
        fill(&mut self.check_out, defaults::CHECK_OUT);
        fill(&mut self.delivery_info, defaults::DELIVERY_INFO);
        fill(&mut self.pet, defaults::PET);
        fill(&mut self.parking_info, defaults::PARKING_INFO);

        self
    }

    fn text_fields(&self) -> [(&'static str, Option<&str>); 32] {
        [
            ("lockCode", self.lock_code.as_deref()),
            ("lockBox", self.lock_box.as_deref()),
            ("lockInfo", self.lock_info.as_deref()),
            ("gateCode", self.gate_code.as_deref()),
            ("gateInfo", self.gate_info.as_deref()),
            ("networkName", self.network_name.as_deref()),
            ("passcode", self.passcode.as_deref()),
            ("routerInfo", self.router_info.as_deref()),
            ("tvInfo", self.tv_info.as_deref()),
            ("noSig", self.no_sig.as_deref()),
            ("linenInfo", self.linen_info.as_deref()),
            ("washcloths", self.washcloths.as_deref()),
            ("packNPlay", self.pack_n_play.as_deref()),
            ("exSupplyInfo", self.ex_supply_info.as_deref()),
            ("dishwasher", self.dishwasher.as_deref()),
            ("coffeeMaker", self.coffee_maker.as_deref()),
            ("garbageInfo", self.garbage_info.as_deref()),
            ("jacuzzi", self.jacuzzi.as_deref()),
            ("poolHeat", self.pool_heat.as_deref()),
            ("lostAndFound", self.lost_and_found.as_deref()),
            ("passLoc", self.pass_loc.as_deref()),
            ("parking", self.parking.as_deref()),
            ("poolCode", self.pool_code.as_deref()),
            ("comPoolLoc", self.com_pool_loc.as_deref()),
            ("clubhouse", self.clubhouse.as_deref()),
            ("managerEmail", self.manager_email.as_deref()),
            ("managerTxt", self.manager_txt.as_deref()),
            ("checkIn", self.check_in.as_deref()),
            ("checkOut", self.check_out.as_deref()),
            ("deliveryInfo", self.delivery_info.as_deref()),
            ("pet", self.pet.as_deref()),
            ("parkingInfo", self.parking_info.as_deref()),
        ]
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePropertyRequest {
    pub unit_id: String,
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: PropertyFields,
}

impl CreatePropertyRequest {
    /// The unit identifier after trim and uppercase normalization.
    pub fn normalized_unit_id(&self) -> String {
        unit_id::normalize(&self.unit_id)
    }

    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let normalized = self.normalized_unit_id();
        if normalized.is_empty() {
            violations.push(FieldViolation::new("unitId", "is required"));
        } else if validation::validate_unit_id(&normalized).is_err() {
            violations.push(FieldViolation::new(
                "unitId",
                "must be exactly 6 characters",
            ));
        }

        if let Some(status) = self.status.as_deref()
            && validation::validate_status(status).is_err()
        {
            violations.push(FieldViolation::new(
                "status",
                "must be one of draft, active, paused",
            ));
        }

        violations.extend(self.fields.violations());

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePropertyRequest {
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: PropertyFields,
}

impl UpdatePropertyRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if let Some(status) = self.status.as_deref()
            && validation::validate_status(status).is_err()
        {
            violations.push(FieldViolation::new(
                "status",
                "must be one of draft, active, paused",
            ));
        }

        violations.extend(self.fields.violations());

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
