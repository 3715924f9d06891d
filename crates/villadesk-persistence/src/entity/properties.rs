//! Property entity - one row per rental unit
//!
//! The `unit_id` primary key is the guest-facing 6-character code and is
//! immutable after creation. `owner_id` scopes every owner-facing read and
//! write. Descriptive fields are independently optional free text; their
//! creation-time defaults live in the console layer, not here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// 6-character unit identifier, uppercase-normalized, globally unique
    #[sea_orm(primary_key, auto_increment = false)]
    pub unit_id: String,
    /// Owning account id
    pub owner_id: String,
    /// Lifecycle status: draft, active, paused
    pub status: String,

    // Access & security
    #[sea_orm(column_type = "Text", nullable)]
    pub lock_code: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lock_box: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lock_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub gate_code: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub gate_info: Option<String>,

    // Network & technology
    #[sea_orm(column_type = "Text", nullable)]
    pub network_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub passcode: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub router_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tv_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub no_sig: Option<String>,

    // Amenities & supplies
    #[sea_orm(column_type = "Text", nullable)]
    pub linen_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub washcloths: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pack_n_play: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ex_supply_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dishwasher: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub coffee_maker: Option<String>,

    // Maintenance & operations
    #[sea_orm(column_type = "Text", nullable)]
    pub garbage_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub jacuzzi: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pool_heat: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lost_and_found: Option<String>,

    // Community access
    #[sea_orm(column_type = "Text", nullable)]
    pub pass_loc: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub parking: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pool_code: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub com_pool_loc: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub clubhouse: Option<String>,

    // Management & contact
    #[sea_orm(column_type = "Text", nullable)]
    pub manager_email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub manager_txt: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub check_in: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub check_out: Option<String>,

    // Policies & rules
    #[sea_orm(column_type = "Text", nullable)]
    pub delivery_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pet: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub parking_info: Option<String>,

    /// Voice lookups served this week; reset externally on a weekly cadence
    pub voice_calls_this_week: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Query-level relation only; the foreign key is not enforced in DDL
    #[sea_orm(has_many = "super::voice_interactions::Entity")]
    VoiceInteractions,
}

impl Related<super::voice_interactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VoiceInteractions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
