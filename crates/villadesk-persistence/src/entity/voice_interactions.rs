//! Voice interaction entity - append-only audit log
//!
//! One row per logged voice-assistant exchange. Rows are inserted with a
//! server-assigned id and timestamp and are never updated or deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "voice_interactions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Server-assigned UUID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Referenced unit identifier; validated before insert, no DB constraint
    pub unit_id: String,
    /// Free-form classification, e.g. "lockout_assistance"
    pub interaction_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub issue: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caller_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub guest_email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone_number: Option<String>,
    /// Set at insert time, immutable
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::UnitId",
        to = "super::properties::Column::UnitId"
    )]
    Properties,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
