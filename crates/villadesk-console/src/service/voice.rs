//! Voice gateway services: property resolution for the voice assistant and
//! the append-only interaction log.

use chrono::Utc;

use villadesk_common::{VilladeskError, unit_id};
use villadesk_persistence::entity::{properties, voice_interactions};
use villadesk_persistence::sea_orm::sea_query::Expr;
use villadesk_persistence::sea_orm::*;

use crate::service::storage;

/// Fields of an interaction to append, as supplied by the voice platform.
#[derive(Clone, Debug, Default)]
pub struct NewInteraction {
    pub unit_id: String,
    pub interaction_type: String,
    pub issue: Option<String>,
    pub caller_name: Option<String>,
    pub guest_email: Option<String>,
    pub phone_number: Option<String>,
}

/// Resolve a property for an answered voice call.
///
/// Only `active` properties are visible here; draft and paused records
/// report NotFound just like missing ones. On success the weekly call
/// counter is incremented in a single column-expression UPDATE, so
/// concurrent lookups never lose an increment. Returns the record as read
/// plus the post-increment count.
pub async fn resolve(
    db: &DatabaseConnection,
    raw_unit_id: &str,
) -> anyhow::Result<(properties::Model, i64)> {
    let unit_id = unit_id::normalize(raw_unit_id);

    let property = properties::Entity::find_by_id(&unit_id)
        .filter(properties::Column::Status.eq("active"))
        .one(db)
        .await
        .map_err(storage)?
        .ok_or_else(|| {
            VilladeskError::NotFound(format!("active property '{unit_id}'"))
        })?;

    properties::Entity::update_many()
        .col_expr(
            properties::Column::VoiceCallsThisWeek,
            Expr::col(properties::Column::VoiceCallsThisWeek).add(1),
        )
        .col_expr(properties::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(properties::Column::UnitId.eq(&unit_id))
        .exec(db)
        .await
        .map_err(storage)?;

    let calls_this_week = property.voice_calls_this_week + 1;
    Ok((property, calls_this_week))
}

/// Append one interaction row.
///
/// The property must exist in any status; the voice platform logs against
/// paused and draft units too. Nothing is written when the check fails.
pub async fn log_interaction(
    db: &DatabaseConnection,
    interaction: NewInteraction,
) -> anyhow::Result<voice_interactions::Model> {
    let unit_id = unit_id::normalize(&interaction.unit_id);

    if properties::Entity::find_by_id(&unit_id)
        .one(db)
        .await
        .map_err(storage)?
        .is_none()
    {
        return Err(VilladeskError::NotFound(format!("property '{unit_id}'")).into());
    }

    let model = voice_interactions::Model {
        id: uuid::Uuid::new_v4().to_string(),
        unit_id,
        interaction_type: interaction.interaction_type,
        issue: interaction.issue,
        caller_name: interaction.caller_name,
        guest_email: interaction.guest_email,
        phone_number: interaction.phone_number,
        timestamp: Utc::now(),
    };

    let active = model.clone().into_active_model().reset_all();
    voice_interactions::Entity::insert(active)
        .exec_without_returning(db)
        .await
        .map_err(storage)?;

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_property(unit_id: &str, calls: i64) -> properties::Model {
        let now = Utc::now();
        properties::Model {
            unit_id: unit_id.to_string(),
            owner_id: "owner-1".to_string(),
            status: "active".to_string(),
            lock_code: Some("1234".to_string()),
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
            voice_calls_this_week: calls,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_resolve_increments_and_reports_post_increment_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![active_property("AB1234", 7)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let (property, calls) = resolve(&db, "ab1234").await.unwrap();
        assert_eq!(property.unit_id, "AB1234");
        assert_eq!(calls, 8);
    }

    #[tokio::test]
    async fn test_resolve_increments_in_one_column_expression_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![active_property("AB1234", 7)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        resolve(&db, "AB1234").await.unwrap();

        // One SELECT plus one self-referential UPDATE; the counter is never
        // read back and written, so concurrent lookups cannot lose a call
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let update = format!("{:?}", log[1]);
        assert!(update.contains(r#"UPDATE \"properties\""#), "{update}");
        assert!(
            update.contains(r#"\"voice_calls_this_week\" = \"voice_calls_this_week\" + $1"#),
            "{update}"
        );
    }

    #[tokio::test]
    async fn test_resolve_hides_inactive_properties() {
        // The status filter keeps draft/paused rows out of the result set,
        // so the mock returns nothing
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<properties::Model>::new()])
            .into_connection();

        let err = resolve(&db, "AB1234").await.unwrap_err();
        let err = err.downcast_ref::<VilladeskError>().unwrap();
        assert!(matches!(err, VilladeskError::NotFound(_)));
        assert_eq!(err.to_string(), "active property 'AB1234' not found");
    }

    #[tokio::test]
    async fn test_log_interaction_requires_existing_property() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<properties::Model>::new()])
            .into_connection();

        let err = log_interaction(
            &db,
            NewInteraction {
                unit_id: "zz9999".to_string(),
                interaction_type: "general_question".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VilladeskError>(),
            Some(VilladeskError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_log_interaction_assigns_id_and_timestamp() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![active_property("AB1234", 0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let before = Utc::now();
        let logged = log_interaction(
            &db,
            NewInteraction {
                unit_id: "ab1234".to_string(),
                interaction_type: "lockout_assistance".to_string(),
                issue: Some("Code not working".to_string()),
                caller_name: Some("Sam".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(logged.unit_id, "AB1234");
        assert_eq!(logged.interaction_type, "lockout_assistance");
        assert!(uuid::Uuid::parse_str(&logged.id).is_ok());
        assert!(logged.timestamp >= before);
        assert!(logged.guest_email.is_none());
    }
}
