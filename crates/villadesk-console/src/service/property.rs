//! Property repository: owner-scoped CRUD over property records.
//!
//! Every read and write is scoped to the owning account; a record owned by
//! someone else behaves exactly like a missing record. Unit identifiers are
//! globally unique across all owners.

use chrono::{DateTime, Utc};

use villadesk_common::{VilladeskError, unit_id};
use villadesk_persistence::entity::properties;
use villadesk_persistence::sea_orm::*;

use crate::model::defaults;
use crate::model::property::{CreatePropertyRequest, PropertyFields, UpdatePropertyRequest};
use crate::service::storage;

/// All properties of the owner, newest-created first.
pub async fn list(
    db: &DatabaseConnection,
    owner_id: &str,
) -> anyhow::Result<Vec<properties::Model>> {
    let items = properties::Entity::find()
        .filter(properties::Column::OwnerId.eq(owner_id))
        .order_by_desc(properties::Column::CreatedAt)
        .all(db)
        .await
        .map_err(storage)?;

    Ok(items)
}

pub async fn get(
    db: &DatabaseConnection,
    owner_id: &str,
    unit_id: &str,
) -> anyhow::Result<properties::Model> {
    let unit_id = unit_id::normalize(unit_id);

    properties::Entity::find_by_id(&unit_id)
        .filter(properties::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(storage)?
        .ok_or_else(|| VilladeskError::NotFound(format!("property '{unit_id}'")).into())
}

/// Create a property record for the owner.
///
/// The unit id must be unused across the whole store. The pre-check catches
/// the common case with a clear Conflict; the primary-key violation during
/// the race window maps to the same Conflict, so concurrent creates of one
/// unit id produce exactly one record.
pub async fn create(
    db: &DatabaseConnection,
    owner_id: &str,
    request: CreatePropertyRequest,
) -> anyhow::Result<properties::Model> {
    request.validate().map_err(VilladeskError::Validation)?;

    let unit_id = request.normalized_unit_id();
    if properties::Entity::find_by_id(&unit_id)
        .one(db)
        .await
        .map_err(storage)?
        .is_some()
    {
        return Err(VilladeskError::Conflict(unit_id).into());
    }

    let model = new_property(owner_id, unit_id, request.status, request.fields, Utc::now());

    let active = model.clone().into_active_model().reset_all();
    match properties::Entity::insert(active).exec_without_returning(db).await {
        Ok(_) => Ok(model),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Err(VilladeskError::Conflict(model.unit_id).into())
            }
            _ => Err(storage(err).into()),
        },
    }
}

/// Merge-patch update: only supplied fields change, absent fields stay
/// untouched. An empty patch still refreshes `updated_at`.
pub async fn update(
    db: &DatabaseConnection,
    owner_id: &str,
    unit_id: &str,
    request: UpdatePropertyRequest,
) -> anyhow::Result<properties::Model> {
    request.validate().map_err(VilladeskError::Validation)?;

    let existing = get(db, owner_id, unit_id).await?;
    let unit_id = existing.unit_id.clone();
    let merged = merge(existing, &request, Utc::now());

    let mut active = merged.into_active_model().reset_all();
    active.unit_id = ActiveValue::Unchanged(unit_id.clone());
    // Owner and creation data are immutable; the call counter belongs to the
    // lookup gateway and must not be clobbered by a concurrent increment.
    active.owner_id = ActiveValue::NotSet;
    active.created_at = ActiveValue::NotSet;
    active.voice_calls_this_week = ActiveValue::NotSet;

    match properties::Entity::update(active)
        .filter(properties::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await
    {
        Ok(model) => Ok(model),
        Err(DbErr::RecordNotUpdated) => {
            Err(VilladeskError::NotFound(format!("property '{unit_id}'")).into())
        }
        Err(err) => Err(storage(err).into()),
    }
}

/// Hard delete, scoped to owner in a single filtered statement.
pub async fn delete(db: &DatabaseConnection, owner_id: &str, unit_id: &str) -> anyhow::Result<()> {
    let unit_id = unit_id::normalize(unit_id);

    let result = properties::Entity::delete_many()
        .filter(properties::Column::UnitId.eq(&unit_id))
        .filter(properties::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await
        .map_err(storage)?;

    if result.rows_affected == 0 {
        return Err(VilladeskError::NotFound(format!("property '{unit_id}'")).into());
    }

    Ok(())
}

/// Assemble a fresh record: status defaults to draft, omitted descriptive
/// fields get their starter texts, counter starts at zero.
fn new_property(
    owner_id: &str,
    unit_id: String,
    status: Option<String>,
    fields: PropertyFields,
    now: DateTime<Utc>,
) -> properties::Model {
    let fields = fields.with_creation_defaults();

    properties::Model {
        unit_id,
        owner_id: owner_id.to_string(),
        status: status.unwrap_or_else(|| defaults::DEFAULT_STATUS.to_string()),
        lock_code: fields.lock_code,
        lock_box: fields.lock_box,
        lock_info: fields.lock_info,
        gate_code: fields.gate_code,
        gate_info: fields.gate_info,
        network_name: fields.network_name,
        passcode: fields.passcode,
        router_info: fields.router_info,
        tv_info: fields.tv_info,
        no_sig: fields.no_sig,
        linen_info: fields.linen_info,
        washcloths: fields.washcloths,
        pack_n_play: fields.pack_n_play,
        ex_supply_info: fields.ex_supply_info,
        dishwasher: fields.dishwasher,
        coffee_maker: fields.coffee_maker,
        garbage_info: fields.garbage_info,
        jacuzzi: fields.jacuzzi,
        pool_heat: fields.pool_heat,
        lost_and_found: fields.lost_and_found,
        pass_loc: fields.pass_loc,
        parking: fields.parking,
        pool_code: fields.pool_code,
        com_pool_loc: fields.com_pool_loc,
        clubhouse: fields.clubhouse,
        manager_email: fields.manager_email,
        manager_txt: fields.manager_txt,
        check_in: fields.check_in,
        check_out: fields.check_out,
        delivery_info: fields.delivery_info,
        pet: fields.pet,
        parking_info: fields.parking_info,
        voice_calls_this_week: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Apply a merge-patch to an existing record. `None` leaves a field
/// untouched; there is no way to clear a field back to unset.
fn merge(
    mut property: properties::Model,
    request: &UpdatePropertyRequest,
    now: DateTime<Utc>,
) -> properties::Model {
    if let Some(status) = &request.status {
        property.status = status.clone();
    }

    macro_rules! patch {
        ($($field:ident),+ $(,)?) => {
            $(
                if request.fields.$field.is_some() {
                    property.$field = request.fields.$field.clone();
                }
            )+
        };
    }

    patch!(
        lock_code,
        lock_box,
        lock_info,
        gate_code,
        gate_info,
        network_name,
        passcode,
        router_info,
        tv_info,
        no_sig,
        linen_info,
        washcloths,
        pack_n_play,
        ex_supply_info,
        dishwasher,
        coffee_maker,
        garbage_info,
        jacuzzi,
        pool_heat,
        lost_and_found,
        pass_loc,
        parking,
        pool_code,
        com_pool_loc,
        clubhouse,
        manager_email,
        manager_txt,
        check_in,
        check_out,
        delivery_info,
        pet,
        parking_info,
    );

    property.updated_at = now;
    property
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(unit_id: &str) -> CreatePropertyRequest {
        CreatePropertyRequest {
            unit_id: unit_id.to_string(),
            status: None,
            fields: PropertyFields::default(),
        }
    }

    #[test]
    fn test_new_property_applies_defaults_and_zeroes_counter() {
        let now = Utc::now();
        let model = new_property(
            "owner-1",
            "AB1234".to_string(),
            None,
            PropertyFields::default(),
            now,
        );

        assert_eq!(model.unit_id, "AB1234");
        assert_eq!(model.owner_id, "owner-1");
        assert_eq!(model.status, "draft");
        assert_eq!(model.lock_code.as_deref(), Some(defaults::LOCK_CODE));
        assert_eq!(model.check_out.as_deref(), Some(defaults::CHECK_OUT));
        assert!(model.pool_heat.is_none());
        assert_eq!(model.voice_calls_this_week, 0);
        assert_eq!(model.created_at, now);
        assert_eq!(model.updated_at, now);
    }

    #[test]
    fn test_new_property_keeps_explicit_status_and_fields() {
        let model = new_property(
            "owner-1",
            "AB1234".to_string(),
            Some("active".to_string()),
            PropertyFields {
                gate_code: Some("8642".to_string()),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(model.status, "active");
        assert_eq!(model.gate_code.as_deref(), Some("8642"));
    }

    #[test]
    fn test_merge_changes_only_supplied_fields() {
        let now = Utc::now();
        let base = new_property(
            "owner-1",
            "AB1234".to_string(),
            None,
            PropertyFields::default(),
            now - chrono::Duration::hours(5),
        );
        let created_at = base.created_at;

        let merged = merge(
            base,
            &UpdatePropertyRequest {
                status: Some("active".to_string()),
                fields: PropertyFields {
                    passcode: Some("NewWifi456".to_string()),
                    ..Default::default()
                },
            },
            now,
        );

        assert_eq!(merged.status, "active");
        assert_eq!(merged.passcode.as_deref(), Some("NewWifi456"));
        // Untouched fields keep their values
        assert_eq!(merged.lock_code.as_deref(), Some(defaults::LOCK_CODE));
        assert_eq!(merged.created_at, created_at);
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn test_merge_empty_patch_refreshes_only_updated_at() {
        let earlier = Utc::now() - chrono::Duration::hours(1);
        let base = new_property(
            "owner-1",
            "AB1234".to_string(),
            None,
            PropertyFields::default(),
            earlier,
        );
        let now = Utc::now();

        let merged = merge(base.clone(), &UpdatePropertyRequest::default(), now);

        assert_eq!(merged.updated_at, now);
        assert_eq!(
            properties::Model {
                updated_at: base.updated_at,
                ..merged.clone()
            },
            base
        );
    }

    #[tokio::test]
    async fn test_get_unknown_unit_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<properties::Model>::new()])
            .into_connection();

        let err = get(&db, "owner-1", "zz9999").await.unwrap_err();
        let err = err.downcast_ref::<VilladeskError>().unwrap();
        assert!(matches!(err, VilladeskError::NotFound(_)));
        assert_eq!(err.to_string(), "property 'ZZ9999' not found");
    }

    #[tokio::test]
    async fn test_get_normalizes_the_unit_id() {
        let stored = new_property(
            "owner-1",
            "AB1234".to_string(),
            None,
            PropertyFields::default(),
            Utc::now(),
        );
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let found = get(&db, "owner-1", "  ab1234 ").await.unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_get_is_scoped_to_the_owner() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<properties::Model>::new()])
            .into_connection();

        // Another owner's record behaves exactly like a missing one
        let err = get(&db, "intruder", "AB1234").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VilladeskError>(),
            Some(VilladeskError::NotFound(_))
        ));

        let log = db.into_transaction_log();
        let select = format!("{:?}", log[0]);
        assert!(
            select.contains(
                r#"WHERE \"properties\".\"unit_id\" = $1 AND \"properties\".\"owner_id\" = $2"#
            ),
            "{select}"
        );
    }

    #[tokio::test]
    async fn test_update_filters_by_owner_in_the_update_statement() {
        let now = Utc::now();
        let existing = new_property(
            "owner-1",
            "AB1234".to_string(),
            None,
            PropertyFields::default(),
            now - chrono::Duration::hours(2),
        );
        let request = UpdatePropertyRequest {
            status: Some("active".to_string()),
            fields: PropertyFields::default(),
        };
        let merged = merge(existing.clone(), &request, now);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![merged]])
            .into_connection();

        let updated = update(&db, "owner-1", "AB1234", request).await.unwrap();
        assert_eq!(updated.status, "active");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let statement = format!("{:?}", log[1]);
        assert!(statement.contains(r#"UPDATE \"properties\""#), "{statement}");
        assert!(statement.contains(r#"\"owner_id\" = $"#), "{statement}");
    }

    #[tokio::test]
    async fn test_list_surfaces_backend_failures_as_storage_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = list(&db, "owner-1").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VilladeskError>(),
            Some(VilladeskError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_unit_id() {
        let existing = new_property(
            "someone-else",
            "AB1234".to_string(),
            None,
            PropertyFields::default(),
            Utc::now(),
        );
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .into_connection();

        // Uniqueness is global, not per owner
        let err = create(&db, "owner-1", create_request("ab1234"))
            .await
            .unwrap_err();
        let err = err.downcast_ref::<VilladeskError>().unwrap();
        assert!(matches!(err, VilladeskError::Conflict(_)));
        assert_eq!(err.to_string(), "unit 'AB1234' already exists");
    }

    #[tokio::test]
    async fn test_create_validates_before_touching_the_store() {
        // No mocked results: any query would fail the test
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = create(&db, "owner-1", create_request("AB12"))
            .await
            .unwrap_err();
        let err = err.downcast_ref::<VilladeskError>().unwrap();
        assert!(matches!(err, VilladeskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_inserts_and_returns_the_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<properties::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let created = create(&db, "owner-1", create_request("ab1234"))
            .await
            .unwrap();
        assert_eq!(created.unit_id, "AB1234");
        assert_eq!(created.owner_id, "owner-1");
        assert_eq!(created.status, "draft");
        assert_eq!(created.network_name.as_deref(), Some(defaults::NETWORK_NAME));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = delete(&db, "owner-1", "AB1234").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VilladeskError>(),
            Some(VilladeskError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_scoped_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(delete(&db, "owner-1", "AB1234").await.is_ok());

        let log = db.into_transaction_log();
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains(r#"DELETE FROM \"properties\""#), "{statement}");
        assert!(
            statement.contains(
                r#"\"properties\".\"unit_id\" = $1 AND \"properties\".\"owner_id\" = $2"#
            ),
            "{statement}"
        );
    }
}
