//! Dashboard aggregator: the owner's summary figures.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use villadesk_common::VilladeskError;
use villadesk_persistence::entity::{properties, voice_interactions};
use villadesk_persistence::sea_orm::*;

use crate::model::dashboard::DashboardStats;
use crate::service::storage;

/// Compute the four dashboard figures for an owner.
///
/// "Today" is the caller's current local calendar day; the bounds are fixed
/// once per request and converted to UTC for the store. Interactions are
/// attributed to the owner through a join on the property's ownership at
/// query time.
pub async fn summarize(db: &DatabaseConnection, owner_id: &str) -> anyhow::Result<DashboardStats> {
    let active_properties = properties::Entity::find()
        .filter(properties::Column::OwnerId.eq(owner_id))
        .filter(properties::Column::Status.eq("active"))
        .count(db)
        .await
        .map_err(storage)?;

    let (day_start, day_end) = local_day_bounds(Local::now().date_naive())?;
    let voice_calls_today = owner_interactions(owner_id)
        .filter(voice_interactions::Column::Timestamp.gte(day_start))
        .filter(voice_interactions::Column::Timestamp.lt(day_end))
        .count(db)
        .await
        .map_err(storage)?;

    let week_ago = Utc::now() - chrono::Duration::days(7);
    let recent_week = owner_interactions(owner_id)
        .filter(voice_interactions::Column::Timestamp.gte(week_ago))
        .count(db)
        .await
        .map_err(storage)?;

    Ok(DashboardStats::from_counts(
        active_properties,
        voice_calls_today,
        recent_week,
    ))
}

fn owner_interactions(owner_id: &str) -> Select<voice_interactions::Entity> {
    voice_interactions::Entity::find()
        .join(
            JoinType::InnerJoin,
            voice_interactions::Relation::Properties.def(),
        )
        .filter(properties::Column::OwnerId.eq(owner_id))
}

/// UTC bounds of one local calendar day: [local midnight, next local
/// midnight). A timezone transition can make a midnight ambiguous or
/// nonexistent; the earliest valid instant wins.
fn local_day_bounds(date: NaiveDate) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let next = date
        .succ_opt()
        .ok_or_else(|| VilladeskError::InternalError("calendar overflow".to_string()))?;

    Ok((start_of_day(date)?, start_of_day(next)?))
}

fn start_of_day(date: NaiveDate) -> anyhow::Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            VilladeskError::InternalError(format!("no local midnight on {date}")).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_day_bounds_cover_now() {
        let now = Local::now();
        let (start, end) = local_day_bounds(now.date_naive()).unwrap();

        let now_utc = now.with_timezone(&Utc);
        assert!(start <= now_utc);
        assert!(now_utc < end);
    }

    #[test]
    fn test_local_day_bounds_are_roughly_a_day_apart() {
        let (start, end) = local_day_bounds(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()).unwrap();

        // DST transitions can stretch or shrink a day by an hour
        let span = end - start;
        assert!(span >= chrono::Duration::hours(23));
        assert!(span <= chrono::Duration::hours(25));
    }

    #[test]
    fn test_consecutive_days_share_a_bound() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let (_, end) = local_day_bounds(date).unwrap();
        let (next_start, _) = local_day_bounds(date.succ_opt().unwrap()).unwrap();
        assert_eq!(end, next_start);
    }
}
