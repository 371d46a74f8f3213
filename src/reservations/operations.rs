use anyhow::Result;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, PooledConnection},
};
use uuid::Uuid;

use crate::reservations::db_types::FlexibilityReservationRecord;

/// All reservation rows for one asset/market pair, oldest first.
pub fn find_by_asset_and_market(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    asset: Uuid,
    market: Uuid,
) -> Result<Vec<FlexibilityReservationRecord>> {
    use crate::schema::flexibility_reservations::dsl::*;

    let res = flexibility_reservations
        .filter(asset_id.eq(asset).and(market_id.eq(market)))
        .order(timestamp.asc())
        .get_results::<FlexibilityReservationRecord>(conn)?;

    Ok(res)
}

/// Reservation rows for one asset/market pair with `range_start <= timestamp <= range_end`,
/// oldest first. The database narrows the set; the interval filter in the
/// pipeline still owns the interval contract over whatever comes back.
pub fn find_by_asset_and_market_in_range(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    asset: Uuid,
    market: Uuid,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<FlexibilityReservationRecord>> {
    use crate::schema::flexibility_reservations::dsl::*;

    let res = flexibility_reservations
        .filter(
            asset_id
                .eq(asset)
                .and(market_id.eq(market))
                .and(timestamp.between(range_start, range_end)),
        )
        .order(timestamp.asc())
        .get_results::<FlexibilityReservationRecord>(conn)?;

    Ok(res)
}
