use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::schema::flexibility_reservations as FlexibilityReservationsTable;

/// One row of flexibility reservation data: the power reserved on a market
/// for an asset at a single interval point. Power values are stored in
/// kilowatts, prices in EUR/MW/h.
#[derive(Deserialize, Serialize, Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = FlexibilityReservationsTable)]
#[serde(rename_all = "camelCase")]
pub struct FlexibilityReservationRecord {
    pub id: i64,
    pub asset_id: Uuid,
    pub market_id: Uuid,
    pub positive_bid_id: Option<Uuid>,
    pub negative_bid_id: Option<Uuid>,
    pub positive_value: BigDecimal,
    pub positive_capacity_price: Option<BigDecimal>,
    pub positive_energy_price: Option<BigDecimal>,
    pub negative_value: BigDecimal,
    pub negative_capacity_price: Option<BigDecimal>,
    pub negative_energy_price: Option<BigDecimal>,
    pub timestamp: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
