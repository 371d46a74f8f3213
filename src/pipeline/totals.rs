use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reservations::db_types::FlexibilityReservationRecord;

/// Synthetic per-group total produced by aggregation. Lives only for the
/// duration of one export call.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationTotals {
    pub asset_id: Uuid,
    pub market_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub positive_value: BigDecimal,
    pub negative_value: BigDecimal,
}

/// Collapses records sharing an (asset_id, market_id) group key into one
/// total per group: summed positive and negative values, with the minimum
/// timestamp in the group as the representative. Every group is emitted,
/// singletons included. Group order follows first appearance in the input.
pub fn aggregate_totals(records: &[FlexibilityReservationRecord]) -> Vec<ReservationTotals> {
    let mut totals: Vec<ReservationTotals> = Vec::new();

    for r in records {
        match totals
            .iter_mut()
            .find(|t| t.asset_id == r.asset_id && t.market_id == r.market_id)
        {
            Some(total) => {
                total.positive_value = &total.positive_value + &r.positive_value;
                total.negative_value = &total.negative_value + &r.negative_value;
                if r.timestamp < total.timestamp {
                    total.timestamp = r.timestamp;
                }
            }
            None => totals.push(ReservationTotals {
                asset_id: r.asset_id,
                market_id: r.market_id,
                timestamp: r.timestamp,
                positive_value: r.positive_value.clone(),
                negative_value: r.negative_value.clone(),
            }),
        }
    }

    totals
}
