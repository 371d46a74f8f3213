use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::{
    api::{
        error::ApiError,
        validation::{parse_export_interval, validate_uuid},
    },
    export::csv::{render_detail_csv, render_totals_csv, write_csv_file, EXPORT_FILE_NAME},
    pipeline::{interval::filter_by_interval, totals::aggregate_totals},
    reservations::{db_types::FlexibilityReservationRecord, operations},
    utils::{app_config::AppConfig, db::get_conn},
};

/// Query parameters for the CSV export endpoint
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub from: String,
    pub to: String,
    pub total: Option<bool>,
}

/// GET /api/v1/flexibility/reservations/{assetId}/market/{marketId} -
/// Full-detail reservation records for one asset/market pair
pub async fn get_reservations(
    State(app_config): State<AppConfig>,
    Path((asset_id, market_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Vec<FlexibilityReservationRecord>>), ApiError> {
    let asset = validate_uuid(&asset_id, "asset")?;
    let market = validate_uuid(&market_id, "market")?;

    let mut conn = get_conn(app_config.pool.clone())
        .map_err(|_| ApiError::internal_error("Failed to acquire database connection"))?;

    let records = operations::find_by_asset_and_market(&mut conn, asset, market)
        .map_err(|e| ApiError::database_error(format!("Failed to fetch reservations: {}", e)))?;

    if records.is_empty() {
        return Err(ApiError::not_found(format!(
            "Reservations for assetId: {} and marketId: {}",
            asset, market
        )));
    }

    Ok((StatusCode::OK, Json(records)))
}

/// GET /api/v1/flexibility/reservations/{assetId}/market/{marketId}/export -
/// Time-filtered, optionally aggregated CSV download. The same bytes are
/// persisted to the export file before the response goes out.
pub async fn export_reservations(
    State(app_config): State<AppConfig>,
    Path((asset_id, market_id)): Path<(String, String)>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let asset = validate_uuid(&asset_id, "asset")?;
    let market = validate_uuid(&market_id, "market")?;
    let interval = parse_export_interval(&params.from, &params.to)?;
    let total = params.total.unwrap_or(false);

    let mut conn = get_conn(app_config.pool.clone())
        .map_err(|_| ApiError::internal_error("Failed to acquire database connection"))?;

    // The store narrows to the interval; the filter stage owns the contract.
    let records = operations::find_by_asset_and_market_in_range(
        &mut conn,
        asset,
        market,
        interval.from,
        interval.to,
    )
    .map_err(|e| ApiError::database_error(format!("Failed to fetch reservations: {}", e)))?;

    let filtered = filter_by_interval(&records, &interval);

    if filtered.is_empty() {
        return Err(ApiError::not_found(format!(
            "Reservations for assetId: {} and marketId: {} between {} and {}",
            asset, market, params.from, params.to
        )));
    }

    let bytes = if total {
        render_totals_csv(&aggregate_totals(&filtered))
    } else {
        render_detail_csv(&filtered)
    }
    .map_err(|e| ApiError::internal_error(format!("CSV export failed: {}", e)))?;

    let file_path = app_config.export_dir.join(EXPORT_FILE_NAME);
    write_csv_file(&bytes, &file_path)
        .await
        .map_err(|e| ApiError::internal_error(format!("CSV export failed: {}", e)))?;

    tracing::info!(
        rows = filtered.len(),
        total,
        file = %file_path.display(),
        "Exported reservations to CSV"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", EXPORT_FILE_NAME),
        )
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))
}
