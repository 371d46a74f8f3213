use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use bigdecimal::BigDecimal;
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use tokio::sync::Mutex;

use crate::pipeline::totals::ReservationTotals;
use crate::reservations::db_types::FlexibilityReservationRecord;

pub const EXPORT_FILE_NAME: &str = "reservations.csv";

/// Serializes concurrent exports racing on the shared output file path.
/// Last writer still wins, but writes never interleave.
static EXPORT_FILE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[derive(Debug)]
pub enum ExportError {
    Render(csv::Error),
    File { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Render(e) => write!(f, "Failed to render CSV data: {}", e),
            ExportError::File { path, source } => {
                write!(f, "Failed to write CSV file at {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Render(e) => Some(e),
            ExportError::File { source, .. } => Some(source),
        }
    }
}

/// Renders aggregated totals with the short column layout. Power values are
/// converted from kilowatts to megawatts on the way out.
pub fn render_totals_csv(totals: &[ReservationTotals]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["timestamp", "assetId", "marketId", "positiveValue", "negativeValue"])
        .map_err(ExportError::Render)?;

    for t in totals {
        writer
            .write_record(&[
                format_timestamp(&t.timestamp),
                t.asset_id.to_string(),
                t.market_id.to_string(),
                kilowatts_to_megawatts(&t.positive_value).to_string(),
                kilowatts_to_megawatts(&t.negative_value).to_string(),
            ])
            .map_err(ExportError::Render)?;
    }

    finish(writer)
}

/// Renders full-detail rows with every column. Power values are converted
/// kW -> MW; prices are written verbatim; absent optionals render as empty
/// cells rather than a placeholder token.
pub fn render_detail_csv(
    records: &[FlexibilityReservationRecord],
) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "assetId",
            "marketId",
            "positiveBidId",
            "negativeBidId",
            "positiveValue",
            "positiveCapacityPrice",
            "positiveEnergyPrice",
            "negativeValue",
            "negativeCapacityPrice",
            "negativeEnergyPrice",
            "timestamp",
            "updatedAt",
        ])
        .map_err(ExportError::Render)?;

    for r in records {
        writer
            .write_record(&[
                r.asset_id.to_string(),
                r.market_id.to_string(),
                opt_string(&r.positive_bid_id),
                opt_string(&r.negative_bid_id),
                kilowatts_to_megawatts(&r.positive_value).to_string(),
                opt_string(&r.positive_capacity_price),
                opt_string(&r.positive_energy_price),
                kilowatts_to_megawatts(&r.negative_value).to_string(),
                opt_string(&r.negative_capacity_price),
                opt_string(&r.negative_energy_price),
                format_timestamp(&r.timestamp),
                r.updated_at.as_ref().map(format_timestamp).unwrap_or_default(),
            ])
            .map_err(ExportError::Render)?;
    }

    finish(writer)
}

/// Writes the rendered bytes to the export file, creating the parent
/// directory when missing and overwriting any previous export.
pub async fn write_csv_file(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
    let _guard = EXPORT_FILE_LOCK.lock().await;

    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await.map_err(|e| ExportError::File {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    tokio::fs::write(path, bytes).await.map_err(|e| ExportError::File {
        path: path.to_path_buf(),
        source: e,
    })
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::Render(csv::Error::from(e.into_error())))
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// (kW / 1000) = MW. Exact decimal division, trailing zeros stripped so the
// output is stable regardless of input scale.
fn kilowatts_to_megawatts(kw: &BigDecimal) -> BigDecimal {
    (kw.clone() / BigDecimal::from(1000)).normalized()
}

fn opt_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}
