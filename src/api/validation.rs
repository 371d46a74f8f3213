use chrono::{DateTime, Utc};

use crate::api::error::ApiError;
use crate::pipeline::interval::TimeInterval;

pub fn validate_uuid(uuid_str: &str, field_name: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(uuid_str)
        .map_err(|_| ApiError::bad_request(format!("Invalid {} UUID format", field_name)))
}

pub fn parse_instant(value: &str, field_name: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ApiError::bad_request(format!(
                "Invalid {} timestamp. Expected ISO-8601 instant format, e.g. 2022-10-10T14:15:22Z",
                field_name
            ))
        })
}

/// Parses and validates the export time bounds. Rejection happens here,
/// before any store access.
pub fn parse_export_interval(from: &str, to: &str) -> Result<TimeInterval, ApiError> {
    let from = parse_instant(from, "from")?;
    let to = parse_instant(to, "to")?;

    TimeInterval::new(from, to).map_err(|e| ApiError::bad_request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid_rejects_malformed_input() {
        assert!(validate_uuid("not-a-uuid", "asset").is_err());
        assert!(validate_uuid("9179b887-04ef-4ce5-ab3a-b5bbd39ea3c8", "asset").is_ok());
    }

    #[test]
    fn test_parse_instant_accepts_iso_8601() {
        let parsed = parse_instant("2022-10-10T14:15:22Z", "from").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2022-10-10T14:15:22+00:00");
    }

    #[test]
    fn test_parse_instant_rejects_date_only() {
        assert!(parse_instant("2022-10-10", "from").is_err());
        assert!(parse_instant("", "from").is_err());
    }

    #[test]
    fn test_export_interval_rejects_from_after_to() {
        let err = parse_export_interval("2022-10-24T14:15:22Z", "2022-10-10T14:15:22Z");
        assert!(matches!(err, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_export_interval_accepts_ordered_bounds() {
        let interval =
            parse_export_interval("2022-10-10T14:15:22Z", "2022-10-24T14:15:22Z").unwrap();
        assert!(interval.from < interval.to);
    }
}
