//! Media item normalization

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base URL for thumbnail construction
pub const THUMBNAIL_BASE_URL: &str = "https://www.imago-images.de";

/// Zero-padded width of normalized media identifiers
pub const MEDIA_ID_WIDTH: usize = 10;

/// Default display pattern for [`format_iso_date`]
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Collection tag used when a document carries none
const DEFAULT_DB: &str = "st";

/// A normalized media item as served to clients
///
/// `id` is always left-padded to [`MEDIA_ID_WIDTH`] digits and
/// `thumbnail_url` is derived deterministically from `db` and `id`.
/// `date` carries the engine's raw ISO string unchanged; display
/// reformatting happens at render time via [`format_iso_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub db: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub thumbnail_url: String,
}

impl MediaItem {
    /// Normalize one raw engine document (`hits.hits[]._source`)
    ///
    /// Missing optional fields never fail; they fall back to the
    /// documented defaults.
    pub fn from_source(source: &Map<String, Value>) -> Self {
        let id = pad_media_id(&field_as_string(source, "bildnummer").unwrap_or_default());
        let db = field_as_string(source, "db").unwrap_or_else(|| DEFAULT_DB.to_string());

        let thumbnail_url = format!("{}/bild/{}/{}/s.jpg", THUMBNAIL_BASE_URL, db, id);

        Self {
            id,
            db,
            title: field_as_string(source, "suchtext").unwrap_or_else(|| "Untitled".to_string()),
            description: field_as_string(source, "description").unwrap_or_default(),
            date: field_as_string(source, "datum").unwrap_or_default(),
            thumbnail_url,
        }
    }
}

/// Left-pad a raw identifier with zeros to [`MEDIA_ID_WIDTH`] digits
///
/// Identifiers already at or beyond the width pass through unchanged.
pub fn pad_media_id(raw: &str) -> String {
    format!("{:0>width$}", raw, width = MEDIA_ID_WIDTH)
}

/// Read a field as a string, stringifying bare numbers
///
/// The index stores `bildnummer` as either a number or a string
/// depending on ingest vintage; both normalize identically.
fn field_as_string(source: &Map<String, Value>, field: &str) -> Option<String> {
    match source.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reformat an ISO-8601 date string for display
///
/// Accepts full RFC 3339 timestamps (with or without trailing `Z`),
/// naive date-times, and bare dates. On any parse failure the input
/// is returned unchanged rather than raising.
pub fn format_iso_date(value: &str, format: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(format).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(format).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format(format).to_string();
    }
    value.to_string()
}
