use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Auth payload for `/login` and `/register`. Serialized once per
/// submission and never retained.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful `/generate-designs` response. `storedImage` is present when
/// the backend kept a local copy of the result.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerationResult {
    pub url: String,
    #[serde(default, rename = "storedImage")]
    pub stored_image: Option<String>,
}

/// One backend-persisted generation, as returned by `/generations`.
/// Read-only on this side.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    pub id: i64,
    pub original_image: String,
    pub generated_image: String,
    pub style: String,
    pub room_type: String,
    pub timestamp: String,
}

impl GenerationRecord {
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// The picked file, ready for a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

const DISPLAY_FORMAT: &str = "%b %d, %Y %H:%M";

/// Render a backend timestamp human-readable. The backend has emitted both
/// RFC 3339 and SQLite's `YYYY-MM-DD HH:MM:SS`; anything else is shown raw
/// rather than dropping the record.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_decodes_camel_case() {
        let body = r#"[{
            "id": 7,
            "originalImage": "http://localhost:5000/api/stored-image/original_1.jpg",
            "generatedImage": "http://localhost:5000/api/stored-image/generated_1.jpg",
            "style": "scandinavian",
            "roomType": "bedroom",
            "timestamp": "2024-01-15 10:30:00"
        }]"#;

        let records: Vec<GenerationRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
        assert_eq!(records[0].room_type, "bedroom");
        assert!(records[0].original_image.ends_with("original_1.jpg"));
    }

    #[test]
    fn test_generation_result_with_stored_image() {
        let result: GenerationResult =
            serde_json::from_str(r#"{"url": "https://x/img.png", "storedImage": "https://x/s.png"}"#)
                .unwrap();
        assert_eq!(result.url, "https://x/img.png");
        assert_eq!(result.stored_image.as_deref(), Some("https://x/s.png"));

        let bare: GenerationResult =
            serde_json::from_str(r#"{"url": "https://x/img.png"}"#).unwrap();
        assert_eq!(bare.stored_image, None);
    }

    #[test]
    fn test_format_sqlite_timestamp() {
        assert_eq!(format_timestamp("2024-01-15 10:30:00"), "Jan 15, 2024 10:30");
    }

    #[test]
    fn test_format_rfc3339_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-02T08:05:00+00:00"),
            "Mar 02, 2024 08:05"
        );
    }

    #[test]
    fn test_unparsable_timestamp_shown_raw() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
