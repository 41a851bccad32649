//! Data model for version 1 API documents.
//!
//! These types mirror the JSON produced by the registry API. Import input
//! files are full API responses, so every import subcommand decodes a
//! [`Response`] around the entity records in [`record`].

/// Closed code/name enumerations with fallible raw-value conversion.
pub mod coded;

/// The `MM/DD/YY` date format used by label expirations.
pub mod date;

/// Entity records mirrored by the import documents.
pub mod record;

use serde::Deserialize;

/// A version 1 API response envelope.
///
/// Absent fields decode to their defaults, matching the tolerance of the
/// upstream API.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Response<T> {
    /// Whether the API reported an error.
    pub error: bool,
    /// Human-readable status message.
    pub message: String,
    /// The payload records.
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::record::Crop;

    use rstest::rstest;

    #[rstest]
    fn test_decodes_full_envelope() {
        let document = r#"{
            "Error": false,
            "Message": "ok",
            "Data": [{"Id": 5, "Name": "Wheat", "Code": "WHET", "Notes": ""}]
        }"#;
        let response: Response<Crop> = serde_json::from_str(document).unwrap();
        assert!(!response.error);
        assert_eq!(response.message, "ok");
        assert_eq!(
            response.data,
            vec![Crop {
                id: 5,
                name: "Wheat".to_string(),
                code: "WHET".to_string(),
                notes: String::new(),
            }]
        );
    }

    #[rstest]
    fn test_missing_fields_default() {
        let response: Response<Crop> = serde_json::from_str("{}").unwrap();
        assert!(!response.error);
        assert!(response.message.is_empty());
        assert!(response.data.is_empty());
    }
}
