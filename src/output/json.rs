//! JSON output for reports that are not resource documents
//!
//! Documents are printed bare so they can be applied again; everything else
//! (status, kind listings) goes out wrapped with metadata.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 time the report was produced
    pub timestamp: String,

    /// pccop version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON with metadata
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Debug, Serialize)]
    struct Row {
        kind: &'static str,
        read_only: bool,
    }

    #[test]
    fn test_format_json_wraps_data() {
        let rows = vec![Row {
            kind: "collection",
            read_only: true,
        }];

        let parsed: Value = serde_json::from_str(&format_json(&rows).unwrap()).unwrap();
        assert_eq!(parsed["data"][0]["kind"], "collection");
        assert_eq!(parsed["data"][0]["read_only"], true);
        assert_eq!(parsed["meta"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(!parsed["meta"]["timestamp"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_format_json_empty_vec() {
        let rows: Vec<Row> = vec![];
        assert!(format_json(&rows).unwrap().contains("\"data\": []"));
    }
}
