//! Types for the v5 API. Only envelope lookup is exposed for v5.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response from `GET v5/envelope/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeStatus {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Status as reported by v5, e.g. `Active` or `Canceled`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub send_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub steps: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_status() {
        let status: EnvelopeStatus = serde_json::from_value(json!({
            "Id": "env-5",
            "Status": "Active",
            "Steps": [{ "Id": "step-1" }],
            "Bulk": ""
        }))
        .unwrap();
        assert_eq!(status.id, "env-5");
        assert_eq!(status.status.as_deref(), Some("Active"));
        assert_eq!(status.steps.len(), 1);
        assert!(status.name.is_none());
        assert!(status.extra.contains_key("Bulk"));
    }
}
