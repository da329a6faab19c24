//! Data transfer objects for the eSignAnyWhere API.

pub mod v5;
pub mod v6;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Response from `GET {version}/version`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Where the bytes of an upload come from.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// A file on disk; its name is used as the upload file name.
    Path(PathBuf),
    /// An in-memory buffer.
    Bytes { file_name: String, bytes: Vec<u8> },
}

impl UploadSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

impl From<PathBuf> for UploadSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&std::path::Path> for UploadSource {
    fn from(path: &std::path::Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

/// Envelope returned by `get_envelope`, shaped by the configured API version.
#[derive(Debug, Clone)]
pub enum EnvelopeDetails {
    V6(Box<v6::EnvelopeGetResponse>),
    V5(Box<v5::EnvelopeStatus>),
}

impl EnvelopeDetails {
    pub fn id(&self) -> &str {
        match self {
            Self::V6(envelope) => &envelope.id,
            Self::V5(envelope) => &envelope.id,
        }
    }

    /// Status name as reported by the service (e.g. `Canceled`).
    pub fn status_name(&self) -> Option<String> {
        match self {
            Self::V6(envelope) => Some(envelope.envelope_status.as_str().to_string()),
            Self::V5(envelope) => envelope.status.clone(),
        }
    }

    /// True when the service reports the envelope as canceled.
    pub fn is_canceled(&self) -> bool {
        match self {
            Self::V6(envelope) => envelope.envelope_status == v6::EnvelopeStatus::Canceled,
            Self::V5(envelope) => envelope
                .status
                .as_deref()
                .is_some_and(|status| status.eq_ignore_ascii_case("canceled")),
        }
    }

    pub fn as_v6(&self) -> Option<&v6::EnvelopeGetResponse> {
        match self {
            Self::V6(envelope) => Some(&**envelope),
            Self::V5(_) => None,
        }
    }

    pub fn as_v5(&self) -> Option<&v5::EnvelopeStatus> {
        match self {
            Self::V5(envelope) => Some(&**envelope),
            Self::V6(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_response_tolerates_missing_fields() {
        let version: VersionResponse = serde_json::from_value(json!({ "Version": "23.5" })).unwrap();
        assert!(!version.success);
        assert_eq!(version.version, "23.5");
    }

    #[test]
    fn envelope_details_report_status_for_both_versions() {
        let v6: v6::EnvelopeGetResponse =
            serde_json::from_value(json!({ "Id": "a", "EnvelopeStatus": "Canceled" })).unwrap();
        let details = EnvelopeDetails::V6(Box::new(v6));
        assert_eq!(details.id(), "a");
        assert!(details.is_canceled());
        assert_eq!(details.status_name().as_deref(), Some("Canceled"));

        let v6: v6::EnvelopeGetResponse =
            serde_json::from_value(json!({ "Id": "c", "EnvelopeStatus": "InProgress" })).unwrap();
        let details = EnvelopeDetails::V6(Box::new(v6));
        assert_eq!(details.status_name().as_deref(), Some("InProgress"));
        assert!(!details.is_canceled());

        let v5: v5::EnvelopeStatus =
            serde_json::from_value(json!({ "Id": "b", "Status": "Active" })).unwrap();
        let details = EnvelopeDetails::V5(Box::new(v5));
        assert_eq!(details.id(), "b");
        assert!(!details.is_canceled());
        assert!(details.as_v6().is_none());
    }
}
