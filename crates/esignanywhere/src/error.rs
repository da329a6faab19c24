//! Error types for the eSignAnyWhere API client.

use crate::version::ApiVersion;
use std::fmt;
use thiserror::Error;

/// Everything the client knows about a response that was not what the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFailure {
    /// Client operation that issued the request (e.g. `get_envelope`).
    pub operation: &'static str,
    /// HTTP status code returned by the service.
    pub status: u16,
    /// Full URL of the endpoint.
    pub endpoint: String,
    /// Request payload as sent: JSON text, or a description of the multipart form.
    pub request: Option<String>,
    /// Raw response body.
    pub response: String,
}

impl ResponseFailure {
    /// Response body parsed as JSON, if it is JSON.
    pub fn response_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.response).ok()
    }

    /// The service's machine-readable error code (`ErrorId`, e.g. `ERR0007`).
    pub fn error_id(&self) -> Option<String> {
        self.response_field("ErrorId")
    }

    /// The service's human-readable error message.
    pub fn message(&self) -> Option<String> {
        self.response_field("Message")
    }

    fn response_field(&self, key: &str) -> Option<String> {
        self.response_json()?
            .get(key)?
            .as_str()
            .map(str::to_string)
    }
}

impl fmt::Display for ResponseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.endpoint, self.status)?;
        if let Some(id) = self.error_id() {
            write!(f, " [{id}]")?;
        }
        if let Some(message) = self.message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Errors returned by the eSignAnyWhere client.
#[derive(Error, Debug)]
pub enum EsignError {
    /// The service rejected the API token (HTTP 401).
    #[error("Unauthorized request to {0}")]
    Unauthorized(Box<ResponseFailure>),

    /// The service answered with a non-success status.
    #[error("Error response from {0}")]
    ErrorResponse(Box<ResponseFailure>),

    /// The service answered with success but the body was not what the operation expects.
    #[error("Unexpected response from {failure}: {message}")]
    UnexpectedResponse {
        message: String,
        failure: Box<ResponseFailure>,
    },

    /// The configured API version cannot be used for this operation.
    #[error("API version {version} is not supported by {operation} (supported: {})", format_versions(.supported))]
    UnsupportedVersion {
        operation: &'static str,
        version: ApiVersion,
        supported: &'static [ApiVersion],
    },

    /// Client configuration is incomplete or invalid.
    #[error("Client not configured: {0}")]
    NotConfigured(String),

    /// HTTP transport failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request payload could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a file for upload failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EsignError {
    /// Details of the offending response, for errors produced from one.
    pub fn failure(&self) -> Option<&ResponseFailure> {
        match self {
            Self::Unauthorized(failure) | Self::ErrorResponse(failure) => Some(&**failure),
            Self::UnexpectedResponse { failure, .. } => Some(&**failure),
            _ => None,
        }
    }

    /// HTTP status code of the response that caused this error.
    pub fn status(&self) -> Option<u16> {
        self.failure().map(|failure| failure.status)
    }

    /// The service's `ErrorId`, when the error body carried one.
    pub fn error_id(&self) -> Option<String> {
        self.failure().and_then(ResponseFailure::error_id)
    }

    /// True for a 404 error response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ErrorResponse(failure) if failure.status == 404)
    }
}

fn format_versions(versions: &[ApiVersion]) -> String {
    versions
        .iter()
        .map(ApiVersion::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for eSignAnyWhere operations.
pub type Result<T> = std::result::Result<T, EsignError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(status: u16, body: &str) -> ResponseFailure {
        ResponseFailure {
            operation: "get_envelope",
            status,
            endpoint: "https://demo.esignanywhere.net/Api/v6/envelope/abc".to_string(),
            request: None,
            response: body.to_string(),
        }
    }

    #[test]
    fn error_id_reads_service_error_body() {
        let failure = failure(404, r#"{"ErrorId":"ERR0007","Message":"Envelope not found"}"#);
        assert_eq!(failure.error_id().as_deref(), Some("ERR0007"));
        assert_eq!(failure.message().as_deref(), Some("Envelope not found"));
    }

    #[test]
    fn error_id_absent_for_plain_text_body() {
        let failure = failure(500, "Internal Server Error");
        assert!(failure.response_json().is_none());
        assert!(failure.error_id().is_none());
    }

    #[test]
    fn status_is_preserved_on_response_errors() {
        let err = EsignError::ErrorResponse(Box::new(failure(404, "{}")));
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());

        let err = EsignError::Unauthorized(Box::new(failure(401, "")));
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_not_found());

        let err = EsignError::NotConfigured("missing token".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn display_includes_endpoint_and_error_id() {
        let err = EsignError::ErrorResponse(Box::new(failure(
            400,
            r#"{"ErrorId":"ERR0097","Message":"File is empty"}"#,
        )));
        let text = err.to_string();
        assert!(text.contains("/Api/v6/envelope/abc"));
        assert!(text.contains("status 400"));
        assert!(text.contains("[ERR0097]"));
        assert!(text.contains("File is empty"));
    }

    #[test]
    fn unsupported_version_lists_supported_versions() {
        let err = EsignError::UnsupportedVersion {
            operation: "upload_file",
            version: ApiVersion::V5,
            supported: &[ApiVersion::V6],
        };
        assert_eq!(
            err.to_string(),
            "API version v5 is not supported by upload_file (supported: v6)"
        );
    }
}
