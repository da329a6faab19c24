//! eSignAnyWhere API client.
//!
//! Every operation performs exactly one HTTP round trip against
//! `{domain}/Api/{version}/...`, authenticated with the `apiToken` header.
//! Operations declare which API versions they accept; asking for one the
//! configured version does not cover fails before any traffic is sent.

use crate::config::ClientConfig;
use crate::error::{EsignError, ResponseFailure, Result};
use crate::models::v6::{
    DraftCreateRequest, DraftCreateResponse, DraftSendRequest, DraftSendResponse,
    EnvelopeActivityDeleteRequest, EnvelopeActivityReplaceRequest, EnvelopeBulkSendRequest,
    EnvelopeBulkSendResponse, EnvelopeCancelRequest, EnvelopeDeleteRequest, EnvelopeFindRequest,
    EnvelopeFindResponse, EnvelopeGetConfigurationResponse, EnvelopeGetElementsResponse,
    EnvelopeGetFilesResponse, EnvelopeGetHistoryResponse, EnvelopeGetResponse,
    EnvelopeGetViewerLinksResponse, EnvelopeRemindRequest, EnvelopeRemindResponse,
    EnvelopeRestartExpiredRequest, EnvelopeSendRequest, EnvelopeSendResponse,
    EnvelopeUnlockRequest, FileDeleteRequest, FilePrepareRequest, FilePrepareResponse,
    FileUploadResponse, LicenseGetResponse, TeamGetAllResponse, TeamReplaceRequest,
    TemplateCreateDraftRequest, TemplateCreateDraftResponse,
};
use crate::models::{EnvelopeDetails, UploadSource, VersionResponse, v5};
use crate::version::{ANY, ApiVersion, V5_V6, V6_ONLY};
use chrono::{DateTime, Utc};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

/// The service documents this as `apiToken`; header names are case-insensitive.
const API_TOKEN_HEADER: &str = "apitoken";

/// A request in flight: what is needed to describe it if it fails.
struct Call {
    operation: &'static str,
    endpoint: String,
    payload: Option<String>,
}

impl Call {
    fn failure(&self, status: u16, response: String) -> Box<ResponseFailure> {
        Box::new(ResponseFailure {
            operation: self.operation,
            status,
            endpoint: self.endpoint.clone(),
            request: self.payload.clone(),
            response,
        })
    }
}

/// eSignAnyWhere API client.
#[derive(Clone, Debug)]
pub struct EsignClient {
    http_client: reqwest::Client,
    config: ClientConfig,
    api_token: HeaderValue,
}

impl EsignClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client that sends through an existing `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http_client: reqwest::Client) -> Result<Self> {
        if config.api_token.trim().is_empty() {
            return Err(EsignError::NotConfigured(
                "api_token must be provided".to_string(),
            ));
        }

        let mut api_token = HeaderValue::from_str(&config.api_token).map_err(|_| {
            EsignError::NotConfigured("api_token is not a valid header value".to_string())
        })?;
        api_token.set_sensitive(true);

        Ok(Self {
            http_client,
            config,
            api_token,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// API version every request is sent to.
    pub fn version(&self) -> ApiVersion {
        self.config.version
    }

    /// Root of the REST API, e.g. `https://demo.esignanywhere.net/Api/`.
    pub fn api_uri(&self) -> String {
        self.config.api_uri()
    }

    // ---------- Transport ----------

    /// Headers for every request. JSON requests also declare their content type.
    fn headers(&self, json: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_TOKEN_HEADER, self.api_token.clone());
        if json {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers
    }

    /// Resolve the endpoint for an operation, rejecting unsupported versions.
    ///
    /// Each segment is percent-encoded, so ids cannot change the request target.
    fn endpoint(
        &self,
        operation: &'static str,
        supported: &'static [ApiVersion],
        segments: &[&str],
    ) -> Result<Call> {
        let version = self.config.version;
        if !supported.contains(&version) {
            return Err(EsignError::UnsupportedVersion {
                operation,
                version,
                supported,
            });
        }

        let mut url = Url::parse(&self.config.api_uri()).map_err(|err| {
            EsignError::NotConfigured(format!("invalid API domain {}: {err}", self.config.domain()))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                EsignError::NotConfigured(format!("invalid API domain {}", self.config.domain()))
            })?
            .pop_if_empty()
            .push(version.as_str())
            .extend(segments);

        Ok(Call {
            operation,
            endpoint: url.to_string(),
            payload: None,
        })
    }

    async fn send(&self, call: &Call, request: RequestBuilder) -> Result<Response> {
        if let Some(payload) = &call.payload {
            debug!(payload = %payload, "request payload");
        }

        let response = request.send().await?;
        self.handle_status(call, response).await
    }

    /// Map 401 to `Unauthorized` and any other non-success status to `ErrorResponse`.
    async fn handle_status(&self, call: &Call, response: Response) -> Result<Response> {
        let status = response.status();
        let status_code = status.as_u16();

        if status.is_success() {
            info!(status = status_code, endpoint = %call.endpoint, "{} succeeded", call.operation);
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        error!(
            status = status_code,
            endpoint = %call.endpoint,
            "API error in {}: {}",
            call.operation,
            error_text
        );

        let failure = call.failure(status_code, error_text);
        if status == StatusCode::UNAUTHORIZED {
            Err(EsignError::Unauthorized(failure))
        } else {
            Err(EsignError::ErrorResponse(failure))
        }
    }

    /// Decode a success body; a body that does not fit `T` is an `UnexpectedResponse`.
    async fn decode<T: DeserializeOwned>(call: &Call, response: Response) -> Result<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        match serde_json::from_str::<T>(&body) {
            Ok(value) => Ok(value),
            Err(err) => Err(EsignError::UnexpectedResponse {
                message: err.to_string(),
                failure: call.failure(status, body),
            }),
        }
    }

    fn with_payload<B: Serialize>(mut call: Call, body: &B) -> Result<Call> {
        call.payload = Some(serde_json::to_string(body)?);
        Ok(call)
    }

    async fn get<T: DeserializeOwned>(&self, call: Call) -> Result<T> {
        debug!("GET {}", call.endpoint);

        let request = self.http_client.get(&call.endpoint).headers(self.headers(true));
        let response = self.send(&call, request).await?;
        Self::decode(&call, response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, call: Call, body: &B) -> Result<T> {
        let call = Self::with_payload(call, body)?;
        let response = self.post_json(&call).await?;
        Self::decode(&call, response).await
    }

    async fn post_no_content<B: Serialize>(&self, call: Call, body: &B) -> Result<()> {
        let call = Self::with_payload(call, body)?;
        self.post_json(&call).await?;
        Ok(())
    }

    async fn post_json(&self, call: &Call) -> Result<Response> {
        debug!("POST {}", call.endpoint);

        let request = self
            .http_client
            .post(&call.endpoint)
            .headers(self.headers(true))
            .body(call.payload.clone().unwrap_or_default());
        self.send(call, request).await
    }

    /// GET whose success body is returned as text.
    async fn get_text(&self, call: Call) -> Result<String> {
        debug!("GET {}", call.endpoint);

        let request = self.http_client.get(&call.endpoint).headers(self.headers(true));
        let response = self.send(&call, request).await?;
        Ok(response.text().await?)
    }

    /// GET of a binary resource; sent without a JSON content type.
    async fn get_bytes(&self, call: Call) -> Result<Vec<u8>> {
        debug!("GET {}", call.endpoint);

        let request = self.http_client.get(&call.endpoint).headers(self.headers(false));
        let response = self.send(&call, request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// GET carrying a JSON body; `envelope/unlock` is exposed this way.
    async fn get_with_body_no_content<B: Serialize>(&self, call: Call, body: &B) -> Result<()> {
        let call = Self::with_payload(call, body)?;
        debug!("GET {}", call.endpoint);

        let request = self
            .http_client
            .get(&call.endpoint)
            .headers(self.headers(true))
            .body(call.payload.clone().unwrap_or_default());
        self.send(&call, request).await?;
        Ok(())
    }

    /// Multipart POST. The form sets its own content type.
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        mut call: Call,
        form: Form,
        description: String,
    ) -> Result<T> {
        debug!("POST {} (multipart)", call.endpoint);
        call.payload = Some(description);

        let request = self
            .http_client
            .post(&call.endpoint)
            .headers(self.headers(false))
            .multipart(form);
        let response = self.send(&call, request).await?;
        Self::decode(&call, response).await
    }

    // ---------- Utility ----------

    /// Version of the eSignAnyWhere installation.
    #[instrument(skip(self))]
    pub async fn get_version(&self) -> Result<VersionResponse> {
        let call = self.endpoint("get_version", ANY, &["version"])?;
        self.get(call).await
    }

    /// Check that the API token is accepted. Returns the raw response body.
    #[instrument(skip(self))]
    pub async fn test_authorization(&self) -> Result<String> {
        let call = self.endpoint("test_authorization", ANY, &["authorization"])?;
        self.get_text(call).await
    }

    // ---------- Files ----------

    /// Upload a document; the returned file id is referenced when sending an envelope.
    #[instrument(skip(self, source))]
    pub async fn upload_file(&self, source: impl Into<UploadSource>) -> Result<FileUploadResponse> {
        let call = self.endpoint("upload_file", V6_ONLY, &["file", "upload"])?;

        let (file_name, bytes) = match source.into() {
            UploadSource::Path(path) => {
                let bytes = tokio::fs::read(&path).await?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_string());
                (file_name, bytes)
            }
            UploadSource::Bytes { file_name, bytes } => (file_name, bytes),
        };

        let description = format!("multipart File={} ({} bytes)", file_name, bytes.len());
        let part = Part::bytes(bytes).file_name(file_name);
        let form = Form::new().part("File", part);

        self.post_multipart(call, form, description).await
    }

    /// Parse uploaded files for form fields and placeholder strings.
    #[instrument(skip(self, request))]
    pub async fn prepare_file(&self, request: &FilePrepareRequest) -> Result<FilePrepareResponse> {
        let call = self.endpoint("prepare_file", V6_ONLY, &["file", "prepare"])?;
        self.post(call, request).await
    }

    /// Delete an uploaded file that was never used in an envelope.
    #[instrument(skip(self, request))]
    pub async fn dispose_uploaded_file(&self, request: &FileDeleteRequest) -> Result<()> {
        let call = self.endpoint("dispose_uploaded_file", V6_ONLY, &["file", "delete"])?;
        self.post_no_content(call, request).await
    }

    /// Download a document by file id (e.g. a completed, signed PDF).
    #[instrument(skip(self))]
    pub async fn download_completed_document(&self, file_id: &str) -> Result<Vec<u8>> {
        let call = self.endpoint(
            "download_completed_document",
            V6_ONLY,
            &["file", file_id],
        )?;
        self.get_bytes(call).await
    }

    // ---------- Sending ----------

    /// Create an envelope and send it to its recipients.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_and_send_envelope(
        &self,
        request: &EnvelopeSendRequest,
    ) -> Result<EnvelopeSendResponse> {
        let call = self.endpoint("create_and_send_envelope", V6_ONLY, &["envelope", "send"])?;
        self.post(call, request).await
    }

    /// Create a bulk envelope; every bulk recipient gets a child envelope.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_and_send_bulk_envelope(
        &self,
        request: &EnvelopeBulkSendRequest,
    ) -> Result<EnvelopeBulkSendResponse> {
        let call = self.endpoint(
            "create_and_send_bulk_envelope",
            V6_ONLY,
            &["envelopebulk", "send"],
        )?;
        self.post(call, request).await
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_draft(&self, request: &DraftCreateRequest) -> Result<DraftCreateResponse> {
        let call = self.endpoint("create_draft", V6_ONLY, &["draft", "create"])?;
        self.post(call, request).await
    }

    #[instrument(skip(self, request), fields(template_id = %request.template_id))]
    pub async fn create_draft_from_template(
        &self,
        request: &TemplateCreateDraftRequest,
    ) -> Result<TemplateCreateDraftResponse> {
        let call = self.endpoint(
            "create_draft_from_template",
            V6_ONLY,
            &["template", "createdraft"],
        )?;
        self.post(call, request).await
    }

    /// Turn a draft into a sent envelope.
    #[instrument(skip(self, request), fields(draft_id = %request.draft_id))]
    pub async fn send_draft(&self, request: &DraftSendRequest) -> Result<DraftSendResponse> {
        let call = self.endpoint("send_draft", V6_ONLY, &["draft", "send"])?;
        self.post(call, request).await
    }

    // ---------- Envelope lookup ----------

    /// Fetch an envelope. The result shape follows the configured API version.
    #[instrument(skip(self))]
    pub async fn get_envelope(&self, envelope_id: &str) -> Result<EnvelopeDetails> {
        let call = self.endpoint("get_envelope", V5_V6, &["envelope", envelope_id])?;

        match self.config.version {
            ApiVersion::V5 => {
                let envelope: v5::EnvelopeStatus = self.get(call).await?;
                Ok(EnvelopeDetails::V5(Box::new(envelope)))
            }
            _ => {
                let envelope: EnvelopeGetResponse = self.get(call).await?;
                Ok(EnvelopeDetails::V6(Box::new(envelope)))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_envelope_configuration(
        &self,
        envelope_id: &str,
    ) -> Result<EnvelopeGetConfigurationResponse> {
        let call = self.endpoint(
            "get_envelope_configuration",
            V6_ONLY,
            &["envelope", envelope_id, "configuration"],
        )?;
        self.get(call).await
    }

    #[instrument(skip(self))]
    pub async fn get_envelope_files(&self, envelope_id: &str) -> Result<EnvelopeGetFilesResponse> {
        let call = self.endpoint(
            "get_envelope_files",
            V6_ONLY,
            &["envelope", envelope_id, "files"],
        )?;
        self.get(call).await
    }

    #[instrument(skip(self))]
    pub async fn get_envelope_viewer_links(
        &self,
        envelope_id: &str,
    ) -> Result<EnvelopeGetViewerLinksResponse> {
        let call = self.endpoint(
            "get_envelope_viewer_links",
            V6_ONLY,
            &["envelope", envelope_id, "viewerlinks"],
        )?;
        self.get(call).await
    }

    #[instrument(skip(self))]
    pub async fn get_envelope_history(
        &self,
        envelope_id: &str,
    ) -> Result<EnvelopeGetHistoryResponse> {
        let call = self.endpoint(
            "get_envelope_history",
            V6_ONLY,
            &["envelope", envelope_id, "history"],
        )?;
        self.get(call).await
    }

    #[instrument(skip(self))]
    pub async fn get_envelope_elements(
        &self,
        envelope_id: &str,
    ) -> Result<EnvelopeGetElementsResponse> {
        let call = self.endpoint(
            "get_envelope_elements",
            V6_ONLY,
            &["envelope", envelope_id, "elements"],
        )?;
        self.get(call).await
    }

    /// Search envelopes by date range, status or text.
    #[instrument(skip(self, request))]
    pub async fn find_envelope(&self, request: &EnvelopeFindRequest) -> Result<EnvelopeFindResponse> {
        let call = self.endpoint("find_envelope", V6_ONLY, &["envelope", "find"])?;
        self.post(call, request).await
    }

    // ---------- Envelope actions ----------

    /// Cancel a running envelope.
    #[instrument(skip(self, request), fields(envelope_id = %request.envelope_id))]
    pub async fn cancel_envelope(&self, request: &EnvelopeCancelRequest) -> Result<()> {
        let call = self.endpoint("cancel_envelope", V6_ONLY, &["envelope", "cancel"])?;
        self.post_no_content(call, request).await
    }

    /// Delete an envelope. Later lookups of the id fail with 404.
    #[instrument(skip(self))]
    pub async fn delete_envelope(&self, envelope_id: &str) -> Result<()> {
        let call = self.endpoint("delete_envelope", V6_ONLY, &["envelope", "delete"])?;
        let request = EnvelopeDeleteRequest {
            envelope_id: envelope_id.to_string(),
        };
        self.post_no_content(call, &request).await
    }

    /// Send reminder emails to the recipients whose turn it is.
    #[instrument(skip(self, request), fields(envelope_id = %request.envelope_id))]
    pub async fn remind_envelope(
        &self,
        request: &EnvelopeRemindRequest,
    ) -> Result<EnvelopeRemindResponse> {
        let call = self.endpoint("remind_envelope", V6_ONLY, &["envelope", "remind"])?;
        self.post(call, request).await
    }

    /// Reactivate an expired envelope with a new expiration date.
    #[instrument(skip(self))]
    pub async fn restart_envelope_expiration_days(
        &self,
        envelope_id: &str,
        expiration_date: DateTime<Utc>,
    ) -> Result<()> {
        let call = self.endpoint(
            "restart_envelope_expiration_days",
            V6_ONLY,
            &["envelope", "restartexpired"],
        )?;
        let request = EnvelopeRestartExpiredRequest {
            envelope_id: envelope_id.to_string(),
            expiration_date,
        };
        self.post_no_content(call, &request).await
    }

    /// Release the lock a recipient holds on an envelope.
    #[instrument(skip(self, request), fields(envelope_id = %request.envelope_id))]
    pub async fn unlock_envelope(&self, request: &EnvelopeUnlockRequest) -> Result<()> {
        let call = self.endpoint("unlock_envelope", V6_ONLY, &["envelope", "unlock"])?;
        self.get_with_body_no_content(call, request).await
    }

    #[instrument(skip(self, request), fields(envelope_id = %request.envelope_id))]
    pub async fn remove_activity_from_envelope(
        &self,
        request: &EnvelopeActivityDeleteRequest,
    ) -> Result<()> {
        let call = self.endpoint(
            "remove_activity_from_envelope",
            V6_ONLY,
            &["envelope", "activity", "delete"],
        )?;
        self.post_no_content(call, request).await
    }

    #[instrument(skip(self, request), fields(envelope_id = %request.envelope_id))]
    pub async fn replace_activity_from_envelope(
        &self,
        request: &EnvelopeActivityReplaceRequest,
    ) -> Result<()> {
        let call = self.endpoint(
            "replace_activity_from_envelope",
            V6_ONLY,
            &["envelope", "activity", "replace"],
        )?;
        self.post_no_content(call, request).await
    }

    // ---------- Organization ----------

    /// License information. Only available to user managers.
    #[instrument(skip(self))]
    pub async fn get_license(&self) -> Result<LicenseGetResponse> {
        let call = self.endpoint("get_license", V6_ONLY, &["organization", "license"])?;
        self.get(call).await
    }

    #[instrument(skip(self))]
    pub async fn get_teams(&self) -> Result<TeamGetAllResponse> {
        let call = self.endpoint("get_teams", V6_ONLY, &["organization", "team"])?;
        self.get(call).await
    }

    /// Replace every team of the organization with the given ones.
    #[instrument(skip(self, request))]
    pub async fn replace_teams(&self, request: &TeamReplaceRequest) -> Result<()> {
        let call = self.endpoint("replace_teams", V6_ONLY, &["organization", "team", "replace"])?;
        self.post_no_content(call, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn client(version: ApiVersion) -> EsignClient {
        EsignClient::new(ClientConfig::new("token").version(version)).unwrap()
    }

    #[test]
    fn new_rejects_missing_token() {
        let err = EsignClient::new(ClientConfig::new("  ")).unwrap_err();
        assert!(matches!(err, EsignError::NotConfigured(_)));
    }

    #[test]
    fn new_rejects_token_unusable_as_header() {
        let err = EsignClient::new(ClientConfig::new("bad\ntoken")).unwrap_err();
        assert!(matches!(err, EsignError::NotConfigured(_)));
    }

    #[test]
    fn endpoint_includes_domain_and_version() {
        let client = EsignClient::new(
            ClientConfig::new("token")
                .environment(Environment::Production)
                .version(ApiVersion::V5),
        )
        .unwrap();
        let call = client.endpoint("get_envelope", V5_V6, &["envelope", "abc"]).unwrap();
        assert_eq!(
            call.endpoint,
            "https://saas.esignanywhere.net/Api/v5/envelope/abc"
        );
        assert!(call.payload.is_none());
    }

    #[test]
    fn endpoint_escapes_ids_in_path_segments() {
        let client = client(ApiVersion::V6);
        let call = client
            .endpoint("get_envelope_files", V6_ONLY, &["envelope", "a/b?c#d", "files"])
            .unwrap();
        assert_eq!(
            call.endpoint,
            "https://demo.esignanywhere.net/Api/v6/envelope/a%2Fb%3Fc%23d/files"
        );
    }

    #[test]
    fn endpoint_keeps_domain_path_prefix() {
        let client = EsignClient::new(
            ClientConfig::new("token").api_domain("https://esign.example.com/esaw/"),
        )
        .unwrap();
        let call = client.endpoint("get_version", ANY, &["version"]).unwrap();
        assert_eq!(call.endpoint, "https://esign.example.com/esaw/Api/v6/version");
    }

    #[test]
    fn endpoint_rejects_unsupported_version() {
        let err = client(ApiVersion::V4)
            .endpoint("get_envelope", V5_V6, &["envelope", "abc"])
            .err()
            .unwrap();
        match err {
            EsignError::UnsupportedVersion {
                operation,
                version,
                supported,
            } => {
                assert_eq!(operation, "get_envelope");
                assert_eq!(version, ApiVersion::V4);
                assert_eq!(supported, V5_V6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn headers_carry_token_and_optional_json_type() {
        let client = client(ApiVersion::V6);

        let json = client.headers(true);
        assert_eq!(json.get(API_TOKEN_HEADER).unwrap(), "token");
        assert_eq!(json.get(CONTENT_TYPE).unwrap(), "application/json");

        let raw = client.headers(false);
        assert_eq!(raw.get(API_TOKEN_HEADER).unwrap(), "token");
        assert!(raw.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn failure_keeps_request_payload() {
        let call = EsignClient::with_payload(
            client(ApiVersion::V6)
                .endpoint("delete_envelope", V6_ONLY, &["envelope", "delete"])
                .unwrap(),
            &EnvelopeDeleteRequest {
                envelope_id: "abc".to_string(),
            },
        )
        .unwrap();

        let failure = call.failure(404, "{}".to_string());
        assert_eq!(failure.operation, "delete_envelope");
        assert_eq!(failure.request.as_deref(), Some(r#"{"EnvelopeId":"abc"}"#));
    }

    #[tokio::test]
    async fn upload_of_missing_path_fails_before_sending() {
        let client = client(ApiVersion::V6);
        let err = client
            .upload_file(UploadSource::path("/definitely/not/here.pdf"))
            .await
            .unwrap_err();
        match err {
            EsignError::Io(err) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn v6_only_operation_rejected_on_v5() {
        let err = client(ApiVersion::V5)
            .upload_file(UploadSource::bytes("a.txt", b"hello".to_vec()))
            .await
            .unwrap_err();
        assert!(matches!(err, EsignError::UnsupportedVersion { .. }));
    }
}
