//! Request and response types for the v6 API.
//!
//! Field names follow the service's PascalCase JSON keys. Response types keep
//! any key they do not model in `extra`, so nothing returned by the service is
//! dropped on the floor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------- Files ----------

/// Response from `file/upload`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileUploadResponse {
    pub file_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `file/delete`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileDeleteRequest {
    pub file_id: String,
}

impl FileDeleteRequest {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

/// Request body for `file/prepare`: parse uploaded files for form fields and sig strings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilePrepareRequest {
    pub file_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_advanced_document_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig_string_configurations: Option<Value>,
}

impl FilePrepareRequest {
    pub fn new(file_ids: Vec<String>) -> Self {
        Self {
            file_ids,
            ..Default::default()
        }
    }
}

/// Response from `file/prepare`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilePrepareResponse {
    #[serde(default)]
    pub activities: Vec<Value>,
    #[serde(default)]
    pub unassigned_elements: UnassignedElements,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Form elements found in a document that no activity owns yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnassignedElements {
    #[serde(default)]
    pub text_boxes: Vec<FormElement>,
    #[serde(default)]
    pub check_boxes: Vec<FormElement>,
    #[serde(default)]
    pub combo_boxes: Vec<FormElement>,
    #[serde(default)]
    pub radio_buttons: Vec<FormElement>,
    #[serde(default)]
    pub list_boxes: Vec<FormElement>,
    #[serde(default)]
    pub signatures: Vec<FormElement>,
    #[serde(default)]
    pub attachments: Vec<FormElement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormElement {
    #[serde(default)]
    pub element_id: Option<String>,
    /// Pre-filled value; a string for text boxes, a bool for check boxes.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub document_number: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------- Envelope definition ----------

/// Reference to an uploaded file inside an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    pub file_id: String,
    pub document_number: u32,
}

impl Document {
    pub fn new(file_id: impl Into<String>, document_number: u32) -> Self {
        Self {
            file_id: file_id.into(),
            document_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactInformation {
    pub email: String,
    pub given_name: String,
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl ContactInformation {
    pub fn new(
        email: impl Into<String>,
        given_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            given_name: given_name.into(),
            surname: surname.into(),
            phone_number: None,
            language_code: None,
        }
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }
}

/// Who receives an activity and how they are notified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientConfiguration {
    pub contact_information: ContactInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_access_after_finish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_delegation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_configuration: Option<Value>,
}

impl RecipientConfiguration {
    pub fn new(contact_information: ContactInformation) -> Self {
        Self {
            contact_information,
            send_emails: None,
            personal_message: None,
            allow_access_after_finish: None,
            allow_delegation: None,
            authentication_configuration: None,
        }
    }

    pub fn send_emails(mut self, send_emails: bool) -> Self {
        self.send_emails = Some(send_emails);
        self
    }
}

/// Signing activity for a single recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignAction {
    pub recipient_configuration: RecipientConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_policies_overrides: Option<GeneralPoliciesOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_action_configuration: Option<Value>,
}

/// Copy of the finished documents sent to a recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendCopyAction {
    pub recipient_configuration: RecipientConfiguration,
}

/// Read-only activity: the recipient only views the documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewAction {
    pub recipient_configuration: RecipientConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BulkRecipient {
    pub recipient_configuration: RecipientConfiguration,
}

/// Signing activity fanned out to many recipients; each gets a child envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignBulkAction {
    pub bulk_recipients: Vec<BulkRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_configuration: Option<BatchConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_policies_overrides: Option<GeneralPoliciesOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchConfiguration {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_scrolling_over_all_signatures_before_signing: Option<bool>,
}

/// Per-activity overrides of the organization's signing policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralPoliciesOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_save_document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_save_audit_trail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_print_document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_adhoc_pdf_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reject_workstep: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_undo_last_action: Option<bool>,
}

/// What a recipient does in an activity. Serialized as `{"Sign": {...}}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ActivityAction {
    Sign(SignAction),
    SendCopy(SendCopyAction),
    View(ViewAction),
    SignBulk(SignBulkAction),
    #[serde(rename = "SignAsP7M")]
    SignAsP7m(SignAction),
    SignAutomatic(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Activity {
    pub action: ActivityAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_options: Option<Value>,
}

impl Activity {
    pub fn new(action: ActivityAction) -> Self {
        Self {
            action,
            visibility_options: None,
        }
    }

    /// Signing activity with default policies and no predefined elements.
    pub fn sign(recipient: RecipientConfiguration) -> Self {
        Self::new(ActivityAction::Sign(SignAction {
            recipient_configuration: recipient,
            elements: None,
            general_policies_overrides: None,
            finish_action_configuration: None,
        }))
    }

    pub fn send_copy(recipient: RecipientConfiguration) -> Self {
        Self::new(ActivityAction::SendCopy(SendCopyAction {
            recipient_configuration: recipient,
        }))
    }

    pub fn view(recipient: RecipientConfiguration) -> Self {
        Self::new(ActivityAction::View(ViewAction {
            recipient_configuration: recipient,
        }))
    }

    pub fn sign_bulk(action: SignBulkAction) -> Self {
        Self::new(ActivityAction::SignBulk(action))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReminderConfiguration {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_reminder_in_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_resend_interval_in_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_expiration_in_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpirationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_in_seconds_after_sending: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

/// Request body for `envelope/send`.
///
/// The same shape is used for `draft/create` and `envelopebulk/send`; see
/// [`DraftCreateRequest`] and [`EnvelopeBulkSendRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeSendRequest {
    pub documents: Vec<Document>,
    pub name: String,
    pub activities: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_configuration: Option<EmailConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_configuration: Option<ReminderConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_configuration: Option<ExpirationConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_configuration: Option<Value>,
}

impl EnvelopeSendRequest {
    pub fn new(name: impl Into<String>, documents: Vec<Document>, activities: Vec<Activity>) -> Self {
        Self {
            documents,
            name: name.into(),
            activities,
            email_configuration: None,
            reminder_configuration: None,
            expiration_configuration: None,
            meta_data: None,
            callback_configuration: None,
        }
    }
}

/// Request body for `draft/create`.
pub type DraftCreateRequest = EnvelopeSendRequest;

/// Request body for `envelopebulk/send`; activities use [`ActivityAction::SignBulk`].
pub type EnvelopeBulkSendRequest = EnvelopeSendRequest;

/// Response from `envelope/send`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeSendResponse {
    pub envelope_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `envelopebulk/send`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeBulkSendResponse {
    pub envelope_bulk_parent_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------- Envelope state ----------

/// Lifecycle state of an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnvelopeStatus {
    Draft,
    Active,
    ActionRequired,
    WaitingForOthers,
    Completed,
    Expired,
    Rejected,
    Canceled,
    Deleted,
    /// A state this client does not know yet, as sent by the service.
    Unknown(String),
}

impl EnvelopeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::ActionRequired => "ActionRequired",
            Self::WaitingForOthers => "WaitingForOthers",
            Self::Completed => "Completed",
            Self::Expired => "Expired",
            Self::Rejected => "Rejected",
            Self::Canceled => "Canceled",
            Self::Deleted => "Deleted",
            Self::Unknown(status) => status,
        }
    }
}

impl From<String> for EnvelopeStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Draft" => Self::Draft,
            "Active" => Self::Active,
            "ActionRequired" => Self::ActionRequired,
            "WaitingForOthers" => Self::WaitingForOthers,
            "Completed" => Self::Completed,
            "Expired" => Self::Expired,
            "Rejected" => Self::Rejected,
            "Canceled" => Self::Canceled,
            "Deleted" => Self::Deleted,
            _ => Self::Unknown(status),
        }
    }
}

impl From<EnvelopeStatus> for String {
    fn from(status: EnvelopeStatus) -> Self {
        match status {
            EnvelopeStatus::Unknown(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EnvelopeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response from `GET envelope/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeGetResponse {
    pub id: String,
    pub envelope_status: EnvelopeStatus,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub meta_data: Option<String>,
    #[serde(default)]
    pub send_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub sender: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `GET envelope/{id}/configuration`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeGetConfigurationResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub activities: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A document attached to an envelope, as returned by `GET envelope/{id}/files`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeFile {
    pub file_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub document_number: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
}

/// Response from `GET envelope/{id}/files`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeGetFilesResponse {
    #[serde(default)]
    pub documents: Vec<EnvelopeFile>,
    #[serde(default)]
    pub audit_trail: Option<Value>,
    #[serde(default)]
    pub attachments: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewerLink {
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub viewer_link: Option<String>,
}

/// Response from `GET envelope/{id}/viewerlinks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeGetViewerLinksResponse {
    #[serde(default)]
    pub viewer_links: Vec<ViewerLink>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryEvent {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `GET envelope/{id}/history`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeGetHistoryResponse {
    #[serde(default)]
    pub events: Vec<HistoryEvent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `GET envelope/{id}/elements`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeGetElementsResponse {
    #[serde(default)]
    pub activities: Vec<Value>,
    #[serde(default)]
    pub unassigned_elements: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------- Envelope actions ----------

/// Request body for `envelope/cancel`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeCancelRequest {
    pub envelope_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EnvelopeCancelRequest {
    pub fn new(envelope_id: impl Into<String>) -> Self {
        Self {
            envelope_id: envelope_id.into(),
            reason: None,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Request body for `envelope/delete`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeDeleteRequest {
    pub envelope_id: String,
}

/// Request body for `envelope/find`. Every filter is optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeFindRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnvelopeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FoundEnvelope {
    pub id: String,
    #[serde(default)]
    pub envelope_status: Option<EnvelopeStatus>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `envelope/find`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeFindResponse {
    #[serde(default)]
    pub envelopes: Vec<FoundEnvelope>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `envelope/restartexpired`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeRestartExpiredRequest {
    pub envelope_id: String,
    pub expiration_date: DateTime<Utc>,
}

/// Request body for `envelope/remind`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeRemindRequest {
    pub envelope_id: String,
}

impl EnvelopeRemindRequest {
    pub fn new(envelope_id: impl Into<String>) -> Self {
        Self {
            envelope_id: envelope_id.into(),
        }
    }
}

/// Response from `envelope/remind`: how many reminder emails went out or were held back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeRemindResponse {
    #[serde(default)]
    pub total_sent: u32,
    #[serde(default)]
    pub total_blocked_by_disabled_email: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `envelope/unlock`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeUnlockRequest {
    pub envelope_id: String,
}

/// Request body for `envelope/activity/delete`: drop a recipient from a running envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeActivityDeleteRequest {
    pub envelope_id: String,
    pub activity_id: String,
}

/// Request body for `envelope/activity/replace`: swap the recipient of an activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeActivityReplaceRequest {
    pub envelope_id: String,
    pub activity_id: String,
    pub action: ActivityAction,
}

// ---------- Drafts and templates ----------

/// Response from `draft/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftCreateResponse {
    pub draft_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `draft/send`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftSendRequest {
    pub draft_id: String,
}

impl DraftSendRequest {
    pub fn new(draft_id: impl Into<String>) -> Self {
        Self {
            draft_id: draft_id.into(),
        }
    }
}

/// Response from `draft/send`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftSendResponse {
    #[serde(default)]
    pub envelope_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `template/createdraft`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateCreateDraftRequest {
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<String>,
}

impl TemplateCreateDraftRequest {
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            meta_data: None,
        }
    }
}

/// Response from `template/createdraft`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateCreateDraftResponse {
    pub draft_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------- Organization ----------

/// Response from `organization/license` (user managers only).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LicenseGetResponse {
    #[serde(default, rename = "Type")]
    pub license_type: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamMember {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub head: Option<TeamMember>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Response from `GET organization/team`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamGetAllResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamReplaceTeamMember {
    pub email: String,
}

impl TeamReplaceTeamMember {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamReplaceTeam {
    pub name: String,
    pub head: TeamReplaceTeamMember,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<TeamReplaceTeamMember>,
}

impl TeamReplaceTeam {
    pub fn new(name: impl Into<String>, head: TeamReplaceTeamMember) -> Self {
        Self {
            name: name.into(),
            head,
            members: Vec::new(),
        }
    }
}

/// Request body for `organization/team/replace`; the given teams replace all existing ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamReplaceRequest {
    pub teams: Vec<TeamReplaceTeam>,
}
