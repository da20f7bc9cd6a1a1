use std::collections::BTreeMap;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Unisender `api_key` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Unisender (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Email address as sent to Unisender (`email`).
///
/// Invariant: non-empty after trimming and contains `@`. No further syntax
/// checking is performed; the remote side is the authority on deliverability.
pub struct EmailAddress(String);

impl EmailAddress {
    /// Form field name used by Unisender (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::InvalidEmail {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender display name (`sender_name`).
///
/// Invariant: non-empty after trimming.
pub struct SenderName(String);

impl SenderName {
    /// Form field name used by Unisender (`sender_name`).
    pub const FIELD: &'static str = "sender_name";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Email subject line (`subject`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct Subject(String);

impl Subject {
    /// Form field name used by Unisender (`subject`).
    pub const FIELD: &'static str = "subject";

    /// Create a validated [`Subject`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the subject as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// HTML message body (`body`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct MessageBody(String);

impl MessageBody {
    /// Form field name used by Unisender (`body`).
    pub const FIELD: &'static str = "body";

    /// Create a validated [`MessageBody`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the body as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact list identifier (`list_id`).
pub struct ListId(u64);

impl ListId {
    /// Form field name used by Unisender (`list_id`).
    pub const FIELD: &'static str = "list_id";

    /// Wrap a list identifier (no validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying identifier.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-side message identifier (`message_id`) returned by `createEmailMessage`.
pub struct MessageId(u64);

impl MessageId {
    /// Form field name used by Unisender (`message_id`).
    pub const FIELD: &'static str = "message_id";

    /// Wrap a message identifier.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying identifier.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Campaign identifier (`campaign_id`) returned by `createCampaign`.
pub struct CampaignId(u64);

impl CampaignId {
    /// Form field name used by Unisender (`campaign_id`).
    pub const FIELD: &'static str = "campaign_id";

    /// Wrap a campaign identifier.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying identifier.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Import column identifier (`field_names`), e.g. `email`, `Name`, `phone`.
///
/// Invariant: non-empty after trimming.
pub struct FieldName(String);

impl std::borrow::Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FieldName {
    /// Form field name used by Unisender (`field_names`).
    pub const FIELD: &'static str = "field_names";

    /// Column name carrying list membership in `importContacts` rows.
    pub const EMAIL_LIST_IDS: &'static str = "email_list_ids";

    /// Create a validated [`FieldName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated column name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact tag (`tags`).
///
/// Invariant: non-empty after trimming and free of commas, because tags are
/// comma-joined into a single form value on the wire.
pub struct Tag(String);

impl Tag {
    /// Form field name used by Unisender (`tags`).
    pub const FIELD: &'static str = "tags";

    /// Create a validated [`Tag`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.contains(',') {
            return Err(ValidationError::InvalidTag {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign start time (`start_time`) in the `YYYY-MM-DD HH:MM:SS` format
/// expected by Unisender (account timezone).
pub struct StartTime(String);

impl StartTime {
    /// Form field name used by Unisender (`start_time`).
    pub const FIELD: &'static str = "start_time";

    /// Create a format-validated [`StartTime`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !Self::is_well_formed(trimmed) {
            return Err(ValidationError::InvalidStartTime {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    fn is_well_formed(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() != 19 {
            return false;
        }
        for (idx, byte) in bytes.iter().enumerate() {
            let ok = match idx {
                4 | 7 => *byte == b'-',
                10 => *byte == b' ',
                13 | 16 => *byte == b':',
                _ => byte.is_ascii_digit(),
            };
            if !ok {
                return false;
            }
        }

        let num = |range: std::ops::Range<usize>| -> u32 {
            value[range].parse().unwrap_or(u32::MAX)
        };
        (1..=12).contains(&num(5..7))
            && (1..=31).contains(&num(8..10))
            && num(11..13) <= 23
            && num(14..16) <= 59
            && num(17..19) <= 59
    }

    /// Borrow the validated timestamp string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Contact list title (`title`).
///
/// Invariant: non-empty after trimming.
pub struct ListTitle(String);

impl ListTitle {
    /// Form field name used by Unisender (`title`).
    pub const FIELD: &'static str = "title";

    /// Create a validated [`ListTitle`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated title.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One contact row for `importContacts`: a mapping from column name to value.
///
/// Column names are free-form; `email` is the usual key. Missing columns
/// encode as empty cells on the wire.
pub struct Contact(BTreeMap<FieldName, String>);

impl Contact {
    /// Create an empty contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any previous value for that column.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Builder-style variant of [`Contact::set`].
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Look up a column value by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterate over the contact's columns in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.0.iter().map(|(name, value)| (name, value.as_str()))
    }

    /// Whether the contact has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Unisender API error code (the `code` field of an error response).
///
/// The raw value is preserved as-is even when the code is unknown to this crate.
pub struct ApiErrorCode(String);

impl ApiErrorCode {
    /// Wrap a raw error code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as provided by Unisender.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownApiErrorCode> {
        KnownApiErrorCode::from_code(&self.0)
    }

    /// Returns `true` if this code is considered retryable by the crate.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this code represents an authentication/authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Unisender general error codes.
///
/// Unknown codes are preserved as [`ApiErrorCode`] and return `None` from
/// [`KnownApiErrorCode::from_code`].
pub enum KnownApiErrorCode {
    Unspecified,
    InvalidApiKey,
    AccessDenied,
    UnknownMethod,
    InvalidArg,
    NotEnoughMoney,
    RetryLater,
    ApiCallLimitExceededForApiKey,
    ApiCallLimitExceededForIp,
}

impl KnownApiErrorCode {
    /// Convert a raw Unisender error code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "unspecified" => Self::Unspecified,
            "invalid_api_key" => Self::InvalidApiKey,
            "access_denied" => Self::AccessDenied,
            "unknown_method" => Self::UnknownMethod,
            "invalid_arg" => Self::InvalidArg,
            "not_enough_money" => Self::NotEnoughMoney,
            "retry_later" => Self::RetryLater,
            "api_call_limit_exceeded_for_api_key" => Self::ApiCallLimitExceededForApiKey,
            "api_call_limit_exceeded_for_ip" => Self::ApiCallLimitExceededForIp,
            _ => return None,
        })
    }

    /// Whether this code is likely transient and the call can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::RetryLater
                | Self::ApiCallLimitExceededForApiKey
                | Self::ApiCallLimitExceededForIp
        )
    }

    /// Whether this code indicates invalid/insufficient credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidApiKey | Self::AccessDenied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign state string returned by `createCampaign`/`getCampaignStatus`.
///
/// The raw value is preserved as-is even when unknown to this crate.
pub struct CampaignState(String);

impl CampaignState {
    /// Wrap a raw campaign state string.
    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    /// Get the state string as provided by Unisender.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this state to a known variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownCampaignState> {
        KnownCampaignState::from_state(&self.0)
    }

    /// Returns `true` if the campaign has finished and will not send further mail.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_terminal()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known campaign states reported by `getCampaignStatus`.
pub enum KnownCampaignState {
    WaitsSchedule,
    Scheduled,
    InProgress,
    Analysed,
    Completed,
    Stopped,
    Canceled,
}

impl KnownCampaignState {
    /// Convert a raw state string into a known variant.
    pub fn from_state(state: &str) -> Option<Self> {
        Some(match state {
            "waits_schedule" => Self::WaitsSchedule,
            "scheduled" => Self::Scheduled,
            "in_progress" => Self::InProgress,
            "analysed" => Self::Analysed,
            "completed" => Self::Completed,
            "stopped" => Self::Stopped,
            "canceled" => Self::Canceled,
            _ => return None,
        })
    }

    /// Whether this state means the send has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Analysed | Self::Completed | Self::Stopped | Self::Canceled)
    }
}
