use crate::domain::value::{CampaignId, CampaignState, ListId, MessageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailResponse {
    pub results: Vec<SendEmailResult>,
}

/// Per-recipient acceptance entry from `sendEmail`. Older API revisions
/// return a bare id string instead of an array; that shape decodes into a
/// single entry with `index` and `email` unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailResult {
    pub index: Option<u64>,
    pub email: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportContactsResponse {
    pub total: u64,
    pub inserted: u64,
    pub updated: u64,
    pub deleted: u64,
    pub new_emails: u64,
    pub invalid: u64,
    pub log: Vec<ImportLogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLogEntry {
    pub index: u64,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscribeResponse {
    pub person_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactList {
    pub id: ListId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateListResponse {
    pub id: ListId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateEmailMessageResponse {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCampaignResponse {
    pub campaign_id: CampaignId,
    pub status: Option<CampaignState>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignStatusResponse {
    pub status: CampaignState,
    pub creation_time: Option<String>,
    pub start_time: Option<String>,
}
