//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreateCampaign, CreateEmailMessage, CreateList, GetCampaignStatus, IMPORT_CONTACTS_MAX_ROWS,
    IMPORT_DATA_FIELD, ImportContacts, ImportContactsOptions, LIST_IDS_FIELD, SendEmail,
    SendEmailOptions, Subscribe, SubscribeOptions, Unsubscribe,
};
pub use response::{
    CampaignStatusResponse, ContactList, CreateCampaignResponse, CreateEmailMessageResponse,
    CreateListResponse, ImportContactsResponse, ImportLogEntry, SendEmailResponse,
    SendEmailResult, SubscribeResponse,
};
pub use validation::ValidationError;
pub use value::{
    ApiErrorCode, ApiKey, CampaignId, CampaignState, Contact, EmailAddress, FieldName,
    KnownApiErrorCode, KnownCampaignState, ListId, ListTitle, MessageBody, MessageId, SenderName,
    StartTime, Subject, Tag,
};
