//! Typed Rust client for the Unisender bulk-email HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer orchestrating requests.
//! Every operation is one stateless round trip: form-encoded parameters go to
//! `https://api.unisender.com/ru/api/<method>` and the JSON body comes back
//! as either a `result` payload or an API-reported error.
//!
//! ```rust,no_run
//! use unisender::{
//!     ApiKey, EmailAddress, MessageBody, SendEmail, SendEmailOptions, SenderName, Subject,
//!     UnisenderClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unisender::UnisenderError> {
//!     let client = UnisenderClient::new(ApiKey::new("...")?);
//!     let request = SendEmail::new(
//!         EmailAddress::new("user@example.com")?,
//!         SenderName::new("News Desk")?,
//!         EmailAddress::new("news@example.com")?,
//!         Subject::new("Hello")?,
//!         MessageBody::new("<p>Hi!</p>")?,
//!         SendEmailOptions::default(),
//!     );
//!     let _resp = client.send_email(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{API_KEY_ENV, UnisenderClient, UnisenderClientBuilder, UnisenderError};
pub use domain::{
    ApiErrorCode, ApiKey, CampaignId, CampaignState, CampaignStatusResponse, Contact, ContactList,
    CreateCampaign, CreateCampaignResponse, CreateEmailMessage, CreateEmailMessageResponse,
    CreateList, CreateListResponse, EmailAddress, FieldName, GetCampaignStatus,
    IMPORT_CONTACTS_MAX_ROWS, ImportContacts, ImportContactsOptions, ImportContactsResponse,
    ImportLogEntry, KnownApiErrorCode, KnownCampaignState, ListId, ListTitle, MessageBody,
    MessageId, SendEmail, SendEmailOptions, SendEmailResponse, SendEmailResult, SenderName,
    StartTime, Subject, Subscribe, SubscribeOptions, SubscribeResponse, Tag, Unsubscribe,
    ValidationError,
};
