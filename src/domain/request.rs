use std::collections::BTreeSet;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CampaignId, Contact, EmailAddress, FieldName, ListId, ListTitle, MessageBody, MessageId,
    SenderName, StartTime, Subject, Tag,
};

/// Hard cap on rows per `importContacts` call, imposed by the remote side.
pub const IMPORT_CONTACTS_MAX_ROWS: usize = 500;

/// Form field name carrying the list-id set (`list_ids`) where a method takes
/// several lists at once.
pub const LIST_IDS_FIELD: &str = "list_ids";

/// Form field name carrying the import matrix (`data`).
pub const IMPORT_DATA_FIELD: &str = "data";

#[derive(Debug, Clone, Default)]
/// Optional parameters for [`SendEmail`].
pub struct SendEmailOptions {
    pub list_id: Option<ListId>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone)]
/// A single-recipient email send (`sendEmail`).
pub struct SendEmail {
    recipient: EmailAddress,
    sender_name: SenderName,
    sender_email: EmailAddress,
    subject: Subject,
    body: MessageBody,
    options: SendEmailOptions,
}

impl SendEmail {
    /// Assemble a send request. All required fields arrive already validated
    /// by their newtype constructors.
    pub fn new(
        recipient: EmailAddress,
        sender_name: SenderName,
        sender_email: EmailAddress,
        subject: Subject,
        body: MessageBody,
        options: SendEmailOptions,
    ) -> Self {
        Self {
            recipient,
            sender_name,
            sender_email,
            subject,
            body,
            options,
        }
    }

    pub fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &EmailAddress {
        &self.sender_email
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn options(&self) -> &SendEmailOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters for [`ImportContacts`].
pub struct ImportContactsOptions {
    /// Explicit column order. When `None`, the column set is derived as the
    /// sorted union of keys across the contact collection.
    pub field_names: Option<Vec<FieldName>>,
    /// Lists every imported contact is subscribed to, carried as an
    /// `email_list_ids` column on the wire.
    pub list_ids: Vec<ListId>,
    /// Replace existing list memberships instead of adding to them.
    pub overwrite_lists: bool,
}

#[derive(Debug, Clone)]
/// A bulk contact import (`importContacts`).
pub struct ImportContacts {
    contacts: Vec<Contact>,
    options: ImportContactsOptions,
}

impl ImportContacts {
    /// Assemble an import request.
    ///
    /// Constraints:
    /// - at least one contact, every contact with at least one column,
    /// - at most [`IMPORT_CONTACTS_MAX_ROWS`] rows,
    /// - explicit `field_names` (when given) must be non-empty.
    pub fn new(
        contacts: Vec<Contact>,
        options: ImportContactsOptions,
    ) -> Result<Self, ValidationError> {
        if contacts.is_empty() || contacts.iter().any(Contact::is_empty) {
            return Err(ValidationError::Empty {
                field: IMPORT_DATA_FIELD,
            });
        }
        if contacts.len() > IMPORT_CONTACTS_MAX_ROWS {
            return Err(ValidationError::TooManyContacts {
                max: IMPORT_CONTACTS_MAX_ROWS,
                actual: contacts.len(),
            });
        }
        if let Some(field_names) = options.field_names.as_ref() {
            if field_names.is_empty() {
                return Err(ValidationError::Empty {
                    field: FieldName::FIELD,
                });
            }
        }
        Ok(Self { contacts, options })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn options(&self) -> &ImportContactsOptions {
        &self.options
    }

    /// Column order used on the wire: the explicit `field_names` when given,
    /// otherwise the sorted union of keys across all contacts.
    pub fn effective_field_names(&self) -> Vec<FieldName> {
        if let Some(field_names) = self.options.field_names.as_ref() {
            return field_names.clone();
        }
        self.contacts
            .iter()
            .flat_map(|contact| contact.fields().map(|(name, _)| name.clone()))
            .collect::<BTreeSet<FieldName>>()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters for [`Subscribe`].
pub struct SubscribeOptions {
    pub tags: Vec<Tag>,
    /// Whether the remote confirmation flow is triggered. `Some(true)` asks
    /// Unisender to send a confirmation email to unconfirmed contacts;
    /// `Some(false)` records the consent as already collected; `None` leaves
    /// the account default in force.
    pub double_optin: Option<bool>,
}

#[derive(Debug, Clone)]
/// A single-contact subscription (`subscribe`).
pub struct Subscribe {
    email: EmailAddress,
    list_ids: Vec<ListId>,
    options: SubscribeOptions,
}

impl Subscribe {
    /// Assemble a subscribe request. `list_ids` must be non-empty.
    pub fn new(
        email: EmailAddress,
        list_ids: Vec<ListId>,
        options: SubscribeOptions,
    ) -> Result<Self, ValidationError> {
        if list_ids.is_empty() {
            return Err(ValidationError::Empty {
                field: LIST_IDS_FIELD,
            });
        }
        Ok(Self {
            email,
            list_ids,
            options,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn list_ids(&self) -> &[ListId] {
        &self.list_ids
    }

    pub fn options(&self) -> &SubscribeOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Removal of a contact from lists (`unsubscribe`). An empty `list_ids`
/// unsubscribes from every list (remote default).
pub struct Unsubscribe {
    email: EmailAddress,
    list_ids: Vec<ListId>,
}

impl Unsubscribe {
    pub fn new(email: EmailAddress, list_ids: Vec<ListId>) -> Self {
        Self { email, list_ids }
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn list_ids(&self) -> &[ListId] {
        &self.list_ids
    }
}

#[derive(Debug, Clone)]
/// Creation of a server-side message template (`createEmailMessage`).
pub struct CreateEmailMessage {
    sender_name: SenderName,
    sender_email: EmailAddress,
    subject: Subject,
    body: MessageBody,
    list_id: Option<ListId>,
}

impl CreateEmailMessage {
    pub fn new(
        sender_name: SenderName,
        sender_email: EmailAddress,
        subject: Subject,
        body: MessageBody,
        list_id: Option<ListId>,
    ) -> Self {
        Self {
            sender_name,
            sender_email,
            subject,
            body,
            list_id,
        }
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &EmailAddress {
        &self.sender_email
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn list_id(&self) -> Option<ListId> {
        self.list_id
    }
}

#[derive(Debug, Clone)]
/// Scheduling/launch of a campaign from an existing message (`createCampaign`).
///
/// When `start_time` is absent the parameter is omitted from the request and
/// the remote default applies (immediate send).
pub struct CreateCampaign {
    message_id: MessageId,
    list_id: ListId,
    start_time: Option<StartTime>,
}

impl CreateCampaign {
    pub fn new(message_id: MessageId, list_id: ListId, start_time: Option<StartTime>) -> Self {
        Self {
            message_id,
            list_id,
            start_time,
        }
    }

    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn start_time(&self) -> Option<&StartTime> {
        self.start_time.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Creation of a new contact list (`createList`).
pub struct CreateList {
    title: ListTitle,
}

impl CreateList {
    pub fn new(title: ListTitle) -> Self {
        Self { title }
    }

    pub fn title(&self) -> &ListTitle {
        &self.title
    }
}

#[derive(Debug, Clone)]
/// Status query for an existing campaign (`getCampaignStatus`).
pub struct GetCampaignStatus {
    campaign_id: CampaignId,
}

impl GetCampaignStatus {
    pub fn new(campaign_id: CampaignId) -> Self {
        Self { campaign_id }
    }

    pub fn campaign_id(&self) -> CampaignId {
        self.campaign_id
    }
}
