//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiErrorCode, ApiKey, CampaignStatusResponse, ContactList, CreateCampaign,
    CreateCampaignResponse, CreateEmailMessage, CreateEmailMessageResponse, CreateList,
    CreateListResponse, GetCampaignStatus, ImportContacts, ImportContactsResponse, SendEmail,
    SendEmailResponse, Subscribe, SubscribeResponse, Unsubscribe, ValidationError,
};
use crate::transport::{self, ApiReply};

const DEFAULT_BASE_URL: &str = "https://api.unisender.com/ru/api/";

/// Environment variable read by [`UnisenderClient::from_env`].
pub const API_KEY_ENV: &str = "UNISENDER_API_KEY";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnisenderClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (a body carrying the `error` field),
/// - validation/parse failures.
pub enum UnisenderError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Unisender reported an error; `message` is the remote text verbatim.
    #[error("API error: {message}")]
    Api {
        message: String,
        code: Option<ApiErrorCode>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// [`UnisenderClient::from_env`] was called with the variable unset.
    #[error("environment variable {var} is not set")]
    MissingApiKey { var: &'static str },
}

#[derive(Debug, Clone)]
/// Builder for [`UnisenderClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct UnisenderClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl UnisenderClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Unisender API base URL (method names are appended to it).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`UnisenderClient`].
    pub fn build(self) -> Result<UnisenderClient, UnisenderError> {
        let parsed = Url::parse(&self.base_url)?;
        let mut base_url = parsed.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| UnisenderError::Transport(Box::new(err)))?;

        Ok(UnisenderClient {
            api_key: self.api_key,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Unisender client.
///
/// Each operation is a single stateless round trip: assemble form parameters,
/// POST them to `<base>/<methodName>` with `api_key` and `format=json`, and
/// decode either the `result` payload or the reported error. The client keeps
/// no local representation of anything created server-side; callers get back
/// opaque identifiers.
pub struct UnisenderClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for UnisenderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnisenderClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UnisenderClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`UnisenderClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client from the `UNISENDER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, UnisenderError> {
        let value = std::env::var(API_KEY_ENV)
            .map_err(|_| UnisenderError::MissingApiKey { var: API_KEY_ENV })?;
        Ok(Self::new(ApiKey::new(value)?))
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> UnisenderClientBuilder {
        UnisenderClientBuilder::new(api_key)
    }

    /// Send a single email through `sendEmail`.
    pub async fn send_email(&self, request: SendEmail) -> Result<SendEmailResponse, UnisenderError> {
        let body = self
            .call("sendEmail", transport::encode_send_email_form(&request))
            .await?;
        finish(transport::decode_send_email_json_response(&body).map_err(parse_error)?)
    }

    /// Bulk-load contacts through `importContacts`; returns the remote import
    /// statistics.
    pub async fn import_contacts(
        &self,
        request: ImportContacts,
    ) -> Result<ImportContactsResponse, UnisenderError> {
        let body = self
            .call(
                "importContacts",
                transport::encode_import_contacts_form(&request),
            )
            .await?;
        finish(transport::decode_import_contacts_json_response(&body).map_err(parse_error)?)
    }

    /// Add one contact to one or more lists through `subscribe`.
    pub async fn subscribe(&self, request: Subscribe) -> Result<SubscribeResponse, UnisenderError> {
        let body = self
            .call("subscribe", transport::encode_subscribe_form(&request))
            .await?;
        finish(transport::decode_subscribe_json_response(&body).map_err(parse_error)?)
    }

    /// Remove a contact from lists through `unsubscribe`. An empty list set
    /// unsubscribes from every list.
    pub async fn unsubscribe(&self, request: Unsubscribe) -> Result<(), UnisenderError> {
        let body = self
            .call("unsubscribe", transport::encode_unsubscribe_form(&request))
            .await?;
        finish(transport::decode_unsubscribe_json_response(&body).map_err(parse_error)?)
    }

    /// Fetch all of the account's contact lists through `getLists`.
    pub async fn get_lists(&self) -> Result<Vec<ContactList>, UnisenderError> {
        let body = self.call("getLists", Vec::new()).await?;
        finish(transport::decode_get_lists_json_response(&body).map_err(parse_error)?)
    }

    /// Create a new contact list through `createList`.
    pub async fn create_list(
        &self,
        request: CreateList,
    ) -> Result<CreateListResponse, UnisenderError> {
        let body = self
            .call("createList", transport::encode_create_list_form(&request))
            .await?;
        finish(transport::decode_create_list_json_response(&body).map_err(parse_error)?)
    }

    /// Create a server-side message template through `createEmailMessage`.
    pub async fn create_email_message(
        &self,
        request: CreateEmailMessage,
    ) -> Result<CreateEmailMessageResponse, UnisenderError> {
        let body = self
            .call(
                "createEmailMessage",
                transport::encode_create_email_message_form(&request),
            )
            .await?;
        finish(transport::decode_create_email_message_json_response(&body).map_err(parse_error)?)
    }

    /// Schedule or launch a campaign from an existing message through
    /// `createCampaign`. Without a start time the remote default applies
    /// (immediate send).
    pub async fn create_campaign(
        &self,
        request: CreateCampaign,
    ) -> Result<CreateCampaignResponse, UnisenderError> {
        let body = self
            .call(
                "createCampaign",
                transport::encode_create_campaign_form(&request),
            )
            .await?;
        finish(transport::decode_create_campaign_json_response(&body).map_err(parse_error)?)
    }

    /// Query a campaign's delivery state through `getCampaignStatus`.
    pub async fn get_campaign_status(
        &self,
        request: GetCampaignStatus,
    ) -> Result<CampaignStatusResponse, UnisenderError> {
        let body = self
            .call(
                "getCampaignStatus",
                transport::encode_get_campaign_status_form(&request),
            )
            .await?;
        finish(transport::decode_get_campaign_status_json_response(&body).map_err(parse_error)?)
    }

    async fn call(
        &self,
        method: &str,
        method_params: Vec<(String, String)>,
    ) -> Result<String, UnisenderError> {
        let mut params = vec![
            (ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()),
            ("format".to_owned(), "json".to_owned()),
        ];
        params.extend(method_params);

        let url = format!("{}{method}", self.base_url);
        let response = self
            .http
            .post_form(&url, params)
            .await
            .map_err(UnisenderError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(UnisenderError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn finish<T>(reply: ApiReply<T>) -> Result<T, UnisenderError> {
    match reply {
        ApiReply::Success(value) => Ok(value),
        ApiReply::Failure(failure) => Err(UnisenderError::Api {
            message: failure.message,
            code: failure.code,
        }),
    }
}

fn parse_error(err: crate::transport::TransportError) -> UnisenderError {
    UnisenderError::Parse(Box::new(err))
}
