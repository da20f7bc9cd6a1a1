use serde::Deserialize;

use crate::domain::{
    EmailAddress, ListId, MessageBody, SendEmail, SendEmailResponse, SendEmailResult, SenderName,
    Subject, Tag,
};

use super::{ApiReply, TransportError, decode_envelope};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SendEmailResultDto {
    // Older API revisions return the message id directly.
    Id(String),
    Entries(Vec<SendEmailEntryDto>),
}

#[derive(Debug, Clone, Deserialize)]
struct SendEmailEntryDto {
    #[serde(default)]
    index: Option<u64>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    id: Option<TransportEmailId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportEmailId {
    Text(String),
    Number(serde_json::Number),
}

impl TransportEmailId {
    fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn encode_send_email_form(request: &SendEmail) -> Vec<(String, String)> {
    let mut params = vec![
        (
            EmailAddress::FIELD.to_owned(),
            request.recipient().as_str().to_owned(),
        ),
        (
            SenderName::FIELD.to_owned(),
            request.sender_name().as_str().to_owned(),
        ),
        (
            "sender_email".to_owned(),
            request.sender_email().as_str().to_owned(),
        ),
        (
            Subject::FIELD.to_owned(),
            request.subject().as_str().to_owned(),
        ),
        (
            MessageBody::FIELD.to_owned(),
            request.body().as_str().to_owned(),
        ),
    ];

    let options = request.options();
    if let Some(list_id) = options.list_id {
        params.push((ListId::FIELD.to_owned(), list_id.value().to_string()));
    }
    if !options.tags.is_empty() {
        let tags = options
            .tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push((Tag::FIELD.to_owned(), tags));
    }

    params
}

pub fn decode_send_email_json_response(
    json: &str,
) -> Result<ApiReply<SendEmailResponse>, TransportError> {
    Ok(decode_envelope::<SendEmailResultDto>(json)?.map(|result| {
        let results = match result {
            SendEmailResultDto::Id(id) => vec![SendEmailResult {
                index: None,
                email: None,
                id: Some(id),
            }],
            SendEmailResultDto::Entries(entries) => entries
                .into_iter()
                .map(|entry| SendEmailResult {
                    index: entry.index,
                    email: entry.email,
                    id: entry.id.map(TransportEmailId::into_string),
                })
                .collect(),
        };
        SendEmailResponse { results }
    }))
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendEmailOptions, ValidationError};

    use super::*;

    fn request(options: SendEmailOptions) -> SendEmail {
        SendEmail::new(
            EmailAddress::new("user@example.com").unwrap(),
            SenderName::new("News Desk").unwrap(),
            EmailAddress::new("news@example.com").unwrap(),
            Subject::new("Hello").unwrap(),
            MessageBody::new("<p>hi</p>").unwrap(),
            options,
        )
    }

    #[test]
    fn encode_required_fields_only() {
        let params = encode_send_email_form(&request(SendEmailOptions::default()));
        assert_eq!(
            params,
            vec![
                ("email".to_owned(), "user@example.com".to_owned()),
                ("sender_name".to_owned(), "News Desk".to_owned()),
                ("sender_email".to_owned(), "news@example.com".to_owned()),
                ("subject".to_owned(), "Hello".to_owned()),
                ("body".to_owned(), "<p>hi</p>".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_appends_list_id_and_comma_joined_tags() {
        let options = SendEmailOptions {
            list_id: Some(ListId::new(7)),
            tags: vec![Tag::new("promo").unwrap(), Tag::new("autumn").unwrap()],
        };
        let params = encode_send_email_form(&request(options));
        assert!(params.contains(&("list_id".to_owned(), "7".to_owned())));
        assert!(params.contains(&("tags".to_owned(), "promo,autumn".to_owned())));
    }

    #[test]
    fn decode_entry_array_result() {
        let json = r#"
        {
          "result": [
            {"index": 0, "email": "user@example.com", "id": "1234567#1"}
          ]
        }
        "#;
        let reply = decode_send_email_json_response(json).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert_eq!(
            response.results,
            vec![SendEmailResult {
                index: Some(0),
                email: Some("user@example.com".to_owned()),
                id: Some("1234567#1".to_owned()),
            }]
        );
    }

    #[test]
    fn decode_bare_id_result() {
        let reply = decode_send_email_json_response(r#"{"result": "1234567#1"}"#).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id.as_deref(), Some("1234567#1"));
        assert!(response.results[0].email.is_none());
    }

    #[test]
    fn decode_numeric_id_result() {
        let json = r#"{"result": [{"index": 0, "email": "user@example.com", "id": 42}]}"#;
        let reply = decode_send_email_json_response(json).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert_eq!(response.results[0].id.as_deref(), Some("42"));
    }

    #[test]
    fn decode_api_error() {
        let reply =
            decode_send_email_json_response(r#"{"error": "AK100 invalid key", "code": "invalid_api_key"}"#)
                .unwrap();
        let ApiReply::Failure(failure) = reply else {
            panic!("expected failure");
        };
        assert_eq!(failure.message, "AK100 invalid key");
        assert!(failure.code.unwrap().is_auth_error());
    }

    #[test]
    fn required_fields_reject_empty_input_before_any_encoding() {
        assert!(matches!(
            EmailAddress::new(""),
            Err(ValidationError::Empty { .. })
        ));
        assert!(Subject::new("   ").is_err());
        assert!(MessageBody::new("").is_err());
        assert!(SenderName::new(" ").is_err());
    }
}
