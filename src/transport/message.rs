use serde::Deserialize;

use crate::domain::{
    CreateEmailMessage, CreateEmailMessageResponse, ListId, MessageBody, MessageId, SenderName,
    Subject,
};

use super::{ApiReply, TransportError, decode_envelope, id::TransportId};

#[derive(Debug, Clone, Deserialize)]
struct CreateMessageResultDto {
    message_id: TransportId,
}

pub fn encode_create_email_message_form(request: &CreateEmailMessage) -> Vec<(String, String)> {
    let mut params = vec![
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
    if let Some(list_id) = request.list_id() {
        params.push((ListId::FIELD.to_owned(), list_id.value().to_string()));
    }
    params
}

pub fn decode_create_email_message_json_response(
    json: &str,
) -> Result<ApiReply<CreateEmailMessageResponse>, TransportError> {
    decode_envelope::<CreateMessageResultDto>(json)?.try_map(|result| {
        Ok(CreateEmailMessageResponse {
            message_id: MessageId::new(result.message_id.into_u64()?),
        })
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::EmailAddress;

    use super::*;

    fn request(list_id: Option<ListId>) -> CreateEmailMessage {
        CreateEmailMessage::new(
            SenderName::new("News Desk").unwrap(),
            EmailAddress::new("news@example.com").unwrap(),
            Subject::new("September issue").unwrap(),
            MessageBody::new("<h1>News</h1>").unwrap(),
            list_id,
        )
    }

    #[test]
    fn encode_message_fields() {
        assert_eq!(
            encode_create_email_message_form(&request(None)),
            vec![
                ("sender_name".to_owned(), "News Desk".to_owned()),
                ("sender_email".to_owned(), "news@example.com".to_owned()),
                ("subject".to_owned(), "September issue".to_owned()),
                ("body".to_owned(), "<h1>News</h1>".to_owned()),
            ]
        );

        let params = encode_create_email_message_form(&request(Some(ListId::new(4))));
        assert!(params.contains(&("list_id".to_owned(), "4".to_owned())));
    }

    #[test]
    fn decode_message_id() {
        let reply =
            decode_create_email_message_json_response(r#"{"result": {"message_id": 2750}}"#)
                .unwrap();
        assert_eq!(
            reply,
            ApiReply::Success(CreateEmailMessageResponse {
                message_id: MessageId::new(2750)
            })
        );
    }
}
