use serde::Deserialize;

use crate::domain::{
    EmailAddress, LIST_IDS_FIELD, ListId, Subscribe, SubscribeResponse, Tag, Unsubscribe,
};

use super::{ApiReply, TransportError, decode_envelope, decode_unit_envelope, id::TransportId};

#[derive(Debug, Clone, Deserialize)]
struct SubscribeResultDto {
    person_id: TransportId,
}

pub fn encode_subscribe_form(request: &Subscribe) -> Vec<(String, String)> {
    let mut params = vec![
        (LIST_IDS_FIELD.to_owned(), join_list_ids(request.list_ids())),
        (
            format!("fields[{}]", EmailAddress::FIELD),
            request.email().as_str().to_owned(),
        ),
    ];

    let options = request.options();
    if !options.tags.is_empty() {
        let tags = options
            .tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push((Tag::FIELD.to_owned(), tags));
    }
    if let Some(double_optin) = options.double_optin {
        // Unisender's modes: 4 asks unconfirmed contacts for confirmation,
        // 3 records the consent as already collected.
        let mode = if double_optin { "4" } else { "3" };
        params.push(("double_optin".to_owned(), mode.to_owned()));
    }

    params
}

pub fn decode_subscribe_json_response(
    json: &str,
) -> Result<ApiReply<SubscribeResponse>, TransportError> {
    decode_envelope::<SubscribeResultDto>(json)?.try_map(|result| {
        Ok(SubscribeResponse {
            person_id: result.person_id.into_u64()?,
        })
    })
}

pub fn encode_unsubscribe_form(request: &Unsubscribe) -> Vec<(String, String)> {
    let mut params = vec![
        ("contact_type".to_owned(), "email".to_owned()),
        ("contact".to_owned(), request.email().as_str().to_owned()),
    ];
    if !request.list_ids().is_empty() {
        params.push((LIST_IDS_FIELD.to_owned(), join_list_ids(request.list_ids())));
    }
    params
}

pub fn decode_unsubscribe_json_response(json: &str) -> Result<ApiReply<()>, TransportError> {
    decode_unit_envelope(json)
}

fn join_list_ids(list_ids: &[ListId]) -> String {
    list_ids
        .iter()
        .map(|id| id.value().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
