use serde::Deserialize;

use crate::domain::{ContactList, CreateList, CreateListResponse, ListId, ListTitle};

use super::{ApiReply, TransportError, decode_envelope, id::TransportId};

#[derive(Debug, Clone, Deserialize)]
struct ListDto {
    id: TransportId,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CreateListResultDto {
    id: TransportId,
}

pub fn decode_get_lists_json_response(
    json: &str,
) -> Result<ApiReply<Vec<ContactList>>, TransportError> {
    decode_envelope::<Vec<ListDto>>(json)?.try_map(|lists| {
        lists
            .into_iter()
            .map(|list| {
                Ok(ContactList {
                    id: ListId::new(list.id.into_u64()?),
                    title: list.title,
                })
            })
            .collect::<Result<Vec<ContactList>, TransportError>>()
    })
}

pub fn encode_create_list_form(request: &CreateList) -> Vec<(String, String)> {
    vec![(
        ListTitle::FIELD.to_owned(),
        request.title().as_str().to_owned(),
    )]
}

pub fn decode_create_list_json_response(
    json: &str,
) -> Result<ApiReply<CreateListResponse>, TransportError> {
    decode_envelope::<CreateListResultDto>(json)?.try_map(|result| {
        Ok(CreateListResponse {
            id: ListId::new(result.id.into_u64()?),
        })
    })
}
