use serde::Deserialize;

use crate::domain::{
    CampaignId, CampaignState, CampaignStatusResponse, CreateCampaign, CreateCampaignResponse,
    GetCampaignStatus, ListId, MessageId, StartTime,
};

use super::{ApiReply, TransportError, decode_envelope, id::TransportId};

#[derive(Debug, Clone, Deserialize)]
struct CreateCampaignResultDto {
    campaign_id: TransportId,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct CampaignStatusResultDto {
    status: String,
    #[serde(default)]
    creation_time: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
}

pub fn encode_create_campaign_form(request: &CreateCampaign) -> Vec<(String, String)> {
    let mut params = vec![
        (
            MessageId::FIELD.to_owned(),
            request.message_id().value().to_string(),
        ),
        (
            ListId::FIELD.to_owned(),
            request.list_id().value().to_string(),
        ),
    ];
    if let Some(start_time) = request.start_time() {
        params.push((StartTime::FIELD.to_owned(), start_time.as_str().to_owned()));
    }
    params
}

pub fn decode_create_campaign_json_response(
    json: &str,
) -> Result<ApiReply<CreateCampaignResponse>, TransportError> {
    decode_envelope::<CreateCampaignResultDto>(json)?.try_map(|result| {
        Ok(CreateCampaignResponse {
            campaign_id: CampaignId::new(result.campaign_id.into_u64()?),
            status: result.status.map(CampaignState::new),
            count: result.count,
        })
    })
}

pub fn encode_get_campaign_status_form(request: &GetCampaignStatus) -> Vec<(String, String)> {
    vec![(
        CampaignId::FIELD.to_owned(),
        request.campaign_id().value().to_string(),
    )]
}

pub fn decode_get_campaign_status_json_response(
    json: &str,
) -> Result<ApiReply<CampaignStatusResponse>, TransportError> {
    Ok(
        decode_envelope::<CampaignStatusResultDto>(json)?.map(|result| CampaignStatusResponse {
            status: CampaignState::new(result.status),
            creation_time: result.creation_time,
            start_time: result.start_time,
        }),
    )
}

#[cfg(test)]
mod tests {
    use crate::domain::KnownCampaignState;

    use super::*;

    #[test]
    fn encode_omits_start_time_when_unset() {
        let request = CreateCampaign::new(MessageId::new(2750), ListId::new(4), None);
        assert_eq!(
            encode_create_campaign_form(&request),
            vec![
                ("message_id".to_owned(), "2750".to_owned()),
                ("list_id".to_owned(), "4".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_includes_start_time_when_set() {
        let request = CreateCampaign::new(
            MessageId::new(2750),
            ListId::new(4),
            Some(StartTime::new("2026-09-01 08:30:00").unwrap()),
        );
        assert!(
            encode_create_campaign_form(&request)
                .contains(&("start_time".to_owned(), "2026-09-01 08:30:00".to_owned()))
        );
    }

    #[test]
    fn decode_created_campaign() {
        let json = r#"{"result": {"campaign_id": 35,"status": "scheduled","count": 1200}}"#;
        let reply = decode_create_campaign_json_response(json).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert_eq!(response.campaign_id, CampaignId::new(35));
        assert_eq!(
            response.status.as_ref().and_then(CampaignState::known_kind),
            Some(KnownCampaignState::Scheduled)
        );
        assert_eq!(response.count, Some(1200));
    }

    #[test]
    fn decode_created_campaign_without_extras() {
        let reply =
            decode_create_campaign_json_response(r#"{"result": {"campaign_id": 35}}"#).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert!(response.status.is_none());
        assert!(response.count.is_none());
    }

    #[test]
    fn encode_campaign_status_query() {
        let request = GetCampaignStatus::new(CampaignId::new(35));
        assert_eq!(
            encode_get_campaign_status_form(&request),
            vec![("campaign_id".to_owned(), "35".to_owned())]
        );
    }

    #[test]
    fn decode_campaign_status() {
        let json = r#"
        {
          "result": {
            "status": "completed",
            "creation_time": "2026-08-27 10:00:00",
            "start_time": "2026-08-27 10:05:00"
          }
        }
        "#;
        let reply = decode_get_campaign_status_json_response(json).unwrap();
        let ApiReply::Success(response) = reply else {
            panic!("expected success");
        };
        assert!(response.status.is_terminal());
        assert_eq!(response.creation_time.as_deref(), Some("2026-08-27 10:00:00"));
    }
}
