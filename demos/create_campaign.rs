use std::io;

use unisender::{
    CreateCampaign, CreateEmailMessage, EmailAddress, ListId, MessageBody, SenderName, StartTime,
    Subject, UnisenderClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let list_id: u64 = std::env::var("UNISENDER_LIST_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "UNISENDER_LIST_ID environment variable is required",
            )
        })?
        .parse()?;
    let sender_email = std::env::var("UNISENDER_SENDER_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_SENDER_EMAIL environment variable is required",
        )
    })?;
    let start_time = std::env::var("UNISENDER_START_TIME").ok();

    let client = UnisenderClient::from_env()?;

    let message = client
        .create_email_message(CreateEmailMessage::new(
            SenderName::new("Unisender demo")?,
            EmailAddress::new(sender_email)?,
            Subject::new("Campaign demo")?,
            MessageBody::new("<p>Campaign body</p>")?,
            Some(ListId::new(list_id)),
        ))
        .await?;
    println!("message_id: {}", message.message_id.value());

    let start_time = match start_time {
        Some(value) => Some(StartTime::new(value)?),
        None => None,
    };
    let campaign = client
        .create_campaign(CreateCampaign::new(
            message.message_id,
            ListId::new(list_id),
            start_time,
        ))
        .await?;
    println!(
        "campaign_id: {}, status: {:?}, count: {:?}",
        campaign.campaign_id.value(),
        campaign.status.as_ref().map(|s| s.as_str()),
        campaign.count
    );

    Ok(())
}
