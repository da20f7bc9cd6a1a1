use std::io;

use unisender::{EmailAddress, ListId, Subscribe, SubscribeOptions, UnisenderClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = std::env::var("UNISENDER_CONTACT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_CONTACT environment variable is required",
        )
    })?;
    let list_id: u64 = std::env::var("UNISENDER_LIST_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "UNISENDER_LIST_ID environment variable is required",
            )
        })?
        .parse()?;

    let client = UnisenderClient::from_env()?;
    let request = Subscribe::new(
        EmailAddress::new(email)?,
        vec![ListId::new(list_id)],
        SubscribeOptions {
            double_optin: Some(true),
            ..Default::default()
        },
    )?;

    let response = client.subscribe(request).await?;
    println!("person_id: {}", response.person_id);

    Ok(())
}
