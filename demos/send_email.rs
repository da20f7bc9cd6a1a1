use std::io;

use unisender::{
    EmailAddress, MessageBody, SendEmail, SendEmailOptions, SenderName, Subject, UnisenderClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recipient = std::env::var("UNISENDER_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_RECIPIENT environment variable is required",
        )
    })?;
    let sender_email = std::env::var("UNISENDER_SENDER_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_SENDER_EMAIL environment variable is required",
        )
    })?;
    let sender_name = std::env::var("UNISENDER_SENDER_NAME")
        .unwrap_or_else(|_| "Unisender demo".to_owned());

    let client = UnisenderClient::from_env()?;
    let request = SendEmail::new(
        EmailAddress::new(recipient)?,
        SenderName::new(sender_name)?,
        EmailAddress::new(sender_email)?,
        Subject::new("Hello from the unisender crate")?,
        MessageBody::new("<p>Hello!</p>")?,
        SendEmailOptions::default(),
    );

    let response = client.send_email(request).await?;
    for result in response.results {
        println!("email: {:?}, id: {:?}", result.email, result.id);
    }

    Ok(())
}
