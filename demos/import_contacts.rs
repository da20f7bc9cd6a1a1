use std::io;

use unisender::{
    Contact, FieldName, ImportContacts, ImportContactsOptions, ListId, UnisenderClient,
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

    let email = FieldName::new("email")?;
    let name = FieldName::new("Name")?;
    let contacts = vec![
        Contact::new()
            .with(email.clone(), "alice@example.com")
            .with(name.clone(), "Alice"),
        Contact::new().with(email, "bob@example.com"),
    ];

    let client = UnisenderClient::from_env()?;
    let request = ImportContacts::new(
        contacts,
        ImportContactsOptions {
            list_ids: vec![ListId::new(list_id)],
            ..Default::default()
        },
    )?;

    let response = client.import_contacts(request).await?;
    println!(
        "total: {}, inserted: {}, updated: {}, invalid: {}",
        response.total, response.inserted, response.updated, response.invalid
    );
    for entry in response.log {
        println!("row {}: {} {}", entry.index, entry.code, entry.message);
    }

    Ok(())
}
