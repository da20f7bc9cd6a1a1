use unisender::UnisenderClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = UnisenderClient::from_env()?;

    for list in client.get_lists().await? {
        println!("{}\t{}", list.id.value(), list.title);
    }

    Ok(())
}
