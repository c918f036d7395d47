use anyhow::Result;
use mongodb::{bson::doc, options::ClientOptions, Client};
use tracing::info;

/// Connect to MongoDB and verify the deployment answers a ping.
pub async fn get_client(uri: &str) -> Result<Client> {
    info!("Connecting to MongoDB");
    let options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await?;

    info!("Connected to MongoDB");
    Ok(client)
}
