use anyhow::{bail, Context, Result};
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};

use crate::mongo::aggregation::EVENTS_COLLECTION;

pub async fn connect(uri: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("Failed to parse MongoDB connection URI")?;

    options.app_name = Some("mixpanel-report".into());

    let client = Client::with_options(options)
        .context("Failed to create MongoDB client with options")?;

    // Validate the connection before touching the events collection
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .context("Failed to ping MongoDB server - connection test failed")?;

    Ok(client)
}

/// Resolve the events collection, failing when it is absent. The server
/// treats a missing collection as empty, which would otherwise produce a
/// report with a banner and header but no data lines.
pub async fn events_collection(client: &Client, db: &str) -> Result<Collection<Document>> {
    let database = client.database(db);
    let names = database
        .list_collection_names(doc! { "name": EVENTS_COLLECTION })
        .await
        .with_context(|| format!("Failed to list collections in database '{}'", db))?;

    require_events_collection(&names, db)?;

    Ok(database.collection(EVENTS_COLLECTION))
}

/// The server reports an absent collection as an empty (successful)
/// aggregation; refuse to proceed so the report cannot silently shrink to
/// banner and header.
fn require_events_collection(names: &[String], db: &str) -> Result<()> {
    if names.iter().any(|n| n == EVENTS_COLLECTION) {
        return Ok(());
    }
    bail!(
        "Collection '{}' does not exist in database '{}'",
        EVENTS_COLLECTION,
        db
    )
}
