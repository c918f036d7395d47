use std::time::Duration;

use mongodb::{
    bson::{doc, to_bson},
    options::UpdateOptions,
    Client, Collection,
};
use tracing::info;

use crate::error::IngestError;
use crate::models::DividendHistory;

const DATABASE: &str = "fundamental_data";
const COLLECTION: &str = "dividends";
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Stores dividend histories, one document per symbol.
#[derive(Debug, Clone)]
pub struct DividendRepository {
    collection: Collection<DividendHistory>,
}

impl DividendRepository {
    pub fn new(client: &Client) -> Self {
        Self {
            collection: client.database(DATABASE).collection(COLLECTION),
        }
    }

    /// Insert-or-replace the stored history for `history.symbol`.
    ///
    /// The `data` field is overwritten wholesale, so repeating the same
    /// upsert is idempotent. An empty history is a no-op: a provider response
    /// with no data must not erase previously stored records.
    pub async fn upsert(&self, history: &DividendHistory) -> Result<(), IngestError> {
        if history.is_empty() {
            info!(
                "No dividend data for {}, skipping storage write",
                history.symbol
            );
            return Ok(());
        }

        let filter = doc! { "symbol": &history.symbol };
        let update = doc! {
            "$set": {
                "symbol": &history.symbol,
                "data": to_bson(&history.data).map_err(mongodb::error::Error::from)?,
            }
        };
        let options = UpdateOptions::builder().upsert(true).build();

        let result = tokio::time::timeout(
            WRITE_TIMEOUT,
            self.collection.update_one(filter, update, options),
        )
        .await
        .map_err(|_| IngestError::StorageTimeout)??;

        info!(
            "Stored dividend history for {} (matched: {}, upserted: {})",
            history.symbol,
            result.matched_count,
            result.upserted_id.is_some()
        );
        Ok(())
    }
}
