use thiserror::Error;

/// Errors from the fetch → normalize → persist pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The outbound request to the provider failed at the transport level.
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("provider returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The provider payload was not the expected JSON envelope.
    #[error("failed to decode provider payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The storage write failed.
    #[error("storage write failed: {0}")]
    Persistence(#[from] mongodb::error::Error),

    /// The storage write did not complete within the deadline.
    #[error("storage write timed out")]
    StorageTimeout,
}
