use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to load configuration: {0}")]
    Config(String),

    #[error("error fetching findings: {0}")]
    Fetch(String),

    #[error("failed to get queue URL for {queue}: {reason}")]
    QueueResolution { queue: String, reason: String },

    #[error("failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to send message to {queue}: {reason}")]
    Publish { queue: String, reason: String },
}
