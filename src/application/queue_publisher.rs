use std::sync::Arc;
use serde::Serialize;
use tracing::{debug, error, info};
use crate::domain::{error::RelayError, ports::QueueClient};

/// Publishes one message per call. The queue URL is looked up on every
/// publish, so a run of N messages makes N lookups and N sends.
pub struct QueuePublisher {
    client: Arc<dyn QueueClient>,
}

impl QueuePublisher {
    pub fn new(client: Arc<dyn QueueClient>) -> Self {
        Self { client }
    }

    pub async fn publish<T: Serialize + ?Sized>(&self, queue_name: &str, account_id: &str, message: &T) -> Result<String, RelayError> {
        debug!("Resolving URL for queue {} owned by {}", queue_name, account_id);
        let queue_url = self.client.get_queue_url(queue_name, account_id).await
            .map_err(|e| {
                error!("Failed to get queue URL for {}: {}", queue_name, e);
                e
            })?;
        debug!("Resolved queue {} to {}", queue_name, queue_url);

        let body = serde_json::to_string(message)
            .map_err(|e| {
                error!("Failed to serialize message for {}: {}", queue_name, e);
                RelayError::from(e)
            })?;

        let message_id = self.client.send_message(&queue_url, &body).await
            .map_err(|e| {
                error!("Failed to send message to {}: {}", queue_name, e);
                e
            })?;

        info!("Message sent to SQS queue {}, MessageId: {}", queue_name, message_id);
        Ok(message_id)
    }
}
