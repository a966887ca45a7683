use async_trait::async_trait;
use aws_sdk_sqs::{error::DisplayErrorContext, Client};
use tracing::debug;
use crate::domain::{error::RelayError, ports::QueueClient};

pub struct SqsQueueClient {
    client: Client,
}

impl SqsQueueClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueClient for SqsQueueClient {
    async fn get_queue_url(&self, queue_name: &str, account_id: &str) -> Result<String, RelayError> {
        debug!("Calling GetQueueUrl for {} in account {}", queue_name, account_id);
        let response = self.client
            .get_queue_url()
            .queue_name(queue_name)
            .queue_owner_aws_account_id(account_id)
            .send()
            .await
            .map_err(|e| RelayError::QueueResolution {
                queue: queue_name.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        response.queue_url.ok_or_else(|| RelayError::QueueResolution {
            queue: queue_name.to_string(),
            reason: "response did not include a queue URL".to_string(),
        })
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, RelayError> {
        debug!("Calling SendMessage on {} with {} byte body", queue_url, body.len());
        let response = self.client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| RelayError::Publish {
                queue: queue_url.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        response.message_id.ok_or_else(|| RelayError::Publish {
            queue: queue_url.to_string(),
            reason: "response did not include a message id".to_string(),
        })
    }
}
