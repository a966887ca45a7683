use async_trait::async_trait;
use crate::domain::{
    error::RelayError,
    models::{FindingFilter, FindingsPage},
};

#[async_trait]
pub trait FindingsSource: Send + Sync {
    async fn list_findings(&self, filter: &FindingFilter, next_token: Option<&str>) -> Result<FindingsPage, RelayError>;
}

#[async_trait]
pub trait QueueClient: Send + Sync {
    async fn get_queue_url(&self, queue_name: &str, account_id: &str) -> Result<String, RelayError>;

    /// Returns the message id assigned by the queue.
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, RelayError>;
}
