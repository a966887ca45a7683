use tracing::{debug, info};
use crate::{
    application::{enricher, findings_fetcher::FindingsFetcher, queue_publisher::QueuePublisher},
    domain::{
        error::RelayError,
        models::{RelayConfig, RelaySummary},
    },
};

pub struct RelayService {
    fetcher: FindingsFetcher,
    publisher: QueuePublisher,
}

impl RelayService {
    pub fn new(fetcher: FindingsFetcher, publisher: QueuePublisher) -> Self {
        Self { fetcher, publisher }
    }

    /// Single pass: fetch, then enrich and publish each finding in order.
    /// The first publish error stops the run and is returned as is; the
    /// publisher has already logged it.
    pub async fn run(&self, config: &RelayConfig) -> Result<RelaySummary, RelayError> {
        debug!("Step 1: Fetching findings for severity {:?}, resource type {:?}", config.severity, config.resource_type);
        let findings = self.fetcher.fetch(config).await;
        let retrieved = findings.len();

        info!("Total critical findings retrieved: {}", retrieved);

        debug!("Step 2: Publishing {} findings to {}", retrieved, config.queue_name);
        let mut published = 0;
        for finding in findings {
            let message = enricher::enrich(finding);
            self.publisher.publish(&config.queue_name, &config.account_id, &message).await?;
            published += 1;
        }

        info!("✅ Relay complete - {} of {} findings published to {}", published, retrieved, config.queue_name);
        Ok(RelaySummary { retrieved, published })
    }
}
