use std::sync::Arc;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::config::Region;
use tracing::{debug, info};
use crate::{
    application::{findings_fetcher::FindingsFetcher, queue_publisher::QueuePublisher, relay_service::RelayService},
    domain::{
        error::RelayError,
        models::{RelayConfig, RelaySummary},
    },
    infrastructure::{inspector::findings_source::InspectorFindingsSource, sqs::queue_client::SqsQueueClient},
};

pub const ENDPOINT_URL_ENV: &str = "AWS_ENDPOINT_URL";

/// Wires the AWS clients into the relay for one run.
pub struct RelayJob {
    service: RelayService,
    config: RelayConfig,
}

impl RelayJob {
    pub async fn new(config: RelayConfig) -> Self {
        debug!("Loading AWS configuration for region {}", config.region);
        let mut aws_config_builder = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        // Configure endpoint for LocalStack if AWS_ENDPOINT_URL is set
        if let Ok(endpoint_url) = std::env::var(ENDPOINT_URL_ENV) {
            info!("Using custom AWS endpoint: {}", endpoint_url);
            aws_config_builder = aws_config_builder.endpoint_url(&endpoint_url);
        }

        let aws_config = aws_config_builder.load().await;
        debug!("AWS region: {:?}", aws_config.region());

        let inspector_client = aws_sdk_inspector2::Client::new(&aws_config);
        let sqs_client = aws_sdk_sqs::Client::new(&aws_config);
        debug!("AWS clients initialized");

        let fetcher = FindingsFetcher::new(Arc::new(InspectorFindingsSource::new(inspector_client)));
        let publisher = QueuePublisher::new(Arc::new(SqsQueueClient::new(sqs_client)));

        Self {
            service: RelayService::new(fetcher, publisher),
            config,
        }
    }

    pub async fn run(&self) -> Result<RelaySummary, RelayError> {
        info!("Relaying findings to queue {} in account {}", self.config.queue_name, self.config.account_id);
        self.service.run(&self.config).await
    }
}
