use std::sync::Arc;
use tracing::{debug, error, info};
use crate::domain::{
    error::RelayError,
    finding::Finding,
    models::{FindingFilter, RelayConfig, StringCriterion},
    ports::FindingsSource,
};

pub const ACTIVE_STATUS: &str = "ACTIVE";

pub struct FindingsFetcher {
    source: Arc<dyn FindingsSource>,
}

impl FindingsFetcher {
    pub fn new(source: Arc<dyn FindingsSource>) -> Self {
        Self { source }
    }

    /// Fetches every matching finding across all pages. Errors are logged and
    /// collapse to an empty list; callers cannot tell them apart from a clean scan.
    pub async fn fetch(&self, config: &RelayConfig) -> Vec<Finding> {
        let filter = build_filter(config);
        match self.fetch_all(&filter).await {
            Ok(findings) => findings,
            Err(e) => {
                error!("Error fetching findings: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_all(&self, filter: &FindingFilter) -> Result<Vec<Finding>, RelayError> {
        let mut findings = Vec::new();
        let mut next_token: Option<String> = None;
        let mut page_count = 0;

        loop {
            page_count += 1;
            debug!("Requesting findings page {}", page_count);

            let page = self.source.list_findings(filter, next_token.as_deref()).await?;
            debug!("Page {} returned {} findings", page_count, page.findings.len());
            findings.extend(page.findings);

            next_token = page.next_token.filter(|t| !t.is_empty());
            if next_token.is_none() {
                break;
            }
        }

        info!("Fetched {} findings across {} pages", findings.len(), page_count);
        Ok(findings)
    }
}

pub fn build_filter(config: &RelayConfig) -> FindingFilter {
    FindingFilter {
        severity: config.severity.iter().map(StringCriterion::equals).collect(),
        resource_type: config.resource_type.iter().map(StringCriterion::equals).collect(),
        finding_status: vec![StringCriterion::equals(ACTIVE_STATUS)],
    }
}
