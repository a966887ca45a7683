use async_trait::async_trait;
use aws_sdk_inspector2::{
    error::DisplayErrorContext,
    types::{FilterCriteria, StringComparison, StringFilter},
    Client,
};
use tracing::debug;
use crate::{
    domain::{
        error::RelayError,
        models::{Comparison, FindingFilter, FindingsPage, StringCriterion},
        ports::FindingsSource,
    },
    infrastructure::inspector::conversion::finding_to_value,
};

pub struct InspectorFindingsSource {
    client: Client,
}

impl InspectorFindingsSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FindingsSource for InspectorFindingsSource {
    async fn list_findings(&self, filter: &FindingFilter, next_token: Option<&str>) -> Result<FindingsPage, RelayError> {
        let criteria = to_filter_criteria(filter)?;
        debug!("Calling ListFindings (continuation: {})", next_token.is_some());

        let response = self.client
            .list_findings()
            .filter_criteria(criteria)
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| RelayError::Fetch(DisplayErrorContext(&e).to_string()))?;

        let findings = response
            .findings
            .unwrap_or_default()
            .iter()
            .map(finding_to_value)
            .collect();

        Ok(FindingsPage {
            findings,
            next_token: response.next_token,
        })
    }
}

pub(crate) fn to_filter_criteria(filter: &FindingFilter) -> Result<FilterCriteria, RelayError> {
    Ok(FilterCriteria::builder()
        .set_severity(Some(string_filters(&filter.severity)?))
        .set_resource_type(Some(string_filters(&filter.resource_type)?))
        .set_finding_status(Some(string_filters(&filter.finding_status)?))
        .build())
}

fn string_filters(criteria: &[StringCriterion]) -> Result<Vec<StringFilter>, RelayError> {
    criteria
        .iter()
        .map(|criterion| {
            let comparison = match criterion.comparison {
                Comparison::Equals => StringComparison::Equals,
            };
            StringFilter::builder()
                .comparison(comparison)
                .value(&criterion.value)
                .build()
                .map_err(|e| RelayError::Fetch(format!("invalid filter value '{}': {}", criterion.value, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::findings_fetcher::build_filter;
    use crate::domain::models::RelayConfig;

    #[test]
    fn criteria_carry_every_configured_value() {
        let config = RelayConfig {
            severity: vec!["CRITICAL".into(), "HIGH".into()],
            resource_type: vec!["AWS_EC2_INSTANCE".into()],
            queue_name: "q1".into(),
            account_id: "123456789012".into(),
            region: "eu-central-1".into(),
        };

        let criteria = to_filter_criteria(&build_filter(&config)).unwrap();

        assert_eq!(criteria.severity.as_ref().map(Vec::len), Some(2));
        assert_eq!(criteria.resource_type.as_ref().map(Vec::len), Some(1));
        assert_eq!(criteria.finding_status.as_ref().map(Vec::len), Some(1));
        assert!(criteria.vulnerability_id.is_none());
    }
}
