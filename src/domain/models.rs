use serde::Deserialize;

use crate::domain::finding::Finding;

pub const DEFAULT_REGION: &str = "eu-central-1";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RelayConfig {
    pub severity: Vec<String>,
    #[serde(rename = "resourceType")]
    pub resource_type: Vec<String>,
    pub queue_name: String,
    pub account_id: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringCriterion {
    pub comparison: Comparison,
    pub value: String,
}

impl StringCriterion {
    pub fn equals(value: impl Into<String>) -> Self {
        Self {
            comparison: Comparison::Equals,
            value: value.into(),
        }
    }
}

/// Criteria sent with every list-findings call. Fields are ANDed together,
/// entries within one field are ORed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindingFilter {
    pub severity: Vec<StringCriterion>,
    pub resource_type: Vec<StringCriterion>,
    pub finding_status: Vec<StringCriterion>,
}

#[derive(Debug, Clone, Default)]
pub struct FindingsPage {
    pub findings: Vec<Finding>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaySummary {
    pub retrieved: usize,
    pub published: usize,
}
