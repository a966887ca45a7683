use tracing::{debug, warn};
use crate::domain::finding::{iso8601, Finding, FindingValue};

pub const DOCUMENT_TYPE_KEY: &str = "DocumentType";
pub const DOCUMENT_TYPE_EC2: &str = "EC2";

/// Tags the finding and flattens its timestamps, in that order.
pub fn enrich(finding: Finding) -> Finding {
    normalize_timestamps(tag(finding))
}

pub fn tag(finding: Finding) -> Finding {
    match finding {
        FindingValue::Map(mut map) => {
            if map.insert(DOCUMENT_TYPE_KEY.to_string(), FindingValue::from(DOCUMENT_TYPE_EC2)).is_some() {
                debug!("Overwrote existing {} on finding", DOCUMENT_TYPE_KEY);
            }
            FindingValue::Map(map)
        }
        other => {
            warn!("Finding is not a mapping, leaving it untagged");
            other
        }
    }
}

pub fn normalize_timestamps(value: FindingValue) -> FindingValue {
    match value {
        FindingValue::Map(map) => FindingValue::Map(
            map.into_iter()
                .map(|(key, value)| (key, normalize_timestamps(value)))
                .collect(),
        ),
        FindingValue::List(items) => FindingValue::List(items.into_iter().map(normalize_timestamps).collect()),
        FindingValue::Timestamp(ts) => FindingValue::String(iso8601(&ts)),
        leaf => leaf,
    }
}
