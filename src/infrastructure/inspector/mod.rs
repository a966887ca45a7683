mod conversion;
pub mod findings_source;
