pub mod enricher;
pub mod findings_fetcher;
pub mod queue_publisher;
pub mod relay_service;

#[cfg(test)]
pub(crate) mod fakes;
