use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::{Context, SubscriberExt}, Layer};
use crate::domain::{
    error::RelayError,
    models::{FindingFilter, FindingsPage, RelayConfig},
    ports::{FindingsSource, QueueClient},
};

pub fn sample_config() -> RelayConfig {
    RelayConfig {
        severity: vec!["CRITICAL".to_string()],
        resource_type: vec!["AWS_EC2_INSTANCE".to_string()],
        queue_name: "q1".to_string(),
        account_id: "123456789012".to_string(),
        region: "eu-central-1".to_string(),
    }
}

/// Counts ERROR events emitted on this thread while the guard is alive.
pub struct ErrorLogCounter {
    count: Arc<AtomicUsize>,
    _guard: DefaultGuard,
}

impl ErrorLogCounter {
    pub fn install() -> Self {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountErrors(count.clone()));
        Self {
            count,
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

struct CountErrors(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for CountErrors {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Replays canned pages in order and records what it was asked for.
pub struct FakeFindingsSource {
    responses: Mutex<VecDeque<Result<FindingsPage, RelayError>>>,
    calls: Mutex<Vec<(FindingFilter, Option<String>)>>,
}

impl FakeFindingsSource {
    pub fn new(responses: Vec<Result<FindingsPage, RelayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }

    pub fn filters_seen(&self) -> Vec<FindingFilter> {
        self.calls.lock().unwrap().iter().map(|(f, _)| f.clone()).collect()
    }
}

#[async_trait]
impl FindingsSource for FakeFindingsSource {
    async fn list_findings(&self, filter: &FindingFilter, next_token: Option<&str>) -> Result<FindingsPage, RelayError> {
        self.calls.lock().unwrap().push((filter.clone(), next_token.map(str::to_string)));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::Fetch("no more canned pages".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueCall {
    GetQueueUrl { queue_name: String, account_id: String },
    SendMessage { queue_url: String, body: String },
}

#[derive(Default)]
pub struct FakeQueueClient {
    calls: Mutex<Vec<QueueCall>>,
    fail_resolution: bool,
    fail_send_at: Option<usize>,
}

impl FakeQueueClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_resolution() -> Self {
        Self {
            fail_resolution: true,
            ..Self::default()
        }
    }

    /// Fails the n-th send (zero based).
    pub fn failing_send_at(index: usize) -> Self {
        Self {
            fail_send_at: Some(index),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<QueueCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent_bodies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                QueueCall::SendMessage { body, .. } => Some(body),
                QueueCall::GetQueueUrl { .. } => None,
            })
            .collect()
    }

    fn send_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, QueueCall::SendMessage { .. }))
            .count()
    }
}

#[async_trait]
impl QueueClient for FakeQueueClient {
    async fn get_queue_url(&self, queue_name: &str, account_id: &str) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(QueueCall::GetQueueUrl {
            queue_name: queue_name.to_string(),
            account_id: account_id.to_string(),
        });
        if self.fail_resolution {
            return Err(RelayError::QueueResolution {
                queue: queue_name.to_string(),
                reason: "AWS.SimpleQueueService.NonExistentQueue".to_string(),
            });
        }
        Ok(format!("https://sqs.eu-central-1.amazonaws.com/{}/{}", account_id, queue_name))
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, RelayError> {
        let index = self.send_count();
        self.calls.lock().unwrap().push(QueueCall::SendMessage {
            queue_url: queue_url.to_string(),
            body: body.to_string(),
        });
        if self.fail_send_at == Some(index) {
            return Err(RelayError::Publish {
                queue: queue_url.to_string(),
                reason: "AccessDenied".to_string(),
            });
        }
        Ok(format!("msg-{}", index))
    }
}
