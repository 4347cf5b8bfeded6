use async_trait::async_trait;
use ferrous_locator_application::ports::TxtResolver;
use ferrous_locator_domain::{LocatorError, TxtRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Resolver double answering every name with the configured outcome.
///
/// A gated resolver parks each call until `release()` is invoked, which lets
/// tests observe a lookup while it is in flight.
pub struct MockTxtResolver {
    response: Mutex<Result<Vec<TxtRecord>, LocatorError>>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
    last_fqdn: Mutex<Option<String>>,
}

impl MockTxtResolver {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(Ok(vec![])),
            gate: None,
            calls: AtomicUsize::new(0),
            last_fqdn: Mutex::new(None),
        }
    }

    pub fn with_records(records: Vec<TxtRecord>) -> Self {
        let resolver = Self::new();
        resolver.set_records(records);
        resolver
    }

    pub fn failing(error: LocatorError) -> Self {
        let resolver = Self::new();
        resolver.set_error(error);
        resolver
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn set_records(&self, records: Vec<TxtRecord>) {
        *self.response.lock().unwrap() = Ok(records);
    }

    pub fn set_error(&self, error: LocatorError) {
        *self.response.lock().unwrap() = Err(error);
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_fqdn(&self) -> Option<String> {
        self.last_fqdn.lock().unwrap().clone()
    }
}

impl Default for MockTxtResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TxtResolver for MockTxtResolver {
    async fn resolve(&self, fqdn: &str) -> Result<Vec<TxtRecord>, LocatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_fqdn.lock().unwrap() = Some(fqdn.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.response.lock().unwrap().clone()
    }
}
