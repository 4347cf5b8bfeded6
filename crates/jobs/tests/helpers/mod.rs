#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_locator_application::ports::TxtResolver;
use ferrous_locator_application::use_cases::ServiceLocator;
use ferrous_locator_domain::{LocatorError, TxtRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FQDN: &str = "My.test.fqdn";

/// Counts lookups and answers each with a fixed outcome.
pub struct CountingResolver {
    response: Mutex<Result<Vec<TxtRecord>, LocatorError>>,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn answering(ttl_secs: u64, text: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Ok(vec![TxtRecord::from_text(
                Duration::from_secs(ttl_secs),
                text,
            )])),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Err(LocatorError::ResolverFailed("unreachable".to_string()))),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TxtResolver for CountingResolver {
    async fn resolve(&self, _fqdn: &str) -> Result<Vec<TxtRecord>, LocatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

pub fn make_locator(resolver: Arc<CountingResolver>) -> ServiceLocator {
    ServiceLocator::new(resolver, tokio::runtime::Handle::current())
}
