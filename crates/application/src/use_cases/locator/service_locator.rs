use super::snapshot::LocatorSnapshot;
use crate::ports::TxtResolver;
use crate::services::{EndpointCache, TxtRecordParser};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use ferrous_locator_domain::{LookupStatus, ServiceInterfaceName};
use http::Uri;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Whether a `lookup` call was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTicket {
    /// The lookup runs and its callback will fire once.
    Started,
    /// Another lookup is in flight; the call was dropped and its callback
    /// will never fire.
    Busy,
}

/// Discovers gateway endpoints from the TXT record of a name.
///
/// At most one lookup runs at a time. Readers always see a complete
/// [`LocatorSnapshot`]: the cache, status and name are swapped together.
#[derive(Clone)]
pub struct ServiceLocator {
    inner: Arc<LocatorInner>,
}

struct LocatorInner {
    resolver: Arc<dyn TxtResolver>,
    runtime: Handle,
    running: AtomicBool,
    state: ArcSwap<LocatorSnapshot>,
}

type LookupCallback = Box<dyn FnOnce(LookupStatus) + Send + 'static>;

/// Owns one accepted lookup until its callback has fired.
///
/// If the lookup task unwinds or is dropped before finishing, the guard
/// publishes an `Error` snapshot and still delivers the callback once.
struct InFlight {
    inner: Arc<LocatorInner>,
    fqdn: Arc<str>,
    callback: Option<LookupCallback>,
}

impl InFlight {
    fn complete(mut self, status: LookupStatus) {
        self.release(status);
    }

    fn release(&mut self, status: LookupStatus) {
        self.inner.running.store(false, Ordering::Release);
        if let Some(callback) = self.callback.take() {
            callback(status);
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.callback.is_none() {
            return;
        }

        warn!(fqdn = %self.fqdn, "Lookup ended without a result");
        self.inner.state.store(Arc::new(LocatorSnapshot {
            status: LookupStatus::Error,
            fqdn: Some(Arc::clone(&self.fqdn)),
            endpoints: EndpointCache::new(),
        }));
        self.release(LookupStatus::Error);
    }
}

impl ServiceLocator {
    pub fn new(resolver: Arc<dyn TxtResolver>, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(LocatorInner {
                resolver,
                runtime,
                running: AtomicBool::new(false),
                state: ArcSwap::from_pointee(LocatorSnapshot::default()),
            }),
        }
    }

    /// Starts a lookup of `fqdn` and reports the terminal status to
    /// `callback` from a runtime worker.
    ///
    /// Returns [`LookupTicket::Busy`] without touching any state when a
    /// lookup is already running.
    pub fn lookup<F>(&self, fqdn: &str, callback: F) -> LookupTicket
    where
        F: FnOnce(LookupStatus) + Send + 'static,
    {
        let Some(in_flight) = self.try_begin(fqdn, Box::new(callback)) else {
            debug!(fqdn = %fqdn, "Lookup already running, request dropped");
            return LookupTicket::Busy;
        };

        self.inner.runtime.spawn(async move {
            let inner = Arc::clone(&in_flight.inner);
            let status = inner.run_cycle(Arc::clone(&in_flight.fqdn)).await;
            in_flight.complete(status);
        });

        LookupTicket::Started
    }

    /// Runs a lookup through the same completion path as [`Self::lookup`]
    /// and waits for it. `None` when another lookup was already running.
    pub async fn lookup_and_wait(&self, fqdn: &str) -> Option<LookupStatus> {
        let (tx, rx) = oneshot::channel();
        match self.lookup(fqdn, move |status| {
            let _ = tx.send(status);
        }) {
            LookupTicket::Started => rx.await.ok(),
            LookupTicket::Busy => None,
        }
    }

    fn try_begin(&self, fqdn: &str, callback: LookupCallback) -> Option<InFlight> {
        self.inner
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        let fqdn: Arc<str> = Arc::from(fqdn);
        self.inner
            .state
            .store(Arc::new(LocatorSnapshot::started(Arc::clone(&fqdn))));
        debug!(fqdn = %fqdn, "Lookup started");

        Some(InFlight {
            inner: Arc::clone(&self.inner),
            fqdn,
            callback: Some(callback),
        })
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    pub fn lookup_status(&self) -> LookupStatus {
        if self.is_running() {
            LookupStatus::InProgress
        } else {
            self.inner.state.load().status
        }
    }

    pub fn snapshot(&self) -> Arc<LocatorSnapshot> {
        self.inner.state.load_full()
    }

    pub fn home_community_id(&self) -> Option<Arc<str>> {
        self.home_community_id_at(Utc::now())
    }

    pub fn home_community_id_at(&self, now: DateTime<Utc>) -> Option<Arc<str>> {
        self.inner.state.load().home_community_id_at(now)
    }

    pub fn endpoint_url_for_interface(&self, interface: &ServiceInterfaceName) -> Option<Uri> {
        self.endpoint_url_for_interface_at(interface, Utc::now())
    }

    pub fn endpoint_url_for_interface_at(
        &self,
        interface: &ServiceInterfaceName,
        now: DateTime<Utc>,
    ) -> Option<Uri> {
        self.inner.state.load().endpoint_url_at(interface, now)
    }
}

impl LocatorInner {
    async fn run_cycle(&self, fqdn: Arc<str>) -> LookupStatus {
        let (status, endpoints) = match self.resolver.resolve(&fqdn).await {
            Ok(records) => match TxtRecordParser::parse(&records, Utc::now()) {
                Ok(endpoints) => (TxtRecordParser::status_for(&endpoints), endpoints),
                Err(e) => {
                    warn!(fqdn = %fqdn, error = %e, "Rejected TXT record");
                    (LookupStatus::Error, EndpointCache::new())
                }
            },
            Err(e) => {
                warn!(fqdn = %fqdn, error = %e, "TXT lookup failed");
                (LookupStatus::Error, EndpointCache::new())
            }
        };

        info!(
            fqdn = %fqdn,
            status = %status,
            modules = endpoints.len(),
            "Lookup finished"
        );

        self.state.store(Arc::new(LocatorSnapshot {
            status,
            fqdn: Some(fqdn),
            endpoints,
        }));

        status
    }
}
