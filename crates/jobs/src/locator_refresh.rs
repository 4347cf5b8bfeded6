use chrono::{DateTime, Utc};
use ferrous_locator_application::use_cases::{LocatorSnapshot, ServiceLocator};
use ferrous_locator_domain::config::RefreshConfig;
use ferrous_locator_domain::LookupStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_MIN_INTERVAL_SECS: u64 = 30;
const DEFAULT_RETRY_INTERVAL_SECS: u64 = 60;

/// Keeps a locator's endpoints fresh by looking the name up again before
/// the earliest entry expires.
pub struct LocatorRefreshJob {
    locator: ServiceLocator,
    fqdn: Arc<str>,
    min_interval: Duration,
    retry_interval: Duration,
    shutdown: CancellationToken,
}

impl LocatorRefreshJob {
    pub fn new(locator: ServiceLocator, fqdn: impl Into<Arc<str>>) -> Self {
        Self {
            locator,
            fqdn: fqdn.into(),
            min_interval: Duration::from_secs(DEFAULT_MIN_INTERVAL_SECS),
            retry_interval: Duration::from_secs(DEFAULT_RETRY_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_config(
        locator: ServiceLocator,
        fqdn: impl Into<Arc<str>>,
        config: &RefreshConfig,
    ) -> Self {
        Self::new(locator, fqdn).with_intervals(
            Duration::from_secs(config.min_interval_secs),
            Duration::from_secs(config.retry_interval_secs),
        )
    }

    pub fn with_intervals(mut self, min_interval: Duration, retry_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self.retry_interval = retry_interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Time to wait before the next lookup given what the locator holds now.
    ///
    /// After a success the delay follows the earliest entry expiry but never
    /// drops below `min_interval`, so a record with a very short TTL cannot
    /// drive back-to-back lookups. The cost is that such an entry reads as
    /// absent between its expiry and the next refresh.
    pub fn next_delay(&self, snapshot: &LocatorSnapshot, now: DateTime<Utc>) -> Duration {
        match snapshot.status {
            LookupStatus::NotStarted => Duration::ZERO,
            LookupStatus::InProgress => self.min_interval,
            LookupStatus::Error | LookupStatus::MissingTxtRecord => self.retry_interval,
            LookupStatus::Success => snapshot
                .endpoints
                .min_valid_until()
                .and_then(|expiry| (expiry - now).to_std().ok())
                .map_or(self.min_interval, |until| until.max(self.min_interval)),
        }
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            fqdn = %self.fqdn,
            min_interval_ms = self.min_interval.as_millis() as u64,
            retry_interval_ms = self.retry_interval.as_millis() as u64,
            "Starting locator refresh job"
        );

        loop {
            let delay = self.next_delay(&self.locator.snapshot(), Utc::now());
            debug!(
                fqdn = %self.fqdn,
                delay_ms = delay.as_millis() as u64,
                "Next refresh scheduled"
            );

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("LocatorRefreshJob: shutting down");
                    break;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("LocatorRefreshJob: shutting down");
                    break;
                }
                result = self.locator.lookup_and_wait(&self.fqdn) => match result {
                    Some(LookupStatus::Success) => {
                        debug!(fqdn = %self.fqdn, "Refresh succeeded");
                    }
                    Some(status) => {
                        warn!(fqdn = %self.fqdn, status = %status, "Refresh did not succeed");
                    }
                    None => {
                        debug!(fqdn = %self.fqdn, "Lookup already running, refresh skipped");
                    }
                }
            }
        }
    }
}
