use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Relative path of one gateway module as advertised in the TXT record.
///
/// Entries are immutable. A new lookup replaces them instead of updating
/// them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePathEntry {
    pub path: Arc<str>,
    pub ttl: Duration,
    pub valid_until: DateTime<Utc>,
}

impl ModulePathEntry {
    pub fn new(path: impl Into<Arc<str>>, ttl: Duration, parsed_at: DateTime<Utc>) -> Self {
        let valid_until = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| parsed_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            path: path.into(),
            ttl,
            valid_until,
        }
    }

    /// An entry expires the instant `valid_until` is reached.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.valid_until
    }
}
