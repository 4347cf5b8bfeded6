use chrono::{DateTime, Utc};
use ferrous_locator_domain::ModulePathEntry;
use std::collections::HashMap;
use std::sync::Arc;

/// Module name to path mapping produced by one successful parse.
///
/// The map is never edited after the parser hands it over; a later lookup
/// publishes a new one. Expired entries stay in place and are filtered out
/// on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointCache {
    entries: HashMap<Arc<str>, ModulePathEntry>,
}

impl EndpointCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, module_name: &str, entry: ModulePathEntry) {
        self.entries.insert(Arc::from(module_name), entry);
    }

    /// Raw entry regardless of expiry.
    pub fn get(&self, module_name: &str) -> Option<&ModulePathEntry> {
        self.entries.get(module_name)
    }

    pub fn get_valid(&self, module_name: &str, now: DateTime<Utc>) -> Option<&ModulePathEntry> {
        self.get(module_name).filter(|entry| entry.is_valid_at(now))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModulePathEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_ref(), entry))
    }

    /// Earliest expiry across all entries, `None` for an empty cache.
    pub fn min_valid_until(&self) -> Option<DateTime<Utc>> {
        self.entries.values().map(|entry| entry.valid_until).min()
    }
}
