use crate::services::{EndpointCache, EndpointUrlBuilder};
use chrono::{DateTime, Utc};
use ferrous_locator_domain::{LookupStatus, ServiceInterfaceName};
use http::Uri;
use std::sync::Arc;

const HOME_COMMUNITY_ID_KEY: &str = "hcid";

/// Everything a reader needs, published as one unit.
#[derive(Debug, Clone, Default)]
pub struct LocatorSnapshot {
    pub status: LookupStatus,
    pub fqdn: Option<Arc<str>>,
    pub endpoints: EndpointCache,
}

impl LocatorSnapshot {
    pub(crate) fn started(fqdn: Arc<str>) -> Self {
        Self {
            status: LookupStatus::InProgress,
            fqdn: Some(fqdn),
            endpoints: EndpointCache::new(),
        }
    }

    pub fn endpoint_url_at(
        &self,
        interface: &ServiceInterfaceName,
        now: DateTime<Utc>,
    ) -> Option<Uri> {
        if self.status != LookupStatus::Success {
            return None;
        }
        let fqdn = self.fqdn.as_deref()?;

        EndpointUrlBuilder::build(
            fqdn,
            &self.endpoints,
            interface.module_name(),
            interface.suffix(),
            now,
        )
    }

    pub fn home_community_id_at(&self, now: DateTime<Utc>) -> Option<Arc<str>> {
        self.endpoints
            .get_valid(HOME_COMMUNITY_ID_KEY, now)
            .map(|entry| Arc::clone(&entry.path))
    }
}
