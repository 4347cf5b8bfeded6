use super::endpoint_cache::EndpointCache;
use chrono::{DateTime, Utc};
use http::Uri;
use tracing::{debug, warn};

pub const ENDPOINT_SCHEME: &str = "https";
pub const ENDPOINT_PORT: u16 = 443;

/// Assembles `https://{fqdn}:443{path}[/{suffix}]` from cached module paths.
pub struct EndpointUrlBuilder;

impl EndpointUrlBuilder {
    /// Returns `None` when the module is unknown, its entry expired, or the
    /// pieces do not form a valid URI.
    pub fn build(
        fqdn: &str,
        cache: &EndpointCache,
        module_name: &str,
        suffix: &str,
        now: DateTime<Utc>,
    ) -> Option<Uri> {
        let entry = cache.get_valid(module_name, now)?;

        let raw = if suffix.is_empty() {
            format!("{}://{}:{}{}", ENDPOINT_SCHEME, fqdn, ENDPOINT_PORT, entry.path)
        } else {
            format!(
                "{}://{}:{}{}/{}",
                ENDPOINT_SCHEME, fqdn, ENDPOINT_PORT, entry.path, suffix
            )
        };

        match Uri::try_from(raw.as_str()) {
            Ok(uri) => {
                debug!(module = module_name, url = %uri, "Endpoint URL built");
                Some(uri)
            }
            Err(e) => {
                warn!(
                    module = module_name,
                    path = %entry.path,
                    error = %e,
                    "Malformed endpoint URL"
                );
                None
            }
        }
    }
}
