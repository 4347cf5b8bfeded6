use super::endpoint_cache::EndpointCache;
use chrono::{DateTime, Utc};
use ferrous_locator_domain::{LocatorError, LookupStatus, ModulePathEntry, TxtRecord};
use tracing::debug;

pub const TXT_VERSION_KEY: &str = "txtvers";
pub const SUPPORTED_TXT_VERSION: &str = "1";

/// Turns TXT answers into an [`EndpointCache`].
///
/// Every string is unquoted and split on whitespace. Each `key=value` token
/// becomes an entry carrying the TTL of the record it came from; tokens
/// without `=` are skipped. A `txtvers` token other than `1` rejects the
/// whole answer, so nothing from a foreign format version is ever cached.
pub struct TxtRecordParser;

impl TxtRecordParser {
    pub fn parse(
        records: &[TxtRecord],
        parsed_at: DateTime<Utc>,
    ) -> Result<EndpointCache, LocatorError> {
        let mut cache = EndpointCache::new();

        for record in records {
            for string in &record.strings {
                let unquoted = string.replace('"', "");

                for token in unquoted.split_whitespace() {
                    let Some((key, value)) = token.split_once('=') else {
                        continue;
                    };

                    if key == TXT_VERSION_KEY {
                        if value != SUPPORTED_TXT_VERSION {
                            return Err(LocatorError::VersionMismatch {
                                found: value.to_string(),
                            });
                        }
                        continue;
                    }

                    if key.is_empty() {
                        continue;
                    }

                    let entry = ModulePathEntry::new(value, record.ttl, parsed_at);
                    debug!(
                        module = key,
                        path = value,
                        valid_until = %entry.valid_until,
                        "TXT module path parsed"
                    );
                    cache.insert(key, entry);
                }
            }
        }

        Ok(cache)
    }

    /// Status a lookup ends in once its answer parsed cleanly.
    pub fn status_for(cache: &EndpointCache) -> LookupStatus {
        if cache.is_empty() {
            LookupStatus::MissingTxtRecord
        } else {
            LookupStatus::Success
        }
    }
}
