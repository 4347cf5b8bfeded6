use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Lower bound between two lookups, even when entries expire sooner.
    #[serde(default = "default_min_interval_secs")]
    pub min_interval_secs: u64,

    /// Delay before retrying after `ERROR` or `MISSING_TXT_RECORD`.
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_interval_secs: default_min_interval_secs(),
            retry_interval_secs: default_retry_interval_secs(),
        }
    }
}

fn default_min_interval_secs() -> u64 {
    30
}

fn default_retry_interval_secs() -> u64 {
    60
}
