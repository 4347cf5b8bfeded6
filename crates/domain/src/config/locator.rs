use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocatorConfig {
    /// Name whose TXT record advertises the gateway modules.
    #[serde(default)]
    pub fqdn: Option<String>,
}
