use async_trait::async_trait;
use ferrous_locator_domain::{LocatorError, TxtRecord};

/// Fetches the TXT records published for a name.
///
/// An empty `Vec` means the name exists but carries no TXT data (or does not
/// exist at all). Transport and decoding problems are reported as errors.
#[async_trait]
pub trait TxtResolver: Send + Sync {
    async fn resolve(&self, fqdn: &str) -> Result<Vec<TxtRecord>, LocatorError>;
}
