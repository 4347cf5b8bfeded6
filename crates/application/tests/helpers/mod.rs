#![allow(dead_code)]

mod mock_resolver;

pub use mock_resolver::MockTxtResolver;

use ferrous_locator_domain::TxtRecord;
use std::time::Duration;

pub const FQDN: &str = "My.test.fqdn";
pub const TTL: Duration = Duration::from_secs(200);
pub const RECORD_TXT: &str = "\"txtvers=1\" \"hcid=1.2.276.0.76.3.1.91\" \"authn=/authn\" \"authz=/authz\" \"avzd=/avzd\" \"docv=/docv\" \"ocspf=/ocspf\" \"avzd=/avzd\" \"sgd1=/sgd1\" \"sgd2=/sgd2\"";

pub fn gateway_record() -> TxtRecord {
    TxtRecord::from_text(TTL, RECORD_TXT)
}

pub fn record(ttl_secs: u64, strings: &[&str]) -> TxtRecord {
    TxtRecord::new(
        Duration::from_secs(ttl_secs),
        strings.iter().map(|s| s.to_string()).collect(),
    )
}
