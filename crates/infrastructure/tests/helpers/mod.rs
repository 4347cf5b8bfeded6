#![allow(dead_code)]
pub mod txt_server_mock;

pub use txt_server_mock::{MockBehavior, MockTxtServer};

use std::time::Duration;

pub const FQDN: &str = "My.test.fqdn";

pub const QUERY_TIMEOUT: Duration = Duration::from_millis(500);

pub fn gateway_strings() -> Vec<String> {
    ["txtvers=1", "hcid=1.2.276.0.76.3.1.90", "authn=/authn", "docv=/docv"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
