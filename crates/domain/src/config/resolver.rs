use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_nameserver")]
    pub nameserver: SocketAddr,

    #[serde(default)]
    pub protocol: ResolverProtocol,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameserver: default_nameserver(),
            protocol: ResolverProtocol::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverProtocol {
    /// UDP first, TCP when the answer comes back truncated.
    #[default]
    Udp,

    Tcp,
}

impl ResolverProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
        }
    }
}

fn default_nameserver() -> SocketAddr {
    SocketAddr::from(([1, 1, 1, 1], 53))
}

fn default_timeout_ms() -> u64 {
    3000
}
