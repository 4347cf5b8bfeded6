pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_locator_domain::config::ResolverProtocol;
use ferrous_locator_domain::LocatorError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LocatorError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LocatorError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub fn create_transport(protocol: ResolverProtocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        ResolverProtocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        ResolverProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

pub(crate) fn timeout_error(server_addr: SocketAddr) -> LocatorError {
    LocatorError::TransportTimeout {
        server: server_addr.to_string(),
    }
}

pub(crate) fn io_error(
    server_addr: SocketAddr,
    context: &str,
    e: impl std::fmt::Display,
) -> LocatorError {
    LocatorError::TransportIo {
        server: server_addr.to_string(),
        reason: format!("{}: {}", context, e),
    }
}
