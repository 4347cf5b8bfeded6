use crate::dns::forwarding::{MessageBuilder, ResponseParser, TxtResponse};
use crate::dns::transport::{create_transport, tcp::TcpTransport, Transport};
use async_trait::async_trait;
use ferrous_locator_application::ports::TxtResolver;
use ferrous_locator_domain::config::{ResolverConfig, ResolverProtocol};
use ferrous_locator_domain::{LocatorError, TxtRecord};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Resolves TXT records against a single recursive nameserver.
///
/// UDP mode retries over TCP when the answer comes back truncated.
pub struct HickoryTxtResolver {
    nameserver: SocketAddr,
    protocol: ResolverProtocol,
    timeout: Duration,
}

impl HickoryTxtResolver {
    pub fn new(nameserver: SocketAddr, protocol: ResolverProtocol, timeout: Duration) -> Self {
        info!(
            nameserver = %nameserver,
            protocol = protocol.as_str(),
            timeout_ms = timeout.as_millis() as u64,
            "TXT resolver created"
        );

        Self {
            nameserver,
            protocol,
            timeout,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config.nameserver,
            config.protocol,
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn nameserver(&self) -> SocketAddr {
        self.nameserver
    }

    async fn exchange(
        &self,
        transport: &Transport,
        id: u16,
        request: &[u8],
    ) -> Result<TxtResponse, LocatorError> {
        let response = transport.send(request, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(LocatorError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {} ({})",
                parsed.id, id, response.protocol_used
            )));
        }

        Ok(parsed)
    }

    fn into_records(fqdn: &str, response: TxtResponse) -> Result<Vec<TxtRecord>, LocatorError> {
        match response.rcode {
            ResponseCode::NoError => Ok(response.records),
            ResponseCode::NXDomain => {
                debug!(fqdn = %fqdn, "Name does not exist");
                Ok(Vec::new())
            }
            rcode => Err(LocatorError::ServerFailure {
                fqdn: fqdn.to_string(),
                rcode: ResponseParser::rcode_to_status(rcode).to_string(),
            }),
        }
    }
}

#[async_trait]
impl TxtResolver for HickoryTxtResolver {
    async fn resolve(&self, fqdn: &str) -> Result<Vec<TxtRecord>, LocatorError> {
        let (id, request) = MessageBuilder::build_txt_query(fqdn)?;
        let transport = create_transport(self.protocol, self.nameserver);

        debug!(
            fqdn = %fqdn,
            server = %self.nameserver,
            protocol = transport.protocol_name(),
            "Sending TXT query"
        );

        let mut response = self.exchange(&transport, id, &request).await?;

        if response.truncated && self.protocol == ResolverProtocol::Udp {
            warn!(
                fqdn = %fqdn,
                server = %self.nameserver,
                "Truncated UDP answer, retrying over TCP"
            );
            let tcp = Transport::Tcp(TcpTransport::new(self.nameserver));
            response = self.exchange(&tcp, id, &request).await?;
        }

        let records = Self::into_records(fqdn, response)?;

        debug!(
            fqdn = %fqdn,
            records = records.len(),
            "TXT query answered"
        );

        Ok(records)
    }
}
