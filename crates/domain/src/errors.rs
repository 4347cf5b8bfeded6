use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS server answered {rcode} for {fqdn}")]
    ServerFailure { fqdn: String, rcode: String },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("Unsupported TXT record version: {found}")]
    VersionMismatch { found: String },

    #[error("Resolver failed: {0}")]
    ResolverFailed(String),
}
