pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolve_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;

pub use udp::UdpTransport;

/// Result of a raw DNS transport operation
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Bytes,
    /// Candidate that produced the reply
    pub server: IpAddr,
}

/// Sends one encoded query to an ordered list of candidate servers.
///
/// Candidates are tried strictly one at a time; the first reply wins. The
/// transport never inspects the reply beyond reading it off the wire.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        candidates: &[IpAddr],
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}
