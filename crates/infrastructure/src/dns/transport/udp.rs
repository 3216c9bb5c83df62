use super::{DnsTransport, TransportResponse};
use crate::dns::codec::MAX_UDP_MESSAGE_SIZE;
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolve_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub const DNS_PORT: u16 = 53;

/// Plain DNS over UDP, one fresh socket per candidate.
///
/// The socket lives only inside [`UdpTransport::exchange`], so it is closed
/// on every exit path before the next candidate is tried.
pub struct UdpTransport {
    port: u16,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self { port: DNS_PORT }
    }

    /// Target a non-standard port on every candidate (local test servers).
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }

    async fn exchange(
        &self,
        server_addr: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        let network_error = |reason: String| DomainError::NetworkError {
            server: server_addr.to_string(),
            reason,
        };

        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| network_error(format!("failed to bind UDP socket: {}", e)))?;

        // Connected sockets drop datagrams from other sources and surface
        // ICMP port-unreachable as a receive error.
        socket
            .connect(server_addr)
            .await
            .map_err(|e| network_error(format!("failed to connect: {}", e)))?;

        let exchange = async {
            let bytes_sent = socket
                .send(message_bytes)
                .await
                .map_err(|e| network_error(format!("failed to send query: {}", e)))?;

            debug!(server = %server_addr, bytes_sent = bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];
            let bytes_received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| network_error(format!("failed to receive response: {}", e)))?;
            recv_buf.truncate(bytes_received);

            debug!(
                server = %server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            Ok::<Bytes, DomainError>(Bytes::from(recv_buf))
        };

        tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| network_error(format!("timed out after {:?}", timeout)))?
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        candidates: &[IpAddr],
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut last_error = String::from("no candidate servers");

        for (index, server) in candidates.iter().enumerate() {
            let server_addr = SocketAddr::new(*server, self.port);

            match self.exchange(server_addr, message_bytes, timeout).await {
                Ok(bytes) => {
                    return Ok(TransportResponse {
                        bytes,
                        server: *server,
                    })
                }
                Err(e) => {
                    if index + 1 < candidates.len() {
                        warn!(
                            server = %server_addr,
                            error = %e,
                            remaining = candidates.len() - index - 1,
                            "Failing over to next candidate server"
                        );
                    } else {
                        warn!(server = %server_addr, error = %e, "Last candidate server failed");
                    }
                    last_error = e.to_string();
                }
            }
        }

        Err(DomainError::AllServersUnreachable {
            attempted: candidates.len(),
            last_error,
        })
    }
}
