use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server reacts to each datagram.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Authoritative answer echoing the question, with one A record.
    Answer(Ipv4Addr),
    /// Reply with these bytes regardless of the query.
    Raw(Vec<u8>),
    /// Read the query and never answer.
    Silent,
}

/// Local UDP DNS server for transport tests.
///
/// Responses are assembled from raw wire bytes so the tests do not depend on
/// the encoder under test.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts a server on 127.0.0.1 with an OS-assigned port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        Self::start_on(IpAddr::V4(Ipv4Addr::LOCALHOST), 0, behavior).await
    }

    /// Starts a server on a specific loopback address and port.
    pub async fn start_on(
        ip: IpAddr,
        port: u16,
        behavior: MockBehavior,
    ) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::new(ip, port)).await?;
        let local_addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            let response = match &behavior {
                                MockBehavior::Answer(addr) => {
                                    Self::build_answer(&buf[..len], *addr)
                                }
                                MockBehavior::Raw(bytes) => bytes.clone(),
                                MockBehavior::Silent => continue,
                            };
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Authoritative response: query header and question echoed, one A
    /// record whose owner is a pointer to the question name.
    pub fn build_answer(query: &[u8], addr: Ipv4Addr) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]); // Transaction ID

        response.push(0x84); // QR=1, Opcode=0, AA=1, TC=0, RD=0
        response.push(0x00); // RA=0, Z=0, RCODE=0

        response.extend_from_slice(&query[4..6]); // Questions (from query)
        response.extend_from_slice(&[0x00, 0x01]); // Answers: 1
        response.extend_from_slice(&[0x00, 0x00]); // Authority: 0
        response.extend_from_slice(&[0x00, 0x00]); // Additional: 0

        response.extend_from_slice(&query[12..]);

        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length: 4 bytes
        ]);
        response.extend_from_slice(&addr.octets());

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
