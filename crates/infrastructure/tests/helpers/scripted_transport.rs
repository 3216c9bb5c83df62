use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolve_domain::{DomainError, Message, RecordType};
use ferrous_resolve_infrastructure::dns::codec::{MessageBuilder, ResponseParser};
use ferrous_resolve_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = Arc<dyn Fn(&Message) -> Message + Send + Sync>;

/// What a scripted server does with a query.
#[derive(Clone)]
pub enum Reply {
    /// Build a response from the decoded query.
    Message(Responder),
    /// Send these bytes verbatim.
    Raw(Vec<u8>),
    /// Never answer; the transport moves on to the next candidate.
    Silent,
}

impl Reply {
    pub fn with(f: impl Fn(&Message) -> Message + Send + Sync + 'static) -> Self {
        Reply::Message(Arc::new(f))
    }
}

/// One query as seen by a scripted server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub server: IpAddr,
    pub name: String,
    pub record_type: RecordType,
}

/// In-memory transport keyed by `(server address, query name)`.
///
/// Queries are decoded with the real codec and responses are encoded with
/// it, so the engine sees exactly the bytes a network peer would send.
/// Unscripted pairs behave like unreachable servers.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<HashMap<(IpAddr, String), Reply>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, server: IpAddr, name: &str, reply: Reply) -> &Self {
        self.script
            .lock()
            .unwrap()
            .insert((server, name.to_ascii_lowercase()), reply);
        self
    }

    pub fn respond(
        &self,
        server: IpAddr,
        name: &str,
        f: impl Fn(&Message) -> Message + Send + Sync + 'static,
    ) -> &Self {
        self.on(server, name, Reply::with(f))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(name))
            .count()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        candidates: &[IpAddr],
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let query = ResponseParser::parse(message_bytes)?;
        let question = query
            .question()
            .cloned()
            .ok_or_else(|| DomainError::ProtocolError("query without question".into()))?;

        for server in candidates {
            self.calls.lock().unwrap().push(Call {
                server: *server,
                name: question.name.to_string(),
                record_type: question.record_type,
            });

            let reply = self
                .script
                .lock()
                .unwrap()
                .get(&(*server, question.name.to_ascii_lowercase()))
                .cloned();

            let bytes = match reply {
                Some(Reply::Message(respond)) => MessageBuilder::encode(&respond(&query))?,
                Some(Reply::Raw(raw)) => Bytes::from(raw),
                Some(Reply::Silent) | None => continue,
            };

            return Ok(TransportResponse {
                bytes,
                server: *server,
            });
        }

        Err(DomainError::AllServersUnreachable {
            attempted: candidates.len(),
            last_error: "no scripted reply".to_string(),
        })
    }
}
