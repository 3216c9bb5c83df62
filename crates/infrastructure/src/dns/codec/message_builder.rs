//! DNS Message Builder
//!
//! Serializes queries (and, for test servers, responses) into wire format
//! with `hickory-proto`. Messages never exceed the classic 512-byte UDP
//! limit since no extended-size signaling is sent.

use super::record_type_map::RecordTypeMapper;
use super::transaction_id::random_transaction_id;
use bytes::Bytes;
use ferrous_resolve_domain::{DomainError, Message, Question, RecordData, ResourceRecord};
use hickory_proto::op::{Message as HickoryMessage, MessageType, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, NULL, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

/// Builds DNS messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an iterative query for `question` with a fresh random id.
    ///
    /// Returns the message alongside its bytes so the caller can check the
    /// response against what was actually sent.
    pub fn build_query(question: &Question) -> Result<(Message, Bytes), DomainError> {
        let id = random_transaction_id()?;
        let message = Message::query(id, question.clone());
        let bytes = Self::encode(&message)?;
        Ok((message, bytes))
    }

    /// Build a query with a caller-chosen transaction id.
    pub fn build_query_with_id(question: &Question, id: u16) -> Result<Bytes, DomainError> {
        Self::encode(&Message::query(id, question.clone()))
    }

    pub fn encode(message: &Message) -> Result<Bytes, DomainError> {
        let message_type = if message.is_response {
            MessageType::Response
        } else {
            MessageType::Query
        };
        let op_code = RecordTypeMapper::opcode_to_hickory(message.opcode)?;

        let mut wire = HickoryMessage::new(message.id, message_type, op_code);
        wire.set_authoritative(message.authoritative);
        wire.set_truncated(message.truncated);
        wire.set_recursion_desired(message.recursion_desired);
        wire.set_recursion_available(message.recursion_available);
        wire.set_response_code(RecordTypeMapper::rcode_to_hickory(message.rcode));

        for question in &message.questions {
            wire.add_query(Self::to_query(question)?);
        }
        for record in &message.answers {
            wire.add_answer(Self::to_record(record)?);
        }
        for record in &message.authorities {
            wire.add_name_server(Self::to_record(record)?);
        }
        for record in &message.additionals {
            wire.add_additional(Self::to_record(record)?);
        }

        Self::serialize_message(&wire)
    }

    fn to_query(question: &Question) -> Result<Query, DomainError> {
        let mut query = Query::new();
        query.set_name(to_name(&question.name)?);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.record_type));
        query.set_query_class(RecordTypeMapper::class_to_hickory(question.class)?);
        Ok(query)
    }

    fn to_record(record: &ResourceRecord) -> Result<Record, DomainError> {
        let rdata = match &record.data {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::AAAA(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::NS(target) => RData::NS(NS(to_name(target)?)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(to_name(target)?)),
            RecordData::TXT(segments) => {
                if let Some(segment) = segments.iter().find(|s| s.len() > 255) {
                    return Err(DomainError::ProtocolError(format!(
                        "TXT segment of {} bytes exceeds 255",
                        segment.len()
                    )));
                }
                RData::TXT(TXT::from_bytes(
                    segments.iter().map(|s| s.as_ref()).collect(),
                ))
            }
            RecordData::Unknown(raw) => RData::Unknown {
                code: RecordTypeMapper::to_hickory(&record.record_type),
                rdata: if raw.is_empty() {
                    NULL::new()
                } else {
                    NULL::with(raw.to_vec())
                },
            },
        };

        let mut wire = Record::from_rdata(to_name(&record.name)?, record.ttl, rdata);
        wire.set_dns_class(RecordTypeMapper::class_to_hickory(record.class)?);
        Ok(wire)
    }

    fn serialize_message(message: &HickoryMessage) -> Result<Bytes, DomainError> {
        let mut buf = Vec::with_capacity(MAX_UDP_MESSAGE_SIZE);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::ProtocolError(format!("Failed to serialize DNS message: {}", e))
        })?;

        if buf.len() > MAX_UDP_MESSAGE_SIZE {
            return Err(DomainError::ProtocolError(format!(
                "encoded message is {} bytes, above the {}-byte UDP limit",
                buf.len(),
                MAX_UDP_MESSAGE_SIZE
            )));
        }

        Ok(Bytes::from(buf))
    }
}

fn to_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}
