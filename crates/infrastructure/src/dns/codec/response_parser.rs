use super::record_type_map::RecordTypeMapper;
use bytes::Bytes;
use ferrous_resolve_domain::{DomainError, Message, Question, RecordData, ResourceRecord};
use hickory_proto::op::{Message as HickoryMessage, MessageType, Query};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::sync::Arc;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes any DNS message. Fails with `ProtocolError` on a short header,
    /// a field that overruns the buffer or a compression pointer that does
    /// not point backwards; nothing partially decoded is ever returned.
    pub fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        let wire = HickoryMessage::from_vec(bytes).map_err(|e| {
            DomainError::ProtocolError(format!("Failed to parse DNS response: {}", e))
        })?;

        let message = Message {
            id: wire.id(),
            is_response: wire.message_type() == MessageType::Response,
            opcode: RecordTypeMapper::opcode_from_hickory(wire.op_code()),
            authoritative: wire.authoritative(),
            truncated: wire.truncated(),
            recursion_desired: wire.recursion_desired(),
            recursion_available: wire.recursion_available(),
            rcode: RecordTypeMapper::rcode_from_hickory(wire.response_code()),
            questions: wire.queries().iter().map(Self::question).collect(),
            answers: Self::section(wire.answers())?,
            authorities: Self::section(wire.name_servers())?,
            additionals: Self::section(wire.additionals())?,
        };

        debug!(
            id = message.id,
            rcode = message.rcode.as_str(),
            answers = message.answers.len(),
            authorities = message.authorities.len(),
            additionals = message.additionals.len(),
            "DNS message decoded"
        );

        Ok(message)
    }

    /// Decodes `bytes` and checks that it answers `query`: same transaction
    /// id, `QR` set, and the same question section.
    pub fn parse_response(bytes: &[u8], query: &Message) -> Result<Message, DomainError> {
        let message = Self::parse(bytes)?;

        if message.id != query.id {
            return Err(DomainError::ProtocolError(format!(
                "transaction id mismatch: sent {:#06x}, received {:#06x}",
                query.id, message.id
            )));
        }
        if !message.is_response {
            return Err(DomainError::ProtocolError(
                "reply does not have the QR bit set".to_string(),
            ));
        }
        if message.questions.len() != query.questions.len() {
            return Err(DomainError::ProtocolError(format!(
                "reply carries {} questions, query sent {}",
                message.questions.len(),
                query.questions.len()
            )));
        }
        if let Some((sent, echoed)) = query
            .questions
            .iter()
            .zip(&message.questions)
            .find(|(sent, echoed)| !sent.matches(echoed))
        {
            return Err(DomainError::ProtocolError(format!(
                "reply answers {} {} instead of {} {}",
                echoed.name, echoed.record_type, sent.name, sent.record_type
            )));
        }

        Ok(message)
    }

    fn question(query: &Query) -> Question {
        Question {
            name: name_of(query.name()),
            record_type: RecordTypeMapper::from_hickory(query.query_type()),
            class: RecordTypeMapper::class_from_hickory(query.query_class()),
        }
    }

    fn section(records: &[Record]) -> Result<Vec<ResourceRecord>, DomainError> {
        records.iter().map(Self::record).collect()
    }

    fn record(record: &Record) -> Result<ResourceRecord, DomainError> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::NS(ns) => RecordData::NS(name_of(&ns.0)),
            RData::CNAME(canonical) => RecordData::CNAME(name_of(&canonical.0)),
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|segment| Bytes::copy_from_slice(segment))
                    .collect(),
            ),
            other => RecordData::Unknown(Bytes::from(other.to_bytes().map_err(|e| {
                DomainError::ProtocolError(format!(
                    "record data for {} cannot be re-encoded: {}",
                    record.name(),
                    e
                ))
            })?)),
        };

        Ok(ResourceRecord {
            name: name_of(record.name()),
            record_type: RecordTypeMapper::from_hickory(record.record_type()),
            class: RecordTypeMapper::class_from_hickory(record.dns_class()),
            ttl: record.ttl(),
            data,
        })
    }
}

/// Presentation form, fully qualified, case preserved.
fn name_of(name: &Name) -> Arc<str> {
    Arc::from(name.to_ascii())
}
