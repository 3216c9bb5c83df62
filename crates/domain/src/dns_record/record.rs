use super::RecordType;
use bytes::Bytes;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// DNS class. Only INET is meaningful to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    Other(u16),
}

impl RecordClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            other => RecordClass::Other(other),
        }
    }
}

/// Typed record payload, decoded from the wire `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(Arc<str>),
    CNAME(Arc<str>),
    /// The `<character-string>` segments of a TXT record, in wire order.
    TXT(Vec<Bytes>),
    Unknown(Bytes),
}

/// DNS resource record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name, fully qualified
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: RecordClass,
    /// Time to live in seconds
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        let record_type = match &data {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::NS(_) => RecordType::NS,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::Unknown(_) => RecordType::Unknown(0),
        };
        Self {
            name: name.into(),
            record_type,
            class: RecordClass::IN,
            ttl,
            data,
        }
    }

    /// Opaque record of an arbitrary type code.
    pub fn opaque(name: impl Into<Arc<str>>, record_type: RecordType, ttl: u32, raw: Bytes) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: RecordClass::IN,
            ttl,
            data: RecordData::Unknown(raw),
        }
    }

    /// Case-insensitive owner name comparison.
    pub fn is_owned_by(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }

    /// The target name of an NS or CNAME record.
    pub fn target_name(&self) -> Option<&Arc<str>> {
        match &self.data {
            RecordData::NS(name) | RecordData::CNAME(name) => Some(name),
            _ => None,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            _ => None,
        }
    }
}

/// DNS names compare case-insensitively and ignore a trailing root dot.
pub fn names_equal(left: &str, right: &str) -> bool {
    left.trim_end_matches('.')
        .eq_ignore_ascii_case(right.trim_end_matches('.'))
}
