use ferrous_resolve_domain::dns_record::names_equal;
use ferrous_resolve_domain::{DomainError, RecordData, RecordType, ResolvedValue, ResourceRecord};
use std::sync::Arc;

/// What an authoritative answer section yields for a requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Value(ResolvedValue),
    /// Only an alias to another name was present; resolve the target next.
    Alias(Arc<str>),
}

pub struct RecordExtractor;

impl RecordExtractor {
    /// Rejects types the extractor cannot format. Checked before any query
    /// is sent.
    pub fn ensure_supported(record_type: RecordType) -> Result<(), DomainError> {
        if record_type.is_supported() {
            Ok(())
        } else {
            Err(DomainError::UnsupportedType(record_type))
        }
    }

    /// Picks the first answer of `record_type`, in answer order. Without one,
    /// a CNAME pointing away from `name` is reported as an alias.
    pub fn extract(
        answers: &[ResourceRecord],
        name: &str,
        record_type: RecordType,
    ) -> Option<Extracted> {
        if let Some(value) = answers
            .iter()
            .filter(|r| r.record_type == record_type)
            .find_map(|r| Self::format(&r.data))
        {
            return Some(Extracted::Value(value));
        }

        answers.iter().find_map(|record| match &record.data {
            RecordData::CNAME(target) if !names_equal(target, name) => {
                Some(Extracted::Alias(Arc::clone(target)))
            }
            _ => None,
        })
    }

    fn format(data: &RecordData) -> Option<ResolvedValue> {
        match data {
            RecordData::A(addr) => Some(ResolvedValue::Ipv4(*addr)),
            RecordData::AAAA(addr) => Some(ResolvedValue::Ipv6(*addr)),
            RecordData::NS(name) | RecordData::CNAME(name) => {
                Some(ResolvedValue::Name(Arc::clone(name)))
            }
            RecordData::TXT(segments) => {
                let text = segments
                    .iter()
                    .map(|s| String::from_utf8_lossy(s))
                    .collect::<String>();
                Some(ResolvedValue::Text(text))
            }
            RecordData::Unknown(_) => None,
        }
    }
}
