use super::validators::normalize_domain_name;
use super::{DomainError, RecordType};
use std::sync::Arc;

/// DNS query (domain + record type).
/// Uses `Arc<str>` for zero-cost cloning into nested resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a query for a user-supplied name, making it fully qualified.
    pub fn parse(domain: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let fqdn = normalize_domain_name(domain)?;
        Ok(Self::new(fqdn, record_type))
    }
}
