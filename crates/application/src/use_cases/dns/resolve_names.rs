use crate::ports::{DnsResolution, DnsResolver};
use ferrous_resolve_domain::{DnsQuery, DomainError, RecordType, ResolvedValue};
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// A successful lookup plus, for name-valued types, the target's address
/// when annotation was requested and the follow-up lookup succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub resolution: DnsResolution,
    pub target_address: Option<ResolvedValue>,
}

/// Per-name outcome, reported in the order the names were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResolution {
    /// The name exactly as the caller supplied it.
    pub name: String,
    pub outcome: Result<ResolvedName, DomainError>,
}

impl NameResolution {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl fmt::Display for NameResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(resolved) => match &resolved.target_address {
                Some(address) => write!(
                    f,
                    "{},{}, {}",
                    self.name, resolved.resolution.value, address
                ),
                None => write!(f, "{},{}", self.name, resolved.resolution.value),
            },
            Err(e) => write!(f, "{},error: {}", self.name, e),
        }
    }
}

/// Resolves a batch of names of one record type. Every name runs as an
/// independent resolution; they proceed concurrently and share only the
/// resolver.
pub struct ResolveNamesUseCase {
    resolver: Arc<dyn DnsResolver>,
    annotate_targets: bool,
}

impl ResolveNamesUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self {
            resolver,
            annotate_targets: false,
        }
    }

    /// For NS and CNAME lookups, also resolve the returned name's A record.
    pub fn with_target_addresses(mut self, enabled: bool) -> Self {
        self.annotate_targets = enabled;
        self
    }

    pub async fn execute(
        &self,
        names: &[String],
        record_type: RecordType,
    ) -> Result<Vec<NameResolution>, DomainError> {
        if !record_type.is_supported() {
            return Err(DomainError::UnsupportedType(record_type));
        }

        let lookups = names.iter().map(|name| self.resolve_one(name, record_type));
        Ok(join_all(lookups).await)
    }

    async fn resolve_one(&self, name: &str, record_type: RecordType) -> NameResolution {
        let outcome = match DnsQuery::parse(name, record_type) {
            Ok(query) => self.resolve_query(&query).await,
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(resolved) => info!(
                domain = %name,
                record_type = %record_type,
                value = %resolved.resolution.value,
                hops = resolved.resolution.hops,
                "Resolved"
            ),
            Err(e) => info!(
                domain = %name,
                record_type = %record_type,
                error = %e,
                "Resolution failed"
            ),
        }

        NameResolution {
            name: name.to_string(),
            outcome,
        }
    }

    async fn resolve_query(&self, query: &DnsQuery) -> Result<ResolvedName, DomainError> {
        let resolution = self.resolver.resolve(query).await?;

        let target_address = if self.annotate_targets && query.record_type.is_name_valued() {
            match resolution.value.as_name() {
                Some(target) => self.target_address(target).await,
                None => None,
            }
        } else {
            None
        };

        Ok(ResolvedName {
            resolution,
            target_address,
        })
    }

    async fn target_address(&self, target: &Arc<str>) -> Option<ResolvedValue> {
        let query = DnsQuery::new(Arc::clone(target), RecordType::A);
        match self.resolver.resolve(&query).await {
            Ok(resolution) => Some(resolution.value),
            Err(e) => {
                debug!(target = %target, error = %e, "Target address lookup failed");
                None
            }
        }
    }
}
