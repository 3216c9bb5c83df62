use async_trait::async_trait;
use ferrous_resolve_application::ports::{DnsResolution, DnsResolver};
use ferrous_resolve_domain::{DnsQuery, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsResolver
// ============================================================================

type Key = (String, RecordType);

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<Key, Result<DnsResolution, DomainError>>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the outcome for a fully qualified name and type.
    pub async fn set_response(
        &self,
        domain: &str,
        record_type: RecordType,
        outcome: Result<DnsResolution, DomainError>,
    ) {
        self.responses
            .write()
            .await
            .insert((domain.to_ascii_lowercase(), record_type), outcome);
    }

    /// Makes every lookup of `domain` wait before answering.
    pub async fn set_delay(&self, domain: &str, delay: Duration) {
        self.delays
            .write()
            .await
            .insert(domain.to_ascii_lowercase(), delay);
    }

    pub async fn calls(&self) -> Vec<DnsQuery> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.calls.write().await.push(query.clone());

        let domain = query.domain.to_ascii_lowercase();
        let delay = self.delays.read().await.get(&domain).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .await
            .get(&(domain, query.record_type))
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::NameError {
                    name: query.domain.to_string(),
                })
            })
    }
}
