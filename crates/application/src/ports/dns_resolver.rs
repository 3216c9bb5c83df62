use async_trait::async_trait;
use ferrous_resolve_domain::{DnsQuery, DomainError, ResolvedValue};
use std::net::IpAddr;
use std::sync::{Arc, LazyLock};

pub static EMPTY_CNAME_CHAIN: LazyLock<Arc<[Arc<str>]>> = LazyLock::new(|| Arc::from([]));

/// Successful outcome of one top-level resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    pub value: ResolvedValue,
    /// Aliases followed on the way to `value`, in the order they were met.
    pub cname_chain: Arc<[Arc<str>]>,
    /// Server that returned the authoritative answer.
    pub authority: Option<IpAddr>,
    /// Referrals followed by the resolution that produced `value`.
    pub hops: u8,
}

impl DnsResolution {
    pub fn new(value: ResolvedValue) -> Self {
        Self {
            value,
            cname_chain: Arc::clone(&EMPTY_CNAME_CHAIN),
            authority: None,
            hops: 0,
        }
    }

    pub fn with_authority(mut self, server: IpAddr, hops: u8) -> Self {
        self.authority = Some(server);
        self.hops = hops;
        self
    }

    /// Prepends `alias` to the chain; used when unwinding a CNAME follow-up.
    pub fn behind_alias(mut self, alias: Arc<str>) -> Self {
        let mut chain = Vec::with_capacity(self.cname_chain.len() + 1);
        chain.push(alias);
        chain.extend(self.cname_chain.iter().cloned());
        self.cname_chain = Arc::from(chain);
        self
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_alias_chain_keeps_order() {
        let resolution = DnsResolution::new(ResolvedValue::Ipv4(Ipv4Addr::new(192, 0, 2, 1)))
            .behind_alias(Arc::from("cdn.example.net."))
            .behind_alias(Arc::from("www.example.com."));

        let chain: Vec<&str> = resolution.cname_chain.iter().map(|n| &**n).collect();
        assert_eq!(chain, vec!["www.example.com.", "cdn.example.net."]);
    }
}
