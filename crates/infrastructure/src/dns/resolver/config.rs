use ferrous_resolve_domain::{DomainError, ResolverConfig, DEFAULT_MAX_HOPS, DEFAULT_MAX_NESTING_DEPTH};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use crate::dns::transport::udp::DNS_PORT;

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Immutable settings shared by every resolution the engine runs.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Root server addresses, tried in order at the start of each resolution.
    pub root_servers: Arc<[IpAddr]>,

    /// Destination UDP port for every nameserver
    pub port: u16,

    /// Wait for one reply from one candidate
    pub query_timeout: Duration,

    pub max_hops: u8,

    pub max_nesting_depth: u8,
}

impl ResolverSettings {
    pub fn new(root_servers: impl Into<Arc<[IpAddr]>>) -> Self {
        Self {
            root_servers: root_servers.into(),
            port: DNS_PORT,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            max_hops: DEFAULT_MAX_HOPS,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let root_servers = config
            .root_servers
            .iter()
            .map(|s| {
                s.trim().parse::<Ipv4Addr>().map(IpAddr::V4).map_err(|_| {
                    DomainError::InvalidConfiguration(format!(
                        "root server '{}' is not an IPv4 literal",
                        s
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if root_servers.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "at least one root server is required".to_string(),
            ));
        }

        Ok(Self {
            root_servers: Arc::from(root_servers),
            port: config.port,
            query_timeout: Duration::from_millis(config.query_timeout),
            max_hops: config.max_hops,
            max_nesting_depth: config.max_nesting_depth,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_max_hops(mut self, max_hops: u8) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: u8) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}
