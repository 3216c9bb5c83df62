use super::config::ResolverSettings;
use super::engine::IterativeResolver;
use crate::dns::transport::{DnsTransport, UdpTransport};
use ferrous_resolve_application::ports::DnsResolver;
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    settings: ResolverSettings,
    transport: Option<Arc<dyn DnsTransport>>,
}

impl ResolverBuilder {
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            settings,
            transport: None,
        }
    }

    /// Replace the UDP transport (test doubles, alternative sockets).
    pub fn with_transport(mut self, transport: Arc<dyn DnsTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Arc<dyn DnsResolver> {
        info!(
            root_servers = self.settings.root_servers.len(),
            port = self.settings.port,
            timeout_ms = self.settings.query_timeout.as_millis() as u64,
            max_hops = self.settings.max_hops,
            max_nesting_depth = self.settings.max_nesting_depth,
            custom_transport = self.transport.is_some(),
            "Building iterative resolver"
        );

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(UdpTransport::with_port(self.settings.port)));

        Arc::new(IterativeResolver::new(transport, self.settings))
    }
}
