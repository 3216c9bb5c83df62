use serde::{Deserialize, Serialize};

/// Referrals a single resolution may follow before giving up.
pub const DEFAULT_MAX_HOPS: u8 = 10;

/// How many resolutions may be stacked inside one another (glue-less
/// nameserver lookups and CNAME follow-ups).
pub const DEFAULT_MAX_NESTING_DEPTH: u8 = 3;

/// Iterative resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root server IPv4 literals, tried in order
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    /// Destination UDP port for every nameserver
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_max_hops")]
    pub max_hops: u8,

    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            port: default_port(),
            query_timeout: default_query_timeout(),
            max_hops: default_max_hops(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

fn default_root_servers() -> Vec<String> {
    [
        "198.41.0.4",     // a.root-servers.net
        "170.247.170.2",  // b.root-servers.net
        "192.33.4.12",    // c.root-servers.net
        "199.7.91.13",    // d.root-servers.net
        "192.203.230.10", // e.root-servers.net
        "192.5.5.241",    // f.root-servers.net
        "192.112.36.4",   // g.root-servers.net
        "198.97.190.53",  // h.root-servers.net
        "192.36.148.17",  // i.root-servers.net
        "192.58.128.30",  // j.root-servers.net
        "193.0.14.129",   // k.root-servers.net
        "199.7.83.42",    // l.root-servers.net
        "202.12.27.33",   // m.root-servers.net
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_max_hops() -> u8 {
    DEFAULT_MAX_HOPS
}

fn default_max_nesting_depth() -> u8 {
    DEFAULT_MAX_NESTING_DEPTH
}
