pub mod dns_resolver;

pub use dns_resolver::{DnsResolution, DnsResolver, EMPTY_CNAME_CHAIN};
