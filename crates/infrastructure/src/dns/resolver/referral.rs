use ferrous_resolve_domain::dns_record::names_equal;
use ferrous_resolve_domain::{Message, RecordData, ServerCandidateSet};
use std::net::IpAddr;
use std::sync::Arc;

/// Nameserver names delegated to by the authority section, deduplicated
/// case-insensitively and kept in message order.
pub fn nameserver_names(message: &Message) -> Vec<Arc<str>> {
    let mut names: Vec<Arc<str>> = Vec::new();
    for record in &message.authorities {
        if let RecordData::NS(name) = &record.data {
            if !names.iter().any(|known| names_equal(known, name)) {
                names.push(Arc::clone(name));
            }
        }
    }
    names
}

/// Glue `A` addresses from the additional section for the given
/// nameservers, in nameserver order.
pub fn glue_addresses(message: &Message, nameservers: &[Arc<str>]) -> ServerCandidateSet {
    let mut glue = ServerCandidateSet::new();
    for nameserver in nameservers {
        for record in &message.additionals {
            if let Some(addr) = record.ipv4() {
                if record.is_owned_by(nameserver) {
                    glue.push(IpAddr::V4(addr));
                }
            }
        }
    }
    glue
}
