use ferrous_resolve_domain::{Message, RecordData, ResourceRecord, ResponseCode};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

pub const ROOT_A: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);
pub const ROOT_B: Ipv4Addr = Ipv4Addr::new(170, 247, 170, 2);

pub fn ip(addr: Ipv4Addr) -> IpAddr {
    IpAddr::V4(addr)
}

pub fn a_record(owner: &str, addr: Ipv4Addr) -> ResourceRecord {
    ResourceRecord::new(owner, 300, RecordData::A(addr))
}

pub fn ns_record(zone: &str, nameserver: &str) -> ResourceRecord {
    ResourceRecord::new(zone, 172800, RecordData::NS(Arc::from(nameserver)))
}

pub fn cname_record(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(owner, 300, RecordData::CNAME(Arc::from(target)))
}

/// Non-authoritative delegation of `zone` to `nameservers`, with a glue
/// `A` record for each nameserver that has an address.
pub fn referral(query: &Message, zone: &str, nameservers: &[(&str, Option<Ipv4Addr>)]) -> Message {
    let mut response = Message::response_to(query);
    for (nameserver, glue) in nameservers {
        response = response.with_authority(ns_record(zone, nameserver));
        if let Some(addr) = glue {
            response = response.with_additional(a_record(nameserver, *addr));
        }
    }
    response
}

/// Authoritative answer carrying `records`.
pub fn answer(query: &Message, records: Vec<ResourceRecord>) -> Message {
    records
        .into_iter()
        .fold(Message::response_to(query).with_authoritative(true), |m, r| {
            m.with_answer(r)
        })
}

pub fn nxdomain(query: &Message) -> Message {
    Message::response_to(query)
        .with_authoritative(true)
        .with_rcode(ResponseCode::NXDomain)
}

/// Non-authoritative, nothing in any section.
pub fn empty(query: &Message) -> Message {
    Message::response_to(query)
}

pub fn server_error(query: &Message, rcode: ResponseCode) -> Message {
    Message::response_to(query).with_rcode(rcode)
}
