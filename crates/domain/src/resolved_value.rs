use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Caller-facing representation of a resolved record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// NS or CNAME target, fully qualified.
    Name(Arc<str>),
    Text(String),
}

impl ResolvedValue {
    pub fn as_name(&self) -> Option<&Arc<str>> {
        match self {
            ResolvedValue::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Ipv4(addr) => write!(f, "{}", addr),
            ResolvedValue::Ipv6(addr) => write!(f, "{}", addr),
            ResolvedValue::Name(name) => f.write_str(name),
            ResolvedValue::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(
            ResolvedValue::Ipv4(Ipv4Addr::new(93, 184, 216, 34)).to_string(),
            "93.184.216.34"
        );
        assert_eq!(
            ResolvedValue::Ipv6("2606:2800:220:1:248:1893:25c8:1946".parse().unwrap())
                .to_string(),
            "2606:2800:220:1:248:1893:25c8:1946"
        );
        assert_eq!(
            ResolvedValue::Name(Arc::from("ns1.example.com.")).to_string(),
            "ns1.example.com."
        );
        assert_eq!(
            ResolvedValue::Text("v=spf1 -all".to_string()).to_string(),
            "v=spf1 -all"
        );
    }
}
