use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    SRV,
    OPT,
    /// Any type code without a dedicated variant; carried opaquely.
    Unknown(u16),
}

impl RecordType {
    /// Types the resolver can query for and format.
    pub const SUPPORTED: [RecordType; 5] = [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::TXT,
        RecordType::AAAA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::AAAA => "AAAA",
            RecordType::SRV => "SRV",
            RecordType::OPT => "OPT",
            RecordType::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::OPT => 41,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            41 => RecordType::OPT,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }

    /// Types whose answer is a domain name rather than an address or text.
    pub fn is_name_valued(&self) -> bool {
        matches!(self, RecordType::NS | RecordType::CNAME)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "SOA" => Ok(RecordType::SOA),
            "PTR" => Ok(RecordType::PTR),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            "SRV" => Ok(RecordType::SRV),
            "OPT" => Ok(RecordType::OPT),
            _ => upper
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_u16)
                .ok_or_else(|| format!("Unknown record type: {}", s)),
        }
    }
}
