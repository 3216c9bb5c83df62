use crate::dns_record::RecordType;
use std::fmt;
use thiserror::Error;

/// Why an iterative resolution gave up without an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerFailureReason {
    HopLimitExceeded { max_hops: u8 },
    DelegationLoop,
    NoUsableNameservers,
    NestingLimitExceeded { max_depth: u8 },
    ServersExhausted { last_error: String },
}

impl fmt::Display for ServerFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HopLimitExceeded { max_hops } => {
                write!(f, "referral budget of {} hops exhausted", max_hops)
            }
            Self::DelegationLoop => write!(f, "delegation loop detected"),
            Self::NoUsableNameservers => write!(f, "no usable nameserver addresses"),
            Self::NestingLimitExceeded { max_depth } => {
                write!(f, "nested lookup depth {} exceeded", max_depth)
            }
            Self::ServersExhausted { last_error } => {
                write!(f, "every candidate server failed ({})", last_error)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Network error talking to {server}: {reason}")]
    NetworkError { server: String, reason: String },

    #[error("All {attempted} candidate servers are unreachable: {last_error}")]
    AllServersUnreachable { attempted: usize, last_error: String },

    #[error("Malformed DNS response: {0}")]
    ProtocolError(String),

    #[error("{name} does not exist (NXDOMAIN)")]
    NameError { name: String },

    #[error("Resolution of {name} failed: {reason}")]
    ServerFailure {
        name: String,
        reason: ServerFailureReason,
    },

    #[error("Unsupported record type {0} (supported: A, NS, CNAME, TXT, AAAA)")]
    UnsupportedType(RecordType),

    #[error("{name} exists but has no {record_type} records")]
    NoData {
        name: String,
        record_type: RecordType,
    },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn server_failure(name: impl Into<String>, reason: ServerFailureReason) -> Self {
        Self::ServerFailure {
            name: name.into(),
            reason,
        }
    }

    pub fn is_name_error(&self) -> bool {
        matches!(self, Self::NameError { .. })
    }

    pub fn is_server_failure(&self) -> bool {
        matches!(self, Self::ServerFailure { .. })
    }

    /// Errors that make a single server unusable for the current hop.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::AllServersUnreachable { .. } | Self::ProtocolError(_)
        )
    }
}
