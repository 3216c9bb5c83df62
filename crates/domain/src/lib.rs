//! Ferrous Resolve Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolved_value;
pub mod server_set;
pub mod validators;

pub use config::{
    CliOverrides, Config, ConfigError, ResolverConfig, DEFAULT_MAX_HOPS, DEFAULT_MAX_NESTING_DEPTH,
};
pub use dns_message::{Message, Opcode, Question, ResponseCode};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord};
pub use errors::{DomainError, ServerFailureReason};
pub use resolved_value::ResolvedValue;
pub use server_set::ServerCandidateSet;
