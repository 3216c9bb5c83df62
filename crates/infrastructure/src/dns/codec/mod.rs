//! DNS wire codec
//!
//! Wire encoding and decoding are delegated to `hickory-proto`. This module
//! maps between its message model and the domain `Message`, keeping typed
//! payloads for A, AAAA, NS, CNAME and TXT and carrying every other record
//! type as opaque bytes.

pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;
mod transaction_id;

pub use message_builder::{MessageBuilder, MAX_UDP_MESSAGE_SIZE};
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;
pub use transaction_id::random_transaction_id;
