pub mod record;
pub mod record_type;

pub use record::{names_equal, RecordClass, RecordData, ResourceRecord};
pub use record_type::RecordType;
