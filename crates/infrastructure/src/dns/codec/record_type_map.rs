use ferrous_resolve_domain::{DomainError, Opcode, RecordClass, RecordType, ResponseCode};
use hickory_proto::op::{OpCode, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

/// Maps between domain codes and their `hickory-proto` counterparts.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::OPT => HickoryRecordType::OPT,
            RecordType::Unknown(code) => HickoryRecordType::from(*code),
        }
    }

    /// Types without a dedicated domain variant keep their numeric code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::AAAA => RecordType::AAAA,
            other => RecordType::from_u16(u16::from(other)),
        }
    }

    pub fn class_to_hickory(class: RecordClass) -> Result<DNSClass, DomainError> {
        match class.to_u16() {
            1 => Ok(DNSClass::IN),
            3 => Ok(DNSClass::CH),
            4 => Ok(DNSClass::HS),
            254 => Ok(DNSClass::NONE),
            255 => Ok(DNSClass::ANY),
            code => Err(DomainError::ProtocolError(format!(
                "cannot encode record class {}",
                code
            ))),
        }
    }

    pub fn class_from_hickory(class: DNSClass) -> RecordClass {
        RecordClass::from_u16(u16::from(class))
    }

    pub fn rcode_to_hickory(rcode: ResponseCode) -> HickoryResponseCode {
        match rcode {
            ResponseCode::NoError => HickoryResponseCode::NoError,
            ResponseCode::FormErr => HickoryResponseCode::FormErr,
            ResponseCode::ServFail => HickoryResponseCode::ServFail,
            ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
            ResponseCode::NotImp => HickoryResponseCode::NotImp,
            ResponseCode::Refused => HickoryResponseCode::Refused,
            ResponseCode::Other(code) => HickoryResponseCode::Unknown(u16::from(code)),
        }
    }

    /// Only the four header bits are kept; extended codes fold into `Other`.
    pub fn rcode_from_hickory(rcode: HickoryResponseCode) -> ResponseCode {
        match rcode {
            HickoryResponseCode::NoError => ResponseCode::NoError,
            HickoryResponseCode::FormErr => ResponseCode::FormErr,
            HickoryResponseCode::ServFail => ResponseCode::ServFail,
            HickoryResponseCode::NXDomain => ResponseCode::NXDomain,
            HickoryResponseCode::NotImp => ResponseCode::NotImp,
            HickoryResponseCode::Refused => ResponseCode::Refused,
            other => ResponseCode::from_u8((u16::from(other) & 0x0F) as u8),
        }
    }

    pub fn opcode_to_hickory(opcode: Opcode) -> Result<OpCode, DomainError> {
        match opcode {
            Opcode::Query => Ok(OpCode::Query),
            Opcode::Status => Ok(OpCode::Status),
            Opcode::Notify => Ok(OpCode::Notify),
            Opcode::Update => Ok(OpCode::Update),
            other => Err(DomainError::ProtocolError(format!(
                "cannot encode opcode {}",
                other.to_u8()
            ))),
        }
    }

    pub fn opcode_from_hickory(opcode: OpCode) -> Opcode {
        Opcode::from_u8(u8::from(opcode))
    }
}
