use crate::dns_record::{names_equal, RecordClass, RecordType, ResourceRecord};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    InverseQuery,
    Status,
    Notify,
    Update,
    Other(u8),
}

impl Opcode {
    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::InverseQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Other(code) => *code & 0x0F,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => Opcode::Query,
            1 => Opcode::InverseQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(code) => *code & 0x0F,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }

    /// Codes that say the server could not or would not answer.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            ResponseCode::FormErr
                | ResponseCode::ServFail
                | ResponseCode::NotImp
                | ResponseCode::Refused
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Fully qualified, dot-terminated
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: RecordClass::IN,
        }
    }

    /// Whether a response's echoed question refers to the same lookup.
    pub fn matches(&self, other: &Question) -> bool {
        self.record_type == other.record_type
            && self.class == other.class
            && names_equal(&self.name, &other.name)
    }
}

/// Decoded DNS message. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u16,
    pub is_response: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub rcode: ResponseCode,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Single-question iterative query (RD clear).
    pub fn query(id: u16, question: Question) -> Self {
        Self {
            id,
            is_response: false,
            opcode: Opcode::Query,
            authoritative: false,
            truncated: false,
            recursion_desired: false,
            recursion_available: false,
            rcode: ResponseCode::NoError,
            questions: vec![question],
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// Empty response skeleton answering `query`.
    pub fn response_to(query: &Message) -> Self {
        Self {
            is_response: true,
            questions: query.questions.clone(),
            ..Self::query(query.id, Question::new(".", RecordType::A))
        }
    }

    pub fn with_authoritative(mut self, authoritative: bool) -> Self {
        self.authoritative = authoritative;
        self
    }

    pub fn with_rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn with_answer(mut self, record: ResourceRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn with_authority(mut self, record: ResourceRecord) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn with_additional(mut self, record: ResourceRecord) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }
}
