//! Error types.
//!
//! Field access itself has no error path; these cover building definitions,
//! loading schemas and the checked reflection writes.

use std::io;

/// A struct definition whose metadata or layout is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("field `{name}` uses reserved field number 0")]
    ZeroFieldNumber { name: String },
    #[error("field number {number} is used by both `{first}` and `{second}`")]
    DuplicateNumber {
        number: u32,
        first: String,
        second: String,
    },
    #[error("field name `{0}` is declared more than once")]
    DuplicateName(String),
    #[error("field `{name}` has presence mask {mask:#04x}, expected exactly one bit")]
    InvalidMask { name: String, mask: u8 },
    #[error("field `{name}` presence byte {offset} is outside the {set_flags_bytes} flag bytes")]
    PresenceOutOfRange {
        name: String,
        offset: isize,
        set_flags_bytes: usize,
    },
    #[error("presence bit {bit} is shared by `{first}` and `{second}`")]
    SharedPresenceBit {
        bit: u32,
        first: String,
        second: String,
    },
    #[error("{actual} fields are labelled required but the definition declares {declared}")]
    RequiredCountMismatch { declared: usize, actual: usize },
    #[error("required field `{name}` uses presence bit {bit}, outside the required prefix 0..{required}")]
    RequiredBitOutsidePrefix {
        name: String,
        bit: u32,
        required: usize,
    },
    #[error("{set_flags_bytes} flag bytes do not fit in a {size}-byte struct")]
    FlagsExceedSize { set_flags_bytes: usize, size: usize },
    #[error("field `{name}` value at offset {offset} overlaps the presence bytes")]
    ValueOverlapsFlags { name: String, offset: isize },
    #[error("field `{name}` value ends at byte {end}, past the {size}-byte struct")]
    ValueOutOfBounds { name: String, end: isize, size: usize },
    #[error("field `{name}` at offset {offset} is not aligned to {align} bytes")]
    Misaligned {
        name: String,
        offset: isize,
        align: usize,
    },
    #[error("fields `{first}` and `{second}` have overlapping value storage")]
    OverlappingValues { first: String, second: String },
}

/// Failure to load a schema or lay out one of its messages.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unknown message `{0}`")]
    UnknownMessage(String),
    #[error("message `{0}` is declared more than once")]
    DuplicateMessage(String),
    #[error("message `{message}`: {source}")]
    Definition {
        message: String,
        #[source]
        source: DefinitionError,
    },
}

/// A reflective write whose value does not match the field's storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectError {
    #[error("field `{field}` stores {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}
