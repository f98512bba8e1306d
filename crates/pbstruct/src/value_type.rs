//! Value types a field can hold.
//!
//! The value type fixes how many bytes a field's storage takes and how the
//! accessors reinterpret them. Reference kinds store a pointer; the bytes
//! behind it are owned elsewhere.

use std::mem::{align_of, size_of};

use crate::views::PbString;

/// Declared type of a field (the element type, for repeated fields).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ValueType {
    /// IEEE 754 binary64.
    Double = 0,
    /// IEEE 754 binary32.
    Float = 1,
    Int32 = 2,
    Int64 = 3,
    UInt32 = 4,
    UInt64 = 5,
    Bool = 6,
    /// UTF-8 text, stored as `*mut PbString`.
    String = 7,
    /// Opaque bytes, stored as `*mut PbString`.
    Bytes = 8,
    /// Nested message, stored as a pointer to its instance bytes.
    Message = 9,
}

impl ValueType {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Double),
            1 => Some(Self::Float),
            2 => Some(Self::Int32),
            3 => Some(Self::Int64),
            4 => Some(Self::UInt32),
            5 => Some(Self::UInt64),
            6 => Some(Self::Bool),
            7 => Some(Self::String),
            8 => Some(Self::Bytes),
            9 => Some(Self::Message),
            _ => None,
        }
    }

    /// Schema spelling of the type (`"int32"`, `"message"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Message => "message",
        }
    }

    /// Whether the value is stored inline (numbers and bools).
    pub fn is_scalar(self) -> bool {
        !self.is_reference()
    }

    /// Whether the value is stored as a pointer to external memory.
    pub fn is_reference(self) -> bool {
        matches!(self, Self::String | Self::Bytes | Self::Message)
    }

    /// Bytes occupied by one value of this type inside a struct or array.
    pub fn size(self) -> usize {
        match self {
            Self::Double => size_of::<f64>(),
            Self::Float => size_of::<f32>(),
            Self::Int32 => size_of::<i32>(),
            Self::Int64 => size_of::<i64>(),
            Self::UInt32 => size_of::<u32>(),
            Self::UInt64 => size_of::<u64>(),
            Self::Bool => size_of::<bool>(),
            Self::String | Self::Bytes => size_of::<*mut PbString>(),
            Self::Message => size_of::<*mut u8>(),
        }
    }

    /// Required alignment of one value of this type.
    pub fn align(self) -> usize {
        match self {
            Self::Double => align_of::<f64>(),
            Self::Float => align_of::<f32>(),
            Self::Int32 => align_of::<i32>(),
            Self::Int64 => align_of::<i64>(),
            Self::UInt32 => align_of::<u32>(),
            Self::UInt64 => align_of::<u64>(),
            Self::Bool => align_of::<bool>(),
            Self::String | Self::Bytes => align_of::<*mut PbString>(),
            Self::Message => align_of::<*mut u8>(),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
