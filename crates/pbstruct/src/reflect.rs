//! Type-dispatched field access through descriptors.
//!
//! Generic code that only holds a [`FieldDescriptor`] reads and writes
//! fields as [`Value`]s. The value's variant is picked from the descriptor's
//! storage shape, so these calls are as unchecked as the typed accessors:
//! the instance must match the descriptor's definition.

use crate::access::{get, set};
use crate::definition::{FieldDescriptor, StructDefinition};
use crate::error::ReflectError;
use crate::presence::is_set;
use crate::value_type::ValueType;
use crate::views::{Array, PbString};

/// The contents of one field's storage.
///
/// Reference kinds carry the stored pointer, not the data behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Double(f64),
    Float(f32),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Bool(bool),
    String(*mut PbString),
    Bytes(*mut PbString),
    /// Pointer to the sub-struct instance.
    Message(*mut u8),
    /// Storage of a repeated field.
    Array(*mut Array),
}

impl Value {
    /// Storage shape name, matching [`FieldDescriptor::shape_name`].
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Double(_) => ValueType::Double.name(),
            Self::Float(_) => ValueType::Float.name(),
            Self::Int32(_) => ValueType::Int32.name(),
            Self::Int64(_) => ValueType::Int64.name(),
            Self::UInt32(_) => ValueType::UInt32.name(),
            Self::UInt64(_) => ValueType::UInt64.name(),
            Self::Bool(_) => ValueType::Bool.name(),
            Self::String(_) => ValueType::String.name(),
            Self::Bytes(_) => ValueType::Bytes.name(),
            Self::Message(_) => ValueType::Message.name(),
            Self::Array(_) => "array",
        }
    }
}

/// Read the field's storage, whether or not its presence bit is set.
///
/// # Safety
/// `s` must point to a live instance of the definition `f` belongs to, with
/// initialized storage for the field.
pub unsafe fn read(s: *const u8, f: &FieldDescriptor) -> Value {
    // SAFETY: forwarded contract; each arm reads the field's own storage type.
    unsafe {
        if f.is_repeated() {
            return Value::Array(get(s, f));
        }
        match f.value_type {
            ValueType::Double => Value::Double(get(s, f)),
            ValueType::Float => Value::Float(get(s, f)),
            ValueType::Int32 => Value::Int32(get(s, f)),
            ValueType::Int64 => Value::Int64(get(s, f)),
            ValueType::UInt32 => Value::UInt32(get(s, f)),
            ValueType::UInt64 => Value::UInt64(get(s, f)),
            ValueType::Bool => Value::Bool(get(s, f)),
            ValueType::String => Value::String(get(s, f)),
            ValueType::Bytes => Value::Bytes(get(s, f)),
            ValueType::Message => Value::Message(get(s, f)),
        }
    }
}

/// Store `value` in the field. The presence bit is left untouched.
///
/// Fails without writing when the value's shape differs from the field's.
///
/// # Safety
/// `s` must point to a live, writable instance of the definition `f` belongs
/// to, accessed by no other thread.
pub unsafe fn write(s: *mut u8, f: &FieldDescriptor, value: Value) -> Result<(), ReflectError> {
    let expected = f.shape_name();
    let found = value.shape_name();
    if expected != found {
        return Err(ReflectError::TypeMismatch {
            field: f.name.to_string(),
            expected,
            found,
        });
    }

    // SAFETY: forwarded contract; the shape check above matches the storage type.
    unsafe {
        match value {
            Value::Double(v) => set(s, f, v),
            Value::Float(v) => set(s, f, v),
            Value::Int32(v) => set(s, f, v),
            Value::Int64(v) => set(s, f, v),
            Value::UInt32(v) => set(s, f, v),
            Value::UInt64(v) => set(s, f, v),
            Value::Bool(v) => set(s, f, v),
            Value::String(v) | Value::Bytes(v) => set(s, f, v),
            Value::Message(v) => set(s, f, v),
            Value::Array(v) => set(s, f, v),
        }
    }
    Ok(())
}

/// Every present field of `d` with its value, in field number order.
///
/// # Safety
/// Same contract as [`read`], for every field whose presence bit is set.
pub unsafe fn read_set_fields(s: *const u8, d: &StructDefinition) -> Vec<(&FieldDescriptor, Value)> {
    d.fields()
        .iter()
        // SAFETY: forwarded contract; only present fields are read.
        .filter(|f| unsafe { is_set(s, f) })
        .map(|f| (f, unsafe { read(s, f) }))
        .collect()
}
