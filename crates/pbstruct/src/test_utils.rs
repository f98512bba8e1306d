//! Shared definitions for tests.

use crate::definition::{FieldDescriptor, Label, LayoutBuilder, StructDefinition};
use crate::value_type::ValueType;

/// A small message mixing required, optional and repeated fields.
///
/// On 64-bit hosts: one flag byte, `name`@8, `email`@16, `scores`@24,
/// `ratio`@32, `id`@40, `active`@44, size 48.
pub fn person() -> StructDefinition {
    LayoutBuilder::new("Person")
        .field("id", 1, ValueType::Int32, Label::Required)
        .field("name", 2, ValueType::String, Label::Required)
        .field("email", 3, ValueType::String, Label::Optional)
        .field("scores", 4, ValueType::Int32, Label::Repeated)
        .field("ratio", 5, ValueType::Double, Label::Optional)
        .field("active", 6, ValueType::Bool, Label::Optional)
        .build()
        .unwrap()
}

/// One optional field per storage shape.
pub fn every_type() -> StructDefinition {
    LayoutBuilder::new("EveryType")
        .field("f_double", 1, ValueType::Double, Label::Optional)
        .field("f_float", 2, ValueType::Float, Label::Optional)
        .field("f_int32", 3, ValueType::Int32, Label::Optional)
        .field("f_int64", 4, ValueType::Int64, Label::Optional)
        .field("f_uint32", 5, ValueType::UInt32, Label::Optional)
        .field("f_uint64", 6, ValueType::UInt64, Label::Optional)
        .field("f_bool", 7, ValueType::Bool, Label::Optional)
        .field("f_string", 8, ValueType::String, Label::Optional)
        .field("f_bytes", 9, ValueType::Bytes, Label::Optional)
        .field("f_message", 10, ValueType::Message, Label::Optional)
        .field("f_doubles", 11, ValueType::Double, Label::Repeated)
        .build()
        .unwrap()
}

/// `required` required int32 fields followed by `optional` optional ones.
pub fn with_required(required: usize, optional: usize) -> StructDefinition {
    let mut builder = LayoutBuilder::new(format!("Required{required}"));
    for i in 0..required {
        builder.push_field(format!("r{i}"), i as u32 + 1, ValueType::Int32, Label::Required);
    }
    for i in 0..optional {
        let number = (required + i) as u32 + 1;
        builder.push_field(format!("o{i}"), number, ValueType::Int32, Label::Optional);
    }
    builder.build().unwrap()
}

/// Required int32 field with an explicit location.
pub fn required_i32(number: u32, byte_offset: isize, bit: u32) -> FieldDescriptor {
    FieldDescriptor::new(
        number,
        format!("r{number}"),
        ValueType::Int32,
        Label::Required,
        byte_offset,
        bit,
    )
}
