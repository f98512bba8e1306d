#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Run-time describable in-memory layout for protobuf-style messages.
//!
//! A message instance is a fixed-size byte region. The leading
//! `set_flags_bytes` bytes hold one presence bit per field, the rest hold the
//! field values at offsets fixed when the [`StructDefinition`] was laid out.
//! The same memory can therefore be read two ways:
//! - **Fast path**: a native `#[repr(C)]` struct emitted by a code generator
//!   that reproduces the layout exactly.
//! - **Reflection path**: a [`FieldDescriptor`] looked up by name or number,
//!   fed to the accessors in [`access`], [`presence`] and [`reflect`].
//!
//! # Layout contract
//!
//! - Values use host endianness and native alignment. The format is not an
//!   interchange format; use the wire encoding for that.
//! - Bit `i` of the presence bitset is bit `i % 8` of byte `i / 8`.
//! - Required fields own presence bits `0..num_required_fields`, which is what
//!   makes [`presence::all_required_fields_set`] a handful of byte compares.
//!
//! # Safety contract
//!
//! Nothing in [`access`], [`presence`], [`reflect`] or [`views`] checks
//! bounds, types or presence. Passing a descriptor from one definition with a
//! buffer of another, reading a field through the wrong type, or indexing a
//! view past its length is undefined behavior.
//!
//! This crate never allocates or frees the memory referenced by string,
//! array or sub-message pointers. [`InstanceBuf`] is offered as a convenient
//! owner for instance bytes, but any allocator or arena works.
//!
//! # Concurrency
//!
//! [`StructDefinition`] is immutable after construction and can be shared
//! across threads freely. Instance buffers are not synchronized: presence
//! updates are plain read-modify-write byte operations, so a buffer must only
//! be mutated by one thread at a time. Serializing access is the caller's job.

pub mod access;
pub mod colors;
pub mod definition;
pub mod dump;
pub mod error;
pub mod instance;
pub mod presence;
pub mod reflect;
pub mod schema;
pub mod value_type;
pub mod views;

mod trace;

#[cfg(test)]
mod access_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod schema_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod value_type_tests;

pub use access::{FieldType, Primitive};
pub use colors::Colors;
pub use definition::{FieldDescriptor, Label, LayoutBuilder, StructDefinition};
pub use dump::{dump, dump_field};
pub use error::{DefinitionError, ReflectError, SchemaError};
pub use instance::InstanceBuf;
pub use reflect::Value;
pub use schema::{RawField, RawMessage, RawSchema, load_schema, parse_schema};
pub use value_type::ValueType;
pub use views::{
    Array, BoolArray, DoubleArray, FloatArray, Int32Array, Int64Array, PbString, PrimitiveArray,
    StringArray, StructArray, UInt32Array, UInt64Array,
};
