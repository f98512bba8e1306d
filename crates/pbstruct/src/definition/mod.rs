//! Struct definitions: field descriptors plus the aggregate layout metadata.
//!
//! A [`StructDefinition`] is produced once, usually by [`LayoutBuilder`] or by
//! a code generator, and shared read-only afterwards.

mod field;
mod layout;
mod struct_def;


pub use field::{FieldDescriptor, Label};
pub use layout::LayoutBuilder;
pub use struct_def::StructDefinition;
