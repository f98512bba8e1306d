//! Layout computation for a list of declared fields.
//!
//! Assigns presence bits and value offsets the way generated code lays out
//! its native structs:
//! - required fields take presence bits `0..r` in declaration order, every
//!   other field takes the following bits, also in declaration order;
//! - the bitset occupies `ceil(n / 8)` leading bytes;
//! - values follow the bitset, placed in order of decreasing alignment
//!   (declaration order among equals), each at a type-aligned offset;
//! - the total size is padded to the largest alignment.

use std::cmp::Reverse;

use super::field::{FieldDescriptor, Label};
use super::struct_def::StructDefinition;
use crate::error::DefinitionError;
use crate::trace::{debug, trace};
use crate::value_type::ValueType;

/// A field declared to the builder, not yet placed.
#[derive(Clone, Debug)]
struct DeclaredField {
    name: String,
    number: u32,
    value_type: ValueType,
    label: Label,
}

impl DeclaredField {
    /// Descriptor with placeholder location, used for its size and alignment.
    fn probe(&self) -> FieldDescriptor {
        FieldDescriptor::new(self.number, "", self.value_type, self.label, 0, 0)
    }
}

/// Builds a [`StructDefinition`] by computing its layout.
#[derive(Clone, Debug)]
pub struct LayoutBuilder {
    name: String,
    fields: Vec<DeclaredField>,
}

impl LayoutBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field. Declaration order decides presence bits and tie-breaks placement.
    pub fn field(
        mut self,
        name: impl Into<String>,
        number: u32,
        value_type: ValueType,
        label: Label,
    ) -> Self {
        self.push_field(name, number, value_type, label);
        self
    }

    /// In-place variant of [`Self::field`].
    pub fn push_field(
        &mut self,
        name: impl Into<String>,
        number: u32,
        value_type: ValueType,
        label: Label,
    ) -> &mut Self {
        self.fields.push(DeclaredField {
            name: name.into(),
            number,
            value_type,
            label,
        });
        self
    }

    /// Compute the layout and assemble the definition.
    ///
    /// Fails only on metadata errors (duplicate or zero numbers, duplicate
    /// names); the computed layout always passes
    /// [`StructDefinition::check_layout`].
    pub fn build(self) -> Result<StructDefinition, DefinitionError> {
        let num_fields = self.fields.len();
        let set_flags_bytes = num_fields.div_ceil(8);

        let mut bits = vec![0u32; num_fields];
        let mut next_bit = 0u32;
        for pass_required in [true, false] {
            for (idx, field) in self.fields.iter().enumerate() {
                if (field.label == Label::Required) == pass_required {
                    bits[idx] = next_bit;
                    next_bit += 1;
                }
            }
            if pass_required {
                debug!(
                    definition = self.name.as_str(),
                    required = next_bit,
                    "required fields own the leading presence bits"
                );
            }
        }
        let num_required_fields = self.fields.iter().filter(|f| f.label == Label::Required).count();

        let probes: Vec<FieldDescriptor> = self.fields.iter().map(DeclaredField::probe).collect();
        let mut order: Vec<usize> = (0..num_fields).collect();
        order.sort_by_key(|&idx| Reverse(probes[idx].storage_align()));

        let mut offsets = vec![0usize; num_fields];
        let mut cursor = set_flags_bytes;
        let mut max_align = 1;
        for idx in order {
            let align = probes[idx].storage_align();
            cursor = cursor.next_multiple_of(align);
            offsets[idx] = cursor;
            trace!(
                field = self.fields[idx].name.as_str(),
                offset = cursor,
                align,
                "placed field"
            );
            cursor += probes[idx].storage_size();
            max_align = max_align.max(align);
        }
        let size = cursor.next_multiple_of(max_align);

        debug!(
            definition = self.name.as_str(),
            size,
            set_flags_bytes,
            num_fields,
            "layout computed"
        );

        let fields = self
            .fields
            .into_iter()
            .enumerate()
            .map(|(idx, f)| {
                FieldDescriptor::new(
                    f.number,
                    f.name,
                    f.value_type,
                    f.label,
                    offsets[idx] as isize,
                    bits[idx],
                )
            })
            .collect();

        StructDefinition::new(
            self.name,
            size,
            set_flags_bytes,
            num_required_fields,
            fields,
        )
    }
}
