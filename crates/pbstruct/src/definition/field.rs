//! Field descriptors.

use std::mem::{align_of, size_of};
use std::ops::Range;

use crate::value_type::ValueType;
use crate::views::Array;

/// Field cardinality, as declared in the schema.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    #[default]
    Optional,
    /// Must be present for the struct to be complete.
    Required,
    /// Stored as a pointer to an [`Array`] of the declared value type.
    Repeated,
}

impl Label {
    pub fn name(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Required => "required",
            Self::Repeated => "repeated",
        }
    }
}

/// Locates one field's value and presence bit inside an instance.
///
/// The three location fields mirror the layout a code generator emits:
/// the value lives at `instance + byte_offset`, the presence bit is
/// `instance[isset_byte_offset] & isset_byte_mask`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FieldDescriptor {
    /// Schema field number (tag), always non-zero.
    pub number: u32,
    pub name: Box<str>,
    /// Declared type; the element type when `label` is `Repeated`.
    pub value_type: ValueType,
    pub label: Label,
    /// Offset of the value storage from the start of the instance.
    pub byte_offset: isize,
    /// Offset of the byte holding the presence bit.
    pub isset_byte_offset: isize,
    /// Single-bit mask selecting the presence bit within that byte.
    pub isset_byte_mask: u8,
}

impl FieldDescriptor {
    /// Create a descriptor whose presence flag is bit `presence_bit` of the bitset.
    pub fn new(
        number: u32,
        name: impl Into<Box<str>>,
        value_type: ValueType,
        label: Label,
        byte_offset: isize,
        presence_bit: u32,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            value_type,
            label,
            byte_offset,
            isset_byte_offset: (presence_bit / 8) as isize,
            isset_byte_mask: 1 << (presence_bit % 8),
        }
    }

    /// Position of the presence flag, counted from the low bit of byte 0.
    ///
    /// Only meaningful when the mask has exactly one bit set.
    #[inline]
    pub fn presence_bit(&self) -> u32 {
        self.isset_byte_offset as u32 * 8 + self.isset_byte_mask.trailing_zeros()
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.label == Label::Required
    }

    #[inline]
    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }

    /// Bytes occupied by the field inside the instance.
    pub fn storage_size(&self) -> usize {
        if self.is_repeated() {
            size_of::<*mut Array>()
        } else {
            self.value_type.size()
        }
    }

    pub fn storage_align(&self) -> usize {
        if self.is_repeated() {
            align_of::<*mut Array>()
        } else {
            self.value_type.align()
        }
    }

    /// Byte range of the value storage relative to the instance start.
    ///
    /// The end saturates at `isize::MAX` for offsets near the limit.
    pub fn value_range(&self) -> Range<isize> {
        self.byte_offset..self.byte_offset.saturating_add(self.storage_size() as isize)
    }

    /// What the storage holds: the value type name, or `"array"` when repeated.
    pub fn shape_name(&self) -> &'static str {
        if self.is_repeated() {
            "array"
        } else {
            self.value_type.name()
        }
    }
}
