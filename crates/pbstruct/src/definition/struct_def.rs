//! The struct definition and its field lookups.

use std::collections::HashMap;

use super::field::FieldDescriptor;
use crate::error::DefinitionError;
use crate::trace::trace;

/// Immutable layout metadata for one message type.
///
/// Fields are kept ordered by field number so number lookup is a binary
/// search; a name index makes name lookup O(1). Lookups are still worth
/// caching on hot paths: the descriptor is all the accessors need.
#[derive(Clone, Debug)]
pub struct StructDefinition {
    name: Box<str>,
    size: usize,
    set_flags_bytes: usize,
    num_required_fields: usize,
    fields: Vec<FieldDescriptor>,
    by_name: HashMap<Box<str>, usize>,
}

impl StructDefinition {
    /// Assemble a definition from precomputed descriptors.
    ///
    /// Validates the metadata that lookups and presence tracking depend on:
    /// unique non-zero numbers, unique names, single-bit masks inside the
    /// flag bytes, no shared presence bits, and required fields filling
    /// presence bits `0..num_required_fields`.
    ///
    /// The physical value layout is trusted here; see [`Self::check_layout`].
    pub fn new(
        name: impl Into<Box<str>>,
        size: usize,
        set_flags_bytes: usize,
        num_required_fields: usize,
        mut fields: Vec<FieldDescriptor>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        fields.sort_by_key(|f| f.number);

        for pair in fields.windows(2) {
            if pair[0].number == pair[1].number {
                return Err(DefinitionError::DuplicateNumber {
                    number: pair[0].number,
                    first: pair[0].name.to_string(),
                    second: pair[1].name.to_string(),
                });
            }
        }

        let mut by_name = HashMap::with_capacity(fields.len());
        let mut bit_owners: Vec<Option<&str>> = vec![None; set_flags_bytes * 8];
        let mut required = 0;

        for (idx, field) in fields.iter().enumerate() {
            if field.number == 0 {
                return Err(DefinitionError::ZeroFieldNumber {
                    name: field.name.to_string(),
                });
            }
            if field.isset_byte_mask.count_ones() != 1 {
                return Err(DefinitionError::InvalidMask {
                    name: field.name.to_string(),
                    mask: field.isset_byte_mask,
                });
            }
            if field.isset_byte_offset < 0 || field.isset_byte_offset as usize >= set_flags_bytes {
                return Err(DefinitionError::PresenceOutOfRange {
                    name: field.name.to_string(),
                    offset: field.isset_byte_offset,
                    set_flags_bytes,
                });
            }

            let bit = field.presence_bit();
            let owner = &mut bit_owners[bit as usize];
            if let Some(first) = owner {
                return Err(DefinitionError::SharedPresenceBit {
                    bit,
                    first: first.to_string(),
                    second: field.name.to_string(),
                });
            }
            *owner = Some(&*field.name);

            if field.is_required() {
                if bit as usize >= num_required_fields {
                    return Err(DefinitionError::RequiredBitOutsidePrefix {
                        name: field.name.to_string(),
                        bit,
                        required: num_required_fields,
                    });
                }
                required += 1;
            }

            if by_name.insert(field.name.clone(), idx).is_some() {
                return Err(DefinitionError::DuplicateName(field.name.to_string()));
            }
        }

        // Unique bits, all below the prefix end, and exactly as many as the
        // prefix is long: the required bits are precisely 0..num_required_fields.
        if required != num_required_fields {
            return Err(DefinitionError::RequiredCountMismatch {
                declared: num_required_fields,
                actual: required,
            });
        }

        trace!(
            definition = &*name,
            size,
            set_flags_bytes,
            num_required_fields,
            num_fields = fields.len(),
            "struct definition assembled"
        );

        Ok(Self {
            name,
            size,
            set_flags_bytes,
            num_required_fields,
            fields,
            by_name,
        })
    }

    /// Message type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total byte size of one instance.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of leading bytes reserved for presence bits.
    #[inline]
    pub fn set_flags_bytes(&self) -> usize {
        self.set_flags_bytes
    }

    #[inline]
    pub fn num_required_fields(&self) -> usize {
        self.num_required_fields
    }

    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// All descriptors, ordered by ascending field number.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Descriptors of the required fields, ordered by presence bit.
    pub fn required_fields(&self) -> Vec<&FieldDescriptor> {
        let mut required: Vec<_> = self.fields.iter().filter(|f| f.is_required()).collect();
        required.sort_by_key(|f| f.presence_bit());
        required
    }

    /// Look up a field by its schema name.
    pub fn find_field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&idx| &self.fields[idx])
    }

    /// Look up a field by its schema field number.
    pub fn find_field_by_number(&self, number: u32) -> Option<&FieldDescriptor> {
        self.fields
            .binary_search_by_key(&number, |f| f.number)
            .ok()
            .map(|idx| &self.fields[idx])
    }

    /// Verify the physical value layout.
    ///
    /// Every value must sit after the flag bytes, end within `size`, be
    /// aligned for its storage type and not overlap any other value. The
    /// accessors never check this; tooling and tests do.
    pub fn check_layout(&self) -> Result<(), DefinitionError> {
        if self.set_flags_bytes > self.size {
            return Err(DefinitionError::FlagsExceedSize {
                set_flags_bytes: self.set_flags_bytes,
                size: self.size,
            });
        }

        let mut ranges = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let range = field.value_range();
            if range.start < self.set_flags_bytes as isize {
                return Err(DefinitionError::ValueOverlapsFlags {
                    name: field.name.to_string(),
                    offset: range.start,
                });
            }
            let end = field.byte_offset.checked_add(field.storage_size() as isize);
            if end.is_none_or(|end| end > self.size as isize) {
                return Err(DefinitionError::ValueOutOfBounds {
                    name: field.name.to_string(),
                    end: range.end,
                    size: self.size,
                });
            }
            let align = field.storage_align();
            if !(range.start as usize).is_multiple_of(align) {
                return Err(DefinitionError::Misaligned {
                    name: field.name.to_string(),
                    offset: range.start,
                    align,
                });
            }
            ranges.push((range, &field.name));
        }

        ranges.sort_by_key(|(range, _)| range.start);
        for pair in ranges.windows(2) {
            let (prev, prev_name) = &pair[0];
            let (next, next_name) = &pair[1];
            if prev.end > next.start {
                return Err(DefinitionError::OverlappingValues {
                    first: prev_name.to_string(),
                    second: next_name.to_string(),
                });
            }
        }

        Ok(())
    }
}
