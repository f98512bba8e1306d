//! Presence bit tracking.
//!
//! One bit per field in the leading `set_flags_bytes` bytes of an instance.
//! A set bit means the field's value has been assigned; a clear bit means the
//! value storage is meaningless. Clearing a bit never touches the value.
//!
//! Bit updates are plain read-modify-write on a byte: two threads marking
//! fields that share a byte race even when the fields differ.

use std::ptr;

use crate::definition::{FieldDescriptor, StructDefinition};

#[inline(always)]
unsafe fn flag_byte(s: *mut u8, f: &FieldDescriptor) -> *mut u8 {
    // SAFETY: the caller guarantees the flag byte is inside the instance.
    unsafe { s.offset(f.isset_byte_offset) }
}

/// Set the field's presence bit. Other bits in the byte are preserved.
///
/// # Safety
/// `s` must point to a live, writable instance of the definition `f` belongs
/// to, and no other thread may access it concurrently.
#[inline]
pub unsafe fn mark_set(s: *mut u8, f: &FieldDescriptor) {
    // SAFETY: forwarded contract.
    unsafe { *flag_byte(s, f) |= f.isset_byte_mask }
}

/// Clear the field's presence bit. The value storage is left as is.
///
/// # Safety
/// Same contract as [`mark_set`].
#[inline]
pub unsafe fn mark_unset(s: *mut u8, f: &FieldDescriptor) {
    // SAFETY: forwarded contract.
    unsafe { *flag_byte(s, f) &= !f.isset_byte_mask }
}

/// Whether the field's presence bit is set.
///
/// # Safety
/// `s` must point to a live instance of the definition `f` belongs to.
#[inline]
pub unsafe fn is_set(s: *const u8, f: &FieldDescriptor) -> bool {
    // SAFETY: forwarded contract.
    unsafe { *s.offset(f.isset_byte_offset) & f.isset_byte_mask != 0 }
}

/// Whether every required field of `d` is present.
///
/// Relies on required fields owning presence bits `0..r`: the first `r / 8`
/// bytes must be `0xFF` and, when `r` is not a multiple of 8, the low
/// `r % 8` bits of the next byte must all be set. Bits at or above `r` are
/// not consulted, so optional fields sharing the last required byte do not
/// matter.
///
/// # Safety
/// `s` must point to a live instance of `d` with at least
/// `ceil(r / 8)` readable flag bytes.
pub unsafe fn all_required_fields_set(s: *const u8, d: &StructDefinition) -> bool {
    let required = d.num_required_fields();
    let full_bytes = required / 8;
    let rem_bits = required % 8;

    // SAFETY: the first `full_bytes` bytes are flag bytes per the caller.
    let full = unsafe { std::slice::from_raw_parts(s, full_bytes) };
    if full.iter().any(|&b| b != 0xFF) {
        return false;
    }
    if rem_bits == 0 {
        return true;
    }

    let mask = (1u8 << rem_bits) - 1;
    // SAFETY: `ceil(r / 8)` flag bytes are readable per the caller.
    let last = unsafe { *s.add(full_bytes) };
    last & mask == mask
}

/// Clear every presence bit of `d`. Values are left untouched.
///
/// # Safety
/// `s` must point to a live, writable instance of `d` with
/// `set_flags_bytes` flag bytes, accessed by no other thread.
pub unsafe fn clear_all(s: *mut u8, d: &StructDefinition) {
    // SAFETY: forwarded contract.
    unsafe { ptr::write_bytes(s, 0, d.set_flags_bytes()) }
}

/// Descriptors of the fields of `d` whose presence bit is set, in field number order.
///
/// # Safety
/// Same contract as [`is_set`].
pub unsafe fn set_fields(s: *const u8, d: &StructDefinition) -> Vec<&FieldDescriptor> {
    d.fields()
        .iter()
        // SAFETY: forwarded contract.
        .filter(|f| unsafe { is_set(s, f) })
        .collect()
}

/// Required fields of `d` whose presence bit is clear, ordered by presence bit.
///
/// # Safety
/// Same contract as [`is_set`].
pub unsafe fn missing_required(s: *const u8, d: &StructDefinition) -> Vec<&FieldDescriptor> {
    d.required_fields()
        .into_iter()
        // SAFETY: forwarded contract.
        .filter(|f| !unsafe { is_set(s, f) })
        .collect()
}
