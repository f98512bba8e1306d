//! Container views over externally owned memory.
//!
//! Every view is a `{length, pointer}` pair with C layout, so generated
//! structs can embed or point to them directly. Views never own, allocate or
//! free what they point to, and indexing is unchecked: an index outside
//! `0..len` is undefined behavior. There is no per-element presence;
//! membership in `0..len` is the existence signal.

use std::ptr;
use std::slice;

use crate::access::{FieldType, Primitive};

/// A string or bytes value: `byte_len` bytes at `data`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct PbString {
    pub byte_len: usize,
    pub data: *mut u8,
}

impl Default for PbString {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PbString {
    pub const EMPTY: Self = Self {
        byte_len: 0,
        data: ptr::null_mut(),
    };

    pub fn from_raw_parts(data: *mut u8, byte_len: usize) -> Self {
        Self { byte_len, data }
    }

    /// View caller-owned bytes. The borrow is not tracked past this call.
    pub fn from_slice(bytes: &mut [u8]) -> Self {
        Self::from_raw_parts(bytes.as_mut_ptr(), bytes.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.byte_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.byte_len == 0
    }

    /// The referenced bytes.
    ///
    /// # Safety
    /// `data` must be valid for reads of `byte_len` bytes for the caller-chosen
    /// lifetime `'a`, and not be written during it.
    pub unsafe fn as_bytes<'a>(&self) -> &'a [u8] {
        if self.byte_len == 0 {
            return &[];
        }
        // SAFETY: guaranteed by the caller.
        unsafe { slice::from_raw_parts(self.data, self.byte_len) }
    }
}

/// An array of any element type; the element type is chosen at access time.
///
/// Per-type accessors (`get_int32`, `set_string`, ...) are generated in
/// [`crate::access`]. Arrays of arrays do not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Array {
    /// Length in elements.
    pub len: usize,
    pub data: *mut u8,
}

impl Default for Array {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Array {
    pub const EMPTY: Self = Self {
        len: 0,
        data: ptr::null_mut(),
    };

    pub fn from_raw_parts(data: *mut u8, len: usize) -> Self {
        Self { len, data }
    }

    /// View caller-owned elements. The borrow is not tracked past this call.
    pub fn from_slice<T: FieldType>(elements: &mut [T]) -> Self {
        Self::from_raw_parts(elements.as_mut_ptr().cast(), elements.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to element `n`, treating the data as `T`s.
    ///
    /// # Safety
    /// `data` must point to an allocation of at least `n + 1` elements of `T`.
    #[inline(always)]
    pub unsafe fn elem_ptr<T: FieldType>(&self, n: usize) -> *mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.data.cast::<T>().add(n) }
    }

    /// # Safety
    /// `n < len` and the elements are initialized values of type `T`.
    #[inline(always)]
    pub unsafe fn get<T: FieldType>(&self, n: usize) -> T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr::<T>(n).read() }
    }

    /// # Safety
    /// `n < len`, the elements are of type `T` and nothing else accesses the
    /// element concurrently.
    #[inline(always)]
    pub unsafe fn set<T: FieldType>(&mut self, n: usize, val: T) {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr::<T>(n).write(val) }
    }
}

/// A typed array of one primitive type.
#[derive(Debug, PartialEq, Eq)]
#[repr(C)]
pub struct PrimitiveArray<T> {
    pub len: usize,
    pub elements: *mut T,
}

impl<T> Clone for PrimitiveArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PrimitiveArray<T> {}

impl<T: Primitive> PrimitiveArray<T> {
    pub fn from_raw_parts(elements: *mut T, len: usize) -> Self {
        Self { len, elements }
    }

    /// View caller-owned elements. The borrow is not tracked past this call.
    pub fn from_slice(elements: &mut [T]) -> Self {
        Self::from_raw_parts(elements.as_mut_ptr(), elements.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Safety
    /// `elements` must point to an allocation of at least `n + 1` elements.
    #[inline(always)]
    pub unsafe fn elem_ptr(&self, n: usize) -> *mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elements.add(n) }
    }

    /// # Safety
    /// `n < len` and element `n` is initialized.
    #[inline(always)]
    pub unsafe fn get(&self, n: usize) -> T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr(n).read() }
    }

    /// # Safety
    /// `n < len` and nothing else accesses the element concurrently.
    #[inline(always)]
    pub unsafe fn set(&mut self, n: usize, val: T) {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr(n).write(val) }
    }

    /// The same memory as an untyped [`Array`].
    pub fn as_untyped(&self) -> Array {
        Array::from_raw_parts(self.elements.cast(), self.len)
    }
}

pub type DoubleArray = PrimitiveArray<f64>;
pub type FloatArray = PrimitiveArray<f32>;
pub type Int32Array = PrimitiveArray<i32>;
pub type Int64Array = PrimitiveArray<i64>;
pub type UInt32Array = PrimitiveArray<u32>;
pub type UInt64Array = PrimitiveArray<u64>;
pub type BoolArray = PrimitiveArray<bool>;

/// An array of string pointers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct StringArray {
    pub len: usize,
    pub elements: *mut *mut PbString,
}

impl StringArray {
    pub fn from_raw_parts(elements: *mut *mut PbString, len: usize) -> Self {
        Self { len, elements }
    }

    pub fn from_slice(elements: &mut [*mut PbString]) -> Self {
        Self::from_raw_parts(elements.as_mut_ptr(), elements.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Safety
    /// `elements` must point to an allocation of at least `n + 1` pointers.
    #[inline(always)]
    pub unsafe fn elem_ptr(&self, n: usize) -> *mut *mut PbString {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elements.add(n) }
    }

    /// # Safety
    /// `n < len`.
    #[inline(always)]
    pub unsafe fn get(&self, n: usize) -> *mut PbString {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr(n).read() }
    }

    /// # Safety
    /// `n < len` and nothing else accesses the element concurrently.
    #[inline(always)]
    pub unsafe fn set(&mut self, n: usize, val: *mut PbString) {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr(n).write(val) }
    }
}

/// An array of pointers to sub-struct instances of one message type.
///
/// `T` lets generated code name its native struct; the reflection path uses
/// the default, raw instance bytes.
#[derive(Debug, PartialEq, Eq)]
#[repr(C)]
pub struct StructArray<T = u8> {
    pub len: usize,
    pub elements: *mut *mut T,
}

impl<T> Clone for StructArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructArray<T> {}

impl<T> StructArray<T> {
    pub fn from_raw_parts(elements: *mut *mut T, len: usize) -> Self {
        Self { len, elements }
    }

    pub fn from_slice(elements: &mut [*mut T]) -> Self {
        Self::from_raw_parts(elements.as_mut_ptr(), elements.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Safety
    /// `elements` must point to an allocation of at least `n + 1` pointers.
    #[inline(always)]
    pub unsafe fn elem_ptr(&self, n: usize) -> *mut *mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elements.add(n) }
    }

    /// # Safety
    /// `n < len`.
    #[inline(always)]
    pub unsafe fn get(&self, n: usize) -> *mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr(n).read() }
    }

    /// # Safety
    /// `n < len` and nothing else accesses the element concurrently.
    #[inline(always)]
    pub unsafe fn set(&mut self, n: usize, val: *mut T) {
        // SAFETY: guaranteed by the caller.
        unsafe { self.elem_ptr(n).write(val) }
    }
}
