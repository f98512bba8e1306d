//! Offset-based field accessors.
//!
//! The generic [`field_ptr`], [`get`] and [`set`] reinterpret
//! `instance + byte_offset` as the field's native type. A macro additionally
//! emits the named per-type family (`get_int32`, `set_string`, `array_ptr`,
//! ...) for callers that dispatch on a value type at run time, plus the
//! matching element accessors on [`Array`].
//!
//! Nothing here checks bounds, alignment, type or presence, and setting a
//! value never touches its presence bit: call
//! [`presence::mark_set`](crate::presence::mark_set) separately. That lets
//! batch construction write values first and flip presence bits afterwards.

use crate::definition::FieldDescriptor;
use crate::views::{Array, PbString};

mod sealed {
    pub trait Sealed {}
}

/// A native type that can live in a field's storage or an array slot.
pub trait FieldType: sealed::Sealed + Copy {}

/// Numeric and boolean field types, the only ones with typed arrays.
pub trait Primitive: FieldType {}

macro_rules! impl_field_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl FieldType for $ty {}
        )*
    };
}

impl_field_type!(f64, f32, i32, i64, u32, u64, bool, *mut PbString, *mut u8, *mut Array);

impl Primitive for f64 {}
impl Primitive for f32 {}
impl Primitive for i32 {}
impl Primitive for i64 {}
impl Primitive for u32 {}
impl Primitive for u64 {}
impl Primitive for bool {}

/// Pointer to the field's value storage.
///
/// # Safety
/// `s` must point to a live instance of the definition `f` belongs to, and
/// the field's storage must hold a `T` at a `T`-aligned address.
#[inline(always)]
pub unsafe fn field_ptr<T: FieldType>(s: *mut u8, f: &FieldDescriptor) -> *mut T {
    // SAFETY: the offset stays inside the instance per the caller's contract.
    unsafe { s.offset(f.byte_offset).cast::<T>() }
}

/// Read the field's value.
///
/// # Safety
/// Same contract as [`field_ptr`]; the storage must hold an initialized `T`.
#[inline(always)]
pub unsafe fn get<T: FieldType>(s: *const u8, f: &FieldDescriptor) -> T {
    // SAFETY: guaranteed by the caller.
    unsafe { s.offset(f.byte_offset).cast::<T>().read() }
}

/// Write the field's value. The presence bit is left untouched.
///
/// # Safety
/// Same contract as [`field_ptr`]; no other thread may access the instance.
#[inline(always)]
pub unsafe fn set<T: FieldType>(s: *mut u8, f: &FieldDescriptor, val: T) {
    // SAFETY: guaranteed by the caller.
    unsafe { field_ptr::<T>(s, f).write(val) }
}

macro_rules! define_accessors {
    ($ty:ty, $name:ident) => {
        paste::paste! {
            #[doc = concat!("Pointer to a `", stringify!($name), "` field.")]
            ///
            /// # Safety
            /// Same contract as [`field_ptr`].
            #[inline]
            pub unsafe fn [<$name _ptr>](s: *mut u8, f: &FieldDescriptor) -> *mut $ty {
                // SAFETY: forwarded contract.
                unsafe { field_ptr::<$ty>(s, f) }
            }

            #[doc = concat!("Read a `", stringify!($name), "` field.")]
            ///
            /// # Safety
            /// Same contract as [`get`].
            #[inline]
            pub unsafe fn [<get_ $name>](s: *const u8, f: &FieldDescriptor) -> $ty {
                // SAFETY: forwarded contract.
                unsafe { get::<$ty>(s, f) }
            }

            #[doc = concat!("Write a `", stringify!($name), "` field.")]
            ///
            /// # Safety
            /// Same contract as [`set`].
            #[inline]
            pub unsafe fn [<set_ $name>](s: *mut u8, f: &FieldDescriptor, val: $ty) {
                // SAFETY: forwarded contract.
                unsafe { set::<$ty>(s, f, val) }
            }
        }
    };
}

macro_rules! define_array_accessors {
    ($ty:ty, $name:ident) => {
        paste::paste! {
            impl Array {
                #[doc = concat!("Pointer to element `n` of a `", stringify!($name), "` array.")]
                ///
                /// # Safety
                /// Same contract as [`Array::elem_ptr`].
                #[inline]
                pub unsafe fn [<$name _ptr>](&self, n: usize) -> *mut $ty {
                    // SAFETY: forwarded contract.
                    unsafe { self.elem_ptr::<$ty>(n) }
                }

                /// # Safety
                /// Same contract as [`Array::get`].
                #[inline]
                pub unsafe fn [<get_ $name>](&self, n: usize) -> $ty {
                    // SAFETY: forwarded contract.
                    unsafe { self.get::<$ty>(n) }
                }

                /// # Safety
                /// Same contract as [`Array::set`].
                #[inline]
                pub unsafe fn [<set_ $name>](&mut self, n: usize, val: $ty) {
                    // SAFETY: forwarded contract.
                    unsafe { self.set::<$ty>(n, val) }
                }
            }
        }
    };
}

macro_rules! define_all_accessors {
    ($ty:ty, $name:ident) => {
        define_accessors!($ty, $name);
        define_array_accessors!($ty, $name);
    };
}

define_all_accessors!(f64, double);
define_all_accessors!(f32, float);
define_all_accessors!(i32, int32);
define_all_accessors!(i64, int64);
define_all_accessors!(u32, uint32);
define_all_accessors!(u64, uint64);
define_all_accessors!(bool, bool);
define_all_accessors!(*mut PbString, bytes);
define_all_accessors!(*mut PbString, string);
define_all_accessors!(*mut u8, substruct);
// Fields only: arrays of arrays do not exist.
define_accessors!(*mut Array, array);
