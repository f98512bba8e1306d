//! 16-byte aligned storage for message instances.
//!
//! Field offsets assume the instance starts at an address aligned for its
//! widest field. `Vec<u8>` guarantees nothing beyond 1, so instances live in
//! a `Vec` of aligned blocks instead.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::definition::StructDefinition;

/// Alignment of every instance buffer, enough for any field type.
pub const ALIGN: usize = 16;

#[repr(C, align(16))]
#[derive(Clone, Copy)]
struct Block([u8; ALIGN]);

/// Owned, zero-initialized bytes for one message instance.
///
/// All-zero bytes are a valid empty instance: every presence bit is clear.
pub struct InstanceBuf {
    blocks: Vec<Block>,
    len: usize,
}

impl InstanceBuf {
    /// `len` zero bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            blocks: vec![Block([0; ALIGN]); len.div_ceil(ALIGN)],
            len,
        }
    }

    /// An empty instance sized for `def`.
    pub fn for_definition(def: &StructDefinition) -> Self {
        Self::zeroed(def.size())
    }

    /// Copy existing instance bytes into aligned storage.
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        let mut buf = Self::zeroed(bytes.len());
        buf.as_mut_slice().copy_from_slice(bytes);
        buf
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: Block is repr(C) over a byte array and `len` never exceeds
        // the block capacity, all of it initialized by `zeroed`.
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_slice`, with unique access through `&mut self`.
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Instance pointer for the read-only accessors.
    pub fn as_ptr(&self) -> *const u8 {
        self.blocks.as_ptr().cast()
    }

    /// Instance pointer for the mutating accessors.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.blocks.as_mut_ptr().cast()
    }
}

impl Deref for InstanceBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl DerefMut for InstanceBuf {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl Clone for InstanceBuf {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            len: self.len,
        }
    }
}

impl fmt::Debug for InstanceBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceBuf")
            .field("len", &self.len)
            .field("aligned", &(self.as_ptr() as usize).is_multiple_of(ALIGN))
            .finish()
    }
}
