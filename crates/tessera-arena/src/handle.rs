//! Item handles.
//!
//! An [`ItemHandle`] names a committed item by its byte offset in an
//! [`ItemBuffer`](crate::ItemBuffer). It is generation-scoped: the
//! `generation` field allows O(1) staleness checks after the buffer is
//! cleared, without a lookup table.

use std::fmt;

/// Location of a committed item within an item buffer.
///
/// Handles are plain values; they do not borrow the buffer. Resolving a
/// handle re-validates the item header every time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ItemHandle {
    /// Buffer generation when this item was committed.
    pub(crate) generation: u32,
    /// Byte offset of the item header.
    pub(crate) offset: u32,
}

impl ItemHandle {
    pub(crate) fn new(generation: u32, offset: u32) -> Self {
        Self { generation, offset }
    }

    /// The buffer generation this handle belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Byte offset of the item within the buffer.
    pub fn offset(&self) -> usize {
        self.offset as usize
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemHandle(gen={}, off={})", self.generation, self.offset)
    }
}
