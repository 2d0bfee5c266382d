//! Append-only construction of node-reference lists.
//!
//! [`NodeRefListBuilder`] is the write phase of a list's lifecycle. It
//! holds the [`ItemBuffer`] exclusively, so no read view can exist while a
//! list is half-built, and nothing it writes is visible until
//! [`finish`](NodeRefListBuilder::finish) commits it.

use tracing::trace;

use tessera_core::{NodeRef, NodeRefListKind, NODE_REF_SIZE};

use crate::buffer::ItemBuffer;
use crate::error::ArenaError;
use crate::handle::ItemHandle;
use crate::header::{padded_length, ItemHeader, HEADER_SIZE};

/// Builds one node-reference list at the end of an [`ItemBuffer`].
///
/// Dropping a builder without calling [`finish`](Self::finish) rolls the
/// buffer back to its last commit.
///
/// ```
/// use tessera_arena::ItemBuffer;
/// use tessera_core::{Location, NodeRef, NodeRefListKind, NodeRefSequence};
///
/// let mut buffer = ItemBuffer::default();
/// let mut builder = buffer.node_ref_list_builder(NodeRefListKind::OuterRing)?;
/// builder.push(NodeRef::new(1, Location::from_fixed(0, 0)))?;
/// builder.push(NodeRef::new(2, Location::from_fixed(10, 0)))?;
/// builder.push(NodeRef::new(1, Location::from_fixed(0, 0)))?;
/// let handle = builder.finish()?;
///
/// let ring = buffer.node_ref_list(handle)?;
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring.is_closed(), Ok(true));
/// # Ok::<(), tessera_arena::ArenaError>(())
/// ```
pub struct NodeRefListBuilder<'b> {
    buffer: &'b mut ItemBuffer,
    kind: NodeRefListKind,
    /// Offset of the item header in the buffer.
    start: usize,
    /// Current item size, mirrored into the header after every push.
    byte_size: u32,
    finished: bool,
}

impl<'b> NodeRefListBuilder<'b> {
    /// Start an empty list: reserves and writes a header-only item.
    ///
    /// The header is placed on the next
    /// [`ALIGN_BYTES`](crate::header::ALIGN_BYTES) boundary at or
    /// after the in-progress cursor. Anything reserved but not yet
    /// committed in `buffer`, plus the alignment padding, becomes part of
    /// this builder's commit (or rollback).
    pub fn new(buffer: &'b mut ItemBuffer, kind: NodeRefListKind) -> Result<Self, ArenaError> {
        let written = buffer.written();
        let start = padded_length(written).ok_or(ArenaError::CapacityExceeded {
            requested: HEADER_SIZE,
            capacity: buffer.capacity(),
        })?;
        if start > written {
            buffer.reserve_space(start - written)?;
        }
        let header = buffer.reserve_space(HEADER_SIZE)?;
        ItemHeader::new(kind.item_type()).write_to(header);
        Ok(Self {
            buffer,
            kind,
            start,
            byte_size: HEADER_SIZE as u32,
            finished: false,
        })
    }

    /// The kind of list being built.
    pub fn kind(&self) -> NodeRefListKind {
        self.kind
    }

    /// Number of node references appended so far.
    pub fn len(&self) -> usize {
        (self.byte_size as usize - HEADER_SIZE) / NODE_REF_SIZE
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.byte_size as usize == HEADER_SIZE
    }

    /// Append one node reference.
    pub fn push(&mut self, node_ref: NodeRef) -> Result<(), ArenaError> {
        let grown = self.byte_size as usize + NODE_REF_SIZE;
        let byte_size =
            u32::try_from(grown).map_err(|_| ArenaError::ItemTooLarge { byte_size: grown })?;
        let record = self.buffer.reserve_space(NODE_REF_SIZE)?;
        node_ref.write_to(record);
        self.byte_size = byte_size;
        let header = ItemHeader::new(self.kind.item_type()).with_byte_size(byte_size);
        self.buffer.write_header(self.start, header);
        Ok(())
    }

    /// Append every node reference from `refs`, stopping at the first error.
    pub fn extend(&mut self, refs: impl IntoIterator<Item = NodeRef>) -> Result<(), ArenaError> {
        refs.into_iter().try_for_each(|node_ref| self.push(node_ref))
    }

    /// Pad the item to the next boundary, commit it, and return its handle.
    pub fn finish(mut self) -> Result<ItemHandle, ArenaError> {
        let size = self.byte_size as usize;
        let padded = padded_length(size).ok_or(ArenaError::ItemTooLarge { byte_size: size })?;
        if padded > size {
            self.buffer.reserve_space(padded - size)?;
        }
        let offset =
            u32::try_from(self.start).map_err(|_| ArenaError::CapacityExceeded {
                requested: padded,
                capacity: self.buffer.capacity(),
            })?;
        self.buffer.commit();
        self.finished = true;
        trace!(
            kind = %self.kind,
            offset,
            refs = self.len(),
            "committed node reference list"
        );
        Ok(ItemHandle::new(self.buffer.generation(), offset))
    }
}

impl Drop for NodeRefListBuilder<'_> {
    fn drop(&mut self) {
        if !self.finished {
            trace!(
                kind = %self.kind,
                offset = self.start,
                refs = self.len(),
                "rolling back unfinished node reference list"
            );
            self.buffer.rollback();
        }
    }
}
