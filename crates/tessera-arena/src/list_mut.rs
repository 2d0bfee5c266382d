//! In-place editing of node-reference values inside an arena.
//!
//! [`NodeRefListMut`] allows changing existing records (typically filling
//! in locations after a join against node coordinates) but never changes
//! the number of records: structural growth belongs to the builder.

use std::iter::FusedIterator;
use std::slice::ChunksExactMut;

use tessera_core::{
    Location, NodeRef, NodeRefListKind, NodeRefSequence, SequenceError, NODE_REF_SIZE,
};

use crate::error::ArenaError;
use crate::header::{ItemHeader, HEADER_SIZE};
use crate::list::{validate_list, NodeRefList};

/// A mutable view of a node-reference list inside an arena.
///
/// Holds an exclusive borrow of the item bytes. Use
/// [`as_list`](Self::as_list) to get read-only access without giving the
/// borrow up.
#[derive(Debug)]
pub struct NodeRefListMut<'a> {
    kind: NodeRefListKind,
    header: ItemHeader,
    /// Exactly `header.byte_size()` bytes, header included.
    bytes: &'a mut [u8],
}

impl<'a> NodeRefListMut<'a> {
    /// Overlay a mutable view on the item at the start of `bytes`.
    ///
    /// Performs the same validation as [`NodeRefList::from_bytes`].
    pub fn from_bytes(bytes: &'a mut [u8]) -> Result<Self, ArenaError> {
        let (header, kind) = validate_list(bytes)?;
        let byte_size = header.byte_size() as usize;
        Ok(Self {
            kind,
            header,
            bytes: &mut bytes[..byte_size],
        })
    }

    /// Which kind of list this is.
    pub fn kind(&self) -> NodeRefListKind {
        self.kind
    }

    /// Number of node references.
    pub fn len(&self) -> usize {
        (self.bytes.len() - HEADER_SIZE) / NODE_REF_SIZE
    }

    /// Whether the list holds no node references.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == HEADER_SIZE
    }

    /// The node reference at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<NodeRef> {
        self.as_list().get(index)
    }

    /// Overwrite the node reference at `index`.
    pub fn set(&mut self, index: usize, node_ref: NodeRef) -> Result<(), SequenceError> {
        let len = self.len();
        let out_of_range = SequenceError::IndexOutOfRange { index, len };
        let start = index
            .checked_mul(NODE_REF_SIZE)
            .and_then(|offset| offset.checked_add(HEADER_SIZE))
            .ok_or(out_of_range)?;
        let record = self.bytes.get_mut(start..).ok_or(out_of_range)?;
        if node_ref.write_to(record) {
            Ok(())
        } else {
            Err(out_of_range)
        }
    }

    /// Iterate over editable slots, one per node reference, front-to-back.
    pub fn iter_mut(&mut self) -> NodeRefSlots<'_> {
        NodeRefSlots {
            chunks: self.bytes[HEADER_SIZE..].chunks_exact_mut(NODE_REF_SIZE),
        }
    }

    /// Reborrow as a read-only view.
    pub fn as_list(&self) -> NodeRefList<'_> {
        // Edits never touch the header, so the construction-time checks still hold.
        NodeRefList::from_validated(self.kind, self.header, &*self.bytes)
    }
}

impl NodeRefSequence for NodeRefListMut<'_> {
    fn len(&self) -> usize {
        NodeRefListMut::len(self)
    }

    fn get(&self, index: usize) -> Option<NodeRef> {
        NodeRefListMut::get(self, index)
    }
}

/// An editable node-reference record.
#[derive(Debug)]
pub struct NodeRefSlot<'a> {
    record: &'a mut [u8; NODE_REF_SIZE],
}

impl NodeRefSlot<'_> {
    /// Decode the current value.
    pub fn get(&self) -> NodeRef {
        NodeRef::from_le_bytes(*self.record)
    }

    /// Overwrite the whole record.
    pub fn set(&mut self, node_ref: NodeRef) {
        *self.record = node_ref.to_le_bytes();
    }

    /// Overwrite only the cached location, keeping the id.
    pub fn set_location(&mut self, location: Location) {
        let mut node_ref = self.get();
        node_ref.set_location(location);
        self.set(node_ref);
    }
}

/// Iterator over the editable slots of a [`NodeRefListMut`].
#[derive(Debug)]
pub struct NodeRefSlots<'a> {
    chunks: ChunksExactMut<'a, u8>,
}

impl<'a> Iterator for NodeRefSlots<'a> {
    type Item = NodeRefSlot<'a>;

    fn next(&mut self) -> Option<NodeRefSlot<'a>> {
        let chunk = self.chunks.next()?;
        let record = <&mut [u8; NODE_REF_SIZE]>::try_from(chunk).ok()?;
        Some(NodeRefSlot { record })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> DoubleEndedIterator for NodeRefSlots<'a> {
    fn next_back(&mut self) -> Option<NodeRefSlot<'a>> {
        let chunk = self.chunks.next_back()?;
        let record = <&mut [u8; NODE_REF_SIZE]>::try_from(chunk).ok()?;
        Some(NodeRefSlot { record })
    }
}

impl ExactSizeIterator for NodeRefSlots<'_> {}

impl FusedIterator for NodeRefSlots<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ItemBuffer;

    fn build(ids: &[i64]) -> (ItemBuffer, crate::ItemHandle) {
        let mut buf = ItemBuffer::default();
        let handle = buf
            .push_node_ref_list(
                NodeRefListKind::WayNodes,
                ids.iter().copied().map(NodeRef::with_id),
            )
            .unwrap();
        (buf, handle)
    }

    #[test]
    fn set_overwrites_one_record() {
        let (mut buf, handle) = build(&[1, 2, 3]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        list.set(1, NodeRef::new(20, Location::from_fixed(1, 1)))
            .unwrap();
        let ids: Vec<i64> = list.as_list().iter().map(|r| r.id().get()).collect();
        assert_eq!(ids, [1, 20, 3]);
    }

    #[test]
    fn set_out_of_range_is_rejected() {
        let (mut buf, handle) = build(&[1]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        assert_eq!(
            list.set(1, NodeRef::with_id(9)),
            Err(SequenceError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            list.set(usize::MAX, NodeRef::with_id(9)),
            Err(SequenceError::IndexOutOfRange {
                index: usize::MAX,
                len: 1
            })
        );
    }

    #[test]
    fn slots_fill_locations_in_place() {
        let (mut buf, handle) = build(&[4, 5, 6]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        for mut slot in list.iter_mut() {
            let id = slot.get().id().get() as i32;
            slot.set_location(Location::from_fixed(id * 10, id * 100));
        }
        assert_eq!(
            list.get(2).map(|r| r.location()),
            Some(Location::from_fixed(60, 600))
        );
        assert_eq!(list.get(2).map(|r| r.id().get()), Some(6));
    }

    #[test]
    fn reverse_slots_visit_back_first() {
        let (mut buf, handle) = build(&[1, 2, 3]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        let order: Vec<i64> = list.iter_mut().rev().map(|s| s.get().id().get()).collect();
        assert_eq!(order, [3, 2, 1]);
    }

    #[test]
    fn edits_keep_length_and_closure_semantics() {
        let (mut buf, handle) = build(&[1, 2, 3]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        assert_eq!(list.is_closed(), Ok(false));
        list.set(2, NodeRef::with_id(1)).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.is_closed(), Ok(true));
    }

    #[test]
    fn empty_list_has_no_slots() {
        let (mut buf, handle) = build(&[]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.iter_mut().count(), 0);
        assert_eq!(list.front(), Err(SequenceError::Empty));
    }

    #[test]
    fn exhausted_slots_stay_exhausted() {
        fn assert_fused<I: FusedIterator>(_: &I) {}
        let (mut buf, handle) = build(&[1]);
        let mut list = buf.node_ref_list_mut(handle).unwrap();
        let mut slots = list.iter_mut();
        assert_fused(&slots);
        assert!(slots.next().is_some());
        assert!(slots.next().is_none());
        assert!(slots.next().is_none());
        assert!(slots.next_back().is_none());
    }
}
