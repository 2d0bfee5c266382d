//! Read-only, zero-copy view of a packed node-reference list.
//!
//! [`NodeRefList`] overlays one item in an [`ItemBuffer`](crate::ItemBuffer):
//!
//! ```text
//! ┌──────────── header (8) ───────────┬──── NodeRef (16) ────┬── ... ──┐
//! │ byte_size │ item_type │ flags     │ id │ x │ y            │         │
//! └───────────┴───────────┴───────────┴──────────────────────┴─────────┘
//!             payload = [HEADER_SIZE, byte_size)
//! ```
//!
//! There is no count field: the element count is derived from
//! `byte_size`. The header is validated once when the view is built, so
//! every accessor afterwards is a pure function of the borrowed bytes.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use tessera_core::{NodeRef, NodeRefListKind, NodeRefSequence, NodeRefVec, NODE_REF_SIZE};

use crate::error::ArenaError;
use crate::header::{ItemHeader, HEADER_SIZE};

/// Validate that `bytes` starts with a well-formed node-reference list.
///
/// Returns the header and list kind. `bytes` may extend past the item.
pub(crate) fn validate_list(bytes: &[u8]) -> Result<(ItemHeader, NodeRefListKind), ArenaError> {
    let header = ItemHeader::read_from(bytes)?;
    let kind = NodeRefListKind::try_from(header.item_type()).map_err(|_| {
        ArenaError::WrongItemType {
            found: header.item_type(),
        }
    })?;
    let byte_size = header.byte_size() as usize;
    if byte_size > bytes.len() {
        return Err(ArenaError::Truncated {
            needed: byte_size,
            available: bytes.len(),
        });
    }
    let payload_bytes = header.payload_size();
    if payload_bytes % NODE_REF_SIZE != 0 {
        return Err(ArenaError::MisalignedPayload { payload_bytes });
    }
    Ok((header, kind))
}

/// A read-only view of a way node list or area ring inside an arena.
///
/// The view borrows the arena, so the arena cannot be written while any
/// view is alive. Views are `Copy`; pass them around freely.
#[derive(Clone, Copy, Debug)]
pub struct NodeRefList<'a> {
    kind: NodeRefListKind,
    header: ItemHeader,
    /// Exactly `header.byte_size()` bytes, header included.
    bytes: &'a [u8],
}

impl<'a> NodeRefList<'a> {
    /// Overlay a view on the item at the start of `bytes`.
    ///
    /// Fails if the header is corrupt, names a non-list item type, declares
    /// more bytes than `bytes` holds, or has a payload that is not a whole
    /// number of node references.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ArenaError> {
        let (header, kind) = validate_list(bytes)?;
        Ok(Self {
            kind,
            header,
            bytes: &bytes[..header.byte_size() as usize],
        })
    }

    /// Build a view over bytes that already passed [`validate_list`].
    pub(crate) fn from_validated(
        kind: NodeRefListKind,
        header: ItemHeader,
        bytes: &'a [u8],
    ) -> Self {
        Self {
            kind,
            header,
            bytes,
        }
    }

    /// Which kind of list this is.
    pub fn kind(&self) -> NodeRefListKind {
        self.kind
    }

    /// The item header.
    pub fn header(&self) -> ItemHeader {
        self.header
    }

    /// Total item size in bytes, header included.
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }

    /// The raw item bytes, header included.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Whether the list holds no node references.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == HEADER_SIZE
    }

    /// Number of node references.
    pub fn len(&self) -> usize {
        let payload = self.payload().len();
        debug_assert_eq!(payload % NODE_REF_SIZE, 0, "validated at construction");
        payload / NODE_REF_SIZE
    }

    /// The node reference at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<NodeRef> {
        let start = index.checked_mul(NODE_REF_SIZE)?;
        NodeRef::read_from(self.payload().get(start..)?)
    }

    /// Iterate over the node references front-to-back.
    ///
    /// The iterator is double-ended: `iter().rev()` walks back-to-front.
    pub fn iter(&self) -> NodeRefIter<'a> {
        NodeRefIter {
            chunks: self.payload().chunks_exact(NODE_REF_SIZE),
        }
    }

    /// Copy the list into an owned [`NodeRefVec`].
    pub fn to_vec(&self) -> NodeRefVec {
        NodeRefVec::from_refs(self.kind, self.iter())
    }

    fn payload(&self) -> &'a [u8] {
        &self.bytes[HEADER_SIZE..]
    }
}

impl NodeRefSequence for NodeRefList<'_> {
    fn len(&self) -> usize {
        NodeRefList::len(self)
    }

    fn get(&self, index: usize) -> Option<NodeRef> {
        NodeRefList::get(self, index)
    }

    fn is_empty(&self) -> bool {
        NodeRefList::is_empty(self)
    }
}

impl<'a> IntoIterator for NodeRefList<'a> {
    type Item = NodeRef;
    type IntoIter = NodeRefIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &NodeRefList<'a> {
    type Item = NodeRef;
    type IntoIter = NodeRefIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the node references of a [`NodeRefList`].
///
/// Decodes each record on the fly; nothing is copied up front.
#[derive(Clone, Debug)]
pub struct NodeRefIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

fn decode(chunk: &[u8]) -> Option<NodeRef> {
    <&[u8; NODE_REF_SIZE]>::try_from(chunk)
        .ok()
        .map(|record| NodeRef::from_le_bytes(*record))
}

impl Iterator for NodeRefIter<'_> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        self.chunks.next().and_then(decode)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<NodeRef> {
        self.chunks.nth(n).and_then(decode)
    }

    fn count(self) -> usize {
        self.chunks.len()
    }

    fn last(mut self) -> Option<NodeRef> {
        self.next_back()
    }
}

impl DoubleEndedIterator for NodeRefIter<'_> {
    fn next_back(&mut self) -> Option<NodeRef> {
        self.chunks.next_back().and_then(decode)
    }
}

impl ExactSizeIterator for NodeRefIter<'_> {}

impl FusedIterator for NodeRefIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ItemBuffer;
    use proptest::prelude::*;
    use tessera_core::{ItemType, Location, SequenceError};

    const A: Location = Location::from_fixed(100, 200);
    const B: Location = Location::from_fixed(300, 400);
    const C: Location = Location::from_fixed(500, 600);

    /// Encode a list by hand, independent of the builder.
    fn encode(item_type: ItemType, refs: &[NodeRef]) -> Vec<u8> {
        let byte_size = (HEADER_SIZE + refs.len() * NODE_REF_SIZE) as u32;
        let mut out = ItemHeader::new(item_type)
            .with_byte_size(byte_size)
            .to_le_bytes()
            .to_vec();
        for r in refs {
            out.extend_from_slice(&r.to_le_bytes());
        }
        out
    }

    #[test]
    fn views_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NodeRefList<'static>>();
        assert_send_sync::<NodeRefIter<'static>>();
    }

    #[test]
    fn empty_list_is_header_only() {
        let bytes = encode(ItemType::WayNodeList, &[]);
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.byte_size(), HEADER_SIZE);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn empty_list_rejects_endpoint_operations() {
        let bytes = encode(ItemType::OuterRing, &[]);
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert_eq!(list.front(), Err(SequenceError::Empty));
        assert_eq!(list.back(), Err(SequenceError::Empty));
        assert_eq!(list.is_closed(), Err(SequenceError::Empty));
        assert_eq!(list.ends_have_same_location(), Err(SequenceError::Empty));
    }

    #[test]
    fn closed_by_id_and_location() {
        let bytes = encode(
            ItemType::OuterRing,
            &[NodeRef::new(1, A), NodeRef::new(2, B), NodeRef::new(1, A)],
        );
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.is_closed(), Ok(true));
        assert_eq!(list.ends_have_same_id(), Ok(true));
        assert_eq!(list.ends_have_same_location(), Ok(true));
    }

    #[test]
    fn open_path_is_neither() {
        let bytes = encode(
            ItemType::WayNodeList,
            &[NodeRef::new(1, A), NodeRef::new(2, B), NodeRef::new(3, C)],
        );
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert_eq!(list.is_closed(), Ok(false));
        assert_eq!(list.ends_have_same_location(), Ok(false));
    }

    #[test]
    fn location_closure_without_id_closure() {
        let bytes = encode(
            ItemType::WayNodeList,
            &[NodeRef::new(1, A), NodeRef::new(2, B), NodeRef::new(3, A)],
        );
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert_eq!(list.is_closed(), Ok(false));
        assert_eq!(list.ends_have_same_location(), Ok(true));
    }

    #[test]
    fn checked_index_access() {
        let bytes = encode(ItemType::WayNodeList, &[NodeRef::new(7, A)]);
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert_eq!(list.get(0), Some(NodeRef::new(7, A)));
        assert_eq!(list.get(1), None);
        assert_eq!(list.get(usize::MAX), None);
        assert_eq!(
            list.at(1),
            Err(SequenceError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn misaligned_payload_rejected() {
        let mut bytes = encode(ItemType::WayNodeList, &[NodeRef::new(1, A)]);
        bytes.extend_from_slice(&[0; 4]);
        let header = ItemHeader::new(ItemType::WayNodeList).with_byte_size(bytes.len() as u32);
        header.write_to(&mut bytes);
        assert_eq!(
            NodeRefList::from_bytes(&bytes).unwrap_err(),
            ArenaError::MisalignedPayload { payload_bytes: 20 }
        );
    }

    #[test]
    fn declared_size_past_slice_rejected() {
        let bytes = encode(ItemType::WayNodeList, &[NodeRef::new(1, A)]);
        assert_eq!(
            NodeRefList::from_bytes(&bytes[..HEADER_SIZE + 8]).unwrap_err(),
            ArenaError::Truncated {
                needed: HEADER_SIZE + NODE_REF_SIZE,
                available: HEADER_SIZE + 8
            }
        );
    }

    #[test]
    fn view_ignores_trailing_bytes() {
        let mut bytes = encode(ItemType::InnerRing, &[NodeRef::new(1, A)]);
        bytes.extend_from_slice(&[0xEE; 32]);
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.kind(), NodeRefListKind::InnerRing);
    }

    #[test]
    fn iterator_is_exact_size_and_double_ended() {
        let bytes = encode(
            ItemType::WayNodeList,
            &[NodeRef::new(1, A), NodeRef::new(2, B), NodeRef::new(3, C)],
        );
        let list = NodeRefList::from_bytes(&bytes).unwrap();
        let mut it = list.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next().map(|r| r.id().get()), Some(1));
        assert_eq!(it.next_back().map(|r| r.id().get()), Some(3));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next().map(|r| r.id().get()), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(list.iter().nth(2), Some(NodeRef::new(3, C)));
        assert_eq!(list.iter().last(), Some(NodeRef::new(3, C)));
    }

    #[test]
    fn to_vec_copies_in_order() {
        let refs = [NodeRef::new(1, A), NodeRef::new(2, B)];
        let bytes = encode(ItemType::OuterRing, &refs);
        let owned = NodeRefList::from_bytes(&bytes).unwrap().to_vec();
        assert_eq!(owned.kind(), NodeRefListKind::OuterRing);
        assert_eq!(owned.as_slice(), &refs);
    }

    fn arb_ref() -> impl Strategy<Value = NodeRef> {
        (any::<i64>(), any::<i32>(), any::<i32>())
            .prop_map(|(id, x, y)| NodeRef::new(id, Location::from_fixed(x, y)))
    }

    proptest! {
        #[test]
        fn len_follows_byte_size(refs in proptest::collection::vec(arb_ref(), 0..64)) {
            let mut buf = ItemBuffer::default();
            let handle = buf.push_node_ref_list(NodeRefListKind::WayNodes, refs.iter().copied()).unwrap();
            let list = buf.node_ref_list(handle).unwrap();
            prop_assert_eq!(list.len(), (list.byte_size() - HEADER_SIZE) / NODE_REF_SIZE);
            prop_assert_eq!(list.len(), refs.len());
            prop_assert_eq!(list.is_empty(), refs.is_empty());
        }

        #[test]
        fn iteration_preserves_append_order(refs in proptest::collection::vec(arb_ref(), 0..64)) {
            let mut buf = ItemBuffer::default();
            let handle = buf.push_node_ref_list(NodeRefListKind::WayNodes, refs.iter().copied()).unwrap();
            let list = buf.node_ref_list(handle).unwrap();
            let forward: Vec<NodeRef> = list.iter().collect();
            let mut backward: Vec<NodeRef> = list.iter().rev().collect();
            backward.reverse();
            prop_assert_eq!(&forward, &refs);
            prop_assert_eq!(&backward, &refs);
        }

        #[test]
        fn closure_predicates_match_endpoints(refs in proptest::collection::vec(arb_ref(), 1..16)) {
            let mut buf = ItemBuffer::default();
            let handle = buf.push_node_ref_list(NodeRefListKind::OuterRing, refs.iter().copied()).unwrap();
            let list = buf.node_ref_list(handle).unwrap();
            let first = refs[0];
            let last = refs[refs.len() - 1];
            prop_assert_eq!(list.is_closed(), Ok(first.id() == last.id()));
            prop_assert_eq!(list.ends_have_same_location(), Ok(first.location() == last.location()));
        }
    }
}
