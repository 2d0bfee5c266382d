//! Test fixtures for Tessera development.
//!
//! Provides the canonical node-reference shapes used across the test
//! suites (closed rings, open paths, location-only closures) and a helper
//! that packs a shape into a fresh [`ItemBuffer`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_arena::{ItemBuffer, ItemHandle};
use tessera_core::{Location, NodeRef, NodeRefListKind};

pub const LOC_A: Location = Location::from_fixed(133_777_047, 525_162_731);
pub const LOC_B: Location = Location::from_fixed(133_800_000, 525_200_000);
pub const LOC_C: Location = Location::from_fixed(133_900_000, 525_100_000);

/// `[(1,A), (2,B), (1,A)]`: closed by id and by location.
pub fn closed_ring() -> Vec<NodeRef> {
    vec![
        NodeRef::new(1, LOC_A),
        NodeRef::new(2, LOC_B),
        NodeRef::new(1, LOC_A),
    ]
}

/// `[(1,A), (2,B), (3,C)]`: closed by neither test.
pub fn open_path() -> Vec<NodeRef> {
    vec![
        NodeRef::new(1, LOC_A),
        NodeRef::new(2, LOC_B),
        NodeRef::new(3, LOC_C),
    ]
}

/// `[(1,A), (2,B), (3,A)]`: endpoints share a location but not an id.
pub fn location_closed_path() -> Vec<NodeRef> {
    vec![
        NodeRef::new(1, LOC_A),
        NodeRef::new(2, LOC_B),
        NodeRef::new(3, LOC_A),
    ]
}

/// An axis-aligned square ring with `side` fixed-point units per edge.
///
/// Node ids run from `first_id` to `first_id + 3`; the fifth reference
/// repeats the first to close the ring.
pub fn square_ring(first_id: i64, side: i32) -> Vec<NodeRef> {
    let corners = [(0, 0), (side, 0), (side, side), (0, side)];
    let mut ring: Vec<NodeRef> = corners
        .iter()
        .zip(first_id..)
        .map(|(&(x, y), id)| NodeRef::new(id, Location::from_fixed(x, y)))
        .collect();
    ring.push(ring[0]);
    ring
}

/// A straight path of `n` nodes with ids `1..=n` stepping east.
pub fn straight_path(n: usize) -> Vec<NodeRef> {
    (1..=n as i64)
        .map(|id| NodeRef::new(id, Location::from_fixed(id as i32 * 10, 0)))
        .collect()
}

/// Pack `refs` as a single list into a fresh buffer.
pub fn packed(kind: NodeRefListKind, refs: &[NodeRef]) -> (ItemBuffer, ItemHandle) {
    let mut buffer = ItemBuffer::default();
    let handle = buffer
        .push_node_ref_list(kind, refs.iter().copied())
        .expect("fixture fits in a default buffer");
    (buffer, handle)
}
