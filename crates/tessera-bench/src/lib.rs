//! Benchmark profiles for Tessera.
//!
//! Provides deterministic inputs shaped like real map data:
//!
//! - [`ring`]: one closed ring of `n` references around a centre point
//! - [`ring_profile`]: a buffer packed with many rings, as an area
//!   assembler would produce
//! - [`way_profile`]: a buffer of open way node lists with unset
//!   locations, as a reader produces before the location join

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_arena::{ArenaError, BufferConfig, ItemBuffer, ItemHandle};
use tessera_core::{Location, NodeRef, NodeRefListKind};

/// Radius of generated rings in fixed-point units (about 110 m).
const RING_RADIUS: f64 = 10_000.0;

/// Build a closed ring of `n` distinct nodes plus the closing repeat.
///
/// Node ids start at `first_id`. Vertices sit on a circle around
/// `centre` with a small seed-dependent radial jitter.
pub fn ring(first_id: i64, n: usize, centre: Location, seed: u64) -> Vec<NodeRef> {
    let mut refs: Vec<NodeRef> = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n.max(1) as f64;
            let radius = RING_RADIUS * (1.0 + 0.1 * jitter(seed, i as u64));
            let x = centre.x() + (radius * angle.cos()) as i32;
            let y = centre.y() + (radius * angle.sin()) as i32;
            NodeRef::new(first_id + i as i64, Location::from_fixed(x, y))
        })
        .collect();
    if let Some(&first) = refs.first() {
        refs.push(first);
    }
    refs
}

/// Pack `rings` closed rings of `refs_per_ring` nodes into one buffer.
pub fn ring_profile(
    rings: usize,
    refs_per_ring: usize,
    seed: u64,
) -> Result<(ItemBuffer, Vec<ItemHandle>), ArenaError> {
    let mut buffer = ItemBuffer::new(BufferConfig::default());
    let mut handles = Vec::with_capacity(rings);
    for r in 0..rings {
        let centre = Location::from_fixed(r as i32 * 50_000, (r as i32 % 17) * 50_000);
        let first_id = (r * refs_per_ring) as i64 + 1;
        let refs = ring(first_id, refs_per_ring, centre, seed.wrapping_add(r as u64));
        handles.push(buffer.push_node_ref_list(NodeRefListKind::OuterRing, refs)?);
    }
    Ok((buffer, handles))
}

/// Pack `ways` open way node lists of `refs_per_way` id-only references.
pub fn way_profile(
    ways: usize,
    refs_per_way: usize,
) -> Result<(ItemBuffer, Vec<ItemHandle>), ArenaError> {
    let mut buffer = ItemBuffer::new(BufferConfig::default());
    let mut handles = Vec::with_capacity(ways);
    for w in 0..ways {
        let first_id = (w * refs_per_way) as i64 + 1;
        let ids = first_id..first_id + refs_per_way as i64;
        handles.push(
            buffer.push_node_ref_list(NodeRefListKind::WayNodes, ids.map(NodeRef::with_id))?,
        );
    }
    Ok((buffer, handles))
}

/// Deterministic value in `[-1.0, 1.0)` derived from `seed` and `i`.
fn jitter(seed: u64, i: u64) -> f64 {
    let h = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407));
    ((h >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
}
