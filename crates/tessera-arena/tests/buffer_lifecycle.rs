//! Buffer-level lifecycle: clear, stale handles, removal flags, bounded
//! growth.

use tessera_arena::{ArenaError, BufferConfig, ItemBuffer, ALIGN_BYTES};
use tessera_core::{NodeRef, NodeRefListKind, NodeRefSequence};
use tessera_test_utils::{closed_ring, open_path, packed};

#[test]
fn handles_go_stale_after_clear() {
    let (mut buffer, handle) = packed(NodeRefListKind::OuterRing, &closed_ring());
    buffer.clear();
    assert!(buffer.is_empty());
    assert!(matches!(
        buffer.node_ref_list(handle),
        Err(ArenaError::StaleHandle { .. })
    ));

    // A new list at the same offset gets a fresh handle that works.
    let fresh = buffer
        .push_node_ref_list(NodeRefListKind::WayNodes, open_path())
        .unwrap();
    assert_eq!(fresh.offset(), handle.offset());
    assert_ne!(fresh, handle);
    assert_eq!(buffer.node_ref_list(fresh).unwrap().is_closed(), Ok(false));
}

#[test]
fn removed_items_stay_readable() {
    let (mut buffer, handle) = packed(NodeRefListKind::InnerRing, &closed_ring());
    buffer.set_removed(handle, true).unwrap();
    assert!(buffer.header(handle).unwrap().is_removed());
    assert_eq!(buffer.node_ref_list(handle).unwrap().len(), 3);

    let removed: Vec<bool> = buffer
        .items()
        .map(|item| item.unwrap().1.is_removed())
        .collect();
    assert_eq!(removed, [true]);
}

#[test]
fn fixed_buffer_refuses_oversized_list() {
    let mut buffer = ItemBuffer::new(BufferConfig::fixed(64));
    let refs = (1..=10).map(NodeRef::with_id);
    let err = buffer
        .push_node_ref_list(NodeRefListKind::WayNodes, refs)
        .unwrap_err();
    assert!(matches!(err, ArenaError::CapacityExceeded { .. }));
    assert!(buffer.is_empty());
    assert_eq!(buffer.written(), 0);
}

#[test]
fn growth_respects_max_capacity() {
    let config = BufferConfig::new(64).with_max_capacity(256);
    let mut buffer = ItemBuffer::new(config);
    let mut pushed = 0usize;
    loop {
        match buffer.push_node_ref_list(NodeRefListKind::WayNodes, open_path()) {
            Ok(_) => pushed += 1,
            Err(ArenaError::CapacityExceeded { .. }) => break,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(pushed > 0);
    assert!(buffer.capacity() <= 256);
    assert_eq!(buffer.items().count(), pushed);
}

#[test]
fn builder_is_rolled_back_on_error_midway() {
    let mut buffer = ItemBuffer::new(BufferConfig::fixed(40));
    let kept = buffer
        .push_node_ref_list(NodeRefListKind::WayNodes, [NodeRef::with_id(7)])
        .unwrap();
    {
        let mut builder = buffer
            .node_ref_list_builder(NodeRefListKind::OuterRing)
            .unwrap();
        let err = builder.extend((1..=4).map(NodeRef::with_id)).unwrap_err();
        assert!(matches!(err, ArenaError::CapacityExceeded { .. }));
    }
    assert_eq!(buffer.written(), buffer.committed());
    assert_eq!(buffer.items().count(), 1);
    assert_eq!(buffer.node_ref_list(kept).unwrap().front().unwrap().id().get(), 7);
}

#[test]
fn list_after_raw_reservation_resolves() {
    let mut buffer = ItemBuffer::default();
    buffer.reserve_space(3).unwrap().copy_from_slice(b"osm");
    buffer.commit();
    let handle = buffer
        .push_node_ref_list(NodeRefListKind::WayNodes, [NodeRef::with_id(1)])
        .unwrap();
    assert_eq!(handle.offset() % ALIGN_BYTES, 0);
    let list = buffer.node_ref_list(handle).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.front().unwrap().id().get(), 1);
    assert_eq!(&buffer.as_bytes()[..3], b"osm");
}
