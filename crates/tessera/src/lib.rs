//! Tessera: arena-packed way node lists and polygon rings.
//!
//! This is the facade crate that re-exports the public API of the Tessera
//! sub-crates. For most users, adding `tessera` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut buffer = ItemBuffer::default();
//!
//! // Write phase: the builder borrows the buffer exclusively.
//! let mut builder = buffer.node_ref_list_builder(NodeRefListKind::OuterRing)?;
//! builder.push(NodeRef::new(17, Location::new(13.37, 52.51)?))?;
//! builder.push(NodeRef::new(18, Location::new(13.38, 52.51)?))?;
//! builder.push(NodeRef::new(19, Location::new(13.38, 52.52)?))?;
//! builder.push(NodeRef::new(17, Location::new(13.37, 52.51)?))?;
//! let handle = builder.finish()?;
//!
//! // Read phase: any number of shared views.
//! let ring = buffer.node_ref_list(handle)?;
//! assert_eq!(ring.len(), 4);
//! assert_eq!(ring.is_closed(), Ok(true));
//! assert_eq!(ring.ends_have_same_location(), Ok(true));
//!
//! let ids: Vec<i64> = ring.iter().rev().map(|r| r.id().get()).collect();
//! assert_eq!(ids, [17, 19, 18, 17]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Ids, locations, node references, item tags, `NodeRefSequence` |
//! | [`arena`] | `tessera-arena` | `ItemBuffer`, list builder, read and edit views |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Item buffer, list builder, and list views (`tessera-arena`).
///
/// Most users only need [`arena::ItemBuffer`] and [`arena::NodeRefList`]
/// from this module; both are also in the [`prelude`].
pub use tessera_arena as arena;

/// Core value types and the shared sequence interface (`tessera-core`).
///
/// Contains [`types::NodeId`], [`types::Location`], [`types::NodeRef`],
/// the item type tags, and the owned [`types::NodeRefVec`].
pub use tessera_core as types;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core values
    pub use tessera_core::{Location, NodeId, NodeRef, NodeRefListKind, NodeRefVec};

    // Shared interface
    pub use tessera_core::NodeRefSequence;

    // Errors
    pub use tessera_arena::ArenaError;
    pub use tessera_core::{LocationError, SequenceError};

    // Arena
    pub use tessera_arena::{
        BufferConfig, ItemBuffer, ItemHandle, NodeRefList, NodeRefListBuilder, NodeRefListMut,
    };
}
