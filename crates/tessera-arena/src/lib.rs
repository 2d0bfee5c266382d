//! Packed item arena and zero-copy node-reference list views for Tessera.
//!
//! Node-reference lists (way node lists, outer and inner rings) are
//! stored as typed items in a single contiguous byte buffer: a fixed
//! header followed by a packed run of 16-byte records. Nothing is
//! allocated per list or per element.
//!
//! # Architecture
//!
//! ```text
//! ItemBuffer (Vec<u8>, bump-allocated, committed/written cursors)
//! ├── NodeRefListBuilder   write phase: &mut ItemBuffer, append, finish → ItemHandle
//! ├── NodeRefList<'_>      read phase:  &ItemBuffer, len/get/front/back/is_closed/iter
//! ├── NodeRefListMut<'_>   edit phase:  &mut ItemBuffer, overwrite existing records
//! └── Items<'_>            walk every committed item header
//! ```
//!
//! The phases are enforced by borrows rather than convention: a builder
//! and a view can never coexist on the same buffer.
//!
//! # Safety
//!
//! No `unsafe`. Records are decoded with explicit little-endian codecs,
//! never by casting pointers into the buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod builder;
pub mod config;
pub mod error;
pub mod handle;
pub mod header;
pub mod list;
pub mod list_mut;

// Public re-exports for the primary API surface.
pub use buffer::{ItemBuffer, Items};
pub use builder::NodeRefListBuilder;
pub use config::BufferConfig;
pub use error::ArenaError;
pub use handle::ItemHandle;
pub use header::{ItemHeader, ALIGN_BYTES, HEADER_SIZE};
pub use list::{NodeRefIter, NodeRefList};
pub use list_mut::{NodeRefListMut, NodeRefSlot, NodeRefSlots};
