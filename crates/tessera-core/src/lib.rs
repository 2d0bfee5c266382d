//! Core types and traits for Tessera.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types that every other Tessera crate packs into or reads out
//! of an arena: node identifiers, fixed-point locations, node references,
//! item type tags, and the [`NodeRefSequence`] read interface shared by
//! the packed and owned representations of a node-reference list.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod item_type;
pub mod location;
pub mod node_ref;
pub mod node_ref_vec;
pub mod traits;

pub use error::{ItemTypeError, LocationError, SequenceError};
pub use id::NodeId;
pub use item_type::{ItemType, NodeRefListKind};
pub use location::{Location, COORDINATE_PRECISION};
pub use node_ref::{NodeRef, NODE_REF_SIZE};
pub use node_ref_vec::NodeRefVec;
pub use traits::NodeRefSequence;
