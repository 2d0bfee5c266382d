//! Error types for core value operations.
//!
//! Organised by concern: sequence preconditions, location conversion,
//! and item type tag decoding. Arena-level failures (capacity, stale
//! handles, corrupt headers) live in `tessera-arena`.

use std::error::Error;
use std::fmt;

/// A precondition on a node-reference sequence was violated.
///
/// These indicate a bug in the calling code (asking for the endpoints of
/// an empty way, indexing past the end), never a corrupt buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An endpoint operation was called on a sequence with no elements.
    Empty,
    /// An index was outside `0..len`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of elements in the sequence.
        len: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "sequence is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
        }
    }
}

impl Error for SequenceError {}

/// Errors converting between fixed-point and floating-point locations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationError {
    /// The location has no coordinates.
    Undefined,
    /// A floating-point coordinate does not fit the fixed-point range.
    OutOfRange {
        /// The offending coordinate value in degrees.
        value: f64,
    },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "location is undefined"),
            Self::OutOfRange { value } => {
                write!(f, "coordinate {value} is outside the representable range")
            }
        }
    }
}

impl Error for LocationError {}

/// Errors decoding or narrowing an item type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemTypeError {
    /// The raw tag does not name any known item type.
    Unknown {
        /// The unrecognised raw tag.
        raw: u16,
    },
    /// The item type is valid but does not carry a node-reference list.
    NotANodeRefList {
        /// The raw tag of the item type found.
        raw: u16,
    },
}

impl fmt::Display for ItemTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { raw } => write!(f, "unknown item type tag {raw:#06x}"),
            Self::NotANodeRefList { raw } => {
                write!(f, "item type {raw:#06x} is not a node reference list")
            }
        }
    }
}

impl Error for ItemTypeError {}
