//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use tessera_core::ItemType;

/// Errors that can occur during arena operations.
///
/// Everything past `InvalidOffset` describes bytes that do not form a
/// valid item: a bug in whatever produced the buffer, never a condition
/// a well-behaved builder can trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The buffer cannot grow to fit the reservation.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Capacity available to the buffer.
        capacity: usize,
    },
    /// An item would grow past what its `u32` size field can record.
    ItemTooLarge {
        /// The size the item would have reached.
        byte_size: usize,
    },
    /// An `ItemHandle` from before the last `clear()`.
    StaleHandle {
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The buffer's current generation.
        current: u32,
    },
    /// A handle offset that does not start an item in the committed region.
    InvalidOffset {
        /// The offending offset.
        offset: usize,
        /// Size of the committed region.
        committed: usize,
    },
    /// The bytes end before the item they are supposed to hold.
    Truncated {
        /// Bytes the header says the item needs.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },
    /// The header declares a size smaller than the header itself.
    UndersizedItem {
        /// The declared size.
        byte_size: u32,
    },
    /// A list payload is not a whole number of node-reference records.
    MisalignedPayload {
        /// Payload length in bytes.
        payload_bytes: usize,
    },
    /// The header carries a type tag this build does not know.
    UnknownItemType {
        /// The unrecognised raw tag.
        raw: u16,
    },
    /// The item is valid but not of the type the caller asked for.
    WrongItemType {
        /// The type found in the header.
        found: ItemType,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::ItemTooLarge { byte_size } => {
                write!(f, "item of {byte_size} bytes exceeds the u32 size field")
            }
            Self::StaleHandle {
                handle_generation,
                current,
            } => {
                write!(
                    f,
                    "stale handle: generation {handle_generation}, current {current}"
                )
            }
            Self::InvalidOffset { offset, committed } => {
                write!(
                    f,
                    "offset {offset} is not an item in the committed region of {committed} bytes"
                )
            }
            Self::Truncated { needed, available } => {
                write!(
                    f,
                    "truncated item: needs {needed} bytes, {available} available"
                )
            }
            Self::UndersizedItem { byte_size } => {
                write!(f, "item size {byte_size} is smaller than its header")
            }
            Self::MisalignedPayload { payload_bytes } => {
                write!(
                    f,
                    "payload of {payload_bytes} bytes is not a whole number of node references"
                )
            }
            Self::UnknownItemType { raw } => {
                write!(f, "unknown item type tag {raw:#06x}")
            }
            Self::WrongItemType { found } => {
                write!(f, "item is a {found}, not a node reference list")
            }
        }
    }
}

impl Error for ArenaError {}
