//! The fixed 8-byte header that prefixes every arena item.
//!
//! ```text
//! 0..4   byte_size  u32 LE   total item bytes, header included, unpadded
//! 4..6   item_type  u16 LE   ItemType tag
//! 6..8   flags      u16 LE   bit 0 = removed, other bits zero
//! ```
//!
//! Items start on [`ALIGN_BYTES`] boundaries; the next item begins at
//! `padded_length(byte_size)` past the current one.

use tessera_core::ItemType;

use crate::error::ArenaError;

/// Size of an encoded [`ItemHeader`] in bytes.
pub const HEADER_SIZE: usize = 8;

/// Alignment of every item start within a buffer.
pub const ALIGN_BYTES: usize = 8;

/// Flag bit marking an item as removed.
const FLAG_REMOVED: u16 = 0x0001;

/// Round `len` up to the next multiple of [`ALIGN_BYTES`].
///
/// Returns `None` on overflow.
pub fn padded_length(len: usize) -> Option<usize> {
    len.checked_add(ALIGN_BYTES - 1)
        .map(|n| n & !(ALIGN_BYTES - 1))
}

/// Decoded item header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemHeader {
    byte_size: u32,
    item_type: ItemType,
    flags: u16,
}

impl ItemHeader {
    /// A header for an item of `item_type` with no payload yet.
    pub fn new(item_type: ItemType) -> Self {
        Self {
            byte_size: HEADER_SIZE as u32,
            item_type,
            flags: 0,
        }
    }

    /// Total item size in bytes, header included, without padding.
    pub fn byte_size(&self) -> u32 {
        self.byte_size
    }

    /// Total item size rounded up to the next item boundary.
    pub fn padded_size(&self) -> usize {
        // byte_size <= u32::MAX, so padding fits in usize on every supported target.
        padded_length(self.byte_size as usize).unwrap_or(usize::MAX)
    }

    /// The item's type tag.
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Whether the removed flag is set.
    pub fn is_removed(&self) -> bool {
        self.flags & FLAG_REMOVED != 0
    }

    /// Payload size in bytes (everything after the header).
    pub fn payload_size(&self) -> usize {
        (self.byte_size as usize).saturating_sub(HEADER_SIZE)
    }

    /// Encode as [`HEADER_SIZE`] little-endian bytes.
    pub fn to_le_bytes(self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.byte_size.to_le_bytes());
        out[4..6].copy_from_slice(&self.item_type.as_u16().to_le_bytes());
        out[6..8].copy_from_slice(&self.flags.to_le_bytes());
        out
    }

    /// Decode a header from the start of `bytes`.
    ///
    /// Checks only that the header itself is readable and well-formed:
    /// the tag is known and the declared size covers at least the header.
    /// Whether the payload fits in `bytes` is left to the caller.
    pub fn read_from(bytes: &[u8]) -> Result<Self, ArenaError> {
        let raw = bytes.get(..HEADER_SIZE).ok_or(ArenaError::Truncated {
            needed: HEADER_SIZE,
            available: bytes.len(),
        })?;
        let byte_size = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
        let tag = u16::from_le_bytes([raw[4], raw[5]]);
        let flags = u16::from_le_bytes([raw[6], raw[7]]);

        if (byte_size as usize) < HEADER_SIZE {
            return Err(ArenaError::UndersizedItem { byte_size });
        }
        let item_type =
            ItemType::try_from(tag).map_err(|_| ArenaError::UnknownItemType { raw: tag })?;

        Ok(Self {
            byte_size,
            item_type,
            flags,
        })
    }

    /// Encode into the first [`HEADER_SIZE`] bytes of `out`.
    pub(crate) fn write_to(self, out: &mut [u8]) {
        out[..HEADER_SIZE].copy_from_slice(&self.to_le_bytes());
    }

    pub(crate) fn with_byte_size(mut self, byte_size: u32) -> Self {
        self.byte_size = byte_size;
        self
    }

    pub(crate) fn with_removed(mut self, removed: bool) -> Self {
        if removed {
            self.flags |= FLAG_REMOVED;
        } else {
            self.flags &= !FLAG_REMOVED;
        }
        self
    }
}
