//! Node references: a node id plus an optional cached location.

use std::fmt;

use crate::id::NodeId;
use crate::location::Location;

/// Size in bytes of one encoded [`NodeRef`] record.
pub const NODE_REF_SIZE: usize = 16;

/// A reference to a node, as stored in ways and rings.
///
/// The location is a cache: it may be undefined when the referencing
/// object has not been joined against node coordinates yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeRef {
    id: NodeId,
    location: Location,
}

impl NodeRef {
    /// Create a reference with the given id and location.
    pub fn new(id: i64, location: Location) -> Self {
        Self {
            id: NodeId(id),
            location,
        }
    }

    /// Create a reference with an undefined location.
    pub fn with_id(id: i64) -> Self {
        Self::new(id, Location::UNDEFINED)
    }

    /// The referenced node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Absolute value of the referenced node id.
    pub fn positive_id(&self) -> u64 {
        self.id.positive()
    }

    /// The cached location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Replace the cached location.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Encode as a 16-byte little-endian record: id, x, y.
    pub fn to_le_bytes(self) -> [u8; NODE_REF_SIZE] {
        let mut out = [0u8; NODE_REF_SIZE];
        out[..8].copy_from_slice(&self.id.0.to_le_bytes());
        out[8..].copy_from_slice(&self.location.to_le_bytes());
        out
    }

    /// Decode a 16-byte little-endian record.
    pub fn from_le_bytes(bytes: [u8; NODE_REF_SIZE]) -> Self {
        let mut id = [0u8; 8];
        let mut location = [0u8; 8];
        id.copy_from_slice(&bytes[..8]);
        location.copy_from_slice(&bytes[8..]);
        Self {
            id: NodeId(i64::from_le_bytes(id)),
            location: Location::from_le_bytes(location),
        }
    }

    /// Decode a record from the first [`NODE_REF_SIZE`] bytes of `bytes`.
    ///
    /// Returns `None` if the slice is too short.
    pub fn read_from(bytes: &[u8]) -> Option<Self> {
        let record = bytes.get(..NODE_REF_SIZE)?;
        let mut buf = [0u8; NODE_REF_SIZE];
        buf.copy_from_slice(record);
        Some(Self::from_le_bytes(buf))
    }

    /// Encode this record into the first [`NODE_REF_SIZE`] bytes of `out`.
    ///
    /// Returns `false` (writing nothing) if the slice is too short.
    pub fn write_to(&self, out: &mut [u8]) -> bool {
        match out.get_mut(..NODE_REF_SIZE) {
            Some(record) => {
                record.copy_from_slice(&self.to_le_bytes());
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}@{}", self.id, self.location)
    }
}
