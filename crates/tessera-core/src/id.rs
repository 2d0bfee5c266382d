//! Strongly-typed node identifiers.

use std::fmt;

/// Identifies a node (a geographic point) by its object id.
///
/// Ids are signed: negative values are legal and conventionally mark
/// objects created locally that have not been assigned a global id yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i64);

impl NodeId {
    /// The raw signed id.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Absolute value of the id.
    ///
    /// Returned as `u64` so that `NodeId(i64::MIN)` maps to `2^63`
    /// instead of overflowing.
    pub fn positive(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_strips_sign() {
        assert_eq!(NodeId(-17).positive(), 17);
        assert_eq!(NodeId(17).positive(), 17);
        assert_eq!(NodeId(i64::MIN).positive(), 1u64 << 63);
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(NodeId(-3).to_string(), "-3");
    }
}
