//! Read interface shared by every node-reference list representation.

use crate::error::SequenceError;
use crate::node_ref::NodeRef;

/// Read-only access to an ordered list of node references.
///
/// Implemented by the packed arena view, its mutable counterpart, and the
/// owned `NodeRefVec`, so path and ring logic can be written once against
/// this trait. Only [`len`](Self::len) and [`get`](Self::get) are required;
/// everything else is derived from them.
///
/// Endpoint operations never invent a value for an empty list: they
/// return [`SequenceError::Empty`].
pub trait NodeRefSequence {
    /// Number of node references.
    fn len(&self) -> usize;

    /// The node reference at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<NodeRef>;

    /// Whether the list holds no node references.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checked indexed access.
    fn at(&self, index: usize) -> Result<NodeRef, SequenceError> {
        self.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// The first node reference.
    fn front(&self) -> Result<NodeRef, SequenceError> {
        self.get(0).ok_or(SequenceError::Empty)
    }

    /// The last node reference.
    fn back(&self) -> Result<NodeRef, SequenceError> {
        let last = self.len().checked_sub(1).ok_or(SequenceError::Empty)?;
        self.get(last).ok_or(SequenceError::Empty)
    }

    /// The first and last node references (the same one for a single-element list).
    fn ends(&self) -> Result<(NodeRef, NodeRef), SequenceError> {
        Ok((self.front()?, self.back()?))
    }

    /// Whether the list forms a closed ring: first and last reference
    /// name the same node.
    ///
    /// Only the endpoints are compared. A single-element list is closed.
    fn is_closed(&self) -> Result<bool, SequenceError> {
        let (first, last) = self.ends()?;
        Ok(first.id() == last.id())
    }

    /// Alias of [`is_closed`](Self::is_closed).
    fn ends_have_same_id(&self) -> Result<bool, SequenceError> {
        self.is_closed()
    }

    /// Whether first and last reference carry the same location.
    ///
    /// This is a geometric test and is independent of
    /// [`is_closed`](Self::is_closed): two distinct nodes may share a
    /// location, and two [`Location::UNDEFINED`](crate::Location::UNDEFINED)
    /// endpoints compare equal.
    fn ends_have_same_location(&self) -> Result<bool, SequenceError> {
        let (first, last) = self.ends()?;
        Ok(first.location() == last.location())
    }
}
