//! Owned, growable node-reference lists.
//!
//! [`NodeRefVec`] is the heap-side twin of the packed arena list: a kind
//! tag plus a `SmallVec` of values. Short ways and rings (the common case)
//! stay inline without a heap allocation.

use smallvec::SmallVec;

use crate::item_type::NodeRefListKind;
use crate::node_ref::NodeRef;
use crate::traits::NodeRefSequence;

/// Inline capacity before spilling to the heap.
const INLINE_REFS: usize = 8;

/// An owned list of node references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRefVec {
    kind: NodeRefListKind,
    refs: SmallVec<[NodeRef; INLINE_REFS]>,
}

impl NodeRefVec {
    /// Create an empty list of the given kind.
    pub fn new(kind: NodeRefListKind) -> Self {
        Self {
            kind,
            refs: SmallVec::new(),
        }
    }

    /// Create a list of the given kind from a sequence of references.
    pub fn from_refs(kind: NodeRefListKind, refs: impl IntoIterator<Item = NodeRef>) -> Self {
        Self {
            kind,
            refs: refs.into_iter().collect(),
        }
    }

    /// Which kind of list this is.
    pub fn kind(&self) -> NodeRefListKind {
        self.kind
    }

    /// Append a reference.
    pub fn push(&mut self, node_ref: NodeRef) {
        self.refs.push(node_ref);
    }

    /// The references as a slice.
    pub fn as_slice(&self) -> &[NodeRef] {
        &self.refs
    }

    /// The references as a mutable slice, for in-place edits.
    pub fn as_mut_slice(&mut self) -> &mut [NodeRef] {
        &mut self.refs
    }

    /// Iterate over the references front-to-back.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeRef> {
        self.refs.iter()
    }

    /// Iterate mutably over the references.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, NodeRef> {
        self.refs.iter_mut()
    }

    /// Whether the references have spilled out of inline storage.
    pub fn spilled(&self) -> bool {
        self.refs.spilled()
    }
}

impl NodeRefSequence for NodeRefVec {
    fn len(&self) -> usize {
        self.refs.len()
    }

    fn get(&self, index: usize) -> Option<NodeRef> {
        self.refs.get(index).copied()
    }
}

impl Extend<NodeRef> for NodeRefVec {
    fn extend<I: IntoIterator<Item = NodeRef>>(&mut self, iter: I) {
        self.refs.extend(iter);
    }
}

impl IntoIterator for NodeRefVec {
    type Item = NodeRef;
    type IntoIter = smallvec::IntoIter<[NodeRef; INLINE_REFS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeRefVec {
    type Item = &'a NodeRef;
    type IntoIter = std::slice::Iter<'a, NodeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}
