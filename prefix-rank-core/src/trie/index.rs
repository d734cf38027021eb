//! Define an index wrapper for the trie arena.
//! Keeping the inner integer private makes sure an index can only be created
//! by the arena code, so a stored index always points to a live node.

use std::num::NonZeroU32;

/// Represent a valid position in the [Trie](crate::Trie) node arena.
/// It cannot be 0 because the 0th node is the trie root, which is a child
/// to none. This enables `Option<NodeIndex>` to take no more memory than
/// the index itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct NodeIndex {
    index: NonZeroU32,
}

impl NodeIndex {
    /// Wrap an arena position. Return None for the root position 0.
    pub(crate) fn new(position: usize) -> Option<Self> {
        NonZeroU32::new(position as u32).map(|index| Self { index })
    }
}

impl From<NodeIndex> for usize {
    fn from(value: NodeIndex) -> Self {
        value.index.get() as usize
    }
}
