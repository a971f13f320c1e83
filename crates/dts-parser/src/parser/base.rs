//! Node handles.

/// Index of a node in a `NodeArena`. `NodeIndex::NONE` marks an absent child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}

/// Position used by nodes created by transforms rather than parsed from text.
pub const NO_POS: u32 = u32::MAX;

/// Ordered child list. `pos` is the full start of the first element's
/// position, `end` the full start of the token that closed the list, so
/// `end` is where comments before a closing `}` begin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
    pub pos: u32,
    pub end: u32,
}

impl NodeList {
    #[must_use]
    pub fn new(nodes: Vec<NodeIndex>, pos: u32, end: u32) -> Self {
        NodeList { nodes, pos, end }
    }

    /// A list that does not correspond to any source range.
    #[must_use]
    pub fn synthesized(nodes: Vec<NodeIndex>) -> Self {
        NodeList {
            nodes,
            pos: NO_POS,
            end: NO_POS,
        }
    }

    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        self.pos == NO_POS
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
