//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The arena only
//! grows during a run, so every `NodeId` handed out stays valid and every
//! node keeps exactly one parent: the structure is a tree by construction.

use super::node::{NodeId, SearchNode};

/// Arena owning every node created during one search run.
#[derive(Clone, Debug)]
pub struct SearchTree<C, A> {
    nodes: Vec<SearchNode<C, A>>,
}

impl<C, A> SearchTree<C, A> {
    /// Create a tree holding only the root configuration.
    pub fn new(root: C) -> Self {
        Self::with_capacity(root, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root: C, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root(root));
        Self { nodes }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<C, A> {
        &self.nodes[id.index()]
    }

    /// Configuration of a node.
    #[inline]
    #[must_use]
    pub fn configuration(&self, id: NodeId) -> &C {
        &self.get(id).configuration
    }

    /// Allocate a new node, returning its ID.
    ///
    /// Panics once the arena would hold more than `u32::MAX + 1` nodes.
    pub fn alloc(&mut self, node: SearchNode<C, A>) -> NodeId {
        debug_assert!(
            node.parent.map_or(false, |p| p.index() < self.nodes.len()),
            "non-root nodes must point at an existing parent"
        );
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is allocated at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to the root, yielding each node ID (`id` first).
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.get(current).parent)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<C, A>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Deepest node depth in the tree.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}
