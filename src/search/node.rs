//! Search node structures.
//!
//! Uses arena-based allocation with index references (`NodeId`) so parent
//! links never need reference counting or manual lifetimes.

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Node ID for an arena index. Panics past `u32::MAX`, the arena's cap.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(id) => Self(id),
            Err(_) => panic!("search tree exceeds {} nodes", u32::MAX),
        }
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// An immutable node of the search tree.
///
/// A non-root node's `configuration` is the parent's configuration with
/// `action` applied, and `depth` is the number of ancestors.
#[derive(Clone, Debug)]
pub struct SearchNode<C, A> {
    /// The configuration this node represents.
    pub configuration: C,

    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,

    /// Action that produced this node from its parent (`None` for the root).
    pub action: Option<A>,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Best-first priority, `depth + heuristic` (A* only).
    pub priority: Option<f64>,
}

impl<C, A> SearchNode<C, A> {
    /// Create a root node.
    pub fn root(configuration: C) -> Self {
        Self {
            configuration,
            parent: None,
            action: None,
            depth: 0,
            priority: None,
        }
    }

    /// Create a child of `parent` reached via `action`.
    pub fn child(configuration: C, parent: NodeId, parent_depth: u32, action: A) -> Self {
        Self {
            configuration,
            parent: Some(parent),
            action: Some(action),
            depth: parent_depth + 1,
            priority: None,
        }
    }

    /// Attach a best-first priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Check if this is the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
