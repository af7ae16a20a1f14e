//! Content-keyed visited set.
//!
//! Maps a fingerprint to a small bucket of node IDs whose configurations are
//! compared with `==` on lookup, so a fingerprint collision between unequal
//! configurations never hides a state.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::node::NodeId;
use super::tree::SearchTree;

/// Bucket of nodes sharing one fingerprint; almost always a single entry.
type Bucket = SmallVec<[NodeId; 2]>;

/// Configurations already expanded (or discovered, for depth-first search).
///
/// Entries are added once and never removed during a run.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    buckets: FxHashMap<u64, Bucket>,
    len: usize,
    collisions: usize,
}

impl VisitedSet {
    /// Create an empty visited set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a configuration equal to `configuration` was recorded.
    #[must_use]
    pub fn contains<C: Eq, A>(
        &self,
        tree: &SearchTree<C, A>,
        fingerprint: u64,
        configuration: &C,
    ) -> bool {
        self.buckets.get(&fingerprint).map_or(false, |bucket| {
            bucket
                .iter()
                .any(|&id| tree.configuration(id) == configuration)
        })
    }

    /// Record node `id` under `fingerprint`.
    ///
    /// Returns `false` (and records nothing) if an equal configuration is
    /// already present.
    pub fn insert<C: Eq, A>(&mut self, tree: &SearchTree<C, A>, fingerprint: u64, id: NodeId) -> bool {
        let configuration = tree.configuration(id);
        let bucket = self.buckets.entry(fingerprint).or_default();
        if bucket
            .iter()
            .any(|&other| tree.configuration(other) == configuration)
        {
            return false;
        }
        if !bucket.is_empty() {
            self.collisions += 1;
        }
        bucket.push(id);
        self.len += 1;
        true
    }

    /// Number of distinct configurations recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of insertions that landed in an already occupied bucket.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
