//! Synthetic search spaces shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use freecell_search::search::fx_fingerprint;
use freecell_search::{Configuration, Fingerprint};

/// Final node of [`Graph`].
pub const GOAL: u32 = 6;

/// Successors of each node of a small directed graph with cycles.
///
/// The shortest route from 0 to [`GOAL`] is 0 -> 1 -> 4 -> 6. A longer one
/// runs 0 -> 2 -> 5 -> 7 -> 6, and node 3 is a dead end with a self-loop.
pub fn edges(node: u32) -> &'static [u32] {
    match node {
        0 => &[2, 1, 3],
        1 => &[0, 4],
        2 => &[5, 0],
        3 => &[3, 0],
        4 => &[1, 6],
        5 => &[7, 2],
        7 => &[6],
        _ => &[],
    }
}

/// Exact remaining distance to [`GOAL`]; consistent on [`edges`].
pub fn distance(node: u32) -> f64 {
    match node {
        6 => 0.0,
        4 | 7 => 1.0,
        1 | 5 => 2.0,
        0 | 2 => 3.0,
        _ => 4.0,
    }
}

/// Position in the graph. An action is the node moved to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Graph(pub u32);

impl Fingerprint for Graph {
    fn fingerprint(&self) -> u64 {
        fx_fingerprint(&self.0)
    }
}

impl Configuration for Graph {
    type Action = u32;

    fn is_final(&self) -> bool {
        self.0 == GOAL
    }

    fn legal_actions(&self) -> Vec<u32> {
        edges(self.0).to_vec()
    }

    fn apply(&self, action: &u32) -> Self {
        Graph(*action)
    }
}

/// A* heuristic over [`Graph`].
pub fn graph_distance(graph: &Graph) -> f64 {
    distance(graph.0)
}

/// [`Graph`] whose fingerprint is constant, so every lookup collides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colliding(pub u32);

impl Fingerprint for Colliding {
    fn fingerprint(&self) -> u64 {
        0
    }
}

impl Configuration for Colliding {
    type Action = u32;

    fn is_final(&self) -> bool {
        self.0 == GOAL
    }

    fn legal_actions(&self) -> Vec<u32> {
        edges(self.0).to_vec()
    }

    fn apply(&self, action: &u32) -> Self {
        Colliding(*action)
    }
}

/// Wraps a configuration and logs every expansion into a shared journal.
///
/// Each strategy asks a node for its actions exactly once, when expanding
/// it, so the journal lists expanded configurations in order.
#[derive(Clone, Debug)]
pub struct Recording<C> {
    pub inner: C,
    journal: Rc<RefCell<Vec<C>>>,
}

impl<C: Clone> Recording<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            journal: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Configurations expanded so far.
    pub fn expanded(&self) -> Vec<C> {
        self.journal.borrow().clone()
    }
}

impl<C: PartialEq> PartialEq for Recording<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Eq> Eq for Recording<C> {}

impl<C: Fingerprint> Fingerprint for Recording<C> {
    fn fingerprint(&self) -> u64 {
        self.inner.fingerprint()
    }
}

impl<C: Configuration> Configuration for Recording<C> {
    type Action = C::Action;

    fn is_final(&self) -> bool {
        self.inner.is_final()
    }

    fn legal_actions(&self) -> Vec<C::Action> {
        self.journal.borrow_mut().push(self.inner.clone());
        self.inner.legal_actions()
    }

    fn apply(&self, action: &C::Action) -> Self {
        Self {
            inner: self.inner.apply(action),
            journal: Rc::clone(&self.journal),
        }
    }
}

/// Whether `items` holds no two equal entries.
pub fn all_distinct<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| a != b))
}
