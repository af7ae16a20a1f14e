//! Path reconstruction from a terminal node back to the root.

use super::node::NodeId;
use super::tree::SearchTree;

/// Collect the actions leading from the root to `terminal`, in forward order.
///
/// Returns the empty sequence for the root. Terminates because parent links
/// in the arena always point at strictly older nodes.
pub fn reconstruct_path<C, A: Clone>(tree: &SearchTree<C, A>, terminal: NodeId) -> Vec<A> {
    let mut actions: Vec<A> = tree
        .ancestors(terminal)
        .filter_map(|id| tree.get(id).action.clone())
        .collect();
    actions.reverse();
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::node::SearchNode;

    #[test]
    fn test_root_yields_empty_path() {
        let tree: SearchTree<u32, char> = SearchTree::new(0);
        assert!(reconstruct_path(&tree, tree.root()).is_empty());
    }

    #[test]
    fn test_path_is_root_to_terminal_order() {
        let mut tree = SearchTree::new(0u32);
        let a = tree.alloc(SearchNode::child(1, tree.root(), 0, 'a'));
        let _sibling = tree.alloc(SearchNode::child(5, tree.root(), 0, 'z'));
        let b = tree.alloc(SearchNode::child(2, a, 1, 'b'));
        let c = tree.alloc(SearchNode::child(3, b, 2, 'c'));

        assert_eq!(reconstruct_path(&tree, c), vec!['a', 'b', 'c']);
        assert_eq!(reconstruct_path(&tree, a), vec!['a']);
    }

    #[test]
    fn test_path_length_matches_depth() {
        let mut tree = SearchTree::new(0u32);
        let mut id = tree.root();
        for step in 0..10u32 {
            let depth = tree.get(id).depth;
            id = tree.alloc(SearchNode::child(step + 1, id, depth, step));
        }
        let path = reconstruct_path(&tree, id);
        assert_eq!(path.len() as u32, tree.get(id).depth);
        assert_eq!(path, (0..10).collect::<Vec<_>>());
    }
}
