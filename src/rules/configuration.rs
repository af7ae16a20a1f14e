//! Configuration trait for game implementations.

use std::fmt::Debug;

use crate::search::fingerprint::Fingerprint;

/// An immutable game configuration the search can explore.
///
/// ## Implementation Notes
///
/// - `legal_actions`: order is significant, BFS and DFS expand successors
///   in exactly this order
/// - `apply`: must be pure and deterministic; it is only ever called with
///   actions returned by `legal_actions` on the same configuration
/// - `Eq` must be content equality, never identity
pub trait Configuration: Clone + Eq + Fingerprint {
    /// A replayable transformation between configurations.
    type Action: Clone + Debug;

    /// Check whether this configuration satisfies the win condition.
    fn is_final(&self) -> bool;

    /// Enumerate the legal actions from this configuration.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply a legal action, producing the successor configuration.
    fn apply(&self, action: &Self::Action) -> Self;
}

/// Apply `actions` in order starting from `initial`.
///
/// Used to check a returned solution: replaying it must land on a final
/// configuration.
pub fn replay<C: Configuration>(initial: &C, actions: &[C::Action]) -> C {
    actions
        .iter()
        .fold(initial.clone(), |state, action| state.apply(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fingerprint::fx_fingerprint;

    // Counter that is final at 3; the only action adds one.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Counter(u32);

    impl Fingerprint for Counter {
        fn fingerprint(&self) -> u64 {
            fx_fingerprint(self)
        }
    }

    impl Configuration for Counter {
        type Action = u32;

        fn is_final(&self) -> bool {
            self.0 == 3
        }

        fn legal_actions(&self) -> Vec<u32> {
            vec![1]
        }

        fn apply(&self, action: &u32) -> Self {
            Counter(self.0 + action)
        }
    }

    #[test]
    fn test_replay_applies_in_order() {
        let end = replay(&Counter(0), &[1, 1, 1]);
        assert_eq!(end, Counter(3));
        assert!(end.is_final());
    }

    #[test]
    fn test_replay_empty_is_identity() {
        assert_eq!(replay(&Counter(2), &[]), Counter(2));
    }
}
