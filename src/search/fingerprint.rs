//! Content fingerprints for configuration deduplication.
//!
//! A fingerprint is a hash plus the type's `Eq`. Equal configurations must
//! produce equal fingerprints; unequal ones may collide, and the visited set
//! resolves collisions with a full equality check.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Golden-ratio constant used by [`hash_combine`].
pub const GOLDEN_RATIO: u64 = 0x9e37_79b9;

/// Deterministic content hash of a configuration.
///
/// Must satisfy `a == b => a.fingerprint() == b.fingerprint()` and be stable
/// across repeated calls on the same value.
pub trait Fingerprint {
    /// Compute the fingerprint.
    fn fingerprint(&self) -> u64;
}

/// Fingerprint any `Hash` value with `FxHasher`.
///
/// For configurations whose derived `Hash` already follows content equality.
#[must_use]
pub fn fx_fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Order-sensitive mix of `value` into `seed`.
///
/// Permuting the sequence of mixed values changes the result, which is what
/// separates two tableaus holding the same cards in different stacks.
#[inline]
#[must_use]
pub fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_fingerprint_stable() {
        let value = (1u8, vec![2u16, 3, 4]);
        assert_eq!(fx_fingerprint(&value), fx_fingerprint(&value.clone()));
    }

    #[test]
    fn test_hash_combine_order_sensitive() {
        let ab = hash_combine(hash_combine(0, 1), 2);
        let ba = hash_combine(hash_combine(0, 2), 1);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_hash_combine_deterministic() {
        assert_eq!(hash_combine(17, 99), hash_combine(17, 99));
    }
}
