//! Precomputed combinatorial tables for the multivariate product and chain rules.
//!
//! Both tables are literal data indexed by arity (the number of
//! differentiation labels of the target derivative), `0..=MAX_ORDER`.
//! Positions are 0-based offsets into the target's active label list.
//!
//! - [`LEIBNIZ_PAIRS`]`[n]`: the `2^n` ways to hand each of `n` labelled
//!   directions to the left or the right factor of a product.
//! - [`SET_PARTITIONS`]`[n]`: the `Bell(n)` set partitions of `n` labelled
//!   directions into non-empty blocks (Faà di Bruno terms).
//!
//! The data is the output of [`enumerate`]; regenerate it from there when
//! raising [`MAX_ORDER`].

pub mod enumerate;

/// Largest supported total derivative order (and arity) for a
/// [`Series`](crate::Series).
pub const MAX_ORDER: usize = 4;

/// One term of the generalized Leibniz rule: which label positions go to the
/// left factor and which to the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeibnizPair {
    pub left: &'static [u8],
    pub right: &'static [u8],
}

/// One Faà di Bruno term: a set partition given as its blocks of positions.
pub type SetPartition = &'static [&'static [u8]];

/// Subset/complement splits per arity.
pub static LEIBNIZ_PAIRS: [&[LeibnizPair]; MAX_ORDER + 1] = [
    // arity 0
    &[
        LeibnizPair { left: &[], right: &[] },
    ],
    // arity 1
    &[
        LeibnizPair { left: &[0], right: &[] },
        LeibnizPair { left: &[], right: &[0] },
    ],
    // arity 2
    &[
        LeibnizPair { left: &[0, 1], right: &[] },
        LeibnizPair { left: &[0], right: &[1] },
        LeibnizPair { left: &[1], right: &[0] },
        LeibnizPair { left: &[], right: &[0, 1] },
    ],
    // arity 3
    &[
        LeibnizPair { left: &[0, 1, 2], right: &[] },
        LeibnizPair { left: &[0, 1], right: &[2] },
        LeibnizPair { left: &[0, 2], right: &[1] },
        LeibnizPair { left: &[0], right: &[1, 2] },
        LeibnizPair { left: &[1, 2], right: &[0] },
        LeibnizPair { left: &[1], right: &[0, 2] },
        LeibnizPair { left: &[2], right: &[0, 1] },
        LeibnizPair { left: &[], right: &[0, 1, 2] },
    ],
    // arity 4
    &[
        LeibnizPair { left: &[0, 1, 2, 3], right: &[] },
        LeibnizPair { left: &[0, 1, 2], right: &[3] },
        LeibnizPair { left: &[0, 1, 3], right: &[2] },
        LeibnizPair { left: &[0, 1], right: &[2, 3] },
        LeibnizPair { left: &[0, 2, 3], right: &[1] },
        LeibnizPair { left: &[0, 2], right: &[1, 3] },
        LeibnizPair { left: &[0, 3], right: &[1, 2] },
        LeibnizPair { left: &[0], right: &[1, 2, 3] },
        LeibnizPair { left: &[1, 2, 3], right: &[0] },
        LeibnizPair { left: &[1, 2], right: &[0, 3] },
        LeibnizPair { left: &[1, 3], right: &[0, 2] },
        LeibnizPair { left: &[1], right: &[0, 2, 3] },
        LeibnizPair { left: &[2, 3], right: &[0, 1] },
        LeibnizPair { left: &[2], right: &[0, 1, 3] },
        LeibnizPair { left: &[3], right: &[0, 1, 2] },
        LeibnizPair { left: &[], right: &[0, 1, 2, 3] },
    ],
];

/// Set partitions per arity.
pub static SET_PARTITIONS: [&[SetPartition]; MAX_ORDER + 1] = [
    // arity 0
    &[
        &[],
    ],
    // arity 1
    &[
        &[&[0]],
    ],
    // arity 2
    &[
        &[&[0, 1]],
        &[&[0], &[1]],
    ],
    // arity 3
    &[
        &[&[0, 1, 2]],
        &[&[0, 1], &[2]],
        &[&[0, 2], &[1]],
        &[&[0], &[1, 2]],
        &[&[0], &[1], &[2]],
    ],
    // arity 4
    &[
        &[&[0, 1, 2, 3]],
        &[&[0, 1, 2], &[3]],
        &[&[0, 1, 3], &[2]],
        &[&[0, 1], &[2, 3]],
        &[&[0, 1], &[2], &[3]],
        &[&[0, 2, 3], &[1]],
        &[&[0, 2], &[1, 3]],
        &[&[0, 2], &[1], &[3]],
        &[&[0, 3], &[1, 2]],
        &[&[0], &[1, 2, 3]],
        &[&[0], &[1, 2], &[3]],
        &[&[0, 3], &[1], &[2]],
        &[&[0], &[1, 3], &[2]],
        &[&[0], &[1], &[2, 3]],
        &[&[0], &[1], &[2], &[3]],
    ],
];

/// Product-rule terms for a target of the given arity.
///
/// # Panics
///
/// If `arity > MAX_ORDER`.
#[inline]
pub fn leibniz_pairs(arity: usize) -> &'static [LeibnizPair] {
    assert!(
        arity <= MAX_ORDER,
        "no Leibniz table for arity {} (supported up to {})",
        arity,
        MAX_ORDER
    );
    LEIBNIZ_PAIRS[arity]
}

/// Chain-rule terms for a target of the given arity.
///
/// # Panics
///
/// If `arity > MAX_ORDER`.
#[inline]
pub fn set_partitions(arity: usize) -> &'static [SetPartition] {
    assert!(
        arity <= MAX_ORDER,
        "no set-partition table for arity {} (supported up to {})",
        arity,
        MAX_ORDER
    );
    SET_PARTITIONS[arity]
}
