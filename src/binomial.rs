//! Binomial coefficients for the raw-derivative Leibniz rule.
//!
//! Jets store raw derivatives `f^(n)(t₀)`, not Taylor coefficients, so every
//! product-style recurrence weights its terms with `C(n, i)`.

use crate::Float;

/// Rows in [`BINOMIAL`]. A [`Jet`](crate::Jet) holds at most this many slots,
/// i.e. its highest derivative order is `MAX_JET_LEN - 1`.
pub const MAX_JET_LEN: usize = 8;

/// Pascal's triangle through degree 7: `BINOMIAL[n][k] = C(n, k)`, zero for `k > n`.
pub const BINOMIAL: [[u32; MAX_JET_LEN]; MAX_JET_LEN] = [
    [1, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 0],
    [1, 2, 1, 0, 0, 0, 0, 0],
    [1, 3, 3, 1, 0, 0, 0, 0],
    [1, 4, 6, 4, 1, 0, 0, 0],
    [1, 5, 10, 10, 5, 1, 0, 0],
    [1, 6, 15, 20, 15, 6, 1, 0],
    [1, 7, 21, 35, 35, 21, 7, 1],
];

/// `C(n, k)` as a float.
#[inline]
pub fn binom<F: Float>(n: usize, k: usize) -> F {
    F::from_count(BINOMIAL[n][k])
}
