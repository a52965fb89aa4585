use num_traits::{One, Zero};

use crate::float::Float;
use crate::jet::Jet;
use crate::series::Series;

// ══════════════════════════════════════════════
//  Jet<F, K>
// ══════════════════════════════════════════════

impl<F: Float, const K: usize> Zero for Jet<F, K> {
    #[inline]
    fn zero() -> Self {
        Jet::constant(F::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.derivs.iter().all(|d| d.is_zero())
    }
}

impl<F: Float, const K: usize> One for Jet<F, K> {
    #[inline]
    fn one() -> Self {
        Jet::constant(F::one())
    }
}

// ══════════════════════════════════════════════
//  Series<F, N, K>
// ══════════════════════════════════════════════

impl<F: Float, const N: usize, const K: usize> Zero for Series<F, N, K> {
    #[inline]
    fn zero() -> Self {
        Series::zeros()
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.derivs.iter().all(|d| d.is_zero())
    }
}

impl<F: Float, const N: usize, const K: usize> One for Series<F, N, K> {
    #[inline]
    fn one() -> Self {
        Series::constant(F::one())
    }
}
