//! Const-generic univariate jet: `Jet<F, K>`.
//!
//! `K` is the total number of derivative slots. `derivs[0]` is the value and
//! `derivs[n] = f^(n)(t₀)` is the raw n-th derivative, so the highest order a
//! jet carries is `K - 1`.
//!
//! Stack-allocated and `Copy`. Every operator returns a new jet.

use std::fmt::{self, Display};

use crate::binomial::MAX_JET_LEN;
use crate::jet_ops;
use crate::Float;

/// Stack-allocated jet of raw derivatives.
///
/// `K` = slot count, `1 ≤ K ≤ 8`. `derivs[0]` = value, `derivs[n]` = `f^(n)(t₀)`.
#[derive(Clone, Copy, Debug)]
pub struct Jet<F: Float, const K: usize> {
    pub(crate) derivs: [F; K],
}

impl<F: Float, const K: usize> Default for Jet<F, K> {
    fn default() -> Self {
        Jet::new([F::zero(); K])
    }
}

impl<F: Float, const K: usize> Display for Jet<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.derivs[0])?;
        for (n, d) in self.derivs.iter().enumerate().skip(1) {
            write!(f, "; d{}={}", n, d)?;
        }
        Ok(())
    }
}

impl<F: Float, const K: usize> From<F> for Jet<F, K> {
    #[inline]
    fn from(val: F) -> Self {
        Jet::constant(val)
    }
}

impl<F: Float, const K: usize> Jet<F, K> {
    const SHAPE: () = assert!(
        K >= 1 && K <= MAX_JET_LEN,
        "Jet<F, K> needs 1 <= K <= 8 derivative slots"
    );

    /// Create a jet from its raw derivatives.
    #[inline]
    pub fn new(derivs: [F; K]) -> Self {
        let () = Self::SHAPE;
        Jet { derivs }
    }

    /// Create a constant: value `val`, every derivative zero.
    #[inline]
    pub fn constant(val: F) -> Self {
        let mut derivs = [F::zero(); K];
        derivs[0] = val;
        Jet::new(derivs)
    }

    /// Create a variable: value `val`, first derivative 1, rest zero.
    ///
    /// Represents the identity function `t ↦ val + (t - t₀)`.
    #[inline]
    pub fn variable(val: F) -> Self {
        let mut derivs = [F::zero(); K];
        jet_ops::jet_variable(val, &mut derivs);
        Jet::new(derivs)
    }

    /// Highest derivative order carried (`K - 1`).
    #[inline]
    pub fn order(&self) -> usize {
        K - 1
    }

    /// Primal value (derivative of order 0).
    #[inline]
    pub fn value(&self) -> F {
        self.derivs[0]
    }

    /// The raw derivative of order `n`.
    ///
    /// # Panics
    ///
    /// If `n` exceeds the jet's order.
    #[inline]
    pub fn derivative(&self, n: usize) -> F {
        assert!(n < K, "derivative order {} exceeds jet order {}", n, K - 1);
        self.derivs[n]
    }

    /// Overwrite the raw derivative of order `n`.
    ///
    /// # Panics
    ///
    /// If `n` exceeds the jet's order.
    #[inline]
    pub fn set(&mut self, n: usize, val: F) {
        assert!(n < K, "derivative order {} exceeds jet order {}", n, K - 1);
        self.derivs[n] = val;
    }

    /// All raw derivatives, value first.
    #[inline]
    pub fn derivatives(&self) -> &[F; K] {
        &self.derivs
    }

    // ── Elemental methods ──
    // Each delegates to jet_ops with stack arrays as scratch.

    #[inline]
    pub fn recip(self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_recip(&self.derivs, &mut c);
        Jet { derivs: c }
    }

    #[inline]
    pub fn powf(self, p: F) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_powf(&self.derivs, p, &mut c);
        Jet { derivs: c }
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_sqrt(&self.derivs, &mut c);
        Jet { derivs: c }
    }

    #[inline]
    pub fn cbrt(self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_cbrt(&self.derivs, &mut c);
        Jet { derivs: c }
    }

    #[inline]
    pub fn exp(self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_exp(&self.derivs, &mut c);
        Jet { derivs: c }
    }

    #[inline]
    pub fn ln(self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_ln(&self.derivs, &mut c);
        Jet { derivs: c }
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.sin_cos().0
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.sin_cos().1
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let mut s = [F::zero(); K];
        let mut co = [F::zero(); K];
        jet_ops::jet_sin_cos(&self.derivs, &mut s, &mut co);
        (Jet { derivs: s }, Jet { derivs: co })
    }

    #[inline]
    pub fn tan(self) -> Self {
        let mut c = [F::zero(); K];
        let mut s = [F::zero(); K];
        let mut co = [F::zero(); K];
        jet_ops::jet_tan(&self.derivs, &mut c, &mut s, &mut co);
        Jet { derivs: c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_has_identity_pattern() {
        let x = Jet::<f64, 4>::variable(3.0);
        assert_eq!(x.derivatives(), &[3.0, 1.0, 0.0, 0.0]);
        assert_eq!(x.order(), 3);
    }

    #[test]
    fn single_slot_variable_is_constant() {
        let x = Jet::<f64, 1>::variable(3.0);
        assert_eq!(x.derivatives(), &[3.0]);
    }

    #[test]
    fn set_then_read_back() {
        let mut x = Jet::<f64, 3>::constant(1.0);
        x.set(2, 4.0);
        assert_eq!(x.derivative(2), 4.0);
        assert_eq!(x.derivative(1), 0.0);
    }

    #[test]
    #[should_panic(expected = "exceeds jet order")]
    fn derivative_past_order_panics() {
        let x = Jet::<f64, 3>::variable(1.0);
        let _ = x.derivative(3);
    }
}
