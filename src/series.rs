//! Multivariate jet: `Series<F, N, K>`.
//!
//! Holds every partial derivative of total order ≤ `K` of a function of `N`
//! variables at a fixed point, as raw (not factorial-scaled) values. The
//! symmetric derivative tensor is compressed through [`MultiIndex`]: one
//! slot per multiset of differentiation labels, addressed by its canonical
//! base-`(N + 1)` encoding. Offsets that are not canonical are padding and
//! stay zero.
//!
//! Products use the labelled Leibniz rule over [`tables::LEIBNIZ_PAIRS`].
//! Elementary functions first build the outer function's univariate jet at
//! the series value and then spread it over the mixed partials with the
//! multivariate Faà di Bruno formula over [`tables::SET_PARTITIONS`].

use std::fmt::{self, Display};

use crate::error::SeriesError;
use crate::jet_ops;
use crate::multi_index::{canonical_indices, MultiIndex};
use crate::tables::{self, MAX_ORDER};
use crate::Float;

/// Compressed mixed-partial jet of an `N`-variable function up to order `K`.
///
/// `N ≥ 1`, `K ≤ 4`. Backing storage has `(N + 1)^K` slots.
#[derive(Clone, Debug, PartialEq)]
pub struct Series<F: Float, const N: usize, const K: usize> {
    pub(crate) derivs: Vec<F>,
}

impl<F: Float, const N: usize, const K: usize> Default for Series<F, N, K> {
    fn default() -> Self {
        Series::zeros()
    }
}

impl<F: Float, const N: usize, const K: usize> Display for Series<F, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())?;
        for (index, d) in self.iter().skip(1) {
            write!(f, "; d{:?}={}", index.active(), d)?;
        }
        Ok(())
    }
}

impl<F: Float, const N: usize, const K: usize> From<F> for Series<F, N, K> {
    #[inline]
    fn from(val: F) -> Self {
        Series::constant(val)
    }
}

impl<F: Float, const N: usize, const K: usize> Series<F, N, K> {
    /// Number of backing slots, `(N + 1)^K`.
    pub const LEN: usize = {
        assert!(N >= 1, "Series<F, N, K> needs at least one variable");
        assert!(K <= MAX_ORDER, "Series<F, N, K> supports total order K <= 4");
        MultiIndex::<N, K>::SPACE
    };

    /// Every derivative zero.
    pub fn zeros() -> Self {
        Series {
            derivs: vec![F::zero(); Self::LEN],
        }
    }

    /// A constant: value `val`, every derivative zero.
    pub fn constant(val: F) -> Self {
        let mut s = Series::zeros();
        s.derivs[0] = val;
        s
    }

    /// The independent variable `x_label` at value `val`: first derivative
    /// 1 along `label`, every other derivative zero.
    ///
    /// # Panics
    ///
    /// If `label` is not in `1..=N`.
    pub fn variable(val: F, label: usize) -> Self {
        assert!(
            (1..=N).contains(&label),
            "variable label {} must be in 1..={}",
            label,
            N
        );
        let mut s = Series::constant(val);
        if K >= 1 {
            s.set(&[label], F::one());
        }
        s
    }

    /// Wrap a raw backing buffer of length `(N + 1)^K`.
    ///
    /// Every offset that does not decode to a canonical index must hold zero.
    pub fn try_from_vec(derivs: Vec<F>) -> Result<Self, SeriesError> {
        if derivs.len() != Self::LEN {
            return Err(SeriesError::LengthMismatch {
                expected: Self::LEN,
                found: derivs.len(),
            });
        }
        for (offset, d) in derivs.iter().enumerate() {
            if !d.is_zero() && !MultiIndex::<N, K>::decode(offset).is_canonical() {
                return Err(SeriesError::NonZeroPadding { offset });
            }
        }
        Ok(Series { derivs })
    }

    /// Function value (the derivative at the empty index).
    #[inline]
    pub fn value(&self) -> F {
        self.derivs[0]
    }

    /// Raw backing buffer, indexed by canonical encoding.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &self.derivs
    }

    /// Canonical `(index, derivative)` entries in offset order, skipping padding.
    pub fn iter(&self) -> impl Iterator<Item = (MultiIndex<N, K>, F)> + '_ {
        canonical_indices::<N, K>().map(move |(code, index)| (index, self.derivs[code]))
    }

    /// Write the derivative named by `labels` (any order, `0` = unused slot).
    pub fn try_set(&mut self, labels: &[usize], val: F) -> Result<(), SeriesError> {
        let index = MultiIndex::<N, K>::from_labels(labels)?;
        self.derivs[index.encode()] = val;
        Ok(())
    }

    /// Write the derivative named by `labels`.
    ///
    /// # Panics
    ///
    /// If more than `K` labels are given or a label exceeds `N`.
    pub fn set(&mut self, labels: &[usize], val: F) {
        if let Err(e) = self.try_set(labels, val) {
            panic!("Series::set: {}", e);
        }
    }

    /// Read the derivative named by `labels` (any order, `0` = unused slot).
    pub fn try_derivative(&self, labels: &[usize]) -> Result<F, SeriesError> {
        let index = MultiIndex::<N, K>::from_labels(labels)?;
        Ok(self.derivs[index.encode()])
    }

    /// Read the derivative named by `labels`.
    ///
    /// `derivative(&[i, j]) == derivative(&[j, i])` by construction.
    ///
    /// # Panics
    ///
    /// If more than `K` labels are given or a label exceeds `N`.
    pub fn derivative(&self, labels: &[usize]) -> F {
        match self.try_derivative(labels) {
            Ok(d) => d,
            Err(e) => panic!("Series::derivative: {}", e),
        }
    }

    // ── Kernels ──

    #[inline]
    pub(crate) fn map(&self, f: impl Fn(F) -> F) -> Self {
        Series {
            derivs: self.derivs.iter().map(|&d| f(d)).collect(),
        }
    }

    #[inline]
    pub(crate) fn zip_map(&self, rhs: &Self, f: impl Fn(F, F) -> F) -> Self {
        Series {
            derivs: self
                .derivs
                .iter()
                .zip(&rhs.derivs)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Product by the labelled Leibniz rule.
    ///
    /// For a target with active labels `L`, each table split hands a
    /// sub-multiset of `L` to `self` and the complement to `rhs`.
    pub(crate) fn leibniz_product(&self, rhs: &Self) -> Self {
        let mut out = Series::zeros();
        for (code, index) in canonical_indices::<N, K>() {
            let mut sum = F::zero();
            for pair in tables::leibniz_pairs(index.arity()) {
                let left = index.select(pair.left).encode();
                let right = index.select(pair.right).encode();
                sum = sum + self.derivs[left] * rhs.derivs[right];
            }
            out.derivs[code] = sum;
        }
        out
    }

    /// Compose an outer univariate function with this series.
    ///
    /// `outer[m]` must be the m-th raw derivative of the outer function at
    /// [`value`](Self::value), for `m` in `0..=K`. Each target derivative is
    /// the Faà di Bruno sum over set partitions of its labels: the outer
    /// derivative of order "number of blocks" times the product of this
    /// series' derivatives at each block.
    ///
    /// # Panics
    ///
    /// If `outer.len() != K + 1`.
    pub fn compose(&self, outer: &[F]) -> Self {
        assert_eq!(
            outer.len(),
            K + 1,
            "outer jet must hold K + 1 = {} derivatives",
            K + 1
        );
        let mut out = Series::zeros();
        for (code, index) in canonical_indices::<N, K>() {
            let mut sum = F::zero();
            'partition: for partition in tables::set_partitions(index.arity()) {
                let mut term = outer[partition.len()];
                for block in partition.iter() {
                    let factor = self.derivs[index.select(block).encode()];
                    if factor.is_zero() {
                        continue 'partition;
                    }
                    term = term * factor;
                }
                sum = sum + term;
            }
            out.derivs[code] = sum;
        }
        out
    }

    /// Seed a jet of order `K` as the identity at this series' value,
    /// apply `op` to it, and redistribute the result.
    fn compose_with(&self, op: impl FnOnce(&[F], &mut [F])) -> Self {
        let mut seed = vec![F::zero(); K + 1];
        jet_ops::jet_variable(self.value(), &mut seed);
        let mut outer = vec![F::zero(); K + 1];
        op(&seed, &mut outer);
        self.compose(&outer)
    }

    // ── Elemental methods ──

    pub fn recip(&self) -> Self {
        self.compose_with(jet_ops::jet_recip)
    }

    pub fn powf(&self, p: F) -> Self {
        self.compose_with(|a, c| jet_ops::jet_powf(a, p, c))
    }

    pub fn sqrt(&self) -> Self {
        self.compose_with(jet_ops::jet_sqrt)
    }

    pub fn cbrt(&self) -> Self {
        self.compose_with(jet_ops::jet_cbrt)
    }

    pub fn exp(&self) -> Self {
        self.compose_with(jet_ops::jet_exp)
    }

    pub fn ln(&self) -> Self {
        self.compose_with(jet_ops::jet_ln)
    }

    pub fn sin(&self) -> Self {
        self.sin_cos().0
    }

    pub fn cos(&self) -> Self {
        self.sin_cos().1
    }

    pub fn sin_cos(&self) -> (Self, Self) {
        let mut seed = vec![F::zero(); K + 1];
        jet_ops::jet_variable(self.value(), &mut seed);
        let mut s = vec![F::zero(); K + 1];
        let mut co = vec![F::zero(); K + 1];
        jet_ops::jet_sin_cos(&seed, &mut s, &mut co);
        (self.compose(&s), self.compose(&co))
    }

    pub fn tan(&self) -> Self {
        self.compose_with(|a, c| {
            let mut s = vec![F::zero(); c.len()];
            let mut co = vec![F::zero(); c.len()];
            jet_ops::jet_tan(a, c, &mut s, &mut co);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_is_power_of_dims_plus_one() {
        assert_eq!(Series::<f64, 3, 3>::LEN, 64);
        assert_eq!(Series::<f64, 2, 0>::LEN, 1);
    }

    #[test]
    fn variable_sets_one_gradient_slot() {
        let x = Series::<f64, 2, 2>::variable(1.5, 2);
        assert_eq!(x.value(), 1.5);
        assert_eq!(x.derivative(&[2]), 1.0);
        assert_eq!(x.derivative(&[1]), 0.0);
        assert_eq!(x.derivative(&[2, 2]), 0.0);
    }

    #[test]
    fn order_zero_series_is_just_a_value() {
        let x = Series::<f64, 2, 0>::variable(2.0, 1);
        assert_eq!(x.as_slice(), &[2.0]);
        assert_eq!(x.exp().value(), 2.0_f64.exp());
    }

    #[test]
    fn padding_stays_zero_after_composition() {
        let mut x = Series::<f64, 2, 3>::variable(0.3, 1);
        x.set(&[1, 2], 0.7);
        x.set(&[2, 2, 1], -0.2);
        let y = x.sin();
        for (offset, d) in y.as_slice().iter().enumerate() {
            if !MultiIndex::<2, 3>::decode(offset).is_canonical() {
                assert_eq!(*d, 0.0);
            }
        }
    }

    #[test]
    fn compose_with_identity_jet_is_identity() {
        let mut x = Series::<f64, 2, 2>::variable(0.5, 1);
        x.set(&[2], 3.0);
        x.set(&[1, 2], -1.0);
        // outer = id at 0.5: [0.5, 1, 0]
        let y = x.compose(&[0.5, 1.0, 0.0]);
        assert_eq!(y, x);
    }

    #[test]
    #[should_panic(expected = "Series::set: too many differentiation labels")]
    fn set_with_too_many_labels_panics() {
        let mut x = Series::<f64, 2, 2>::zeros();
        x.set(&[1, 1, 1], 1.0);
    }

    #[test]
    #[should_panic(expected = "variable label 3 must be in 1..=2")]
    fn variable_label_past_dims_panics() {
        let _ = Series::<f64, 2, 2>::variable(1.0, 3);
    }
}
