//! Canonical multi-index codec for symmetric derivative tensors.
//!
//! A mixed partial of total order ≤ `K` in `N` variables is named by the
//! multiset of variables it differentiates with respect to. `MultiIndex`
//! stores that multiset as `K` labels in `0..=N`, where `0` marks an unused
//! slot. Sorting the labels in descending order gives every multiset exactly
//! one representative, and reading the sorted labels as a base-`(N + 1)`
//! number (slot 0 least significant) gives its storage offset in
//! `0..(N + 1)^K`.
//!
//! Offsets that decode to a label sequence which is not non-increasing are
//! duplicates of some canonical offset; storage built on this codec leaves
//! them as zero padding.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use crate::error::SeriesError;

/// An unordered multiset of at most `K` variable labels drawn from `1..=N`.
///
/// Equality and hashing compare the label slots only, so compare indices
/// after [`normalize`](MultiIndex::normalize).
#[derive(Clone, Copy, Debug)]
pub struct MultiIndex<const N: usize, const K: usize> {
    labels: [usize; K],
    // append cursor
    len: usize,
}

impl<const N: usize, const K: usize> PartialEq for MultiIndex<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl<const N: usize, const K: usize> Eq for MultiIndex<N, K> {}

impl<const N: usize, const K: usize> Hash for MultiIndex<N, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.labels.hash(state);
    }
}

impl<const N: usize, const K: usize> Default for MultiIndex<N, K> {
    fn default() -> Self {
        MultiIndex::new()
    }
}

impl<const N: usize, const K: usize> Display for MultiIndex<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, l) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", l)?;
        }
        write!(f, "]")
    }
}

impl<const N: usize, const K: usize> MultiIndex<N, K> {
    /// Size of the offset space, `(N + 1)^K`.
    pub const SPACE: usize = (N + 1).pow(K as u32);

    /// An empty index (all slots unused), addressing the function value.
    #[inline]
    pub fn new() -> Self {
        MultiIndex {
            labels: [0; K],
            len: 0,
        }
    }

    /// Build a canonical index from labels given in any order.
    pub fn from_labels(labels: &[usize]) -> Result<Self, SeriesError> {
        let mut index = MultiIndex::new();
        for &label in labels {
            index.push(label)?;
        }
        index.normalize();
        Ok(index)
    }

    /// Append one label.
    ///
    /// Fails after `K` appends or when `label > N`. `0` is accepted and
    /// fills a slot without differentiating.
    pub fn push(&mut self, label: usize) -> Result<(), SeriesError> {
        if self.len >= K {
            return Err(SeriesError::TooManyLabels { order: K });
        }
        if label > N {
            return Err(SeriesError::LabelOutOfRange { label, dims: N });
        }
        self.labels[self.len] = label;
        self.len += 1;
        Ok(())
    }

    /// Sort labels in descending order, making the index canonical.
    #[inline]
    pub fn normalize(&mut self) {
        self.labels.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Storage offset: `Σ labels[i] · (N + 1)^i`.
    ///
    /// Only meaningful as a storage key after [`normalize`](Self::normalize).
    #[inline]
    pub fn encode(&self) -> usize {
        self.labels
            .iter()
            .rev()
            .fold(0, |acc, &label| acc * (N + 1) + label)
    }

    /// Inverse of [`encode`](Self::encode).
    ///
    /// A decoded index has all `K` slots filled, so further pushes fail.
    ///
    /// # Panics
    ///
    /// If `code >= (N + 1)^K`.
    pub fn decode(code: usize) -> Self {
        assert!(
            code < Self::SPACE,
            "offset {} outside the index space of size {}",
            code,
            Self::SPACE
        );
        let mut rest = code;
        let mut labels = [0; K];
        for label in labels.iter_mut() {
            *label = rest % (N + 1);
            rest /= N + 1;
        }
        MultiIndex { labels, len: K }
    }

    /// `true` iff the labels are non-increasing.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.labels.windows(2).all(|w| w[0] >= w[1])
    }

    /// All `K` label slots, including unused zeros.
    #[inline]
    pub fn labels(&self) -> &[usize; K] {
        &self.labels
    }

    /// The differentiating labels: the prefix before the first unused slot.
    #[inline]
    pub fn active(&self) -> &[usize] {
        let n = self.labels.iter().position(|&l| l == 0).unwrap_or(K);
        &self.labels[..n]
    }

    /// Total differentiation order of a canonical index.
    #[inline]
    pub fn arity(&self) -> usize {
        self.active().len()
    }

    /// The canonical sub-index formed by the active labels at `positions`.
    ///
    /// `positions` index into [`active`](Self::active); at most `K` of them.
    pub(crate) fn select(&self, positions: &[u8]) -> Self {
        let active = self.active();
        let mut sub = MultiIndex::new();
        for (slot, &p) in positions.iter().enumerate() {
            sub.labels[slot] = active[p as usize];
        }
        sub.len = positions.len();
        sub.normalize();
        sub
    }
}

/// Every canonical `(offset, index)` pair of the `(N, K)` index space, in
/// increasing offset order.
pub fn canonical_indices<const N: usize, const K: usize>(
) -> impl Iterator<Item = (usize, MultiIndex<N, K>)> {
    (0..MultiIndex::<N, K>::SPACE)
        .map(|code| (code, MultiIndex::decode(code)))
        .filter(|(_, index)| index.is_canonical())
}

#[cfg(test)]
mod tests {
    use super::*;

    type Index33 = MultiIndex<3, 3>;

    #[test]
    fn append_order_does_not_matter() {
        let a = Index33::from_labels(&[1, 3, 2]).unwrap();
        let b = Index33::from_labels(&[2, 1, 3]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.encode(), b.encode());
        assert_eq!(a.labels(), &[3, 2, 1]);
    }

    #[test]
    fn encode_is_base_n_plus_one() {
        let index = Index33::from_labels(&[1, 2]).unwrap();
        // labels [2, 1, 0] → 2 + 1·4 + 0·16
        assert_eq!(index.encode(), 6);
        assert_eq!(Index33::new().encode(), 0);
    }

    #[test]
    fn decode_inverts_encode() {
        for code in 0..Index33::SPACE {
            assert_eq!(Index33::decode(code).encode(), code);
        }
    }

    #[test]
    fn canonical_count_is_multiset_count() {
        // Multisets of size ≤ 3 from 3 labels: C(3 + 3, 3) = 20.
        assert_eq!(canonical_indices::<3, 3>().count(), 20);
        // N > K: C(5 + 2, 2) = 21.
        assert_eq!(canonical_indices::<5, 2>().count(), 21);
    }

    #[test]
    fn large_leading_label_is_canonical() {
        let index = MultiIndex::<5, 2>::from_labels(&[5]).unwrap();
        assert!(index.is_canonical());
        assert!(!MultiIndex::<5, 2>::decode(5 * 6).is_canonical());
    }

    #[test]
    fn push_is_capped_at_order() {
        let mut index = MultiIndex::<2, 2>::new();
        index.push(1).unwrap();
        index.push(2).unwrap();
        assert_eq!(index.push(1), Err(SeriesError::TooManyLabels { order: 2 }));
    }

    #[test]
    fn push_rejects_label_above_dims() {
        let mut index = MultiIndex::<2, 2>::new();
        assert_eq!(
            index.push(3),
            Err(SeriesError::LabelOutOfRange { label: 3, dims: 2 })
        );
    }

    #[test]
    fn active_strips_padding() {
        let index = Index33::from_labels(&[0, 2, 0]).unwrap();
        assert_eq!(index.active(), &[2]);
        assert_eq!(index.arity(), 1);
        assert_eq!(Index33::new().arity(), 0);
    }

    #[test]
    fn select_renormalizes() {
        let index = Index33::from_labels(&[1, 2, 3]).unwrap();
        let sub = index.select(&[0, 2]);
        assert_eq!(sub.labels(), &[3, 1, 0]);
        assert!(sub.is_canonical());
        assert_eq!(index.select(&[]), Index33::new());
        assert_eq!(Index33::decode(6), Index33::from_labels(&[2, 1]).unwrap());
    }
}
