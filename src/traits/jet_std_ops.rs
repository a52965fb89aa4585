//! `std::ops` implementations for `Jet<F, K>`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::Float;
use crate::jet::Jet;
use crate::jet_ops;

// ══════════════════════════════════════════════
//  Jet<F, K> ↔ Jet<F, K>
// ══════════════════════════════════════════════

impl<F: Float, const K: usize> Add for Jet<F, K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_add(&self.derivs, &rhs.derivs, &mut c);
        Jet { derivs: c }
    }
}

impl<F: Float, const K: usize> Sub for Jet<F, K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_sub(&self.derivs, &rhs.derivs, &mut c);
        Jet { derivs: c }
    }
}

// Leibniz rule: a binomial-weighted sum of products
#[allow(clippy::suspicious_arithmetic_impl)]
impl<F: Float, const K: usize> Mul for Jet<F, K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_mul(&self.derivs, &rhs.derivs, &mut c);
        Jet { derivs: c }
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<F: Float, const K: usize> Div for Jet<F, K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_div(&self.derivs, &rhs.derivs, &mut c);
        Jet { derivs: c }
    }
}

impl<F: Float, const K: usize> Neg for Jet<F, K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut c = [F::zero(); K];
        jet_ops::jet_neg(&self.derivs, &mut c);
        Jet { derivs: c }
    }
}

impl<F: Float, const K: usize> AddAssign for Jet<F, K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float, const K: usize> SubAssign for Jet<F, K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float, const K: usize> MulAssign for Jet<F, K> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float, const K: usize> DivAssign for Jet<F, K> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Mixed ops: Jet<F, K> with primitive floats. Adding a scalar only moves
// the value; scaling touches every slot.
macro_rules! impl_jet_scalar_ops {
    ($f:ty) => {
        impl<const K: usize> Add<$f> for Jet<$f, K> {
            type Output = Jet<$f, K>;
            #[inline]
            fn add(self, rhs: $f) -> Jet<$f, K> {
                let mut derivs = self.derivs;
                derivs[0] += rhs;
                Jet { derivs }
            }
        }

        impl<const K: usize> Add<Jet<$f, K>> for $f {
            type Output = Jet<$f, K>;
            #[inline]
            fn add(self, rhs: Jet<$f, K>) -> Jet<$f, K> {
                rhs + self
            }
        }

        impl<const K: usize> Sub<$f> for Jet<$f, K> {
            type Output = Jet<$f, K>;
            #[inline]
            fn sub(self, rhs: $f) -> Jet<$f, K> {
                let mut derivs = self.derivs;
                derivs[0] -= rhs;
                Jet { derivs }
            }
        }

        impl<const K: usize> Sub<Jet<$f, K>> for $f {
            type Output = Jet<$f, K>;
            #[inline]
            fn sub(self, rhs: Jet<$f, K>) -> Jet<$f, K> {
                let mut derivs = (-rhs).derivs;
                derivs[0] += self;
                Jet { derivs }
            }
        }

        impl<const K: usize> Mul<$f> for Jet<$f, K> {
            type Output = Jet<$f, K>;
            #[inline]
            fn mul(self, rhs: $f) -> Jet<$f, K> {
                let mut c = [0.0; K];
                jet_ops::jet_scale(&self.derivs, rhs, &mut c);
                Jet { derivs: c }
            }
        }

        impl<const K: usize> Mul<Jet<$f, K>> for $f {
            type Output = Jet<$f, K>;
            #[inline]
            fn mul(self, rhs: Jet<$f, K>) -> Jet<$f, K> {
                rhs * self
            }
        }

        // Scalar Div multiplies by the reciprocal
        #[allow(clippy::suspicious_arithmetic_impl)]
        impl<const K: usize> Div<$f> for Jet<$f, K> {
            type Output = Jet<$f, K>;
            #[inline]
            fn div(self, rhs: $f) -> Jet<$f, K> {
                self * (1.0 / rhs)
            }
        }

        impl<const K: usize> Div<Jet<$f, K>> for $f {
            type Output = Jet<$f, K>;
            #[inline]
            fn div(self, rhs: Jet<$f, K>) -> Jet<$f, K> {
                let mut c = [0.0; K];
                jet_ops::jet_scalar_div(self, &rhs.derivs, &mut c);
                Jet { derivs: c }
            }
        }
    };
}

impl_jet_scalar_ops!(f32);
impl_jet_scalar_ops!(f64);
