//! `std::ops` implementations for `Series<F, N, K>`.
//!
//! `Series` owns a heap buffer, so every binary operator is implemented on
//! references and the owned combinations forward to it.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::Float;
use crate::series::Series;

// ══════════════════════════════════════════════
//  &Series ↔ &Series
// ══════════════════════════════════════════════

impl<'a, 'b, F: Float, const N: usize, const K: usize> Add<&'b Series<F, N, K>>
    for &'a Series<F, N, K>
{
    type Output = Series<F, N, K>;
    #[inline]
    fn add(self, rhs: &'b Series<F, N, K>) -> Series<F, N, K> {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<'a, 'b, F: Float, const N: usize, const K: usize> Sub<&'b Series<F, N, K>>
    for &'a Series<F, N, K>
{
    type Output = Series<F, N, K>;
    #[inline]
    fn sub(self, rhs: &'b Series<F, N, K>) -> Series<F, N, K> {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<'a, 'b, F: Float, const N: usize, const K: usize> Mul<&'b Series<F, N, K>>
    for &'a Series<F, N, K>
{
    type Output = Series<F, N, K>;
    #[inline]
    fn mul(self, rhs: &'b Series<F, N, K>) -> Series<F, N, K> {
        self.leibniz_product(rhs)
    }
}

// Division is the product with the chain-rule reciprocal
#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b, F: Float, const N: usize, const K: usize> Div<&'b Series<F, N, K>>
    for &'a Series<F, N, K>
{
    type Output = Series<F, N, K>;
    #[inline]
    fn div(self, rhs: &'b Series<F, N, K>) -> Series<F, N, K> {
        self.leibniz_product(&rhs.recip())
    }
}

impl<F: Float, const N: usize, const K: usize> Neg for &Series<F, N, K> {
    type Output = Series<F, N, K>;
    #[inline]
    fn neg(self) -> Series<F, N, K> {
        self.map(|a| -a)
    }
}

impl<F: Float, const N: usize, const K: usize> Neg for Series<F, N, K> {
    type Output = Series<F, N, K>;
    #[inline]
    fn neg(self) -> Series<F, N, K> {
        -&self
    }
}

// Owned and mixed-ownership operands forward to the reference impls.
macro_rules! forward_series_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<F: Float, const N: usize, const K: usize> $trait for Series<F, N, K> {
            type Output = Series<F, N, K>;
            #[inline]
            fn $method(self, rhs: Series<F, N, K>) -> Series<F, N, K> {
                (&self).$method(&rhs)
            }
        }

        impl<'a, F: Float, const N: usize, const K: usize> $trait<&'a Series<F, N, K>>
            for Series<F, N, K>
        {
            type Output = Series<F, N, K>;
            #[inline]
            fn $method(self, rhs: &'a Series<F, N, K>) -> Series<F, N, K> {
                (&self).$method(rhs)
            }
        }

        impl<'a, F: Float, const N: usize, const K: usize> $trait<Series<F, N, K>>
            for &'a Series<F, N, K>
        {
            type Output = Series<F, N, K>;
            #[inline]
            fn $method(self, rhs: Series<F, N, K>) -> Series<F, N, K> {
                self.$method(&rhs)
            }
        }

        impl<F: Float, const N: usize, const K: usize> $assign_trait for Series<F, N, K> {
            #[inline]
            fn $assign_method(&mut self, rhs: Series<F, N, K>) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl<'a, F: Float, const N: usize, const K: usize> $assign_trait<&'a Series<F, N, K>>
            for Series<F, N, K>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a Series<F, N, K>) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

forward_series_binop!(Add, add, AddAssign, add_assign);
forward_series_binop!(Sub, sub, SubAssign, sub_assign);
forward_series_binop!(Mul, mul, MulAssign, mul_assign);
forward_series_binop!(Div, div, DivAssign, div_assign);

// Mixed ops: Series<F, N, K> with primitive floats.
macro_rules! impl_series_scalar_ops {
    ($f:ty) => {
        impl<const N: usize, const K: usize> Add<$f> for Series<$f, N, K> {
            type Output = Series<$f, N, K>;
            #[inline]
            fn add(mut self, rhs: $f) -> Series<$f, N, K> {
                self.derivs[0] += rhs;
                self
            }
        }

        impl<const N: usize, const K: usize> Add<Series<$f, N, K>> for $f {
            type Output = Series<$f, N, K>;
            #[inline]
            fn add(self, rhs: Series<$f, N, K>) -> Series<$f, N, K> {
                rhs + self
            }
        }

        impl<const N: usize, const K: usize> Sub<$f> for Series<$f, N, K> {
            type Output = Series<$f, N, K>;
            #[inline]
            fn sub(mut self, rhs: $f) -> Series<$f, N, K> {
                self.derivs[0] -= rhs;
                self
            }
        }

        impl<const N: usize, const K: usize> Sub<Series<$f, N, K>> for $f {
            type Output = Series<$f, N, K>;
            #[inline]
            fn sub(self, rhs: Series<$f, N, K>) -> Series<$f, N, K> {
                -rhs + self
            }
        }

        impl<const N: usize, const K: usize> Mul<$f> for Series<$f, N, K> {
            type Output = Series<$f, N, K>;
            #[inline]
            fn mul(self, rhs: $f) -> Series<$f, N, K> {
                self.map(|a| a * rhs)
            }
        }

        impl<const N: usize, const K: usize> Mul<Series<$f, N, K>> for $f {
            type Output = Series<$f, N, K>;
            #[inline]
            fn mul(self, rhs: Series<$f, N, K>) -> Series<$f, N, K> {
                rhs.map(|a| self * a)
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl<const N: usize, const K: usize> Div<$f> for Series<$f, N, K> {
            type Output = Series<$f, N, K>;
            #[inline]
            fn div(self, rhs: $f) -> Series<$f, N, K> {
                let inv: $f = 1.0 / rhs;
                self.map(|a| a * inv)
            }
        }

        impl<const N: usize, const K: usize> Div<Series<$f, N, K>> for $f {
            type Output = Series<$f, N, K>;
            #[inline]
            fn div(self, rhs: Series<$f, N, K>) -> Series<$f, N, K> {
                rhs.recip().map(|a| self * a)
            }
        }

        impl<const N: usize, const K: usize> AddAssign<$f> for Series<$f, N, K> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                self.derivs[0] += rhs;
            }
        }

        impl<const N: usize, const K: usize> SubAssign<$f> for Series<$f, N, K> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                self.derivs[0] -= rhs;
            }
        }

        impl<const N: usize, const K: usize> MulAssign<$f> for Series<$f, N, K> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                for d in self.derivs.iter_mut() {
                    *d *= rhs;
                }
            }
        }

        impl<const N: usize, const K: usize> DivAssign<$f> for Series<$f, N, K> {
            #[inline]
            fn div_assign(&mut self, rhs: $f) {
                let inv: $f = 1.0 / rhs;
                for d in self.derivs.iter_mut() {
                    *d *= inv;
                }
            }
        }
    };
}

impl_series_scalar_ops!(f32);
impl_series_scalar_ops!(f64);
