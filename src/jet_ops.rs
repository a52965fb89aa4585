//! Shared univariate jet propagation functions.
//!
//! Convention: `c[n] = f^(n)(t₀)` (raw derivatives, not divided by `n!`).
//! All functions operate on slices `&[F]` (inputs) and `&mut [F]` (outputs);
//! the number of slots is taken from the output slice.
//!
//! Used by both `Jet<F, K>` (stack arrays) and the multivariate `Series`,
//! which needs a jet of length `K + 1` it cannot name as a const generic.

use num_complex::Complex;

use crate::binomial::binom;
use crate::Float;

// ══════════════════════════════════════════════
//  Seeding
// ══════════════════════════════════════════════

/// `c = t ↦ value + (t - t₀)`: `c[0] = value`, `c[1] = 1`, rest zero.
#[inline]
pub fn jet_variable<F: Float>(value: F, c: &mut [F]) {
    for ck in c.iter_mut() {
        *ck = F::zero();
    }
    c[0] = value;
    if c.len() > 1 {
        c[1] = F::one();
    }
}

// ══════════════════════════════════════════════
//  Arithmetic
// ══════════════════════════════════════════════

/// `c = a + b`
#[inline]
pub fn jet_add<F: Float>(a: &[F], b: &[F], c: &mut [F]) {
    for n in 0..c.len() {
        c[n] = a[n] + b[n];
    }
}

/// `c = a - b`
#[inline]
pub fn jet_sub<F: Float>(a: &[F], b: &[F], c: &mut [F]) {
    for n in 0..c.len() {
        c[n] = a[n] - b[n];
    }
}

/// `c = -a`
#[inline]
pub fn jet_neg<F: Float>(a: &[F], c: &mut [F]) {
    for n in 0..c.len() {
        c[n] = -a[n];
    }
}

/// `c = s * a` where `s` is a scalar.
#[inline]
pub fn jet_scale<F: Float>(a: &[F], s: F, c: &mut [F]) {
    for n in 0..c.len() {
        c[n] = s * a[n];
    }
}

/// `c = a * b`: Leibniz rule.
///
/// `c[n] = Σ_{i=0}^{n} C(n,i) · a[i] · b[n-i]`
#[inline]
pub fn jet_mul<F: Float>(a: &[F], b: &[F], c: &mut [F]) {
    for n in 0..c.len() {
        let mut sum = F::zero();
        for i in 0..=n {
            sum = sum + binom::<F>(n, i) * a[i] * b[n - i];
        }
        c[n] = sum;
    }
}

/// `c = 1/a`
///
/// `c[0] = 1/a[0]`
/// `c[n] = -(a[n]·c[0] + Σ_{i=1}^{n-1} C(n,i) · c[i] · a[n-i]) · c[0]`
#[inline]
pub fn jet_recip<F: Float>(a: &[F], c: &mut [F]) {
    let inv_a0 = F::one() / a[0];
    c[0] = inv_a0;
    for n in 1..c.len() {
        let mut sum = a[n] * inv_a0;
        for i in 1..n {
            sum = sum + binom::<F>(n, i) * c[i] * a[n - i];
        }
        c[n] = -sum * inv_a0;
    }
}

/// `c = a / b`: solved directly from `c · b = a`.
///
/// `c[n] = (a[n] - Σ_{i=0}^{n-1} C(n,i) · c[i] · b[n-i]) / b[0]`
#[inline]
pub fn jet_div<F: Float>(a: &[F], b: &[F], c: &mut [F]) {
    let inv_b0 = F::one() / b[0];
    for n in 0..c.len() {
        let mut sum = a[n];
        for i in 0..n {
            sum = sum - binom::<F>(n, i) * c[i] * b[n - i];
        }
        c[n] = sum * inv_b0;
    }
}

/// `c = s / a` where `s` is a scalar.
#[inline]
pub fn jet_scalar_div<F: Float>(s: F, a: &[F], c: &mut [F]) {
    jet_recip(a, c);
    for ck in c.iter_mut() {
        *ck = s * *ck;
    }
}

// ══════════════════════════════════════════════
//  Elementary functions
// ══════════════════════════════════════════════

/// `c = exp(a)`: from `c' = a' · c`.
///
/// `c[n] = Σ_{i=0}^{n-1} C(n-1,i) · a[n-i] · c[i]`
#[inline]
pub fn jet_exp<F: Float>(a: &[F], c: &mut [F]) {
    c[0] = a[0].exp();
    for n in 1..c.len() {
        let mut sum = F::zero();
        for i in 0..n {
            sum = sum + binom::<F>(n - 1, i) * a[n - i] * c[i];
        }
        c[n] = sum;
    }
}

/// `c = ln(a)`: from `a · c' = a'`.
///
/// `c[n] = (a[n] - Σ_{i=1}^{n-1} C(n-1,i-1) · c[i] · a[n-i]) / a[0]`
#[inline]
pub fn jet_ln<F: Float>(a: &[F], c: &mut [F]) {
    let inv_a0 = F::one() / a[0];
    c[0] = a[0].ln();
    for n in 1..c.len() {
        let mut sum = a[n];
        for i in 1..n {
            sum = sum - binom::<F>(n - 1, i - 1) * c[i] * a[n - i];
        }
        c[n] = sum * inv_a0;
    }
}

/// `(s, co) = (sin(a), cos(a))`: jointly, as the imaginary and real parts
/// of `z = exp(i·a)`.
///
/// `z[0] = exp(i·a[0])`
/// `z[n] = i · Σ_{k=0}^{n-1} C(n-1,k) · a[n-k] · z[k]`
#[inline]
pub fn jet_sin_cos<F: Float>(a: &[F], s: &mut [F], co: &mut [F]) {
    let z0 = Complex::new(F::zero(), a[0]).exp();
    co[0] = z0.re;
    s[0] = z0.im;
    for n in 1..s.len() {
        let mut sum = Complex::new(F::zero(), F::zero());
        for k in 0..n {
            let zk = Complex::new(co[k], s[k]);
            sum = sum + zk * (binom::<F>(n - 1, k) * a[n - k]);
        }
        let zn = sum * Complex::i();
        co[n] = zn.re;
        s[n] = zn.im;
    }
}

/// `c = tan(a) = sin(a) / cos(a)`.
///
/// `s` and `co` receive the sine and cosine jets.
#[inline]
pub fn jet_tan<F: Float>(a: &[F], c: &mut [F], s: &mut [F], co: &mut [F]) {
    jet_sin_cos(a, s, co);
    jet_div(s, co, c);
}

/// `c = a^p` for a real exponent: from `a · c' = p · a' · c`.
///
/// `c[n] = Σ_{i=0}^{n-1} (C(n-1,i)·(p+1) - C(n,i)) · a[n-i] · c[i] / a[0]`
#[inline]
pub fn jet_powf<F: Float>(a: &[F], p: F, c: &mut [F]) {
    let inv_a0 = F::one() / a[0];
    let p1 = p + F::one();
    c[0] = a[0].powf(p);
    for n in 1..c.len() {
        let mut sum = F::zero();
        for i in 0..n {
            let weight = binom::<F>(n - 1, i) * p1 - binom::<F>(n, i);
            sum = sum + weight * a[n - i] * c[i];
        }
        c[n] = sum * inv_a0;
    }
}

/// `c = sqrt(a) = a^(1/2)`
#[inline]
pub fn jet_sqrt<F: Float>(a: &[F], c: &mut [F]) {
    jet_powf(a, F::one() / F::from_count(2), c);
}

/// `c = cbrt(a) = a^(1/3)`
#[inline]
pub fn jet_cbrt<F: Float>(a: &[F], c: &mut [F]) {
    jet_powf(a, F::one() / F::from_count(3), c);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_matches_product_rule_for_polynomials() {
        // (1 + t)² at t = 0: value 1, first 2, second 2.
        let a = [1.0, 1.0, 0.0];
        let mut c = [0.0; 3];
        jet_mul(&a, &a, &mut c);
        assert_eq!(c, [1.0, 2.0, 2.0]);
    }

    #[test]
    fn div_by_self_is_one() {
        let a: [f64; 4] = [2.0, 3.0, 5.0, 7.0];
        let mut c = [0.0; 4];
        jet_div(&a, &a, &mut c);
        assert!((c[0] - 1.0).abs() < 1e-14);
        for ck in &c[1..] {
            assert!(ck.abs() < 1e-12);
        }
    }

    #[test]
    fn sin_cos_of_identity_at_zero() {
        let mut a = [0.0f64; 5];
        jet_variable(0.0, &mut a);
        let mut s = [0.0; 5];
        let mut co = [0.0; 5];
        jet_sin_cos(&a, &mut s, &mut co);
        let expected_s = [0.0, 1.0, 0.0, -1.0, 0.0];
        let expected_c = [1.0, 0.0, -1.0, 0.0, 1.0];
        for n in 0..5 {
            assert!((s[n] - expected_s[n]).abs() < 1e-14);
            assert!((co[n] - expected_c[n]).abs() < 1e-14);
        }
    }

    #[test]
    fn variable_of_length_one_holds_only_the_value() {
        let mut c = [9.0];
        jet_variable(2.5, &mut c);
        assert_eq!(c, [2.5]);
    }
}
