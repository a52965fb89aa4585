use approx::relative_eq;
use proptest::prelude::*;
use taylorjet::{canonical_indices, Jet64, Series64};

type S = Series64<2, 3>;

/// A series with value in `0.5..2` and every other canonical entry in `-1..1`.
fn arb_series() -> impl Strategy<Value = S> {
    let entries = canonical_indices::<2, 3>().count();
    (0.5..2.0f64, prop::collection::vec(-1.0..1.0f64, entries - 1)).prop_map(|(value, rest)| {
        let mut s = S::constant(value);
        for ((_, index), d) in canonical_indices::<2, 3>().skip(1).zip(rest) {
            s.set(index.active(), d);
        }
        s
    })
}

fn arb_jet() -> impl Strategy<Value = Jet64<5>> {
    (0.5..2.0f64, prop::array::uniform4(-1.0..1.0f64)).prop_map(|(v, [a, b, c, d])| {
        Jet64::new([v, a, b, c, d])
    })
}

fn close(a: &S, b: &S) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|((_, p), (_, q))| relative_eq!(p, q, epsilon = 1e-9, max_relative = 1e-9))
}

proptest! {
    #[test]
    fn sum_is_slotwise(f in arb_series(), g in arb_series()) {
        let h = &f + &g;
        for (index, d) in h.iter() {
            let labels = index.active();
            prop_assert_eq!(d, f.derivative(labels) + g.derivative(labels));
        }
    }

    #[test]
    fn product_is_bilinear(f in arb_series(), g in arb_series(), h in arb_series(), s in -3.0..3.0f64) {
        let lhs = &f * &(g.clone() * s + h.clone());
        let rhs = (&f * &g) * s + &f * &h;
        prop_assert!(close(&lhs, &rhs));
    }

    #[test]
    fn product_commutes(f in arb_series(), g in arb_series()) {
        prop_assert!(close(&(&f * &g), &(&g * &f)));
    }

    #[test]
    fn mixed_partials_are_symmetric(f in arb_series(), g in arb_series()) {
        let h = (&f * &g).sin() + f.exp();
        prop_assert_eq!(h.derivative(&[1, 2]), h.derivative(&[2, 1]));
        prop_assert_eq!(h.derivative(&[1, 2, 2]), h.derivative(&[2, 1, 2]));
        prop_assert_eq!(h.derivative(&[1, 1, 2]), h.derivative(&[2, 1, 1]));
    }

    #[test]
    fn times_reciprocal_is_one(f in arb_series()) {
        prop_assert!(close(&(&f * &f.recip()), &S::constant(1.0)));
    }

    #[test]
    fn sin_squared_plus_cos_squared_is_one(f in arb_series()) {
        let (s, c) = f.sin_cos();
        prop_assert!(close(&(&s * &s + &c * &c), &S::constant(1.0)));
    }

    #[test]
    fn exp_inverts_ln(f in arb_series()) {
        prop_assert!(close(&f.ln().exp(), &f));
    }

    #[test]
    fn sqrt_squared_is_identity(f in arb_series()) {
        let r = f.sqrt();
        prop_assert!(close(&(&r * &r), &f));
    }

    #[test]
    fn tan_is_sin_over_cos(f in arb_series()) {
        // keep the value away from the pole at π/2
        let f = f * 0.5;
        let (s, c) = f.sin_cos();
        prop_assert!(close(&f.tan(), &(&s / &c)));
    }

    #[test]
    fn jet_times_reciprocal_is_one(a in arb_jet()) {
        let one = a * a.recip();
        prop_assert!(relative_eq!(one.value(), 1.0, epsilon = 1e-12));
        for n in 1..5 {
            prop_assert!(one.derivative(n).abs() < 1e-9);
        }
    }

    #[test]
    fn jet_powf_adds_exponents(a in arb_jet(), p in -2.0..2.0f64, q in -2.0..2.0f64) {
        let lhs = a.powf(p) * a.powf(q);
        let rhs = a.powf(p + q);
        for n in 0..5 {
            prop_assert!(relative_eq!(lhs.derivative(n), rhs.derivative(n), epsilon = 1e-7, max_relative = 1e-7));
        }
    }

    #[test]
    fn one_variable_series_matches_jet(a in arb_jet()) {
        // A series in one variable of order 4 stores the same raw derivatives.
        let mut s = Series64::<1, 4>::zeros();
        let labels: [&[usize]; 5] = [&[], &[1], &[1, 1], &[1, 1, 1], &[1, 1, 1, 1]];
        for (n, l) in labels.iter().enumerate() {
            s.set(l, a.derivative(n));
        }
        let via_series = s.exp();
        let via_jet = a.exp();
        for (n, l) in labels.iter().enumerate() {
            prop_assert!(relative_eq!(via_series.derivative(l), via_jet.derivative(n), epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}
