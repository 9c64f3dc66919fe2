//! Property-based tests for the functional identities the special functions
//! must satisfy.

use core::f64::consts::PI;

use proptest::prelude::*;
use transcendental::special::{
    erf, erfc, gamma, i0, i1, igam, igamc, igami, incbet, incbi, lgamma, ndtr, ndtri,
};
use transcendental::stats::{pdtr, pdtri, stdtr, stdtri};

fn rel_err(a: f64, b: f64) -> f64 {
    ((a - b) / b.abs().max(f64::MIN_POSITIVE)).abs()
}

// =============================================================================
// GAMMA
// =============================================================================

proptest! {
    #[test]
    fn gamma_recurrence(x in 0.05f64..30.0) {
        let lhs = gamma(x + 1.0);
        let rhs = x * gamma(x);
        prop_assert!(rel_err(lhs, rhs) < 1e-13, "x = {x}: {lhs} vs {rhs}");
    }

    #[test]
    fn gamma_reflection(x in -5.0f64..5.0) {
        prop_assume!((x - x.round()).abs() > 1e-2);
        let lhs = gamma(x) * gamma(1.0 - x);
        let rhs = PI / (PI * x).sin();
        prop_assert!(rel_err(lhs, rhs) < 1e-11, "x = {x}: {lhs} vs {rhs}");
    }

    #[test]
    fn lgamma_matches_gamma(x in 0.1f64..50.0) {
        let lhs = lgamma(x);
        let rhs = gamma(x).ln();
        prop_assert!((lhs - rhs).abs() < 1e-12 * rhs.abs().max(1.0));
    }
}

// =============================================================================
// ERROR FUNCTION
// =============================================================================

proptest! {
    #[test]
    fn erf_plus_erfc(x in -10.0f64..10.0) {
        prop_assert!((erf(x) + erfc(x) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn erf_odd(x in -6.0f64..6.0) {
        prop_assert!((erf(-x) + erf(x)).abs() < 1e-15);
    }

    #[test]
    fn ndtri_roundtrip(x in -8.0f64..5.0) {
        let y = ndtri(ndtr(x));
        prop_assert!((y - x).abs() < 1e-9 * x.abs().max(1.0), "x = {x}: {y}");
    }
}

// =============================================================================
// INCOMPLETE INTEGRALS
// =============================================================================

proptest! {
    #[test]
    fn igam_plus_igamc(a in 0.05f64..100.0, x in 0.0f64..150.0) {
        prop_assert!((igam(a, x) + igamc(a, x) - 1.0).abs() < 1e-13, "a = {a}, x = {x}");
    }

    #[test]
    fn igami_roundtrip(a in 0.5f64..50.0, q in 0.01f64..0.99) {
        let x = igami(a, q);
        prop_assert!((igamc(a, x) - q).abs() < 1e-10, "a = {a}, q = {q}");
    }

    #[test]
    fn incbet_symmetry(a in 0.1f64..40.0, b in 0.1f64..40.0, x in 0.0f64..=1.0) {
        let s = incbet(a, b, x) + incbet(b, a, 1.0 - x);
        prop_assert!((s - 1.0).abs() < 1e-12, "a = {a}, b = {b}, x = {x}");
    }

    #[test]
    fn incbi_roundtrip(a in 0.5f64..20.0, b in 0.5f64..20.0, x in 0.05f64..0.95) {
        let y = incbet(a, b, x);
        prop_assume!(y > 1e-8 && y < 1.0 - 1e-8);
        let back = incbi(a, b, y);
        prop_assert!((incbet(a, b, back) - y).abs() < 1e-11, "a = {a}, b = {b}, x = {x}");
    }
}

// =============================================================================
// BESSEL
// =============================================================================

proptest! {
    #[test]
    fn i0_i1_positive_increasing(x in 0.01f64..700.0, dx in 0.01f64..1.0) {
        prop_assert!(i0(x) > 0.0 && i1(x) > 0.0);
        prop_assert!(i0(x + dx) > i0(x));
        prop_assert!(i1(x + dx) > i1(x));
    }
}

// =============================================================================
// DISTRIBUTIONS
// =============================================================================

proptest! {
    #[test]
    fn stdtr_stdtri_roundtrip(k in 1i32..200, p in 0.001f64..0.999) {
        let t = stdtri(k, p);
        prop_assert!((stdtr(k, t) - p).abs() < 1e-10, "k = {k}, p = {p}");
    }

    #[test]
    fn pdtr_pdtri_roundtrip(k in 0i32..60, y in 0.01f64..0.99) {
        let m = pdtri(k, y);
        prop_assert!((pdtr(k, m) - y).abs() < 1e-10, "k = {k}, y = {y}");
    }
}
