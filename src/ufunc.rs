//! Elementwise evaluation over slices of any [`Storage`] type.
//!
//! Each `map*` function applies an `f64` scalar routine to every index of
//! its input slices and writes the narrowed result to the output slice.
//! Inputs are widened with [`Storage::to_f64`] and results narrowed with
//! [`Storage::from_f64`], so element `i` of the output is exactly what a
//! scalar call on the widened inputs returns, rounded once.
//!
//! Lengths are validated before any output element is written.
//!
//! # Example
//!
//! ```
//! use transcendental::special::{fresnl, gamma, incbet};
//! use transcendental::ufunc::{map1, map1_into2, map3};
//!
//! let x = [1.0_f32, 2.0, 5.0];
//! let mut out = [0.0_f32; 3];
//! map1(gamma, &x, &mut out).unwrap();
//! assert_eq!(out, [1.0, 1.0, 24.0]);
//!
//! let (mut s, mut c) = ([0.0_f64; 3], [0.0_f64; 3]);
//! map1_into2(fresnl, &[0.0, 0.5, 1.0], &mut s, &mut c).unwrap();
//! assert_eq!(s[0], 0.0);
//!
//! let a = [2.0_f64; 2];
//! let b = [3.0_f64; 2];
//! let mut y = [0.0_f64; 2];
//! map3(incbet, &a, &b, &[0.5, 0.25], &mut y).unwrap();
//! assert!((y[0] - 0.6875).abs() < 1e-14);
//! ```

use crate::Storage;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Errors from elementwise evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UfuncError {
    /// An input or output slice differs in length from the first input.
    LengthMismatch {
        /// Length of the first input.
        expected: usize,
        /// Length of the offending slice.
        found: usize,
    },
}

impl core::fmt::Display for UfuncError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UfuncError::LengthMismatch { expected, found } => {
                write!(f, "slice length mismatch: expected {expected}, found {found}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UfuncError {}

fn check_lengths(expected: usize, others: &[usize]) -> Result<(), UfuncError> {
    match others.iter().find(|&&n| n != expected) {
        Some(&found) => Err(UfuncError::LengthMismatch { expected, found }),
        None => Ok(()),
    }
}

/// Apply a one-argument function elementwise: `out[i] = f(x[i])`.
pub fn map1<S: Storage>(
    f: impl Fn(f64) -> f64,
    x: &[S],
    out: &mut [S],
) -> Result<(), UfuncError> {
    check_lengths(x.len(), &[out.len()])?;
    for (o, &xi) in out.iter_mut().zip(x) {
        *o = S::from_f64(f(xi.to_f64()));
    }
    Ok(())
}

/// Apply a two-argument function elementwise: `out[i] = f(a[i], b[i])`.
///
/// # Example
///
/// ```
/// use transcendental::special::igam;
/// use transcendental::ufunc::{map2, UfuncError};
///
/// let a = [1.0_f64, 2.0];
/// let mut out = [0.0_f64; 3];
/// let err = map2(igam, &a, &[1.0, 1.0], &mut out).unwrap_err();
/// assert_eq!(err, UfuncError::LengthMismatch { expected: 2, found: 3 });
/// ```
pub fn map2<S: Storage>(
    f: impl Fn(f64, f64) -> f64,
    a: &[S],
    b: &[S],
    out: &mut [S],
) -> Result<(), UfuncError> {
    check_lengths(a.len(), &[b.len(), out.len()])?;
    for (i, o) in out.iter_mut().enumerate() {
        *o = S::from_f64(f(a[i].to_f64(), b[i].to_f64()));
    }
    Ok(())
}

/// Apply a three-argument function elementwise.
pub fn map3<S: Storage>(
    f: impl Fn(f64, f64, f64) -> f64,
    a: &[S],
    b: &[S],
    c: &[S],
    out: &mut [S],
) -> Result<(), UfuncError> {
    check_lengths(a.len(), &[b.len(), c.len(), out.len()])?;
    for (i, o) in out.iter_mut().enumerate() {
        *o = S::from_f64(f(a[i].to_f64(), b[i].to_f64(), c[i].to_f64()));
    }
    Ok(())
}

/// Apply a four-argument function elementwise, as for [`hyp2f1`](crate::special::hyp2f1).
pub fn map4<S: Storage>(
    f: impl Fn(f64, f64, f64, f64) -> f64,
    a: &[S],
    b: &[S],
    c: &[S],
    d: &[S],
    out: &mut [S],
) -> Result<(), UfuncError> {
    check_lengths(a.len(), &[b.len(), c.len(), d.len(), out.len()])?;
    for (i, o) in out.iter_mut().enumerate() {
        *o = S::from_f64(f(a[i].to_f64(), b[i].to_f64(), c[i].to_f64(), d[i].to_f64()));
    }
    Ok(())
}

/// Apply a one-argument function with two results, such as
/// [`fresnl`](crate::special::fresnl), [`shichi`](crate::special::shichi)
/// or [`sici`](crate::special::sici).
pub fn map1_into2<S: Storage>(
    f: impl Fn(f64) -> (f64, f64),
    x: &[S],
    out0: &mut [S],
    out1: &mut [S],
) -> Result<(), UfuncError> {
    check_lengths(x.len(), &[out0.len(), out1.len()])?;
    for (i, &xi) in x.iter().enumerate() {
        let (r0, r1) = f(xi.to_f64());
        out0[i] = S::from_f64(r0);
        out1[i] = S::from_f64(r1);
    }
    Ok(())
}

/// Apply a one-argument function with four results.
///
/// # Example
///
/// ```
/// use transcendental::special::airy;
/// use transcendental::ufunc::map1_into4;
///
/// let x = [-1.0_f64, 0.0, 1.0];
/// let (mut ai, mut aip, mut bi, mut bip) = ([0.0; 3], [0.0; 3], [0.0; 3], [0.0; 3]);
/// map1_into4(
///     |x| {
///         let a = airy(x);
///         (a.ai, a.aip, a.bi, a.bip)
///     },
///     &x,
///     &mut ai,
///     &mut aip,
///     &mut bi,
///     &mut bip,
/// )
/// .unwrap();
/// assert!((ai[1] - 0.355028053887817).abs() < 1e-14);
/// ```
pub fn map1_into4<S: Storage>(
    f: impl Fn(f64) -> (f64, f64, f64, f64),
    x: &[S],
    out0: &mut [S],
    out1: &mut [S],
    out2: &mut [S],
    out3: &mut [S],
) -> Result<(), UfuncError> {
    check_lengths(x.len(), &[out0.len(), out1.len(), out2.len(), out3.len()])?;
    for (i, &xi) in x.iter().enumerate() {
        let (r0, r1, r2, r3) = f(xi.to_f64());
        out0[i] = S::from_f64(r0);
        out1[i] = S::from_f64(r1);
        out2[i] = S::from_f64(r2);
        out3[i] = S::from_f64(r3);
    }
    Ok(())
}

/// [`map1`] into a newly allocated `Vec`.
#[cfg(feature = "alloc")]
pub fn map1_vec<S: Storage>(f: impl Fn(f64) -> f64, x: &[S]) -> Vec<S> {
    x.iter().map(|&xi| S::from_f64(f(xi.to_f64()))).collect()
}

/// [`map2`] into a newly allocated `Vec`.
#[cfg(feature = "alloc")]
pub fn map2_vec<S: Storage>(
    f: impl Fn(f64, f64) -> f64,
    a: &[S],
    b: &[S],
) -> Result<Vec<S>, UfuncError> {
    check_lengths(a.len(), &[b.len()])?;
    Ok(a.iter()
        .zip(b)
        .map(|(&ai, &bi)| S::from_f64(f(ai.to_f64(), bi.to_f64())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::{ellpj, erf, gamma, hyp2f1, igam, incbet, jv, sici, SpecialError};

    #[test]
    fn map1_matches_scalar() {
        let x = [0.1_f64, 0.7, 1.5, 3.2, -2.5];
        let mut out = [0.0; 5];
        map1(gamma, &x, &mut out).unwrap();
        for (o, &xi) in out.iter().zip(&x) {
            assert_eq!(o.to_bits(), gamma(xi).to_bits());
        }
    }

    #[test]
    fn map1_f32_rounds_once() {
        let x = [0.25_f32, 0.5, 2.0];
        let mut out = [0.0_f32; 3];
        map1(erf, &x, &mut out).unwrap();
        for (o, &xi) in out.iter().zip(&x) {
            assert_eq!(*o, erf(f64::from(xi)) as f32);
        }
    }

    #[test]
    fn map2_and_map3() {
        let v = [0.5_f64, 2.0, 10.0];
        let x = [1.0, 3.0, 7.5];
        let mut out = [0.0; 3];
        map2(jv, &v, &x, &mut out).unwrap();
        for i in 0..3 {
            assert_eq!(out[i], jv(v[i], x[i]));
        }

        let mut out = [0.0; 3];
        map3(incbet, &v, &v, &[0.5, 0.5, 0.5], &mut out).unwrap();
        for o in out {
            assert!((o - 0.5).abs() < 1e-14);
        }
    }

    #[test]
    fn map4_hypergeometric() {
        // ₂F₁(1, 1; 2; z) = −ln(1 − z)/z
        let z = [0.1_f64, 0.5, -0.5];
        let mut out = [0.0; 3];
        map4(hyp2f1, &[1.0; 3], &[1.0; 3], &[2.0; 3], &z, &mut out).unwrap();
        for (o, &zi) in out.iter().zip(&z) {
            let expected: f64 = -(1.0 - zi).ln() / zi;
            assert!((o - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn multi_output() {
        let x = [0.5_f64, 1.0, 4.0];
        let (mut si, mut ci) = ([0.0; 3], [0.0; 3]);
        map1_into2(sici, &x, &mut si, &mut ci).unwrap();
        for i in 0..3 {
            let (s, c) = sici(x[i]);
            assert_eq!((si[i], ci[i]), (s, c));
        }

        let u = [0.3_f64, 1.2];
        let (mut sn, mut cn, mut dn, mut ph) = ([0.0; 2], [0.0; 2], [0.0; 2], [0.0; 2]);
        map1_into4(
            |u| {
                let j = ellpj(u, 0.4);
                (j.sn, j.cn, j.dn, j.phi)
            },
            &u,
            &mut sn,
            &mut cn,
            &mut dn,
            &mut ph,
        )
        .unwrap();
        for i in 0..2 {
            assert!((sn[i] * sn[i] + cn[i] * cn[i] - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn length_mismatch_leaves_output_untouched() {
        let mut out = [7.0_f64; 2];
        let err = map3(incbet, &[1.0, 2.0], &[1.0], &[0.5, 0.5], &mut out).unwrap_err();
        assert_eq!(err, UfuncError::LengthMismatch { expected: 2, found: 1 });
        assert_eq!(out, [7.0, 7.0]);

        let mut s = [0.0_f64; 2];
        let mut c = [0.0; 3];
        assert!(map1_into2(sici, &[1.0, 2.0], &mut s, &mut c).is_err());
        assert!(map1(gamma, &[1.0_f64, 2.0], &mut [0.0; 1]).is_err());
    }

    #[test]
    fn sentinels_pass_through() {
        let mut out = [0.0_f64; 2];
        map2(igam, &[-1.0, 1.0], &[1.0, 1.0], &mut out).unwrap();
        assert_eq!(out[0], 0.0);
        assert_eq!(crate::special::igam_checked(-1.0, 1.0).error, Some(SpecialError::Domain));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn vec_forms() {
        let v = map1_vec(gamma, &[1.0_f32, 4.0]);
        assert_eq!(v, alloc::vec![1.0_f32, 6.0]);
        let w = map2_vec(igam, &[1.0_f64, 2.0], &[0.0, 0.0]).unwrap();
        assert_eq!(w, alloc::vec![0.0, 0.0]);
        assert!(map2_vec(igam, &[1.0_f64], &[1.0, 2.0]).is_err());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn error_display() {
        use core::fmt::Write;
        let mut s = alloc::string::String::new();
        write!(s, "{}", UfuncError::LengthMismatch { expected: 4, found: 3 }).unwrap();
        assert_eq!(s, "slice length mismatch: expected 4, found 3");
    }
}
