//! Digamma (psi) function ψ(x) = d/dx ln Γ(x).

use libm::{floor, log, tan};

use super::polevl::polevl;
use super::{Checked, SpecialError, EULER, MAXNUM, PI};

/// Asymptotic series coefficients (Bernoulli numbers B₂ₖ/2k).
const A: [f64; 7] = [
    8.33333333333333333333E-2,
    -2.10927960927960927961E-2,
    7.57575757575757575758E-3,
    -4.16666666666666666667E-3,
    3.96825396825396825397E-3,
    -8.33333333333333333333E-3,
    8.33333333333333333333E-2,
];

/// Digamma function ψ(x).
///
/// Positive integers up to 10 sum the harmonic series directly. Otherwise
/// the argument is pushed above 10 by recurrence and the asymptotic series
/// is used. Negative arguments use the reflection
/// ψ(1−x) − ψ(x) = π/tan(πx). Poles at the nonpositive integers return
/// [`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::psi;
///
/// // ψ(1) = −γ
/// assert!((psi(1.0) + 0.5772156649015329).abs() < 1e-15);
/// ```
pub fn psi(x: f64) -> f64 {
    psi_checked(x).value
}

/// [`psi`] with error reporting.
pub fn psi_checked(x: f64) -> Checked<f64> {
    let mut x = x;
    let mut reflection = None;

    if x <= 0.0 {
        let q = x;
        let mut p = floor(q);
        if p == q {
            return Checked::fail("psi", SpecialError::Singularity, MAXNUM);
        }
        // Subtract the nearest integer to keep tan(πx) away from its zeros
        let mut nz = q - p;
        if nz != 0.5 {
            if nz > 0.5 {
                p += 1.0;
                nz = q - p;
            }
            nz = PI / tan(PI * nz);
        } else {
            nz = 0.0;
        }
        reflection = Some(nz);
        x = 1.0 - x;
    }

    let mut y;
    if x <= 10.0 && x == floor(x) {
        y = 0.0;
        let n = x as i32;
        for i in 1..n {
            y += 1.0 / f64::from(i);
        }
        y -= EULER;
    } else {
        let mut s = x;
        let mut w = 0.0;
        while s < 10.0 {
            w += 1.0 / s;
            s += 1.0;
        }
        y = if s < 1.0e17 {
            let z = 1.0 / (s * s);
            z * polevl(z, &A)
        } else {
            0.0
        };
        y = log(s) - (0.5 / s) - y - w;
    }

    if let Some(nz) = reflection {
        y -= nz;
    }
    Checked::ok(y)
}
