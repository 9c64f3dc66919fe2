//! Struve function H_v(x).

use libm::{fabs, floor, pow, sqrt};

use super::bessel_jv::{jv, yv};
use super::gamma_fn::gamma;
use super::{Checked, SpecialError, MACHEP, MAXNUM, PI};

/// Relative term size at which the hypergeometric sums stop.
const STOP: f64 = 1.37e-17;
/// Error estimate reported by a series that failed to converge.
const NO_CONVERGENCE: f64 = 1.0e38;

/// Struve function of real order v.
///
/// The ascending ₁F₂ series and the asymptotic ₃F₀ series (plus Y_v) are
/// both attempted where they apply, and the one with the smaller error
/// estimate is returned. Negative half-integer orders reduce to Bessel J.
///
/// # Example
///
/// ```
/// use transcendental::special::struve;
///
/// // H_{1/2}(x) = √(2/(πx)) (1 − cos x)
/// let x = 2.0_f64;
/// let exact = (2.0 / (core::f64::consts::PI * x)).sqrt() * (1.0 - x.cos());
/// assert!((struve(0.5, x) - exact).abs() < 1e-14);
/// ```
pub fn struve(v: f64, x: f64) -> f64 {
    struve_checked(v, x).value
}

/// [`struve`] with error reporting.
pub fn struve_checked(v: f64, x: f64) -> Checked<f64> {
    const NAME: &str = "struve";

    let f = floor(v);
    if v < 0.0 && v - f == 0.5 {
        // H_{−n−½} = (−1)ⁿ J_{n+½}
        let y = jv(-v, x);
        let f = 1.0 - f;
        let g = 2.0 * floor(f / 2.0);
        return Checked::ok(if g != f { -y } else { y });
    }

    if x == 0.0 {
        // Leading term (x/2)^{v+1} / (Γ(3/2) Γ(v + 3/2))
        if v > -1.0 {
            return Checked::ok(0.0);
        }
        if v == -1.0 {
            return Checked::ok(2.0 / PI);
        }
        let g = gamma(v + 1.5);
        let sign = if g < 0.0 { -1.0 } else { 1.0 };
        return Checked::fail(NAME, SpecialError::Singularity, sign * MAXNUM);
    }

    let t = 0.25 * x * x;
    let ax = fabs(x);

    let (y, series_err) = if ax > 30.0 && ax > 1.5 * fabs(v) {
        (0.0, NO_CONVERGENCE)
    } else {
        onef2(1.0, 1.5, 1.5 + v, -t)
    };
    let (ya, asymp_err) = if ax < 18.0 || x < 0.0 {
        (0.0, NO_CONVERGENCE)
    } else {
        threef0(1.0, 0.5, 0.5 - v, -1.0 / t)
    };

    let sqpi = sqrt(PI);
    let h = pow(0.5 * x, v - 1.0);

    let (value, err) = if series_err <= asymp_err {
        let g = gamma(v + 1.5);
        (y * h * t / (0.5 * sqpi * g), series_err)
    } else {
        let g = gamma(v + 0.5);
        (ya * h / (sqpi * g) + yv(v, x), asymp_err)
    };

    let error = (err >= NO_CONVERGENCE).then_some(SpecialError::TotalLoss);
    Checked::with(NAME, value, error)
}

/// ₁F₂(a; b, c; x) with a cancellation error estimate.
fn onef2(a: f64, b: f64, c: f64, x: f64) -> (f64, f64) {
    let mut an = a;
    let mut bn = b;
    let mut cn = c;
    let mut a0 = 1.0;
    let mut sum = 1.0;
    let mut n = 1.0;
    let mut max = 0.0;

    loop {
        if an == 0.0 {
            break;
        }
        if bn == 0.0 || cn == 0.0 || a0 > 1.0e34 || n > 200.0 {
            return (sum, NO_CONVERGENCE);
        }
        a0 *= (an * x) / (bn * cn * n);
        sum += a0;
        an += 1.0;
        bn += 1.0;
        cn += 1.0;
        n += 1.0;
        let z = fabs(a0);
        if z > max {
            max = z;
        }
        let t = if sum != 0.0 { fabs(a0 / sum) } else { z };
        if t <= STOP {
            break;
        }
    }
    (sum, fabs(MACHEP * max / sum))
}

/// Asymptotic ₃F₀(a, b, c; ; x), truncated before its terms start growing.
fn threef0(a: f64, b: f64, c: f64, x: f64) -> (f64, f64) {
    let mut an = a;
    let mut bn = b;
    let mut cn = c;
    let mut a0 = 1.0;
    let mut sum = 1.0;
    let mut n = 1.0;
    let mut max = 0.0;
    let mut conv = 1.0e38;
    let mut conv1 = conv;

    loop {
        if an == 0.0 || bn == 0.0 || cn == 0.0 {
            break;
        }
        if a0 > 1.0e34 || n > 200.0 {
            return (sum, NO_CONVERGENCE);
        }
        a0 *= (an * bn * cn * x) / n;
        an += 1.0;
        bn += 1.0;
        cn += 1.0;
        n += 1.0;
        let z = fabs(a0);
        if z > max {
            max = z;
        }
        if z >= conv && z < max && z > conv1 {
            break;
        }
        conv1 = conv;
        conv = z;
        sum += a0;
        let t = if sum != 0.0 { fabs(a0 / sum) } else { z };
        if t <= STOP {
            break;
        }
    }

    let cancellation = fabs(MACHEP * max / sum);
    let truncation = fabs(conv / sum);
    (sum, cancellation.max(truncation))
}
