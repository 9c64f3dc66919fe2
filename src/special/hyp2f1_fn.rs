//! Gauss hypergeometric function ₂F₁(a, b; c; x).

use libm::{fabs, log, pow, round};

use super::digamma_fn::psi;
use super::gamma_fn::gamma;
use super::{Checked, SpecialError, MACHEP, MAXNUM};

/// Tolerance for treating a parameter as an integer.
const EPS: f64 = 1.0e-13;
/// Error estimate above which the result is flagged as a partial loss.
const ETHRESH: f64 = 1.0e-12;
/// Term cap for the series loops.
const MAX_TERMS: u32 = 10_000;

/// Gauss hypergeometric function ₂F₁(a, b; c; x).
///
/// The defining power series is used for |x| < 1, helped by the linear
/// transformations of AMS 15.3.3 to 15.3.12 near x = ±1 and by recurrence
/// on c when c − a − b is negative. Divergent cases (|x| > 1 without
/// polynomial termination, or c a nonpositive integer) return [`MAXNUM`]
/// with an overflow error.
///
/// # Example
///
/// ```
/// use transcendental::special::hyp2f1;
///
/// // ₂F₁(1, 1; 2; x) = −ln(1 − x)/x
/// let x = 0.5_f64;
/// assert!((hyp2f1(1.0, 1.0, 2.0, x) + (1.0 - x).ln() / x).abs() < 1e-15);
/// ```
pub fn hyp2f1(a: f64, b: f64, c: f64, x: f64) -> f64 {
    hyp2f1_checked(a, b, c, x).value
}

/// [`hyp2f1`] with error reporting.
pub fn hyp2f1_checked(a: f64, b: f64, c: f64, x: f64) -> Checked<f64> {
    const NAME: &str = "hyp2f1";

    let diverges = || Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
    let finish = |(y, err): (f64, f64)| {
        let error = (err > ETHRESH).then_some(SpecialError::PartialLoss);
        Checked::with(NAME, y, error)
    };

    if a.is_nan() || b.is_nan() || c.is_nan() || x.is_nan() {
        return Checked::ok(f64::NAN);
    }

    let ax = fabs(x);
    let s = 1.0 - x;
    let ia = round(a);
    let ib = round(b);
    let neg_int_a = a <= 0.0 && fabs(a - ia) < EPS;
    let neg_int_b = b <= 0.0 && fabs(b - ib) < EPS;

    if ax < 1.0 || x == -1.0 {
        if fabs(b - c) < EPS {
            return Checked::ok(pow(s, -a));
        }
        if fabs(a - c) < EPS {
            return Checked::ok(pow(s, -b));
        }
    }

    if c <= 0.0 {
        let ic = round(c);
        if fabs(c - ic) < EPS {
            // Fine only if the series terminates before the pole in c
            if (neg_int_a && ia > ic) || (neg_int_b && ib > ic) {
                return finish(hyt2f1(a, b, c, x));
            }
            return diverges();
        }
    }

    // Polynomial
    if neg_int_a || neg_int_b {
        return finish(hyt2f1(a, b, c, x));
    }
    if ax > 1.0 {
        return diverges();
    }

    let p = c - a;
    let ia = round(p);
    let neg_int_ca = ia <= 0.0 && fabs(p - ia) < EPS;
    let r = c - b;
    let ib = round(r);
    let neg_int_cb = ib <= 0.0 && fabs(r - ib) < EPS;
    let terminates = neg_int_ca || neg_int_cb;

    let d = c - a - b;
    let id = round(d);

    // AMS 15.3.3
    let euler_transform = || {
        let (y, err) = hys2f1(c - a, c - b, c, x);
        (pow(s, d) * y, err)
    };

    if fabs(ax - 1.0) < EPS {
        if x > 0.0 {
            if terminates {
                return if d >= 0.0 { finish(euler_transform()) } else { diverges() };
            }
            if d <= 0.0 {
                return diverges();
            }
            // Gauss's summation theorem
            return Checked::ok(gamma(c) * gamma(d) / (gamma(p) * gamma(r)));
        }
        if d <= -1.0 {
            return diverges();
        }
    }

    if d < 0.0 {
        let first = hyt2f1(a, b, c, x);
        if first.1 < ETHRESH {
            return finish(first);
        }

        // Raise c until c − a − b > 0, then recur back down (AMS 15.2.27)
        let aid = (2.0 - id) as i32;
        let mut e = c + f64::from(aid);
        let upper = hyp2f1_checked(a, b, e, x);
        let upper1 = hyp2f1_checked(a, b, e + 1.0, x);
        let error = upper.error.or(upper1.error);
        let mut d2 = upper.value;
        let mut d1 = upper1.value;
        let q = a + b + 1.0;
        let mut y = d2;
        for _ in 0..aid {
            let r = e - 1.0;
            y = (e * (r - (2.0 * e - q) * x) * d2 + (e - a) * (e - b) * x * d1) / (e * r * s);
            e = r;
            d1 = d2;
            d2 = y;
        }
        return Checked::with(NAME, y, error);
    }

    if terminates {
        return finish(euler_transform());
    }
    finish(hyt2f1(a, b, c, x))
}

/// Power series after transforming x away from ±1. Returns the value and
/// an estimated relative error.
fn hyt2f1(a: f64, b: f64, c: f64, x: f64) -> (f64, f64) {
    let s = 1.0 - x;

    // Terminating series are summed directly at any x
    let neg_int = |v: f64| v <= 0.0 && fabs(v - round(v)) < EPS;
    if neg_int(a) || neg_int(b) {
        return hys2f1(a, b, c, x);
    }

    // Pfaff transformation for x < −½ (AMS 15.3.4, 15.3.5)
    if x < -0.5 {
        let (y, err) = if b > a {
            hys2f1(a, c - b, c, -x / s)
        } else {
            hys2f1(c - a, b, c, -x / s)
        };
        let scale = if b > a { pow(s, -a) } else { pow(s, -b) };
        return (scale * y, err);
    }

    let d = c - a - b;
    let id = round(d);

    if x > 0.9 {
        if fabs(d - id) > EPS {
            let direct = hys2f1(a, b, c, x);
            if direct.1 < ETHRESH {
                return direct;
            }

            // AMS 15.3.6
            let (q, err) = hys2f1(a, b, 1.0 - d, s);
            let q = q * gamma(d) / (gamma(c - a) * gamma(c - b));
            let (r, err1) = hys2f1(c - a, c - b, d + 1.0, s);
            let r = r * pow(s, d) * gamma(-d) / (gamma(a) * gamma(b));
            let y = q + r;

            let largest = fabs(q).max(fabs(r));
            let err = err + err1 + (MACHEP * largest) / y;
            return (y * gamma(c), err);
        }
        return psi_expansion(a, b, c, d, id, s);
    }

    hys2f1(a, b, c, x)
}

/// Logarithmic case, c − a − b an integer (AMS 15.3.10 to 15.3.12).
fn psi_expansion(a: f64, b: f64, c: f64, d: f64, id: f64, s: f64) -> (f64, f64) {
    let (e, d1, d2) = if id >= 0.0 { (d, d, 0.0) } else { (-d, 0.0, d) };
    let aid = fabs(id) as i32;

    let ax = log(s);

    // t = 0
    let mut y = psi(1.0) + psi(1.0 + e) - psi(a + d1) - psi(b + d1) - ax;
    y /= gamma(e + 1.0);

    // Pochhammer factor for t = 1
    let mut p = (a + d1) * (b + d1) * s / gamma(e + 2.0);
    let mut t = 1.0;
    let mut err = 1.0;
    for _ in 0..MAX_TERMS {
        let r = psi(1.0 + t) + psi(1.0 + t + e) - psi(a + t + d1) - psi(b + t + d1) - ax;
        let q = p * r;
        y += q;
        p *= s * (a + t + d1) / (t + 1.0);
        p *= (b + t + d1) / (t + 1.0 + e);
        t += 1.0;
        if fabs(q / y) <= EPS {
            err = 0.0;
            break;
        }
    }

    if id == 0.0 {
        return (y * gamma(c) / (gamma(a) * gamma(b)), err);
    }

    let mut y1 = 1.0;
    let mut t = 0.0;
    let mut p = 1.0;
    for _ in 1..aid {
        let r = 1.0 - e + t;
        p *= s * (a + t + d2) * (b + t + d2) / r;
        t += 1.0;
        p /= t;
        y1 += p;
    }

    let gc = gamma(c);
    y1 *= gamma(e) * gc / (gamma(a + d1) * gamma(b + d1));
    y *= gc / (gamma(a + d2) * gamma(b + d2));
    if aid & 1 != 0 {
        y = -y;
    }

    let q = pow(s, id);
    if id > 0.0 {
        y *= q;
    } else {
        y1 *= q;
    }
    (y + y1, err)
}

/// Defining power series. Returns the sum and an estimated relative error.
fn hys2f1(a: f64, b: f64, c: f64, x: f64) -> (f64, f64) {
    if fabs(c) < EPS {
        return (MAXNUM, 1.0);
    }

    let mut umax = 0.0;
    let mut s = 1.0;
    let mut u = 1.0;
    let mut k = 0.0;
    let mut i = 0u32;
    loop {
        let m = k + 1.0;
        u *= (a + k) * (b + k) * x / ((c + k) * m);
        s += u;
        let au = fabs(u);
        if au > umax {
            umax = au;
        }
        k = m;
        i += 1;
        if i > MAX_TERMS {
            return (s, 1.0);
        }
        if fabs(u / s) <= MACHEP {
            break;
        }
    }

    (s, (MACHEP * umax) / fabs(s) + MACHEP * f64::from(i))
}
