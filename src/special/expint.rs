//! Exponential integrals Eₙ(x), hyperbolic and trigonometric integrals.

use libm::{cos, exp, fabs, log, pow, sin, sqrt};
use num_complex::Complex64;

use super::gamma_fn::gamma;
use super::{Checked, SpecialError, EULER, MACHEP, MAXLOG, MAXNUM, PIO2};

/// Rescaling threshold for the continued fraction.
const BIG: f64 = 1.44115188075855872E17;

/// Term cap shared by the series and continued-fraction loops.
const MAX_ITER: usize = 2000;

/// Generalized exponential integral Eₙ(x) = ∫₁^∞ e^{−xt}/tⁿ dt.
///
/// Power series with a digamma term for x ≤ 1, continued fraction
/// otherwise, and a uniform asymptotic form for n > 5000. Negative n or x
/// returns [`MAXNUM`] with a domain error.
///
/// # Example
///
/// ```
/// use transcendental::special::expn;
///
/// // E₂(0) = 1
/// assert_eq!(expn(2, 0.0), 1.0);
/// // E₁(1) = 0.21938393439552...
/// assert!((expn(1, 1.0) - 0.21938393439552029).abs() < 1e-15);
/// ```
pub fn expn(n: i32, x: f64) -> f64 {
    expn_checked(n, x).value
}

/// [`expn`] with error reporting.
pub fn expn_checked(n: i32, x: f64) -> Checked<f64> {
    const NAME: &str = "expn";

    if x.is_nan() {
        return Checked::ok(x);
    }
    if n < 0 || x < 0.0 {
        return Checked::fail(NAME, SpecialError::Domain, MAXNUM);
    }
    if x > MAXLOG {
        return Checked::ok(0.0);
    }
    if x == 0.0 {
        if n < 2 {
            return Checked::fail(NAME, SpecialError::Singularity, MAXNUM);
        }
        return Checked::ok(1.0 / f64::from(n - 1));
    }
    if n == 0 {
        return Checked::ok(exp(-x) / x);
    }

    let nf = f64::from(n);
    if n > 5000 {
        let xk = x + nf;
        let yk = 1.0 / (xk * xk);
        let t = nf;
        let ans = yk * t * (6.0 * x * x - 8.0 * t * x + t * t);
        let ans = yk * (ans + t * (t - 2.0 * x));
        let ans = yk * (ans + t);
        return Checked::ok((ans + 1.0) * exp(-x) / xk);
    }

    let (ans, converged) = if x <= 1.0 {
        expn_series(n, x)
    } else {
        expn_fraction(nf, x)
    };
    Checked::with(NAME, ans, (!converged).then_some(SpecialError::PartialLoss))
}

/// Returns the sum and whether it converged within [`MAX_ITER`] terms.
fn expn_series(n: i32, x: f64) -> (f64, bool) {
    let nf = f64::from(n);
    let mut psi = -EULER - log(x);
    for i in 1..n {
        psi += 1.0 / f64::from(i);
    }

    let z = -x;
    let mut xk = 0.0;
    let mut yk = 1.0;
    let mut pk = 1.0 - nf;
    let mut ans = if n == 1 { 0.0 } else { 1.0 / pk };
    let mut converged = false;
    for _ in 0..MAX_ITER {
        xk += 1.0;
        yk *= z / xk;
        pk += 1.0;
        if pk != 0.0 {
            ans += yk / pk;
        }
        let t = if ans != 0.0 { fabs(yk / ans) } else { 1.0 };
        if t <= MACHEP || t.is_nan() {
            converged = true;
            break;
        }
    }
    (pow(z, nf - 1.0) * psi / gamma(nf) - ans, converged)
}

fn expn_fraction(nf: f64, x: f64) -> (f64, bool) {
    let mut k = 1u32;
    let mut pkm2 = 1.0;
    let mut qkm2 = x;
    let mut pkm1 = 1.0;
    let mut qkm1 = x + nf;
    let mut ans = pkm1 / qkm1;

    let mut converged = false;
    for _ in 0..MAX_ITER {
        k += 1;
        let (yk, xk) = if k & 1 != 0 {
            (1.0, nf + f64::from((k - 1) / 2))
        } else {
            (x, f64::from(k / 2))
        };
        let pk = pkm1 * yk + pkm2 * xk;
        let qk = qkm1 * yk + qkm2 * xk;
        let t = if qk != 0.0 {
            let r = pk / qk;
            let t = fabs((ans - r) / r);
            ans = r;
            t
        } else {
            1.0
        };
        pkm2 = pkm1;
        pkm1 = pk;
        qkm2 = qkm1;
        qkm1 = qk;
        if fabs(pk) > BIG {
            pkm2 /= BIG;
            pkm1 /= BIG;
            qkm2 /= BIG;
            qkm1 /= BIG;
        }
        if t <= MACHEP || t.is_nan() {
            converged = true;
            break;
        }
    }
    (ans * exp(-x), converged)
}

// ---------------------------------------------------------------------------
// Hyperbolic sine and cosine integrals
// ---------------------------------------------------------------------------

/// Above this the power series gives way to the asymptotic expansion.
const SHICHI_SERIES_LIMIT: f64 = 88.0;

/// Hyperbolic sine and cosine integrals, returned as `(Shi(x), Chi(x))`.
///
/// Shi(x) = ∫₀ˣ sinh t / t dt and Chi(x) = γ + ln x + ∫₀ˣ (cosh t − 1)/t dt.
/// Shi is odd; Chi(−x) returns Chi(x). At zero Chi is −[`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::shichi;
///
/// let (shi, chi) = shichi(1.0);
/// assert!((shi - 1.0572508753757286).abs() < 1e-15);
/// assert!((chi - 0.8378669409802082).abs() < 1e-15);
/// ```
pub fn shichi(x: f64) -> (f64, f64) {
    shichi_checked(x).value
}

/// [`shichi`] with error reporting.
pub fn shichi_checked(x: f64) -> Checked<(f64, f64)> {
    const NAME: &str = "shichi";

    if x.is_nan() {
        return Checked::ok((x, x));
    }
    let negative = x < 0.0;
    let x = fabs(x);
    if x == 0.0 {
        return Checked::fail(NAME, SpecialError::Singularity, (0.0, -MAXNUM));
    }
    let sign = if negative { -1.0 } else { 1.0 };

    if x - log(x) > MAXLOG {
        return Checked::fail(NAME, SpecialError::Overflow, (sign * MAXNUM, MAXNUM));
    }

    if x > SHICHI_SERIES_LIMIT {
        // Shi ≈ Chi ≈ Ei(x)/2 once e⁻ˣ is negligible
        let half_ei = 0.5 * exp(x - log(x)) * ei_asymptotic_sum(x);
        return Checked::ok((sign * half_ei, half_ei));
    }

    // All terms positive: no cancellation
    let z = x * x;
    let mut a = 1.0;
    let mut s = 1.0;
    let mut c = 0.0;
    let mut k = 2.0;
    let mut converged = false;
    for _ in 0..MAX_ITER {
        a *= z / k;
        c += a / k;
        k += 1.0;
        a /= k;
        s += a / k;
        k += 1.0;
        let r = fabs(a / s);
        if r <= MACHEP || r.is_nan() {
            converged = true;
            break;
        }
    }
    let s = s * x;
    Checked::with(
        NAME,
        (sign * s, EULER + log(x) + c),
        (!converged).then_some(SpecialError::PartialLoss),
    )
}

/// Σ k!/xᵏ truncated at its smallest term.
fn ei_asymptotic_sum(x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k = 1.0;
    loop {
        let next = term * k / x;
        if next >= term || next <= MACHEP * sum {
            break;
        }
        term = next;
        sum += term;
        k += 1.0;
    }
    sum
}

// ---------------------------------------------------------------------------
// Sine and cosine integrals
// ---------------------------------------------------------------------------

/// Below this the power series is used, above it the continued fraction.
const SICI_SERIES_LIMIT: f64 = 2.0;
const SICI_MAX_ITER: u32 = 100;
const SICI_EPS: f64 = 4.0 * MACHEP;
const FPMIN: f64 = 1.0e-300;

/// Sine and cosine integrals, returned as `(Si(x), Ci(x))`.
///
/// Si(x) = ∫₀ˣ sin t / t dt and Ci(x) = γ + ln x + ∫₀ˣ (cos t − 1)/t dt.
/// Power series for |x| ≤ 2, otherwise the complex continued fraction for
/// E₁(ix). Si is odd; Ci(−x) returns Ci(x). At zero Ci is −[`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::sici;
///
/// let (si, ci) = sici(1.0);
/// assert!((si - 0.9460830703671830).abs() < 1e-15);
/// assert!((ci - 0.3374039229009681).abs() < 1e-15);
/// ```
pub fn sici(x: f64) -> (f64, f64) {
    sici_checked(x).value
}

/// [`sici`] with error reporting.
pub fn sici_checked(x: f64) -> Checked<(f64, f64)> {
    const NAME: &str = "sici";

    let t = fabs(x);
    if t == 0.0 {
        return Checked::fail(NAME, SpecialError::Singularity, (0.0, -MAXNUM));
    }

    let (si, ci, converged) = if t > SICI_SERIES_LIMIT {
        sici_fraction(t)
    } else {
        sici_series(t)
    };

    let si = if x < 0.0 { -si } else { si };
    let error = (!converged).then_some(SpecialError::PartialLoss);
    Checked::with(NAME, (si, ci), error)
}

/// Lentz evaluation of the continued fraction for E₁(it).
fn sici_fraction(t: f64) -> (f64, f64, bool) {
    let mut b = Complex64::new(1.0, t);
    let mut c = Complex64::new(1.0 / FPMIN, 0.0);
    let mut d = 1.0 / b;
    let mut h = d;
    let mut converged = false;

    for i in 2..=SICI_MAX_ITER {
        let a = -f64::from((i - 1) * (i - 1));
        b += 2.0;
        d = 1.0 / (a * d + b);
        c = b + a / c;
        let del = c * d;
        h *= del;
        if fabs(del.re - 1.0) + fabs(del.im) < SICI_EPS {
            converged = true;
            break;
        }
    }

    let h = Complex64::new(cos(t), -sin(t)) * h;
    let cs = -h.conj() + Complex64::new(0.0, PIO2);
    (cs.im, cs.re, converged)
}

/// Simultaneous power series for Si and Ci − γ − ln t.
fn sici_series(t: f64) -> (f64, f64, bool) {
    if t < sqrt(FPMIN) {
        return (t, EULER + log(t), true);
    }

    let mut sum = 0.0;
    let mut sums = 0.0;
    let mut sumc = 0.0;
    let mut sign = 1.0;
    let mut fact = 1.0;
    let mut odd = true;
    let mut converged = false;

    for k in 1..=SICI_MAX_ITER {
        let kf = f64::from(k);
        fact *= t / kf;
        let term = fact / kf;
        sum += sign * term;
        let err = term / fabs(sum);
        if odd {
            sign = -sign;
            sums = sum;
            sum = sumc;
        } else {
            sumc = sum;
            sum = sums;
        }
        if err < SICI_EPS {
            converged = true;
            break;
        }
        odd = !odd;
    }

    (sums, sumc + log(t) + EULER, converged)
}
