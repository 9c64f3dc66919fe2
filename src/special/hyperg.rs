//! Confluent hypergeometric function ₁F₁(a; b; x).

use libm::{exp, fabs, log};

use super::gamma_fn::{gamma, lgamma};
use super::{Checked, SpecialError, MACHEP, MAXNUM};

/// Relative error above which the result is flagged as a partial loss.
const ERROR_LIMIT: f64 = 1.0e-12;

/// Confluent hypergeometric function M(a, b, x) = ₁F₁(a; b; x).
///
/// Sums the power series and, if that loses too much to cancellation, the
/// pair of asymptotic ₂F₀ expansions, keeping whichever carries the smaller
/// error estimate. Near a = b a Kummer transformation is applied first.
/// A nonpositive-integer b is a singularity and returns [`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::hyperg;
///
/// // M(a, a, x) = eˣ
/// assert!((hyperg(1.5, 1.5, 2.0) - 2.0_f64.exp()).abs() < 1e-13);
/// // M(1, 2, x) = (eˣ − 1)/x
/// assert!((hyperg(1.0, 2.0, 1.0) - (1.0_f64.exp() - 1.0)).abs() < 1e-14);
/// ```
pub fn hyperg(a: f64, b: f64, x: f64) -> f64 {
    hyperg_checked(a, b, x).value
}

/// [`hyperg`] with error reporting.
pub fn hyperg_checked(a: f64, b: f64, x: f64) -> Checked<f64> {
    const NAME: &str = "hyperg";

    // Kummer: M(a, b, x) = eˣ M(b − a, b, −x)
    let temp = b - a;
    if fabs(temp) < 0.001 * fabs(a) {
        return hyperg_checked(temp, b, -x).map(|m| exp(x) * m);
    }

    let Some((mut sum, mut err)) = hy1f1p(a, b, x) else {
        return Checked::fail(NAME, SpecialError::Singularity, MAXNUM);
    };
    if err >= 1.0e-15 {
        let (asum, aerr) = hy1f1a(a, b, x);
        if aerr < err {
            sum = asum;
            err = aerr;
        }
    }

    let error = (err > ERROR_LIMIT).then_some(SpecialError::PartialLoss);
    Checked::with(NAME, sum, error)
}

/// Power series summation. Returns the sum and its estimated relative
/// error, or `None` when b is a nonpositive integer.
fn hy1f1p(a: f64, b: f64, x: f64) -> Option<(f64, f64)> {
    let mut an = a;
    let mut bn = b;
    let mut a0 = 1.0;
    let mut sum = 1.0;
    let mut n = 1.0;
    let mut t = 1.0;
    let mut maxt = 0.0;

    while t > MACHEP {
        // bn first: a and b both reaching zero is still a pole
        if bn == 0.0 {
            return None;
        }
        if an == 0.0 {
            return Some((sum, 0.0));
        }
        if n > 200.0 {
            break;
        }
        let u = x * (an / (bn * n));

        let temp = fabs(u);
        if temp > 1.0 && maxt > MAXNUM / temp {
            return Some((sum, 1.0));
        }

        a0 *= u;
        sum += a0;
        t = fabs(a0);
        if t > maxt {
            maxt = t;
        }
        an += 1.0;
        bn += 1.0;
        n += 1.0;
    }

    // Roundoff and cancellation
    if sum != 0.0 {
        maxt /= fabs(sum);
    }
    maxt *= MACHEP;
    Some((sum, fabs(MACHEP * n + maxt)))
}

/// Asymptotic expansion for large |x|, combining two ₂F₀ series.
fn hy1f1a(a: f64, b: f64, x: f64) -> (f64, f64) {
    if x == 0.0 {
        return (MAXNUM, 1.0);
    }
    let temp = log(fabs(x));
    let mut t = x + temp * (a - b);
    let mut u = -temp * a;

    if b > 0.0 {
        let temp = lgamma(b);
        t += temp;
        u += temp;
    }

    let (mut h1, mut err1) = hyp2f0(a, a - b + 1.0, -1.0 / x, Convergence::Kummer);
    let temp = exp(u) / gamma(b - a);
    h1 *= temp;
    err1 *= temp;

    let (mut h2, mut err2) = hyp2f0(b - a, 1.0 - a, 1.0 / x, Convergence::Reflected);
    let temp = if a < 0.0 { exp(t) / gamma(a) } else { exp(t - lgamma(a)) };
    h2 *= temp;
    err2 *= temp;

    // Only the dominant expansion is kept; the other bounds the error
    let (mut asum, dropped) = if x < 0.0 { (h1, h2) } else { (h2, h1) };
    let mut acanc = fabs(err1) + fabs(err2) + fabs(dropped);

    if b < 0.0 {
        let temp = gamma(b);
        asum *= temp;
        acanc *= fabs(temp);
    }
    if asum != 0.0 {
        acanc /= fabs(asum);
    }
    // The asymptotic error is routinely larger than the term estimate
    acanc *= 30.0;
    (asum, acanc)
}

/// Converging factor applied when the asymptotic ₂F₀ series is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Convergence {
    Kummer,
    Reflected,
}

/// Asymptotic series ₂F₀(a, b; ; x), truncated at its smallest term.
/// Returns the sum and an absolute error estimate.
fn hyp2f0(a: f64, b: f64, x: f64, kind: Convergence) -> (f64, f64) {
    let mut an = a;
    let mut bn = b;
    let mut a0 = 1.0;
    let mut alast = 1.0;
    let mut sum = 0.0;
    let mut n = 1.0;
    let mut tlast = 1.0e9;
    let mut maxt = 0.0;

    let converged = loop {
        if an == 0.0 || bn == 0.0 {
            break true;
        }
        let u = an * (bn * x / n);

        let temp = fabs(u);
        if temp > 1.0 && maxt > MAXNUM / temp {
            return (sum, 1.0e38);
        }

        a0 *= u;
        let t = fabs(a0);
        // Terms have started to grow
        if t > tlast {
            break false;
        }
        tlast = t;
        // The sum is one term behind
        sum += alast;
        alast = a0;

        if n > 200.0 {
            break false;
        }
        an += 1.0;
        bn += 1.0;
        n += 1.0;
        if t > maxt {
            maxt = t;
        }
        if t <= MACHEP {
            break true;
        }
    };

    if converged {
        let err = fabs(MACHEP * (n + maxt));
        return (sum + a0, err);
    }

    let n = n - 1.0;
    let x = 1.0 / x;
    match kind {
        Convergence::Kummer => {
            alast *= 0.5 + (0.125 + 0.25 * b - 0.5 * a + 0.25 * x - 0.25 * n) / x;
        }
        Convergence::Reflected => {
            alast *= 2.0 / 3.0 - b + 2.0 * a + x - n;
        }
    }
    let err = MACHEP * (n + maxt) + fabs(a0);
    (sum + alast, err)
}
