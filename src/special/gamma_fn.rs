//! Gamma function, log-gamma with sign, reciprocal gamma, factorial.

use libm::{exp, fabs, floor, log, pow, sin};

use super::polevl::{chbevl, p1evl, polevl};
use super::{Checked, SpecialError, MAXGAM, MAXLOG, MAXNUM, MINLOG, PI, SQTPI};

/// Rational approximation of Γ(x + 2) on [0, 1).
const P: [f64; 7] = [
    1.60119522476751861407E-4,
    1.19135147006586384913E-3,
    1.04213797561761569935E-2,
    4.76367800457137231464E-2,
    2.07448227648435975150E-1,
    4.94214826801497100753E-1,
    9.99999999999999996796E-1,
];
const Q: [f64; 8] = [
    -2.31581873324120129819E-5,
    5.39605580493303397842E-4,
    -4.45641913851797240494E-3,
    1.18139785222060435552E-2,
    3.58236398605498653373E-2,
    -2.34591795718243348568E-1,
    7.14304917030273074085E-2,
    1.00000000000000000320E0,
];

/// Stirling's formula correction, 33 ≤ x ≤ 172.
const STIR: [f64; 5] = [
    7.87311395793093628397E-4,
    -2.29549961613378126380E-4,
    -2.68132617805781232825E-3,
    3.47222221605458667310E-3,
    8.33333333333482257126E-2,
];
const MAXSTIR: f64 = 143.01608;

/// Asymptotic correction for ln Γ(x), x ≥ 13.
const A: [f64; 5] = [
    8.11614167470508450300E-4,
    -5.95061904284301438324E-4,
    7.93650340457716943945E-4,
    -2.77777777730099687205E-3,
    8.33333333333331927722E-2,
];
/// ln Γ(x + 2) = x·B(x)/C(x), 0 ≤ x ≤ 1.
const B: [f64; 6] = [
    -1.37825152569120859100E3,
    -3.88016315134637840924E4,
    -3.31612992738871184744E5,
    -1.16237097492762307383E6,
    -1.72173700820839662146E6,
    -8.53555664245765465627E5,
];
const C: [f64; 6] = [
    -3.51815701436523470549E2,
    -1.70642106651881159223E4,
    -2.20528590553854454839E5,
    -1.13933444367982507207E6,
    -2.53252307177582951285E6,
    -2.01889141433532773231E6,
];
/// ln √(2π)
const LS2PI: f64 = 0.91893853320467274178;
const LOGPI: f64 = 1.14472988584940017414;
const MAXLGM: f64 = 2.556348e305;

/// Chebyshev coefficients for x/Γ(x) on [0, 1].
const R: [f64; 16] = [
    3.13173458231230000000E-17,
    -6.70718606477908000000E-16,
    2.20039078172259550000E-15,
    2.47691630348254132600E-13,
    -6.60074100411295197440E-12,
    5.13850186324226978840E-11,
    1.08965386454418662084E-9,
    -3.33964630686836942556E-8,
    2.68975996440595483619E-7,
    2.96001177518801696639E-6,
    -8.04814124978471142852E-5,
    4.16609138709688864714E-4,
    5.06579864028608725080E-3,
    -6.41925436109158228810E-2,
    -4.98558728684003594785E-3,
    1.27546015610523951063E-1,
];

/// Stirling's formula for Γ(x), 33 < x < MAXGAM.
fn stirf(x: f64) -> f64 {
    if x >= MAXGAM {
        return f64::INFINITY;
    }
    let mut w = 1.0 / x;
    w = 1.0 + w * polevl(w, &STIR);
    let mut y = exp(x);
    if x > MAXSTIR {
        // pow(x, x - 0.5) would overflow on its own
        let v = pow(x, 0.5 * x - 0.25);
        y = v * (v / y);
    } else {
        y = pow(x, x - 0.5) / y;
    }
    SQTPI * y * w
}

/// Gamma function Γ(x).
///
/// Arguments with |x| ≤ 33 are reduced into [2, 3) by recurrence and
/// evaluated with a rational approximation. Larger arguments use Stirling's
/// formula, with the reflection formula for negative x. Poles at the
/// nonpositive integers return +∞.
///
/// # Example
///
/// ```
/// use transcendental::special::gamma;
///
/// assert!((gamma(5.0) - 24.0).abs() < 1e-12);
/// assert!((gamma(0.5) - core::f64::consts::PI.sqrt()).abs() < 1e-15);
/// ```
pub fn gamma(x: f64) -> f64 {
    gamma_checked(x).value
}

/// [`gamma`] with error reporting.
pub fn gamma_checked(x: f64) -> Checked<f64> {
    const NAME: &str = "gamma";

    if x.is_nan() || x == f64::INFINITY {
        return Checked::ok(x);
    }
    if x == f64::NEG_INFINITY {
        return Checked::fail(NAME, SpecialError::Domain, f64::NAN);
    }

    let q = fabs(x);
    if q > 33.0 {
        if x >= 0.0 {
            if x >= MAXGAM {
                return Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
            }
            return Checked::ok(stirf(x));
        }
        let mut p = floor(q);
        if p == q {
            return Checked::fail(NAME, SpecialError::Singularity, f64::INFINITY);
        }
        let sign = if (p as i64) & 1 == 0 { -1.0 } else { 1.0 };
        let mut z = q - p;
        if z > 0.5 {
            p += 1.0;
            z = q - p;
        }
        z = q * sin(PI * z);
        if z == 0.0 {
            return Checked::fail(NAME, SpecialError::Overflow, sign * MAXNUM);
        }
        z = PI / (fabs(z) * stirf(q));
        if z == 0.0 {
            return Checked::fail(NAME, SpecialError::Underflow, sign * 0.0);
        }
        return Checked::ok(sign * z);
    }

    let mut x = x;
    let mut z = 1.0;
    while x >= 3.0 {
        x -= 1.0;
        z *= x;
    }
    while x < 0.0 {
        if x > -1.0e-9 {
            return gamma_near_pole(NAME, x, z);
        }
        z /= x;
        x += 1.0;
    }
    while x < 2.0 {
        if x < 1.0e-9 {
            return gamma_near_pole(NAME, x, z);
        }
        z /= x;
        x += 1.0;
    }
    if x == 2.0 {
        return Checked::ok(z);
    }

    x -= 2.0;
    Checked::ok(z * polevl(x, &P) / polevl(x, &Q))
}

fn gamma_near_pole(name: &'static str, x: f64, z: f64) -> Checked<f64> {
    if x == 0.0 {
        Checked::fail(name, SpecialError::Singularity, f64::INFINITY)
    } else {
        Checked::ok(z / ((1.0 + super::EULER * x) * x))
    }
}

/// Natural log of |Γ(x)| together with the sign of Γ(x).
///
/// The sign is `1` or `-1`. At the poles the magnitude is +∞ and the sign is `1`.
///
/// # Example
///
/// ```
/// use transcendental::special::lgamma_sign;
///
/// // Γ(-0.5) = -2√π
/// let (lg, sign) = lgamma_sign(-0.5);
/// assert_eq!(sign, -1);
/// assert!((lg - (2.0 * core::f64::consts::PI.sqrt()).ln()).abs() < 1e-14);
/// ```
pub fn lgamma_sign(x: f64) -> (f64, i32) {
    lgamma_sign_checked(x).value
}

/// [`lgamma_sign`] with error reporting.
pub fn lgamma_sign_checked(x: f64) -> Checked<(f64, i32)> {
    const NAME: &str = "lgam";

    if x.is_nan() {
        return Checked::ok((x, 1));
    }
    if x.is_infinite() {
        return Checked::ok((f64::INFINITY, 1));
    }

    if x < -34.0 {
        let q = -x;
        let w = match lgamma_sign_checked(q) {
            Checked { value: (w, _), error: None } => w,
            other => return other,
        };
        let mut p = floor(q);
        if p == q {
            return Checked::fail(NAME, SpecialError::Singularity, (f64::INFINITY, 1));
        }
        let sign = if (p as i64) & 1 == 0 { -1 } else { 1 };
        let mut z = q - p;
        if z > 0.5 {
            p += 1.0;
            z = p - q;
        }
        z = q * sin(PI * z);
        if z == 0.0 {
            return Checked::fail(NAME, SpecialError::Singularity, (f64::INFINITY, sign));
        }
        return Checked::ok((LOGPI - log(z) - w, sign));
    }

    if x < 13.0 {
        let mut z = 1.0;
        let mut p = 0.0;
        let mut u = x;
        while u >= 3.0 {
            p -= 1.0;
            u = x + p;
            z *= u;
        }
        while u < 2.0 {
            if u == 0.0 {
                return Checked::fail(NAME, SpecialError::Singularity, (f64::INFINITY, 1));
            }
            z /= u;
            p += 1.0;
            u = x + p;
        }
        let sign = if z < 0.0 {
            z = -z;
            -1
        } else {
            1
        };
        if u == 2.0 {
            return Checked::ok((log(z), sign));
        }
        p -= 2.0;
        let x = x + p;
        let p = x * polevl(x, &B) / p1evl(x, &C);
        return Checked::ok((log(z) + p, sign));
    }

    if x > MAXLGM {
        return Checked::fail(NAME, SpecialError::Overflow, (f64::INFINITY, 1));
    }

    let mut q = (x - 0.5) * log(x) - x + LS2PI;
    if x > 1.0e8 {
        return Checked::ok((q, 1));
    }
    let p = 1.0 / (x * x);
    if x >= 1000.0 {
        q += ((7.9365079365079365079365e-4 * p - 2.7777777777777777777778e-3) * p
            + 0.0833333333333333333333)
            / x;
    } else {
        q += polevl(p, &A) / x;
    }
    Checked::ok((q, 1))
}

/// Natural log of |Γ(x)|.
///
/// Use [`lgamma_sign`] when the sign of Γ(x) is needed.
pub fn lgamma(x: f64) -> f64 {
    lgamma_sign_checked(x).value.0
}

/// [`lgamma`] with error reporting.
pub fn lgamma_checked(x: f64) -> Checked<f64> {
    lgamma_sign_checked(x).map(|(v, _)| v)
}

/// Reciprocal gamma function 1/Γ(x).
///
/// Finite everywhere; zero at the nonpositive integers.
///
/// # Example
///
/// ```
/// use transcendental::special::rgamma;
///
/// assert_eq!(rgamma(-3.0), 0.0);
/// assert!((rgamma(4.0) - 1.0 / 6.0).abs() < 1e-15);
/// ```
pub fn rgamma(x: f64) -> f64 {
    rgamma_checked(x).value
}

/// [`rgamma`] with error reporting.
pub fn rgamma_checked(x: f64) -> Checked<f64> {
    const NAME: &str = "rgamma";

    if x.is_nan() {
        return Checked::ok(x);
    }
    if x > 34.84425627277176174 {
        let y = -lgamma(x);
        if y < MINLOG {
            return Checked::fail(NAME, SpecialError::Underflow, 0.0);
        }
        return Checked::ok(exp(y));
    }
    if x < -34.034 {
        let w = -x;
        let mut z = sin(PI * w);
        if z == 0.0 {
            return Checked::ok(0.0);
        }
        let sign = if z < 0.0 {
            z = -z;
            1.0
        } else {
            -1.0
        };
        let y = log(w * z) - LOGPI + lgamma(w);
        if y < -MAXLOG {
            return Checked::fail(NAME, SpecialError::Underflow, sign * 0.0);
        }
        if y > MAXLOG {
            return Checked::fail(NAME, SpecialError::Overflow, sign * MAXNUM);
        }
        return Checked::ok(sign * exp(y));
    }

    let mut z = 1.0;
    let mut w = x;
    while w > 1.0 {
        w -= 1.0;
        z *= w;
    }
    while w < 0.0 {
        z /= w;
        w += 1.0;
    }
    if w == 0.0 {
        return Checked::ok(0.0);
    }
    if w == 1.0 {
        return Checked::ok(1.0 / z);
    }
    Checked::ok(w * (1.0 + chbevl(4.0 * w - 2.0, &R)) / z)
}

// ---------------------------------------------------------------------------
// Factorial
// ---------------------------------------------------------------------------

const MAXFAC: i32 = 170;

/// 0! through 33!
const FACTBL: [f64; 34] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
    51090942171709440000.0,
    1124000727777607680000.0,
    25852016738884976640000.0,
    620448401733239439360000.0,
    15511210043330985984000000.0,
    403291461126605635584000000.0,
    10888869450418352160768000000.0,
    304888344611713860501504000000.0,
    8841761993739701954543616000000.0,
    265252859812191058636308480000000.0,
    8222838654177922817725562880000000.0,
    263130836933693530167218012160000000.0,
    8683317618811886495518194401280000000.0,
];

/// Factorial i! as a double.
///
/// Table lookup for i < 34, direct product up to 55, Γ(i + 1) beyond.
/// Negative arguments and i > 170 return [`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::fac;
///
/// assert_eq!(fac(0), 1.0);
/// assert_eq!(fac(10), 3628800.0);
/// ```
pub fn fac(i: i32) -> f64 {
    fac_checked(i).value
}

/// [`fac`] with error reporting.
pub fn fac_checked(i: i32) -> Checked<f64> {
    const NAME: &str = "fac";

    if i < 0 {
        return Checked::fail(NAME, SpecialError::Singularity, MAXNUM);
    }
    if i > MAXFAC {
        return Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
    }
    if i < 34 {
        return Checked::ok(FACTBL[i as usize]);
    }
    if i > 55 {
        return gamma_checked(f64::from(i) + 1.0);
    }
    let mut n = 34.0;
    let mut f = 34.0;
    for _ in 35..=i {
        n += 1.0;
        f *= n;
    }
    Checked::ok(f * FACTBL[33])
}
