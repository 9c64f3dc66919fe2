//! Complete and incomplete elliptic integrals, Jacobian elliptic functions.
//!
//! The parameter convention is m = k². The complete integrals [`ellpk`] and
//! [`ellpe`] take the complementary parameter m1 = 1 − m, which keeps full
//! precision as m approaches 1.

use libm::{asin, atan, cos, cosh, exp, fabs, floor, log, sin, sinh, sqrt, tan, tanh};

use super::polevl::polevl;
use super::{Checked, SpecialError, MACHEP, MAXNUM, PI, PIO2};

// ---------------------------------------------------------------------------
// Complete integrals
// ---------------------------------------------------------------------------

const EP: [f64; 11] = [
    1.53552577301013293365E-4,
    2.50888492163602060990E-3,
    8.68786816565889628429E-3,
    1.07350949056076193403E-2,
    7.77395492516787092951E-3,
    7.58395289413514708519E-3,
    1.15688436810574127319E-2,
    2.18317996015557253103E-2,
    5.68051945617860553470E-2,
    4.43147180560990850618E-1,
    1.00000000000000000299E0,
];
const EQ: [f64; 10] = [
    3.27954898576485872656E-5,
    1.00962792679356715133E-3,
    6.50609489976927491433E-3,
    1.68862163993311317300E-2,
    2.61769742454493659583E-2,
    3.34833904888224918614E-2,
    4.27180926518931511717E-2,
    5.85936634471101055642E-2,
    9.37499997197644278445E-2,
    2.49999999999888314361E-1,
];

/// Complete elliptic integral of the second kind, E(m), as a function of
/// m1 = 1 − m.
///
/// Returns 0 with a domain error outside 0 ≤ m1 ≤ 1.
///
/// # Example
///
/// ```
/// use transcendental::special::ellpe;
///
/// assert_eq!(ellpe(0.0), 1.0);
/// assert!((ellpe(1.0) - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// ```
pub fn ellpe(m1: f64) -> f64 {
    ellpe_checked(m1).value
}

/// [`ellpe`] with error reporting.
pub fn ellpe_checked(x: f64) -> Checked<f64> {
    if x <= 0.0 || x > 1.0 {
        if x == 0.0 {
            return Checked::ok(1.0);
        }
        return Checked::fail("ellpe", SpecialError::Domain, 0.0);
    }
    Checked::ok(polevl(x, &EP) - log(x) * (x * polevl(x, &EQ)))
}

const KP: [f64; 11] = [
    1.37982864606273237150E-4,
    2.28025724005875567385E-3,
    7.97404013220415179367E-3,
    9.85821379021226008714E-3,
    6.87489687449949877925E-3,
    6.18901033637687613229E-3,
    8.79078273952743772254E-3,
    1.49380448916805252718E-2,
    3.08851465246711995998E-2,
    9.65735902811690126535E-2,
    1.38629436111989062502E0,
];
const KQ: [f64; 11] = [
    2.94078955048598507511E-5,
    9.14184723865917226571E-4,
    5.94058303753167793257E-3,
    1.54850516649762399335E-2,
    2.39089602715924892727E-2,
    3.01204715227604046988E-2,
    3.73774314173823228969E-2,
    4.88280347570998239232E-2,
    7.03124996963957469739E-2,
    1.24999999999870820058E-1,
    4.99999999999999999821E-1,
];
/// ln 4
const C1: f64 = 1.3862943611198906188E0;

/// Complete elliptic integral of the first kind, K(m), as a function of
/// m1 = 1 − m.
///
/// Logarithmic singularity at m1 = 0, where [`MAXNUM`] is returned.
///
/// # Example
///
/// ```
/// use transcendental::special::ellpk;
///
/// assert!((ellpk(1.0) - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// // K(1/2)
/// assert!((ellpk(0.5) - 1.8540746773013719).abs() < 1e-15);
/// ```
pub fn ellpk(m1: f64) -> f64 {
    ellpk_checked(m1).value
}

/// [`ellpk`] with error reporting.
pub fn ellpk_checked(x: f64) -> Checked<f64> {
    const NAME: &str = "ellpk";

    if !(0.0..=1.0).contains(&x) {
        return Checked::fail(NAME, SpecialError::Domain, 0.0);
    }
    if x > MACHEP {
        return Checked::ok(polevl(x, &KP) - log(x) * polevl(x, &KQ));
    }
    if x == 0.0 {
        return Checked::fail(NAME, SpecialError::Singularity, MAXNUM);
    }
    Checked::ok(C1 - 0.5 * log(x))
}

// ---------------------------------------------------------------------------
// Incomplete integrals
// ---------------------------------------------------------------------------

/// Incomplete elliptic integral of the first kind, F(φ | m).
///
/// Descending Landen transformation (arithmetic-geometric mean), with the
/// amplitude reduced to (−π/2, π/2] and the complete integral added back.
/// Parameters outside 0 ≤ m ≤ 1 return NaN with a domain error.
///
/// # Example
///
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use transcendental::special::{ellik, ellpk};
///
/// assert!((ellik(FRAC_PI_2, 0.3) - ellpk(0.7)).abs() < 1e-14);
/// assert_eq!(ellik(0.4, 0.0), 0.4);
/// ```
pub fn ellik(phi: f64, m: f64) -> f64 {
    ellik_checked(phi, m).value
}

/// [`ellik`] with error reporting.
pub fn ellik_checked(phi: f64, m: f64) -> Checked<f64> {
    const NAME: &str = "ellik";

    if m == 0.0 {
        return Checked::ok(phi);
    }
    if !(0.0..=1.0).contains(&m) {
        return Checked::fail(NAME, SpecialError::Domain, f64::NAN);
    }
    let a = 1.0 - m;
    if a == 0.0 {
        if fabs(phi) >= PIO2 {
            return Checked::fail(NAME, SpecialError::Singularity, MAXNUM);
        }
        return Checked::ok(log(tan((PIO2 + phi) / 2.0)));
    }

    let (npio2, mut phi) = reduce_amplitude(phi);
    let mut k = if npio2 != 0.0 { ellpk(a) } else { 0.0 };
    let negative = phi < 0.0;
    if negative {
        phi = -phi;
    }

    let b = sqrt(a);
    let t = tan(phi);
    let mut temp = None;
    if fabs(t) > 10.0 {
        // Transform the amplitude, but only once
        let e = 1.0 / (b * t);
        if fabs(e) < 10.0 {
            let e = atan(e);
            if npio2 == 0.0 {
                k = ellpk(a);
            }
            temp = Some(k - ellik(e, m));
        }
    }
    let temp = temp.unwrap_or_else(|| {
        let (t, modulus, d, a) = landen(phi, t, b, m, |_, _| {});
        (atan(t) + modulus * PI) / (d * a)
    });

    let temp = if negative { -temp } else { temp };
    Checked::ok(temp + npio2 * k)
}

/// Incomplete elliptic integral of the second kind, E(φ | m).
///
/// # Example
///
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use transcendental::special::{ellie, ellpe};
///
/// assert!((ellie(FRAC_PI_2, 0.3) - ellpe(0.7)).abs() < 1e-14);
/// // E(φ | 1) = sin φ
/// assert!((ellie(0.5, 1.0) - 0.5_f64.sin()).abs() < 1e-15);
/// ```
pub fn ellie(phi: f64, m: f64) -> f64 {
    ellie_checked(phi, m).value
}

/// [`ellie`] with error reporting. A parameter outside [0, 1] is a domain
/// error and returns NaN.
pub fn ellie_checked(phi: f64, m: f64) -> Checked<f64> {
    if m == 0.0 {
        return Checked::ok(phi);
    }
    if !(0.0..=1.0).contains(&m) {
        return Checked::fail("ellie", SpecialError::Domain, f64::NAN);
    }
    let (npio2, mut lphi) = reduce_amplitude(phi);
    let negative = lphi < 0.0;
    if negative {
        lphi = -lphi;
    }

    let a = 1.0 - m;
    let e_complete = ellpe(a);
    let temp = if a == 0.0 {
        sin(lphi)
    } else {
        let t = tan(lphi);
        let b = sqrt(a);
        let e = 1.0 / (b * t);
        if fabs(t) > 10.0 && fabs(e) < 10.0 {
            // Amplitude transformation, stable near odd multiples of π/2
            let e = atan(e);
            e_complete + m * sin(lphi) * sin(e) - ellie(e, m)
        } else {
            let mut sum = 0.0;
            let (t, modulus, d, a) = landen(lphi, t, b, m, |c, phi| sum += c * sin(phi));
            let temp = e_complete / ellpk(1.0 - m);
            temp * (atan(t) + modulus * PI) / (d * a) + sum
        }
    };

    let temp = if negative { -temp } else { temp };
    Checked::ok(temp + npio2 * e_complete)
}

/// Split φ into an even multiple of π/2 and a remainder.
#[inline]
fn reduce_amplitude(phi: f64) -> (f64, f64) {
    let mut npio2 = floor(phi / PIO2);
    if npio2 % 2.0 != 0.0 {
        npio2 += 1.0;
    }
    (npio2, phi - npio2 * PIO2)
}

/// Arithmetic-geometric mean iteration on the amplitude. `step` sees each
/// new c and amplitude. Returns the final tangent, the multiple of π
/// accumulated, the doubling factor and the final arithmetic mean.
fn landen(
    mut phi: f64,
    mut t: f64,
    mut b: f64,
    m: f64,
    mut step: impl FnMut(f64, f64),
) -> (f64, f64, f64, f64) {
    let mut a = 1.0;
    let mut c = sqrt(m);
    let mut d = 1.0;
    let mut modulus = 0.0;

    while fabs(c / a) > MACHEP {
        let temp = b / a;
        phi += atan(t * temp) + modulus * PI;
        modulus = floor((phi + PIO2) / PI);
        t = t * (1.0 + temp) / (1.0 - temp * t * t);
        c = (a - b) / 2.0;
        let g = sqrt(a * b);
        a = (a + b) / 2.0;
        b = g;
        d += d;
        step(c, phi);
    }
    (t, modulus, d, a)
}

// ---------------------------------------------------------------------------
// Jacobian elliptic functions
// ---------------------------------------------------------------------------

/// Jacobian elliptic functions at one point, with the amplitude φ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jacobi {
    pub sn: f64,
    pub cn: f64,
    pub dn: f64,
    pub phi: f64,
}

/// Jacobian elliptic functions sn, cn, dn of u with parameter m, and the
/// amplitude φ with sn = sin φ.
///
/// Arithmetic-geometric mean scaling followed by backward recurrence on
/// the amplitude. For m outside [0, 1] every output is 0 with a domain
/// error.
///
/// # Example
///
/// ```
/// use transcendental::special::ellpj;
///
/// let j = ellpj(0.7, 0.4);
/// assert!((j.sn * j.sn + j.cn * j.cn - 1.0).abs() < 1e-15);
/// assert!((j.dn * j.dn + 0.4 * j.sn * j.sn - 1.0).abs() < 1e-15);
/// ```
pub fn ellpj(u: f64, m: f64) -> Jacobi {
    ellpj_checked(u, m).value
}

/// [`ellpj`] with error reporting.
pub fn ellpj_checked(u: f64, m: f64) -> Checked<Jacobi> {
    const NAME: &str = "ellpj";

    if !(0.0..=1.0).contains(&m) {
        let zero = Jacobi { sn: 0.0, cn: 0.0, dn: 0.0, phi: 0.0 };
        return Checked::fail(NAME, SpecialError::Domain, zero);
    }

    if m < 1.0e-9 {
        let t = sin(u);
        let b = cos(u);
        let ai = 0.25 * m * (u - t * b);
        return Checked::ok(Jacobi {
            sn: t - ai * b,
            cn: b + ai * t,
            dn: 1.0 - 0.5 * m * t * t,
            phi: u - ai,
        });
    }

    if m >= 0.9999999999 {
        let ai = 0.25 * (1.0 - m);
        let b = cosh(u);
        let t = tanh(u);
        let phi = 1.0 / b;
        let twon = b * sinh(u);
        let sn = t + ai * (twon - u) / (b * b);
        let ph = 2.0 * atan(exp(u)) - PIO2 + ai * (twon - u) / b;
        let ai = ai * t * phi;
        return Checked::ok(Jacobi {
            sn,
            cn: phi - ai * (twon - u),
            dn: phi + ai * (twon + u),
            phi: ph,
        });
    }

    // AGM scale
    let mut a = [0.0; 9];
    let mut c = [0.0; 9];
    a[0] = 1.0;
    let mut b = sqrt(1.0 - m);
    c[0] = sqrt(m);
    let mut twon = 1.0;
    let mut i = 0;
    let mut error = None;

    while fabs(c[i] / a[i]) > MACHEP {
        if i > 7 {
            error = Some(SpecialError::Overflow);
            break;
        }
        let ai = a[i];
        i += 1;
        c[i] = (ai - b) / 2.0;
        let t = sqrt(ai * b);
        a[i] = (ai + b) / 2.0;
        b = t;
        twon *= 2.0;
    }

    // Backward recurrence
    let mut phi = twon * a[i] * u;
    let mut prev;
    loop {
        let t = c[i] * sin(phi) / a[i];
        prev = phi;
        phi = (asin(t) + phi) / 2.0;
        i -= 1;
        if i == 0 {
            break;
        }
    }

    let t = cos(phi);
    let value = Jacobi { sn: sin(phi), cn: t, dn: t / cos(phi - prev), phi };
    Checked::with(NAME, value, error)
}
