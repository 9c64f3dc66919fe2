//! Airy functions Ai, Bi and their derivatives.

use libm::{fabs, sqrt};

use super::bessel_jv::jv;
use super::bessel_k::k_steed;
use super::{Checked, SpecialError, MACHEP, MAXNUM, PI};

/// Ai(0)
const C1: f64 = 0.35502805388781723926;
/// −Ai′(0)
const C2: f64 = 0.258819403792806798405;
const SQRT3: f64 = 1.732050807568877293527;

/// Beyond this Bi(x) overflows.
const MAXAIRY: f64 = 25.77;
/// Below this magnitude the Maclaurin series is used throughout.
const SERIES_LIMIT: f64 = 2.09;

/// Airy functions evaluated at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airy {
    pub ai: f64,
    pub aip: f64,
    pub bi: f64,
    pub bip: f64,
}

/// Airy functions Ai(x), Ai′(x), Bi(x), Bi′(x), solutions of y″ = xy.
///
/// Maclaurin series near the origin. For larger positive x, Ai and Ai′
/// come from K_{1/3} and K_{2/3}; for larger negative x all four come from
/// J_{±1/3} and J_{±2/3}. Above x = 25.77 Bi and Bi′ overflow to
/// [`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::airy;
///
/// let a = airy(0.0);
/// assert!((a.ai - 0.3550280538878172).abs() < 1e-15);
/// assert!((a.bi - 0.6149266274460007).abs() < 1e-15);
///
/// // Wronskian: Ai Bi′ − Ai′ Bi = 1/π
/// let a = airy(-3.7);
/// let w = a.ai * a.bip - a.aip * a.bi;
/// assert!((w - core::f64::consts::FRAC_1_PI).abs() < 1e-13);
/// ```
pub fn airy(x: f64) -> Airy {
    airy_checked(x).value
}

/// [`airy`] with error reporting.
pub fn airy_checked(x: f64) -> Checked<Airy> {
    if x <= -SERIES_LIMIT {
        return Checked::ok(oscillatory(-x));
    }
    if x < SERIES_LIMIT {
        return Checked::ok(maclaurin(x));
    }

    // ζ = (2/3) x^{3/2}
    let zeta = 2.0 * x * sqrt(x) / 3.0;
    let (k13, k23) = k_steed(-1.0 / 3.0, zeta);
    let ai = sqrt(x) * k13 / (PI * SQRT3);
    let aip = -x * k23 / (PI * SQRT3);

    if x > MAXAIRY {
        let value = Airy { ai, aip, bi: MAXNUM, bip: MAXNUM };
        return Checked::fail("airy", SpecialError::Overflow, value);
    }
    let s = maclaurin(x);
    Checked::ok(Airy { ai, aip, bi: s.bi, bip: s.bip })
}

/// Ai(−z), Bi(−z) and derivatives through Bessel J of order ±1/3, ±2/3.
fn oscillatory(z: f64) -> Airy {
    let zeta = 2.0 * z * sqrt(z) / 3.0;
    let jp13 = jv(1.0 / 3.0, zeta);
    let jm13 = jv(-1.0 / 3.0, zeta);
    let jp23 = jv(2.0 / 3.0, zeta);
    let jm23 = jv(-2.0 / 3.0, zeta);

    Airy {
        ai: sqrt(z) / 3.0 * (jp13 + jm13),
        aip: z / 3.0 * (jp23 - jm23),
        bi: sqrt(z / 3.0) * (jm13 - jp13),
        bip: z / SQRT3 * (jm23 + jp23),
    }
}

/// Maclaurin series: Ai = c1 f − c2 g, Bi = √3 (c1 f + c2 g).
fn maclaurin(x: f64) -> Airy {
    let z = x * x * x;

    let mut f = 1.0;
    let mut g = x;
    let mut t = 1.0;
    let mut uf = 1.0;
    let mut ug = x;
    let mut k = 1.0;
    while t > MACHEP {
        uf *= z;
        k += 1.0;
        uf /= k;
        ug *= z;
        k += 1.0;
        ug /= k;
        uf /= k;
        f += uf;
        k += 1.0;
        ug /= k;
        g += ug;
        t = fabs(uf / f);
    }
    let uf = C1 * f;
    let ug = C2 * g;
    let ai = uf - ug;
    let bi = SQRT3 * (uf + ug);

    // Derivatives
    let mut k = 4.0;
    let mut uf = x * x / 2.0;
    let mut ug = z / 3.0;
    let mut f = uf;
    let mut g = 1.0 + ug;
    uf /= 3.0;
    let mut t = 1.0;
    while t > MACHEP {
        uf *= z;
        ug /= k;
        k += 1.0;
        ug *= z;
        uf /= k;
        f += uf;
        k += 1.0;
        ug /= k;
        uf /= k;
        g += ug;
        k += 1.0;
        t = fabs(ug / g);
    }
    let uf = C1 * f;
    let ug = C2 * g;

    Airy { ai, aip: uf - ug, bi, bip: SQRT3 * (uf + ug) }
}
