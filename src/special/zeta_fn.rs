//! Hurwitz zeta function and the Riemann zeta function minus one.

use libm::{fabs, floor, pow, sin};

use super::gamma_fn::gamma;
use super::polevl::{p1evl, polevl};
use super::{Checked, SpecialError, MACHEP, MAXNUM, PI};

/// Euler–Maclaurin correction denominators (2k)!/B_{2k}.
const A: [f64; 12] = [
    12.0,
    -720.0,
    30240.0,
    -1209600.0,
    47900160.0,
    -1.8924375803183791606e9,
    7.47242496e10,
    -2.950130727918164224e12,
    1.1646782814350067249e14,
    -4.5979787224074726105e15,
    1.8152105401943546773e17,
    -7.1661652561756670113e18,
];

/// Hurwitz zeta function ζ(x, q) = Σ_{k≥0} (k + q)^{−x}.
///
/// Euler–Maclaurin summation, or the leading asymptotic terms once
/// q > 10⁸. Defined for x > 1; x = 1 is the pole and returns +∞, x < 1
/// returns NaN with a domain error.
///
/// # Example
///
/// ```
/// use transcendental::special::zeta;
///
/// // ζ(2, 1) = π²/6
/// let pi2 = core::f64::consts::PI * core::f64::consts::PI;
/// assert!((zeta(2.0, 1.0) - pi2 / 6.0).abs() < 1e-15);
/// ```
pub fn zeta(x: f64, q: f64) -> f64 {
    zeta_checked(x, q).value
}

/// [`zeta`] with error reporting.
pub fn zeta_checked(x: f64, q: f64) -> Checked<f64> {
    const NAME: &str = "zeta";

    if x == 1.0 {
        return Checked::fail(NAME, SpecialError::Singularity, f64::INFINITY);
    }
    if x < 1.0 {
        return Checked::fail(NAME, SpecialError::Domain, f64::NAN);
    }
    if q <= 0.0 {
        if q == floor(q) {
            return Checked::fail(NAME, SpecialError::Singularity, f64::INFINITY);
        }
        // q^{−x} is complex
        if x != floor(x) {
            return Checked::fail(NAME, SpecialError::Domain, f64::NAN);
        }
    }

    // DLMF 25.11.43
    if q > 1e8 {
        return Checked::ok((1.0 / (x - 1.0) + 1.0 / (2.0 * q)) * pow(q, 1.0 - x));
    }
    Checked::ok(euler_maclaurin(x, q))
}

/// Euler–Maclaurin summation of Σ (k + q)^{−x}. Valid for any x ≠ 1; the
/// direct sum runs until k + q exceeds 9.
fn euler_maclaurin(x: f64, q: f64) -> f64 {
    let mut s = pow(q, -x);
    let mut a = q;
    let mut i = 0;
    let mut b = 0.0;
    while i < 9 || a <= 9.0 {
        i += 1;
        a += 1.0;
        b = pow(a, -x);
        s += b;
        if fabs(b / s) < MACHEP {
            return s;
        }
    }

    let w = a;
    s += b * w / (x - 1.0);
    s -= 0.5 * b;
    let mut a = 1.0;
    let mut k = 0.0;
    for coeff in A {
        a *= x + k;
        b /= w;
        let t = a * b / coeff;
        s += t;
        if fabs(t / s) < MACHEP {
            break;
        }
        k += 1.0;
        a *= x + k;
        b /= w;
        k += 1.0;
    }
    s
}

/// ζ(n) − 1 for n = 0..=30. Entry 1 is the pole.
const AZETAC: [f64; 31] = [
    -1.50000000000000000000E0,
    MAXNUM,
    6.44934066848226436472E-1,
    2.02056903159594285400E-1,
    8.23232337111381915160E-2,
    3.69277551433699263314E-2,
    1.73430619844491397145E-2,
    8.34927738192282683980E-3,
    4.07735619794433937869E-3,
    2.00839282608221441785E-3,
    9.94575127818085337146E-4,
    4.94188604119464558702E-4,
    2.46086553308048298638E-4,
    1.22713347578489146752E-4,
    6.12481350587048292585E-5,
    3.05882363070204935517E-5,
    1.52822594086518717326E-5,
    7.63719763789976227360E-6,
    3.81729326499983985646E-6,
    1.90821271655393892566E-6,
    9.53962033872796113152E-7,
    4.76932986787806463117E-7,
    2.38450502727732990004E-7,
    1.19219925965311073068E-7,
    5.96081890512594796124E-8,
    2.98035035146522801861E-8,
    1.49015548283650412347E-8,
    7.45071178983542949198E-9,
    3.72533402478845705482E-9,
    1.86265972351304900640E-9,
    9.31327432419668182872E-10,
];

/// 2ˣ (1 − 1/x) (ζ(x) − 1) = P(1/x)/Q(1/x), 1 ≤ x ≤ 10.
const P: [f64; 9] = [
    5.85746514569725319540E11,
    2.57534127756102572888E11,
    4.87781159567948256438E10,
    5.15399538023885770696E9,
    3.41646073514754094281E8,
    1.60837006880656492731E7,
    5.92785467342109522998E5,
    1.51129169964938823117E4,
    2.01822444485997955865E2,
];
const Q: [f64; 8] = [
    3.90497676373371157516E11,
    5.22858235368272161797E10,
    5.64451517271280543351E9,
    3.39006746015350418834E8,
    1.79410371500126453702E7,
    5.66666825131384797029E5,
    1.60382976810944131506E4,
    1.96436237223387314144E2,
];

/// Beyond this 2⁻ˣ underflows relative to 1 and ζ(x) − 1 is 0.
const MAXL2: f64 = 127.0;

/// Riemann zeta function minus one, ζ(x) − 1.
///
/// Keeps full relative precision for large x, where ζ(x) is close to 1.
/// Negative x goes through the functional equation; the pole at x = 1
/// returns [`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::{zeta, zetac};
///
/// assert_eq!(zetac(0.0), -1.5);
/// assert!((zetac(3.5) + 1.0 - zeta(3.5, 1.0)).abs() < 1e-15);
/// // Trivial zero at −2
/// assert!((zetac(-2.0) + 1.0).abs() < 1e-15);
/// ```
pub fn zetac(x: f64) -> f64 {
    zetac_checked(x).value
}

/// [`zetac`] with error reporting.
pub fn zetac_checked(x: f64) -> Checked<f64> {
    const NAME: &str = "zetac";

    if x.is_nan() {
        return Checked::ok(x);
    }
    if x < 0.0 {
        if x < -170.6243 {
            return Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
        }
        // ζ(x) = 2ˣ πˣ⁻¹ sin(πx/2) Γ(1 − x) ζ(1 − x)
        let s = 1.0 - x;
        let w = zetac(s);
        let b = sin(0.5 * PI * x) * pow(2.0 * PI, x) * gamma(s) * (1.0 + w) / PI;
        return Checked::ok(b - 1.0);
    }
    if x == 1.0 {
        return Checked::fail(NAME, SpecialError::Singularity, MAXNUM);
    }
    if x >= MAXL2 {
        return Checked::ok(0.0);
    }

    if floor(x) == x && x < 31.0 {
        return Checked::ok(AZETAC[x as usize]);
    }

    if x < 1.0 {
        return Checked::ok(euler_maclaurin(x, 1.0) - 1.0);
    }

    if x <= 10.0 {
        let b = pow(2.0, x) * (x - 1.0);
        let w = 1.0 / x;
        return Checked::ok((x * polevl(w, &P)) / (b * p1evl(w, &Q)));
    }

    // Sum over odd k, then restore the even terms: Σ_even = 2⁻ˣ ζ(x)
    let mut s = 0.0;
    let mut a = 1.0;
    loop {
        a += 2.0;
        let b = pow(a, -x);
        s += b;
        if b / s <= MACHEP {
            break;
        }
    }
    let b = pow(2.0, -x);
    Checked::ok((s + b) / (1.0 - b))
}
