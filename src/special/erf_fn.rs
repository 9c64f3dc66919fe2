//! Error function, its complement, the normal CDF and its inverse.

use libm::{exp, fabs, log, sqrt};

use super::polevl::{p1evl, polevl};
use super::{Checked, SpecialError, MAXLOG, MAXNUM, SQRTH};

/// erfc(x) = exp(−x²) P(x)/Q(x), 1 ≤ x < 8.
const P: [f64; 9] = [
    2.46196981473530512524E-10,
    5.64189564831068821977E-1,
    7.46321056442269912687E0,
    4.86371970985681366614E1,
    1.96520832956077098242E2,
    5.26445194995477358631E2,
    9.34528527171957607540E2,
    1.02755188689515710272E3,
    5.57535335369399327526E2,
];
const Q: [f64; 8] = [
    1.32281951154744992508E1,
    8.67072140885989742329E1,
    3.54937778887819891062E2,
    9.75708501743205489753E2,
    1.82390916687909736289E3,
    2.24633760818710981792E3,
    1.65666309194161350182E3,
    5.57535340817727675546E2,
];

/// erfc(x) = exp(−x²)/x · R(1/x²)/S(1/x²), 8 ≤ x.
const R: [f64; 6] = [
    5.64189583547755073984E-1,
    1.27536670759978104416E0,
    5.01905042251180477414E0,
    6.16021097993053585195E0,
    7.40974269950448939160E0,
    2.97886665372100240670E0,
];
const S: [f64; 6] = [
    2.26052863220117276590E0,
    9.39603524938001434673E0,
    1.20489539808096656605E1,
    1.70814450747565897222E1,
    9.60896809063285878198E0,
    3.36907645100081516050E0,
];

/// erf(x) = x T(x²)/U(x²), 0 ≤ |x| ≤ 1.
const T: [f64; 5] = [
    9.60497373987051638749E0,
    9.00260197203842689217E1,
    2.23200534594684319226E3,
    7.00332514112805075473E3,
    5.55923013010394962768E4,
];
const U: [f64; 5] = [
    3.35617141647503099647E1,
    5.21357949780152679795E2,
    4.59432382970980127987E3,
    2.26290000613890934246E4,
    4.92673942608635921086E4,
];

/// Error function erf(x) = 2/√π ∫₀ˣ e⁻ᵗ² dt.
///
/// # Example
///
/// ```
/// use transcendental::special::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(6.0) - 1.0).abs() < 1e-16);
/// ```
pub fn erf(x: f64) -> f64 {
    erf_checked(x).value
}

/// [`erf`] with error reporting.
pub fn erf_checked(x: f64) -> Checked<f64> {
    if x.is_nan() {
        return Checked::ok(x);
    }
    if fabs(x) > 1.0 {
        return erfc_checked(x).map(|c| 1.0 - c);
    }
    let z = x * x;
    Checked::ok(x * polevl(z, &T) / p1evl(z, &U))
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// Accurate in the tail where 1 − erf(x) would cancel. Returns 0 with an
/// underflow error once exp(−x²) underflows.
pub fn erfc(x: f64) -> f64 {
    erfc_checked(x).value
}

/// [`erfc`] with error reporting.
pub fn erfc_checked(a: f64) -> Checked<f64> {
    const NAME: &str = "erfc";

    if a.is_nan() {
        return Checked::ok(a);
    }
    let x = fabs(a);
    if x < 1.0 {
        return Checked::ok(1.0 - erf(a));
    }

    let z = -a * a;
    if z < -MAXLOG {
        return erfc_underflow(NAME, a);
    }
    let z = exp(z);

    let (p, q) = if x < 8.0 {
        (polevl(x, &P), p1evl(x, &Q))
    } else {
        (polevl(x, &R), p1evl(x, &S))
    };
    let mut y = (z * p) / q;
    if a < 0.0 {
        y = 2.0 - y;
    }
    if y == 0.0 {
        return erfc_underflow(NAME, a);
    }
    Checked::ok(y)
}

fn erfc_underflow(name: &'static str, a: f64) -> Checked<f64> {
    let value = if a < 0.0 { 2.0 } else { 0.0 };
    Checked::fail(name, SpecialError::Underflow, value)
}

/// Standard normal cumulative distribution Φ(a).
///
/// # Example
///
/// ```
/// use transcendental::special::ndtr;
///
/// assert_eq!(ndtr(0.0), 0.5);
/// assert!((ndtr(1.0) - 0.8413447460685429).abs() < 1e-15);
/// ```
pub fn ndtr(a: f64) -> f64 {
    ndtr_checked(a).value
}

/// [`ndtr`] with error reporting.
pub fn ndtr_checked(a: f64) -> Checked<f64> {
    if a.is_nan() {
        return Checked::ok(a);
    }
    let x = a * SQRTH;
    let z = fabs(x);
    if z < SQRTH {
        return Checked::ok(0.5 + 0.5 * erf(x));
    }
    erfc_checked(z).map(|y| {
        let y = 0.5 * y;
        if x > 0.0 { 1.0 - y } else { y }
    })
}

// ---------------------------------------------------------------------------
// Inverse of the normal distribution
// ---------------------------------------------------------------------------

/// √(2π)
const S2PI: f64 = 2.50662827463100050242E0;

/// Approximation for 0 ≤ |y − 0.5| ≤ 3/8.
const P0: [f64; 5] = [
    -5.99633501014107895267E1,
    9.80010754185999661536E1,
    -5.66762857469070293439E1,
    1.39312609387279679503E1,
    -1.23916583867381258016E0,
];
const Q0: [f64; 8] = [
    1.95448858338141759834E0,
    4.67627912898881538453E0,
    8.63602421390890590575E1,
    -2.25462687854119370527E2,
    2.00260212380060660359E2,
    -8.20372256168333339912E1,
    1.59056225126211695515E1,
    -1.18331621121330003142E0,
];

/// Approximation for interval z = √(−2 ln y) between 2 and 8,
/// i.e. y between exp(−2) = .135 and exp(−32) = 1.27e-14.
const P1: [f64; 9] = [
    4.05544892305962419923E0,
    3.15251094599893866154E1,
    5.71628192246421288162E1,
    4.40805073893200834700E1,
    1.46849561928858024014E1,
    2.18663306850790267539E0,
    -1.40256079171354495875E-1,
    -3.50424626827848203418E-2,
    -8.57456785154685413611E-4,
];
const Q1: [f64; 8] = [
    1.57799883256466749731E1,
    4.53907635128879210584E1,
    4.13172038254672030440E1,
    1.50425385692907503408E1,
    2.50464946208309415979E0,
    -1.42182922854787788574E-1,
    -3.80806407691578277194E-2,
    -9.33259480895457427372E-4,
];

/// Approximation for z between 8 and 64, y between exp(−32) and exp(−2048).
const P2: [f64; 9] = [
    3.23774891776946035970E0,
    6.91522889068984211695E0,
    3.93881025292474443415E0,
    1.33303460815807542389E0,
    2.01485389549179081538E-1,
    1.23716634817820021358E-2,
    3.01581553508235416007E-4,
    2.65806974686737550832E-6,
    6.23974539184983293730E-9,
];
const Q2: [f64; 8] = [
    6.02427039364742014255E0,
    3.67983563856160859403E0,
    1.37702099489081330271E0,
    2.16236993594496635890E-1,
    1.34204006088543189037E-2,
    3.28014464682127739104E-4,
    2.89247864745380683936E-6,
    6.79019408009981274425E-9,
];

/// exp(−2)
const EXPM2: f64 = 0.13533528323661269189;

/// Inverse of the standard normal CDF.
///
/// Returns x such that `ndtr(x) = y0`. The central range uses a rational
/// function of y − 0.5; the tails use rational functions of 1/z with
/// z = √(−2 ln y). Arguments outside (0, 1) return ∓[`MAXNUM`] with a domain
/// error.
///
/// # Example
///
/// ```
/// use transcendental::special::{ndtr, ndtri};
///
/// assert_eq!(ndtri(0.5), 0.0);
/// assert!((ndtr(ndtri(0.025)) - 0.025).abs() < 1e-16);
/// ```
pub fn ndtri(y0: f64) -> f64 {
    ndtri_checked(y0).value
}

/// [`ndtri`] with error reporting.
pub fn ndtri_checked(y0: f64) -> Checked<f64> {
    const NAME: &str = "ndtri";

    if y0.is_nan() {
        return Checked::ok(y0);
    }
    if y0 <= 0.0 {
        return Checked::fail(NAME, SpecialError::Domain, -MAXNUM);
    }
    if y0 >= 1.0 {
        return Checked::fail(NAME, SpecialError::Domain, MAXNUM);
    }

    let mut negate = true;
    let mut y = y0;
    if y > 1.0 - EXPM2 {
        y = 1.0 - y;
        negate = false;
    }

    if y > EXPM2 {
        let y = y - 0.5;
        let y2 = y * y;
        let x = y + y * (y2 * polevl(y2, &P0) / p1evl(y2, &Q0));
        return Checked::ok(x * S2PI);
    }

    let x = sqrt(-2.0 * log(y));
    let x0 = x - log(x) / x;
    let z = 1.0 / x;
    let x1 = if x < 8.0 {
        z * polevl(z, &P1) / p1evl(z, &Q1)
    } else {
        z * polevl(z, &P2) / p1evl(z, &Q2)
    };
    let x = x0 - x1;
    Checked::ok(if negate { -x } else { x })
}
