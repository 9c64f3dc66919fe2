//! Modified Bessel functions of the first kind.

use libm::{exp, fabs, floor, log, sqrt};

use super::gamma_fn::gamma;
use super::hyperg::hyperg_checked;
use super::polevl::chbevl;
use super::{Checked, SpecialError, MAXLOG, MAXNUM};

/// Chebyshev coefficients for exp(−x) I0(x) on [0, 8].
const A0: [f64; 30] = [
    -4.41534164647933937950E-18,
    3.33079451882223809783E-17,
    -2.43127984654795469359E-16,
    1.71539128555513303061E-15,
    -1.16853328779934516808E-14,
    7.67618549860493561688E-14,
    -4.85644678311192946090E-13,
    2.95505266312963983461E-12,
    -1.72682629144155570723E-11,
    9.67580903537323691224E-11,
    -5.18979560163526290666E-10,
    2.65982372468238665035E-9,
    -1.30002500998624804212E-8,
    6.04699502254191894932E-8,
    -2.67079385394061173391E-7,
    1.11738753912010371815E-6,
    -4.41673835845875056359E-6,
    1.64484480707288970893E-5,
    -5.75419501008210370398E-5,
    1.88502885095841655729E-4,
    -5.76375574538582365885E-4,
    1.63947561694133579842E-3,
    -4.32430999505057594430E-3,
    1.05464603945949983183E-2,
    -2.37374148058994688156E-2,
    4.93052842396707084878E-2,
    -9.49010970480476444210E-2,
    1.71620901522208775349E-1,
    -3.04682672343198398683E-1,
    6.76795274409476084995E-1,
];

/// Chebyshev coefficients for exp(−x) √x I0(x) in 8/x on (8, ∞).
const B0: [f64; 25] = [
    -7.23318048787475395456E-18,
    -4.83050448594418207126E-18,
    4.46562142029675999901E-17,
    3.46122286769746109310E-17,
    -2.82762398051658348494E-16,
    -3.42548561967721913462E-16,
    1.77256013305652638360E-15,
    3.81168066935262242075E-15,
    -9.55484669882830764870E-15,
    -4.15056934728722208663E-14,
    1.54008621752140982691E-14,
    3.85277838274214270114E-13,
    7.18012445138366623367E-13,
    -1.79417853150680611778E-12,
    -1.32158118404477131188E-11,
    -3.14991652796324136454E-11,
    1.18891471078464383424E-11,
    4.94060238822496958910E-10,
    3.39623202570838634515E-9,
    2.26666899049817806459E-8,
    2.04891858946906374183E-7,
    2.89137052083475648297E-6,
    6.88975834691682398426E-5,
    3.36911647825569408990E-3,
    8.04490411014108831608E-1,
];

/// Chebyshev coefficients for exp(−x) I1(x)/x on [0, 8].
const A1: [f64; 29] = [
    2.77791411276104639959E-18,
    -2.11142121435816608115E-17,
    1.55363195773620046921E-16,
    -1.10559694773538630805E-15,
    7.60068429473540693410E-15,
    -5.04218550472791168711E-14,
    3.22379336594557470981E-13,
    -1.98397439776494371520E-12,
    1.17361862988909016308E-11,
    -6.66348972350202774223E-11,
    3.62559028155211703701E-10,
    -1.88724975172282928790E-9,
    9.38153738649577178388E-9,
    -4.44505912879632808065E-8,
    2.00329475355213526229E-7,
    -8.56872026469545474066E-7,
    3.47025130813767847674E-6,
    -1.32731636560394358279E-5,
    4.78156510755005422638E-5,
    -1.61760815825896745588E-4,
    5.12285956168575772895E-4,
    -1.51357245063125314899E-3,
    4.15642294431288815669E-3,
    -1.05640848946261981558E-2,
    2.47264490306265168283E-2,
    -5.29459812080949914269E-2,
    1.02643658689847095384E-1,
    -1.76416518357834055153E-1,
    2.52587186443633654823E-1,
];

/// Chebyshev coefficients for exp(−x) √x I1(x) in 8/x on (8, ∞).
const B1: [f64; 25] = [
    7.51729631084210481353E-18,
    4.41434832307170791151E-18,
    -4.65030536848935832153E-17,
    -3.20952592199342395980E-17,
    2.96262899764595013876E-16,
    3.30820231092092828324E-16,
    -1.88035477551078244854E-15,
    -3.81440307243700780478E-15,
    1.04202769841288027642E-14,
    4.27244001671195135429E-14,
    -2.10154184277266431302E-14,
    -4.08355111109219731823E-13,
    -7.19855177624590851209E-13,
    2.03562854414708950722E-12,
    1.41258074366137813316E-11,
    3.25260358301548823856E-11,
    -1.89749581235054123450E-11,
    -5.58974346219658380687E-10,
    -3.83538038596423702205E-9,
    -2.63146884688951950684E-8,
    -2.51223623787020892529E-7,
    -3.88256480887769039346E-6,
    -1.10588938762623716291E-4,
    -9.76109749136146840777E-3,
    7.78576235018280120474E-1,
];

/// Modified Bessel function of the first kind, order zero.
///
/// # Example
///
/// ```
/// use transcendental::special::i0;
///
/// assert_eq!(i0(0.0), 1.0);
/// assert!((i0(1.0) - 1.2660658777520082).abs() < 1e-15);
/// ```
pub fn i0(x: f64) -> f64 {
    i0_checked(x).value
}

/// [`i0`] with error reporting. Overflows to [`MAXNUM`] once eˣ does.
pub fn i0_checked(x: f64) -> Checked<f64> {
    let x = fabs(x);
    if x > MAXLOG {
        return Checked::fail("i0", SpecialError::Overflow, MAXNUM);
    }
    Checked::ok(exp(x) * i0_scaled(x))
}

/// Exponentially scaled I0: exp(−|x|) I0(x).
pub fn i0e(x: f64) -> f64 {
    i0_scaled(fabs(x))
}

/// [`i0e`] with error reporting; finite for every argument.
pub fn i0e_checked(x: f64) -> Checked<f64> {
    Checked::ok(i0e(x))
}

#[inline]
fn i0_scaled(x: f64) -> f64 {
    if x <= 8.0 {
        chbevl(x / 2.0 - 2.0, &A0)
    } else {
        chbevl(32.0 / x - 2.0, &B0) / sqrt(x)
    }
}

/// Modified Bessel function of the first kind, order one.
///
/// # Example
///
/// ```
/// use transcendental::special::i1;
///
/// assert!((i1(1.0) - 0.5651591039924851).abs() < 1e-15);
/// assert_eq!(i1(-1.0), -i1(1.0));
/// ```
pub fn i1(x: f64) -> f64 {
    i1_checked(x).value
}

/// [`i1`] with error reporting. Overflows to ±[`MAXNUM`] once eˣ does.
pub fn i1_checked(x: f64) -> Checked<f64> {
    let z = fabs(x);
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    if z > MAXLOG {
        return Checked::fail("i1", SpecialError::Overflow, sign * MAXNUM);
    }
    Checked::ok(sign * exp(z) * i1_scaled(z))
}

/// Exponentially scaled I1: exp(−|x|) I1(x).
pub fn i1e(x: f64) -> f64 {
    let v = i1_scaled(fabs(x));
    if x < 0.0 { -v } else { v }
}

/// [`i1e`] with error reporting; finite for every argument.
pub fn i1e_checked(x: f64) -> Checked<f64> {
    Checked::ok(i1e(x))
}

#[inline]
fn i1_scaled(z: f64) -> f64 {
    if z <= 8.0 {
        chbevl(z / 2.0 - 2.0, &A1) * z
    } else {
        chbevl(32.0 / z - 2.0, &B1) / sqrt(z)
    }
}

/// Modified Bessel function of the first kind, real order v.
///
/// Computed as (x/2)ᵛ e⁻ˣ M(v + ½, 2v + 1, 2x) / Γ(v + 1) with the
/// confluent hypergeometric function M. Negative x is allowed only for
/// integer v; otherwise the result is 0 with a domain error.
///
/// # Example
///
/// ```
/// use transcendental::special::{i1, iv};
///
/// assert!((iv(1.0, 2.5) - i1(2.5)).abs() < 1e-13);
/// ```
pub fn iv(v: f64, x: f64) -> f64 {
    iv_checked(v, x).value
}

/// [`iv`] with error reporting.
pub fn iv_checked(v: f64, x: f64) -> Checked<f64> {
    const NAME: &str = "iv";

    let mut v = v;
    let mut t = floor(v);
    // I_{-n} = I_n for integer n
    if v < 0.0 && t == v {
        v = -v;
        t = -t;
    }

    let mut sign = 1.0;
    if x < 0.0 {
        if t != v {
            return Checked::fail(NAME, SpecialError::Domain, 0.0);
        }
        if v != 2.0 * floor(v / 2.0) {
            sign = -1.0;
        }
    }

    if x == 0.0 {
        if v == 0.0 {
            return Checked::ok(1.0);
        }
        if v < 0.0 {
            return Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
        }
        return Checked::ok(0.0);
    }

    let ax = fabs(x);
    let t = v * log(0.5 * ax) - x;
    let t = sign * exp(t) / gamma(v + 1.0);
    let a = v + 0.5;
    let m = hyperg_checked(a, 2.0 * a, 2.0 * x);
    Checked::with(NAME, t * m.value, m.error)
}
