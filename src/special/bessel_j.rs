//! Bessel functions of the first and second kind, orders 0, 1 and integer n.

use libm::{cos, fabs, log, sin, sqrt};

use super::polevl::{p1evl, polevl};
use super::{Checked, SpecialError, MACHEP, MAXNUM, PIO4, SQ2OPI, THPIO4, TWOOPI};

// ---------------------------------------------------------------------------
// Order zero
// ---------------------------------------------------------------------------

/// Modulus and phase auxiliaries for x > 5.
const PP0: [f64; 7] = [
    7.96936729297347051624E-4,
    8.28352392107440799803E-2,
    1.23953371646414299388E0,
    5.44725003058768775090E0,
    8.74716500199817011941E0,
    5.30324038235394892183E0,
    9.99999999999999997821E-1,
];
const PQ0: [f64; 7] = [
    9.24408810558863637013E-4,
    8.56288474354474431428E-2,
    1.25352743901058953537E0,
    5.47097740330417105182E0,
    8.76190883237069594232E0,
    5.30605288235394617618E0,
    1.00000000000000000218E0,
];
const QP0: [f64; 8] = [
    -1.13663838898469149931E-2,
    -1.28252718670509318512E0,
    -1.95539544257735972385E1,
    -9.32060152123768231369E1,
    -1.77681167980488050595E2,
    -1.47077505154951170175E2,
    -5.14105326766599330220E1,
    -6.05014350600728481186E0,
];
const QQ0: [f64; 7] = [
    6.43178256118178023184E1,
    8.56430025976980587198E2,
    3.88240183605401609683E3,
    7.24046774195652478189E3,
    5.93072701187316984827E3,
    2.06209331660327847417E3,
    2.42005740240291393179E2,
];

/// Y0(x) − (2/π) ln(x) J0(x), 0 < x ≤ 5.
const YP0: [f64; 8] = [
    1.55924367855235737965E4,
    -1.46639295903971606143E7,
    5.43526477051876500413E9,
    -9.82136065717911466409E11,
    8.75906394395366999549E13,
    -3.46628303384729719441E15,
    4.42733268572569800351E16,
    -1.84950800436986690637E16,
];
const YQ0: [f64; 7] = [
    1.04128353664259848412E3,
    6.26107330137134956842E5,
    2.68919633393814121987E8,
    8.64002487103935000337E10,
    2.02979612750105546709E13,
    3.17157752842975028269E15,
    2.50596256172653059228E17,
];

/// Squares of the first two zeros of J0.
const DR1: f64 = 5.78318596294678452118E0;
const DR2: f64 = 3.04712623436620863991E1;

/// J0(x)/((x² − r1²)(x² − r2²)), 0 ≤ x ≤ 5.
const RP0: [f64; 4] = [
    -4.79443220978201773821E9,
    1.95617491946556577543E12,
    -2.49248344360967716204E14,
    9.70862251047306323952E15,
];
const RQ0: [f64; 8] = [
    4.99563147152651017219E2,
    1.73785401676374683123E5,
    4.84409658339962045305E7,
    1.11855537045356834862E10,
    2.11277520115489217587E12,
    3.10518229857422583814E14,
    3.18121955943204943306E16,
    1.71086294081043136091E18,
];

/// Bessel function of the first kind, order zero.
///
/// # Example
///
/// ```
/// use transcendental::special::j0;
///
/// assert_eq!(j0(0.0), 1.0);
/// assert!((j0(2.404825557695773)).abs() < 1e-15);
/// ```
pub fn j0(x: f64) -> f64 {
    let x = fabs(x);
    if x <= 5.0 {
        let z = x * x;
        if x < 1.0e-5 {
            return 1.0 - z / 4.0;
        }
        let p = (z - DR1) * (z - DR2);
        return p * polevl(z, &RP0) / p1evl(z, &RQ0);
    }
    let (p, q) = modulus_phase0(x);
    let xn = x - PIO4;
    let w = 5.0 / x;
    (p * cos(xn) - w * q * sin(xn)) * SQ2OPI / sqrt(x)
}

/// [`j0`] with error reporting; J₀ is bounded, so no error is raised.
pub fn j0_checked(x: f64) -> Checked<f64> {
    Checked::ok(j0(x))
}

/// Bessel function of the second kind, order zero.
///
/// Returns −[`MAXNUM`] at zero (singularity) and for negative x (domain).
pub fn y0(x: f64) -> f64 {
    y0_checked(x).value
}

/// [`y0`] with error reporting.
pub fn y0_checked(x: f64) -> Checked<f64> {
    if x <= 5.0 {
        if x == 0.0 {
            return Checked::fail("y0", SpecialError::Singularity, -MAXNUM);
        }
        if x < 0.0 {
            return Checked::fail("y0", SpecialError::Domain, -MAXNUM);
        }
        let z = x * x;
        let w = polevl(z, &YP0) / p1evl(z, &YQ0);
        return Checked::ok(w + TWOOPI * log(x) * j0(x));
    }
    let (p, q) = modulus_phase0(x);
    let xn = x - PIO4;
    let w = 5.0 / x;
    Checked::ok((p * sin(xn) + w * q * cos(xn)) * SQ2OPI / sqrt(x))
}

#[inline]
fn modulus_phase0(x: f64) -> (f64, f64) {
    let z = 25.0 / (x * x);
    let p = polevl(z, &PP0) / polevl(z, &PQ0);
    let q = polevl(z, &QP0) / p1evl(z, &QQ0);
    (p, q)
}

// ---------------------------------------------------------------------------
// Order one
// ---------------------------------------------------------------------------

const RP1: [f64; 4] = [
    -8.99971225705559398224E8,
    4.52228297998194034323E11,
    -7.27494245221818276015E13,
    3.68295732863852883286E15,
];
const RQ1: [f64; 8] = [
    6.20836478118054335476E2,
    2.56987256757748830383E5,
    8.35146791431949253037E7,
    2.21511595479792499675E10,
    4.74914122079991414898E12,
    7.84369607876235854894E14,
    8.95222336184627338078E16,
    5.32278620332680085395E18,
];
const PP1: [f64; 7] = [
    7.62125616208173112003E-4,
    7.31397056940917570436E-2,
    1.12719608129684925192E0,
    5.11207951146807644818E0,
    8.42404590141772420927E0,
    5.21451598682361504063E0,
    1.00000000000000000254E0,
];
const PQ1: [f64; 7] = [
    5.71323128072548699714E-4,
    6.88455908754495404082E-2,
    1.10514232634061696926E0,
    5.07386386128601488557E0,
    8.39985554327604159757E0,
    5.20982848682361821619E0,
    9.99999999999999997461E-1,
];
const QP1: [f64; 8] = [
    5.10862594750176621635E-2,
    4.98213872951233449420E0,
    7.58238284132545283818E1,
    3.66779609360150777800E2,
    7.10856304998926107277E2,
    5.97489612400613639965E2,
    2.11688757100572135698E2,
    2.52070205858023719784E1,
];
const QQ1: [f64; 7] = [
    7.42373277035675149943E1,
    1.05644886038262816351E3,
    4.98641058337653607651E3,
    9.56231892404756170795E3,
    7.99704160447350683650E3,
    2.82619278517639096600E3,
    3.36093607810698293419E2,
];
const YP1: [f64; 6] = [
    1.26320474790178026440E9,
    -6.47355876379160291031E11,
    1.14509511541823727583E14,
    -8.12770255501325109621E15,
    2.02439475713594898196E17,
    -7.78877196265950026825E17,
];
const YQ1: [f64; 8] = [
    5.94301592346128195359E2,
    2.35564092943068577943E5,
    7.34811944459721705660E7,
    1.87601316108706159478E10,
    3.88231277496238566008E12,
    6.20557727146953693363E14,
    6.87141087355300489866E16,
    3.97270608116560655612E18,
];

/// Squares of the first two zeros of J1.
const Z1: f64 = 1.46819706421238932572E1;
const Z2: f64 = 4.92184563216946036703E1;

/// Bessel function of the first kind, order one.
///
/// # Example
///
/// ```
/// use transcendental::special::j1;
///
/// assert!((j1(1.0) - 0.44005058574493355).abs() < 1e-15);
/// assert_eq!(j1(-1.0), -j1(1.0));
/// ```
pub fn j1(x: f64) -> f64 {
    if x < 0.0 {
        return -j1(-x);
    }
    if x <= 5.0 {
        let z = x * x;
        let w = polevl(z, &RP1) / p1evl(z, &RQ1);
        return w * x * (z - Z1) * (z - Z2);
    }
    let (p, q) = modulus_phase1(x);
    let xn = x - THPIO4;
    let w = 5.0 / x;
    (p * cos(xn) - w * q * sin(xn)) * SQ2OPI / sqrt(x)
}

/// [`j1`] with error reporting; J₁ is bounded, so no error is raised.
pub fn j1_checked(x: f64) -> Checked<f64> {
    Checked::ok(j1(x))
}

/// Bessel function of the second kind, order one.
///
/// Returns −[`MAXNUM`] at zero (singularity) and for negative x (domain).
pub fn y1(x: f64) -> f64 {
    y1_checked(x).value
}

/// [`y1`] with error reporting.
pub fn y1_checked(x: f64) -> Checked<f64> {
    if x <= 5.0 {
        if x == 0.0 {
            return Checked::fail("y1", SpecialError::Singularity, -MAXNUM);
        }
        if x < 0.0 {
            return Checked::fail("y1", SpecialError::Domain, -MAXNUM);
        }
        let z = x * x;
        let w = x * (polevl(z, &YP1) / p1evl(z, &YQ1));
        return Checked::ok(w + TWOOPI * (j1(x) * log(x) - 1.0 / x));
    }
    let (p, q) = modulus_phase1(x);
    let xn = x - THPIO4;
    let w = 5.0 / x;
    Checked::ok((p * sin(xn) + w * q * cos(xn)) * SQ2OPI / sqrt(x))
}

#[inline]
fn modulus_phase1(x: f64) -> (f64, f64) {
    let z = 25.0 / (x * x);
    let p = polevl(z, &PP1) / polevl(z, &PQ1);
    let q = polevl(z, &QP1) / p1evl(z, &QQ1);
    (p, q)
}

// ---------------------------------------------------------------------------
// Integer order
// ---------------------------------------------------------------------------

/// Bessel function of the first kind, integer order n.
///
/// The ratio J_n/J_{n−1} comes from a continued fraction, then backward
/// recurrence to order 0 or 1 fixes the normalization.
///
/// # Example
///
/// ```
/// use transcendental::special::jn;
///
/// assert!((jn(3, 2.5) - 0.21660039103911094).abs() < 1e-14);
/// assert!((jn(-3, 2.5) + jn(3, 2.5)).abs() < 1e-16);
/// ```
pub fn jn(n: i32, x: f64) -> f64 {
    let mut sign = 1.0;
    let mut n = n;
    let mut x = x;
    if n < 0 {
        n = -n;
        if n & 1 != 0 {
            sign = -1.0;
        }
    }
    if x < 0.0 {
        if n & 1 != 0 {
            sign = -sign;
        }
        x = -x;
    }

    match n {
        0 => return sign * j0(x),
        1 => return sign * j1(x),
        2 => return sign * (2.0 * j1(x) / x - j0(x)),
        _ => {}
    }
    if x < MACHEP {
        return 0.0;
    }

    // Continued fraction for J_n/J_{n-1}
    let mut k = 53;
    let mut pk = f64::from(2 * (n + k));
    let mut ans = pk;
    let xk = x * x;
    while k != 0 {
        pk -= 2.0;
        ans = pk - xk / ans;
        k -= 1;
    }
    let ans = x / ans;

    // Backward recurrence
    let mut pk = 1.0;
    let mut pkm1 = 1.0 / ans;
    let mut r = f64::from(2 * (n - 1));
    for _ in 0..n - 1 {
        let pkm2 = (pkm1 * r - pk * x) / x;
        pk = pkm1;
        pkm1 = pkm2;
        r -= 2.0;
    }

    let ans = if fabs(pk) > fabs(pkm1) { j1(x) / pk } else { j0(x) / pkm1 };
    sign * ans
}

/// [`jn`] with error reporting; Jₙ is bounded, so no error is raised.
pub fn jn_checked(n: i32, x: f64) -> Checked<f64> {
    Checked::ok(jn(n, x))
}

/// Bessel function of the second kind, integer order n.
///
/// Forward recurrence from Y0 and Y1, which is stable for Y. Returns
/// −[`MAXNUM`] for x ≤ 0.
///
/// # Example
///
/// ```
/// use transcendental::special::{y0, y1, yn};
///
/// let x = 3.0;
/// assert!((yn(2, x) - (2.0 / x * y1(x) - y0(x))).abs() < 1e-15);
/// ```
pub fn yn(n: i32, x: f64) -> f64 {
    yn_checked(n, x).value
}

/// [`yn`] with error reporting.
pub fn yn_checked(n: i32, x: f64) -> Checked<f64> {
    let (n, sign) = if n < 0 {
        (-n, if n & 1 == 0 { 1.0 } else { -1.0 })
    } else {
        (n, 1.0)
    };

    if n == 0 {
        return y0_checked(x).map(|v| sign * v);
    }
    if n == 1 {
        return y1_checked(x).map(|v| sign * v);
    }
    if x <= 0.0 {
        let kind = if x == 0.0 { SpecialError::Singularity } else { SpecialError::Domain };
        return Checked::fail("yn", kind, -sign * MAXNUM);
    }

    let mut anm2 = y0(x);
    let mut anm1 = y1(x);
    let mut an = anm1;
    let mut r = 2.0;
    for _ in 1..n {
        an = r * anm1 / x - anm2;
        anm2 = anm1;
        anm1 = an;
        r += 2.0;
        if an.is_infinite() {
            return Checked::fail("yn", SpecialError::Overflow, sign * -MAXNUM);
        }
    }
    Checked::ok(sign * an)
}
