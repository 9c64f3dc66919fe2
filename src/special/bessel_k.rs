//! Modified Bessel functions of the second kind.

use libm::{exp, fabs, log, sqrt};

use super::bessel_i::{i0, i1};
use super::polevl::chbevl;
use super::{Checked, SpecialError, EULER, MACHEP, MAXLOG, MAXNUM, PI};

/// Chebyshev coefficients for K0(x) + ln(x/2) I0(x) in x² − 2 on [0, 2].
const A0: [f64; 10] = [
    1.37446543561352307156E-16,
    4.25981614279661018399E-14,
    1.03496952576338420167E-11,
    1.90451637722020886025E-9,
    2.53479107902614945675E-7,
    2.28621210311945178607E-5,
    1.26461541144692592338E-3,
    3.59799365153615016266E-2,
    3.44289899924628486886E-1,
    -5.35327393233902768720E-1,
];

/// Chebyshev coefficients for exp(x) √x K0(x) in 8/x − 2 on (2, ∞).
const B0: [f64; 25] = [
    5.30043377268626276149E-18,
    -1.64758043015242134646E-17,
    5.21039150503902756861E-17,
    -1.67823109680541210385E-16,
    5.51205597852431940784E-16,
    -1.84859337734377901440E-15,
    6.34007647740507060557E-15,
    -2.22751332699166985548E-14,
    8.03289077536357521100E-14,
    -2.98009692317273043925E-13,
    1.14034058820847496303E-12,
    -4.51459788337394416547E-12,
    1.85594911495471785253E-11,
    -7.95748924447710747776E-11,
    3.57739728140030116597E-10,
    -1.69753450938905987466E-9,
    8.57403401741422608519E-9,
    -4.66048989768794782956E-8,
    2.76681363944501510342E-7,
    -1.83175552271911948767E-6,
    1.39498137188764993662E-5,
    -1.28495495816278026384E-4,
    1.56988388573005337491E-3,
    -3.14481013119645005427E-2,
    2.44030308206595545468E0,
];

/// Chebyshev coefficients for x(K1(x) − ln(x/2) I1(x)) in x² − 2 on [0, 2].
const A1: [f64; 11] = [
    -7.02386347938628759343E-18,
    -2.42744985051936593393E-15,
    -6.66690169419932900609E-13,
    -1.41148839263352776110E-10,
    -2.21338763073472585583E-8,
    -2.43340614156596823496E-6,
    -1.73028895751305206302E-4,
    -6.97572385963986435018E-3,
    -1.22611180822657148235E-1,
    -3.53155960776544875667E-1,
    1.52530022733894777053E0,
];

/// Chebyshev coefficients for exp(x) √x K1(x) in 8/x − 2 on (2, ∞).
const B1: [f64; 25] = [
    -5.75674448366501715755E-18,
    1.79405087314755922667E-17,
    -5.68946255844285935196E-17,
    1.83809354436663880070E-16,
    -6.05704724837331885336E-16,
    2.03870316562433424052E-15,
    -7.01983709041831346144E-15,
    2.47715442448130437068E-14,
    -8.97670518232499435011E-14,
    3.34841966607842919884E-13,
    -1.28917396095102890680E-12,
    5.13963967348173025100E-12,
    -2.12996783842756842877E-11,
    9.21831518760500529508E-11,
    -4.19035475934189648750E-10,
    2.01504975519703286596E-9,
    -1.03457624656780970260E-8,
    5.74108412545004946722E-8,
    -3.50196060308781257119E-7,
    2.40648494783721712015E-6,
    -1.93619797416608296024E-5,
    1.95215518471351631108E-4,
    -2.85781685962277938680E-3,
    1.03923736576817238437E-1,
    2.72062619048444266945E0,
];

/// Sentinel for x ≤ 0: singular at zero, outside the domain below.
#[inline]
fn nonpositive(name: &'static str, x: f64) -> Checked<f64> {
    let kind = if x == 0.0 { SpecialError::Singularity } else { SpecialError::Domain };
    Checked::fail(name, kind, MAXNUM)
}

/// Modified Bessel function of the second kind, order zero.
///
/// Returns [`MAXNUM`] for x ≤ 0.
///
/// # Example
///
/// ```
/// use transcendental::special::k0;
///
/// assert!((k0(1.0) - 0.42102443824070834).abs() < 1e-15);
/// ```
pub fn k0(x: f64) -> f64 {
    k0_checked(x).value
}

/// [`k0`] with error reporting.
pub fn k0_checked(x: f64) -> Checked<f64> {
    if x <= 0.0 {
        return nonpositive("k0", x);
    }
    if x <= 2.0 {
        let y = x * x - 2.0;
        return Checked::ok(chbevl(y, &A0) - log(0.5 * x) * i0(x));
    }
    let z = 8.0 / x - 2.0;
    Checked::ok(exp(-x) * chbevl(z, &B0) / sqrt(x))
}

/// Exponentially scaled K0: exp(x) K0(x).
pub fn k0e(x: f64) -> f64 {
    k0e_checked(x).value
}

/// [`k0e`] with error reporting.
pub fn k0e_checked(x: f64) -> Checked<f64> {
    if x <= 0.0 {
        return nonpositive("k0e", x);
    }
    if x <= 2.0 {
        let y = x * x - 2.0;
        let y = chbevl(y, &A0) - log(0.5 * x) * i0(x);
        return Checked::ok(y * exp(x));
    }
    Checked::ok(chbevl(8.0 / x - 2.0, &B0) / sqrt(x))
}

/// Modified Bessel function of the second kind, order one.
///
/// Returns [`MAXNUM`] for x ≤ 0.
pub fn k1(x: f64) -> f64 {
    k1_checked(x).value
}

/// [`k1`] with error reporting.
pub fn k1_checked(x: f64) -> Checked<f64> {
    if x <= 0.0 {
        return nonpositive("k1", x);
    }
    if x <= 2.0 {
        let y = x * x - 2.0;
        return Checked::ok(log(0.5 * x) * i1(x) + chbevl(y, &A1) / x);
    }
    Checked::ok(exp(-x) * chbevl(8.0 / x - 2.0, &B1) / sqrt(x))
}

/// Exponentially scaled K1: exp(x) K1(x).
pub fn k1e(x: f64) -> f64 {
    k1e_checked(x).value
}

/// [`k1e`] with error reporting.
pub fn k1e_checked(x: f64) -> Checked<f64> {
    if x <= 0.0 {
        return nonpositive("k1e", x);
    }
    if x <= 2.0 {
        let y = x * x - 2.0;
        let y = log(0.5 * x) * i1(x) + chbevl(y, &A1) / x;
        return Checked::ok(y * exp(x));
    }
    Checked::ok(chbevl(8.0 / x - 2.0, &B1) / sqrt(x))
}

/// Largest order for which the series factorials stay finite.
const MAXFAC: i32 = 31;

/// Term cap for the kn series and asymptotic sums.
const KN_MAX_ITER: usize = 500;

/// Modified Bessel function of the second kind, integer order n.
///
/// Power series with digamma terms for x ≤ 9.55, asymptotic expansion
/// beyond. Orders above 31 overflow to [`MAXNUM`].
///
/// # Example
///
/// ```
/// use transcendental::special::{k0, k1, kn};
///
/// let x = 3.0;
/// // K_{n+1} = K_{n−1} + (2n/x) K_n
/// assert!((kn(2, x) - (k0(x) + 2.0 / x * k1(x))).abs() < 1e-14);
/// ```
pub fn kn(n: i32, x: f64) -> f64 {
    kn_checked(n, x).value
}

/// [`kn`] with error reporting.
pub fn kn_checked(nn: i32, x: f64) -> Checked<f64> {
    const NAME: &str = "kn";

    let n = nn.abs();
    if n > MAXFAC {
        return Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
    }
    if x.is_nan() {
        return Checked::ok(x);
    }
    if x <= 0.0 {
        return nonpositive(NAME, x);
    }
    if x > 9.55 {
        return kn_asymptotic(n, x);
    }

    let overflow = || Checked::fail(NAME, SpecialError::Overflow, MAXNUM);
    let nf = f64::from(n);
    let mut ans = 0.0;
    let z0 = 0.25 * x * x;
    let mut fn_ = 1.0;
    let mut pn = 0.0;
    let mut zmn = 1.0;
    let tox = 2.0 / x;

    if n > 0 {
        // n! and ψ(n)
        pn = -EULER;
        let mut k = 1.0;
        for _ in 1..n {
            pn += 1.0 / k;
            k += 1.0;
            fn_ *= k;
        }
        zmn = tox;

        if n == 1 {
            ans = 1.0 / x;
        } else {
            let mut nk1f = fn_ / nf;
            let mut kf = 1.0;
            let mut s = nk1f;
            let z = -z0;
            let mut zn = 1.0;
            for i in 1..n {
                nk1f /= f64::from(n - i);
                kf *= f64::from(i);
                zn *= z;
                let t = nk1f * zn / kf;
                s += t;
                if MAXNUM - fabs(t) < fabs(s) {
                    return overflow();
                }
                if tox > 1.0 && MAXNUM / tox < zmn {
                    return overflow();
                }
                zmn *= tox;
            }
            s *= 0.5;
            let t = fabs(s);
            if zmn > 1.0 && MAXNUM / zmn < t {
                return overflow();
            }
            if t > 1.0 && MAXNUM / t < zmn {
                return overflow();
            }
            ans = s * zmn;
        }
    }

    let tlg = 2.0 * log(0.5 * x);
    let mut pk = -EULER;
    let mut t = if n == 0 {
        pn = pk;
        1.0
    } else {
        pn += 1.0 / nf;
        1.0 / fn_
    };
    let mut s = (pk + pn - tlg) * t;
    let mut k = 1.0;
    let mut converged = false;
    for _ in 0..KN_MAX_ITER {
        t *= z0 / (k * (k + nf));
        pk += 1.0 / k;
        pn += 1.0 / (k + nf);
        s += (pk + pn - tlg) * t;
        k += 1.0;
        let r = fabs(t / s);
        if r <= MACHEP || r.is_nan() {
            converged = true;
            break;
        }
    }

    let mut s = 0.5 * s / zmn;
    if n & 1 != 0 {
        s = -s;
    }
    Checked::with(NAME, ans + s, (!converged).then_some(SpecialError::PartialLoss))
}

fn kn_asymptotic(n: i32, x: f64) -> Checked<f64> {
    if x > MAXLOG {
        return Checked::fail("kn", SpecialError::Underflow, 0.0);
    }
    let k = f64::from(n);
    let pn = 4.0 * k * k;
    let mut pk = 1.0;
    let z0 = 8.0 * x;
    let mut fn_ = 1.0;
    let mut t = 1.0;
    let mut s = t;
    let mut nkf = MAXNUM;
    let mut i = 0;
    while i < KN_MAX_ITER as i32 {
        let z = pn - pk * pk;
        t = t * z / (fn_ * z0);
        let nk1f = fabs(t);
        // Stop once the divergent tail starts to grow
        if i >= n && nk1f > nkf {
            break;
        }
        nkf = nk1f;
        s += t;
        fn_ += 1.0;
        pk += 2.0;
        i += 1;
        if fabs(t / s) <= MACHEP {
            break;
        }
    }
    Checked::ok(exp(-x) * sqrt(PI / (2.0 * x)) * s)
}

/// K_μ(x) and K_{μ+1}(x) for |μ| ≤ ½ and x ≥ 2 by Steed's continued
/// fraction.
pub(crate) fn k_steed(mu: f64, x: f64) -> (f64, f64) {
    const MAX_ITER: usize = 10_000;

    let mut b = 2.0 * (1.0 + x);
    let mut d = 1.0 / b;
    let mut h = d;
    let mut delh = d;
    let mut q1 = 0.0;
    let mut q2 = 1.0;
    let a1 = 0.25 - mu * mu;
    let mut q = a1;
    let mut c = a1;
    let mut a = -a1;
    let mut s = 1.0 + q * delh;

    for i in 1..MAX_ITER {
        let fi = i as f64;
        a -= 2.0 * fi;
        c = -a * c / (fi + 1.0);
        let qnew = (q1 - b * q2) / a;
        q1 = q2;
        q2 = qnew;
        q += c * qnew;
        b += 2.0;
        d = 1.0 / (b + a * d);
        delh = (b * d - 1.0) * delh;
        h += delh;
        let dels = q * delh;
        s += dels;
        if fabs(dels / s) < MACHEP {
            break;
        }
    }

    let h = a1 * h;
    let kmu = sqrt(PI / (2.0 * x)) * exp(-x) / s;
    let kmu1 = kmu * (mu + x + 0.5 - h) / x;
    (kmu, kmu1)
}
