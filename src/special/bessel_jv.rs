//! Bessel functions of the first and second kind, real order.
//!
//! [`jv`] dispatches among four methods by comparing the order v with x:
//!
//! * ascending power series, for x small relative to √v;
//! * Hankel's asymptotic expansion, for x large relative to v²;
//! * backward recurrence on the order, started from a continued fraction
//!   and normalized by the series or Hankel value at a reduced order;
//! * the uniform Airy-type expansion, for orders of 500 and above.

use libm::{acos, cos, exp, fabs, floor, frexp, log, pow, sin, sqrt, trunc};

use super::airy_fn::airy;
use super::bessel_j::{j0, j1, yn_checked};
use super::cbrt_fn::cbrt;
use super::gamma_fn::{gamma, lgamma_sign, rgamma};
use super::polevl::polevl;
use super::{Checked, SpecialError, MACHEP, MAXGAM, MAXLOG, MAXNUM, PI};

/// Rescaling threshold for the order-reduction continued fraction.
const BIG: f64 = 1.44115188075855872E17;

/// Bessel function of the first kind, real order v.
///
/// Negative x is allowed only for integer v; otherwise the result is 0
/// with a domain error.
///
/// # Example
///
/// ```
/// use transcendental::special::{jn, jv};
///
/// assert!((jv(2.0, 3.0) - jn(2, 3.0)).abs() < 1e-15);
///
/// // J_{1/2}(x) = √(2/(πx)) sin x
/// let x = 2.0_f64;
/// let exact = (2.0 / (core::f64::consts::PI * x)).sqrt() * x.sin();
/// assert!((jv(0.5, x) - exact).abs() < 1e-15);
/// ```
pub fn jv(v: f64, x: f64) -> f64 {
    jv_checked(v, x).value
}

/// [`jv`] with error reporting.
pub fn jv_checked(v: f64, x: f64) -> Checked<f64> {
    const NAME: &str = "jv";

    let mut n = v;
    let mut x = x;
    let an = fabs(n);
    let nint = floor(an) == an;
    let mut sign = 1.0;

    if nint {
        let odd = an % 2.0 == 1.0;
        if n < 0.0 {
            if odd {
                sign = -sign;
            }
            n = an;
        }
        if x < 0.0 {
            if odd {
                sign = -sign;
            }
            x = -x;
        }
        if n == 0.0 {
            return Checked::ok(j0(x));
        }
        if n == 1.0 {
            return Checked::ok(sign * j1(x));
        }
    }

    if x < 0.0 {
        return Checked::fail(NAME, SpecialError::Domain, 0.0);
    }
    if x == 0.0 && n < 0.0 && !nint {
        let value = if rgamma(n + 1.0) < 0.0 { -MAXNUM } else { MAXNUM };
        return Checked::fail(NAME, SpecialError::Overflow, value);
    }
    if x < MACHEP {
        return Checked::ok(sign * pow(0.5 * x, n) * rgamma(n + 1.0));
    }

    let k = 3.6 * sqrt(x);
    let t = 3.6 * sqrt(an);
    if x < t && an > 21.0 {
        return jvs(n, x).map(|y| sign * y);
    }
    if an < k && x > 21.0 {
        return Checked::ok(sign * hankel(n, x));
    }

    if an < 500.0 {
        return jv_reduced(n, an, x, nint).map(|y| sign * y);
    }

    // Large order: uniform expansion, or Hankel once x ~ n²
    if n < 0.0 {
        return Checked::fail(NAME, SpecialError::TotalLoss, 0.0);
    }
    let t = x / n / n;
    let y = if t > 0.3 { hankel(n, x) } else { jnx(n, x) };
    Checked::ok(sign * y)
}

/// Orders below 500: reduce by backward recurrence to an order where the
/// power series or Hankel expansion converges, then rescale.
fn jv_reduced(n: f64, an: f64, x: f64, nint: bool) -> Checked<f64> {
    const NAME: &str = "jv";

    if nint {
        let r = recur(n, x, 0.0, true);
        let err = r.error;
        let r = r.value;
        if r.order == 0.0 {
            return Checked::with(NAME, j0(x) / r.ratio, err);
        }
        if r.order == 1.0 {
            return Checked::with(NAME, j1(x) / r.ratio, err);
        }
    }

    if an > 2.0 * x || ((0.0..20.0).contains(&n) && x > 6.0 && x < 20.0) {
        // Recur backwards from a larger order
        let top = (x + an + 1.0).max(30.0);
        let top = n + floor(top - n);
        let r = recur(top, x, n, false);
        let s = jvs(top, x);
        let error = r.error.or(s.error);
        return Checked::with(NAME, s.value * r.value.ratio, error);
    }

    let mut k = 3.6 * sqrt(x);
    if k <= 30.0 {
        k = 2.0;
    } else if k < 90.0 {
        k = (3.0 * k) / 4.0;
    }

    let mut error = None;
    let (k, q) = if an > k + 3.0 {
        if n < 0.0 {
            k = -k;
        }
        let k = floor(k) + (n - floor(n));
        let (k, q) = if n > 0.0 {
            let r = recur(n, x, k, true);
            error = r.error;
            (r.value.order, r.value.ratio)
        } else {
            let r = recur(k, x, n, true);
            error = r.error;
            (r.value.start, r.value.ratio)
        };
        if q == 0.0 {
            return Checked::with(NAME, 0.0, error);
        }
        (k, q)
    } else {
        (n, 1.0)
    };

    // Boundary between power series and Hankel convergence
    let y = fabs(k);
    let t = if y < 26.0 { (0.0083 * y + 0.09) * y + 12.9 } else { 0.9 * y };
    let base = if x > t { Checked::ok(hankel(k, x)) } else { jvs(k, x) };
    let error = error.or(base.error);
    let value = if n > 0.0 { base.value / q } else { base.value * q };
    Checked::with(NAME, value, error)
}

/// Outcome of reducing the order by backward recurrence.
#[derive(Debug, Clone, Copy)]
struct Reduction {
    /// J_order / J_start, up to the normalization of the recurrence.
    ratio: f64,
    /// Order the recurrence stopped at.
    order: f64,
    /// Order the continued fraction was started from.
    start: f64,
}

/// Continued fraction for J_n/J_{n−1} (AMS 9.1.73) followed by backward
/// recurrence (AMS 9.1.27) down to `target`.
fn recur(n: f64, x: f64, target: f64, cancel: bool) -> Checked<Reduction> {
    const MAX_ITER: u32 = 22_000;

    let mut n = n;
    let mut may_shift = n < 0.0;
    let mut error = None;

    let ans = loop {
        // The fraction only starts converging once the order passes |x|
        let miniter = (fabs(x) - fabs(n)).max(1.0);

        let mut pkm2 = 0.0;
        let mut qkm2 = 1.0;
        let mut pkm1 = x;
        let mut qkm1 = n + n;
        let xk = -x * x;
        let mut yk = qkm1;
        let mut ans = 1.0;
        let mut ctr = 0u32;

        loop {
            yk += 2.0;
            let pk = pkm1 * yk + pkm2 * xk;
            let qk = qkm1 * yk + qkm2 * xk;
            pkm2 = pkm1;
            pkm1 = pk;
            qkm2 = qkm1;
            qkm1 = qk;

            let r = if qk != 0.0 && f64::from(ctr) > miniter { pk / qk } else { 0.0 };
            let t = if r != 0.0 {
                let t = fabs((ans - r) / r);
                ans = r;
                t
            } else {
                1.0
            };

            ctr += 1;
            if ctr > MAX_ITER {
                error = Some(SpecialError::Underflow);
                break;
            }
            if t < MACHEP {
                break;
            }
            if fabs(pk) > BIG {
                pkm2 /= BIG;
                pkm1 /= BIG;
                qkm2 /= BIG;
                qkm1 /= BIG;
            }
        }

        // A small ratio at negative order: start one order lower
        if may_shift && fabs(ans) < 0.125 {
            may_shift = false;
            n -= 1.0;
            continue;
        }
        break ans;
    };

    // J_{k−1} = (2k/x) J_k − J_{k+1}
    let mut pk = 1.0;
    let mut pkm1 = 1.0 / ans;
    let mut pkm2;
    let mut k = n - 1.0;
    let mut r = 2.0 * k;
    loop {
        pkm2 = (pkm1 * r - pk * x) / x;
        pk = pkm1;
        pkm1 = pkm2;
        r -= 2.0;
        k -= 1.0;
        if k <= target + 0.5 {
            break;
        }
    }

    // Keep the larger of the last two iterates
    if cancel && target >= 0.0 && fabs(pk) > fabs(pkm1) {
        k += 1.0;
        pkm2 = pk;
    }

    let reduction = Reduction { ratio: pkm2, order: k, start: n };
    Checked::with("jv", reduction, error)
}

/// Ascending power series (AMS 9.1.10), scaled through logarithms when the
/// prefactor (x/2)ⁿ/Γ(n+1) would overflow.
fn jvs(n: f64, x: f64) -> Checked<f64> {
    let z = -x * x / 4.0;
    let mut u = 1.0;
    let mut y = u;
    let mut k = 1.0;
    let mut t = 1.0;

    while t > MACHEP {
        u *= z / (k * (n + k));
        y += u;
        k += 1.0;
        if y != 0.0 {
            t = fabs(u / y);
        }
    }

    let (_, ex) = frexp(0.5 * x);
    let ex = trunc(f64::from(ex) * n);
    if ex > -1023.0 && ex < 1023.0 && n > 0.0 && n < MAXGAM - 1.0 {
        let t = pow(0.5 * x, n) / gamma(n + 1.0);
        return Checked::ok(y * t);
    }

    let (lg, mut sgngam) = lgamma_sign(n + 1.0);
    let mut t = n * log(0.5 * x) - lg;
    if y < 0.0 {
        sgngam = -sgngam;
        y = -y;
    }
    t += log(y);
    if t < -MAXLOG {
        return Checked::ok(0.0);
    }
    if t > MAXLOG {
        return Checked::fail("jv", SpecialError::Overflow, MAXNUM);
    }
    Checked::ok(f64::from(sgngam) * exp(t))
}

/// Hankel's asymptotic expansion for large x (AMS 9.2.5), truncated at its
/// smallest term.
fn hankel(n: f64, x: f64) -> f64 {
    let m = 4.0 * n * n;
    let mut j = 1.0;
    let z = 8.0 * x;
    let mut k = 1.0;
    let mut p = 1.0;
    let mut u = (m - 1.0) / z;
    let mut q = u;
    let mut sign = 1.0;
    let mut conv = 1.0;
    let mut seen = false;
    let mut t = 1.0;
    let mut pp = 1.0e38;
    let mut qq = 1.0e38;

    while t > MACHEP {
        k += 2.0;
        j += 1.0;
        sign = -sign;
        u *= (m - k * k) / (j * z);
        p += sign * u;
        k += 2.0;
        j += 1.0;
        u *= (m - k * k) / (j * z);
        q += sign * u;
        t = fabs(u / p);
        if t < conv {
            conv = t;
            qq = q;
            pp = p;
            seen = true;
        }
        // Terms have started to grow
        if seen && t > conv {
            break;
        }
    }

    let u = x - (0.5 * n + 0.25) * PI;
    sqrt(2.0 / (PI * x)) * (pp * cos(u) - qq * sin(u))
}

// ---------------------------------------------------------------------------
// Uniform asymptotic expansion for large order (AMS 9.3.35)
// ---------------------------------------------------------------------------

const LAMBDA: [f64; 11] = [
    1.0,
    1.041666666666666666666667E-1,
    8.355034722222222222222222E-2,
    1.282265745563271604938272E-1,
    2.918490264641404642489712E-1,
    8.816272674437576524187671E-1,
    3.321408281862767544702647E0,
    1.499576298686255465867237E1,
    7.892301301158651813848139E1,
    4.744515388682643231611949E2,
    3.207490090890661934704328E3,
];
const MU: [f64; 11] = [
    1.0,
    -1.458333333333333333333333E-1,
    -9.874131944444444444444444E-2,
    -1.433120539158950617283951E-1,
    -3.172272026784135480967078E-1,
    -9.424291479571202491373028E-1,
    -3.511203040826354261542798E0,
    -1.572726362036804512982712E1,
    -8.228143909718594444224656E1,
    -4.923553705236705240352022E2,
    -3.316218568547972508762102E3,
];

/// Debye polynomials u_k(t), as polynomials in t² after factoring out tᵏ.
const P1: [f64; 2] = [-2.083333333333333333333333E-1, 1.250000000000000000000000E-1];
const P2: [f64; 3] = [
    3.342013888888888888888889E-1,
    -4.010416666666666666666667E-1,
    7.031250000000000000000000E-2,
];
const P3: [f64; 4] = [
    -1.025812596450617283950617E0,
    1.846462673611111111111111E0,
    -8.912109375000000000000000E-1,
    7.324218750000000000000000E-2,
];
const P4: [f64; 5] = [
    4.669584423426247427983539E0,
    -1.120171402723668306327160E1,
    8.789123535156250000000000E0,
    -2.364086914062500000000000E0,
    1.121520996093750000000000E-1,
];
const P5: [f64; 6] = [
    -2.8212072558200244877E1,
    8.4636217674600734632E1,
    -9.1818241543240017361E1,
    4.2534998745388454861E1,
    -7.3687943594796316964E0,
    2.27108001708984375E-1,
];
const P6: [f64; 7] = [
    2.1257013003921712286E2,
    -7.6525246814118164230E2,
    1.0599904525279998779E3,
    -6.9957962737613254123E2,
    2.1819051174421159048E2,
    -2.6491430486951555525E1,
    5.7250142097473144531E-1,
];
const P7: [f64; 8] = [
    -1.9194576623184069963E3,
    8.0617221817373093845E3,
    -1.3586550006434137439E4,
    1.1655393336864533248E4,
    -5.3056469786134031084E3,
    1.2009029132163524628E3,
    -1.0809091978839465550E2,
    1.7277275025844573975E0,
];

fn jnx(n: f64, x: f64) -> f64 {
    // Transition region x ≈ n
    let cbn = cbrt(n);
    let z = (x - n) / cbn;
    if fabs(z) <= 0.7 {
        return jnt(n, x);
    }

    let z = x / n;
    let zz = 1.0 - z * z;
    if zz == 0.0 {
        return 0.0;
    }

    let (sz, t, zeta, nflg) = if zz > 0.0 {
        let sz = sqrt(zz);
        // ζ^{3/2}
        let t = 1.5 * (log((1.0 + sz) / z) - sz);
        (sz, t, cbrt(t * t), 1.0)
    } else {
        let sz = sqrt(-zz);
        let t = 1.5 * (sz - acos(1.0 / z));
        (sz, t, -cbrt(t * t), -1.0)
    };
    let z32i = fabs(1.0 / t);
    let sqz = cbrt(t);

    let n23 = cbrt(n * n);
    let a = airy(n23 * zeta);

    let zzi = 1.0 / zz;
    let mut u = [0.0; 8];
    u[0] = 1.0;
    u[1] = polevl(zzi, &P1) / sz;
    u[2] = polevl(zzi, &P2) / zz;
    u[3] = polevl(zzi, &P3) / (sz * zz);
    let mut pp = zz * zz;
    u[4] = polevl(zzi, &P4) / pp;
    u[5] = polevl(zzi, &P5) / (pp * sz);
    pp *= zz;
    u[6] = polevl(zzi, &P6) / pp;
    u[7] = polevl(zzi, &P7) / (pp * sz);

    let mut pp = 0.0;
    let mut qq = 0.0;
    let mut np = 1.0;
    // Each series stops once its terms grow
    let mut doa = true;
    let mut dob = true;
    let mut akl = MAXNUM;
    let mut bkl = MAXNUM;

    for k in 0..=3usize {
        let tk = 2 * k;
        let tkp1 = tk + 1;
        let mut zp = 1.0;
        let mut ak = 0.0;
        let mut bk = 0.0;
        for s in 0..=tk {
            if doa {
                let sign = if (s & 3) > 1 { nflg } else { 1.0 };
                ak += sign * MU[s] * zp * u[tk - s];
            }
            if dob {
                let m = tkp1 - s;
                let sign = if ((m + 1) & 3) > 1 { nflg } else { 1.0 };
                bk += sign * LAMBDA[s] * zp * u[m];
            }
            zp *= z32i;
        }

        if doa {
            ak *= np;
            let t = fabs(ak);
            if t < akl {
                akl = t;
                pp += ak;
            } else {
                doa = false;
            }
        }
        if dob {
            bk += LAMBDA[tkp1] * zp * u[0];
            bk *= -np / sqz;
            let t = fabs(bk);
            if t < bkl {
                bkl = t;
                qq += bk;
            } else {
                dob = false;
            }
        }
        if np < MACHEP {
            break;
        }
        np /= n * n;
    }

    // (4ζ/(1 − z²))^{1/4}
    let t = sqrt(sqrt(4.0 * zeta / zz));
    t * (a.ai * pp / cbrt(n) + a.aip * qq / (n23 * n))
}

// ---------------------------------------------------------------------------
// Transition region, x close to a large n (AMS 9.3.23)
// ---------------------------------------------------------------------------

const PF2: [f64; 2] = [-9.0000000000000000000e-2, 8.5714285714285714286e-2];
const PF3: [f64; 3] = [
    1.3671428571428571429e-1,
    -5.4920634920634920635e-2,
    -4.4444444444444444444e-3,
];
const PF4: [f64; 4] = [
    1.3500000000000000000e-3,
    -1.6036054421768707483e-1,
    4.2590187590187590188e-2,
    2.7330447330447330447e-3,
];
const PG1: [f64; 2] = [-2.4285714285714285714e-1, 1.4285714285714285714e-2];
const PG2: [f64; 3] = [
    -9.0000000000000000000e-3,
    1.9396825396825396825e-1,
    -1.1746031746031746032e-2,
];
const PG3: [f64; 3] = [
    1.9607142857142857143e-2,
    -1.5983694083694083694e-1,
    6.3838383838383838384e-3,
];

fn jnt(n: f64, x: f64) -> f64 {
    let cbn = cbrt(n);
    let z = (x - n) / cbn;
    let cbtwo = cbrt(2.0);

    let a = airy(-cbtwo * z);

    let zz = z * z;
    let z3 = zz * z;
    let f = [
        1.0,
        -z / 5.0,
        polevl(z3, &PF2) * zz,
        polevl(z3, &PF3),
        polevl(z3, &PF4) * z,
    ];
    let g = [
        0.3 * zz,
        polevl(z3, &PG1),
        polevl(z3, &PG2) * z,
        polevl(z3, &PG3) * zz,
    ];

    let n23 = cbrt(n * n);
    let mut pp = 0.0;
    let mut qq = 0.0;
    let mut nk = 1.0;
    for k in 0..5 {
        pp += f[k] * nk;
        if let Some(gk) = g.get(k) {
            qq += gk * nk;
        }
        nk /= n23;
    }

    cbtwo * a.ai * pp / cbn + cbrt(4.0) * a.aip * qq / n
}

// ---------------------------------------------------------------------------
// Second kind
// ---------------------------------------------------------------------------

/// Bessel function of the second kind, real order v.
///
/// Integer orders go through [`yn`](super::yn); other orders use
/// Y_v = (cos(vπ) J_v − J_{−v}) / sin(vπ).
///
/// # Example
///
/// ```
/// use transcendental::special::yv;
///
/// // Y_{1/2}(x) = −√(2/(πx)) cos x
/// let x = 1.5_f64;
/// let exact = -(2.0 / (core::f64::consts::PI * x)).sqrt() * x.cos();
/// assert!((yv(0.5, x) - exact).abs() < 1e-14);
/// ```
pub fn yv(v: f64, x: f64) -> f64 {
    yv_checked(v, x).value
}

/// [`yv`] with error reporting.
pub fn yv_checked(v: f64, x: f64) -> Checked<f64> {
    const NAME: &str = "yv";

    if floor(v) == v {
        if fabs(v) <= f64::from(i32::MAX) {
            return yn_checked(v as i32, x);
        }
        // sin(vπ) vanishes and the order is out of integer range
        return Checked::fail(NAME, SpecialError::Domain, f64::NAN);
    }
    if x < 0.0 {
        return Checked::fail(NAME, SpecialError::Domain, f64::NAN);
    }
    if x == 0.0 {
        return Checked::fail(NAME, SpecialError::Singularity, -MAXNUM);
    }

    let t = PI * v;
    let a = jv_checked(v, x);
    let b = jv_checked(-v, x);
    let y = (cos(t) * a.value - b.value) / sin(t);
    if y.is_infinite() {
        return Checked::fail(NAME, SpecialError::Overflow, if y > 0.0 { MAXNUM } else { -MAXNUM });
    }
    Checked::with(NAME, y, a.error.or(b.error))
}
