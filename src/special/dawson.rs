//! Dawson's integral.

use super::polevl::{p1evl, polevl};
use super::Checked;

/// Interval 0 to 3.25.
const AN: [f64; 10] = [
    1.13681498971755972054E-11,
    8.49262267667473811108E-10,
    1.94434204175553054283E-8,
    9.53151741254484363489E-7,
    3.07828309874913200438E-6,
    3.52513368520288738649E-4,
    -8.50149846724410912031E-4,
    4.22618223005546594270E-2,
    -9.17480371773452345351E-2,
    9.99999999999999994612E-1,
];
const AD: [f64; 11] = [
    2.40372073066762605484E-11,
    1.48864681368493396752E-9,
    5.21265281010541664570E-8,
    1.27258478273186970203E-6,
    2.32490249820789513991E-5,
    3.25524741826057911661E-4,
    3.48805814657162590916E-3,
    2.79448531198828973716E-2,
    1.58874241960120565368E-1,
    5.74918629489320327824E-1,
    1.00000000000000000539E0,
];

/// Interval 3.25 to 6.25.
const BN: [f64; 11] = [
    5.08955156417900903354E-1,
    -2.44754418142697847934E-1,
    9.41512335303534411857E-2,
    -2.18711255142039025206E-2,
    3.66207612329569181322E-3,
    -4.23209114460388756528E-4,
    3.59641304793896631888E-5,
    -2.14640351719968974225E-6,
    9.10010780076391431042E-8,
    -2.40274520828250956942E-9,
    3.59233385440928410398E-11,
];
const BD: [f64; 10] = [
    -6.31839869873368190192E-1,
    2.36706788228248691528E-1,
    -5.31806367003223277662E-2,
    8.48041718586295374409E-3,
    -9.47996768486665330168E-4,
    7.81025592944552338085E-5,
    -4.55875153252442634831E-6,
    1.89100358111421846170E-7,
    -4.91324691331920606875E-9,
    7.18466403235734541950E-11,
];

/// Interval 6.25 to infinity.
const CN: [f64; 5] = [
    -5.90592860534773254987E-1,
    6.29235242724368800674E-1,
    -1.72858975380388136411E-1,
    1.64837047825189632310E-2,
    -4.86827613020462700845E-4,
];
const CD: [f64; 5] = [
    -2.69820057197544900361E0,
    1.73270799045947845857E0,
    -3.93708582281939493482E-1,
    3.44278924041233391079E-2,
    -9.73655226040941223894E-4,
];

/// Dawson's integral F(x) = e⁻ˣ² ∫₀ˣ eᵗ² dt.
///
/// Odd in x. Three rational approximations cover [0, 3.25), [3.25, 6.25)
/// and the asymptotic tail, where F(x) ~ 1/(2x).
///
/// # Example
///
/// ```
/// use transcendental::special::dawsn;
///
/// // Maximum of F near x = 0.9241
/// assert!((dawsn(0.9241388730) - 0.5410442246).abs() < 1e-9);
/// assert_eq!(dawsn(-1.5), -dawsn(1.5));
/// ```
pub fn dawsn(xx: f64) -> f64 {
    let sign = if xx < 0.0 { -1.0 } else { 1.0 };
    let xx = xx * sign;

    if xx < 3.25 {
        let x = xx * xx;
        return sign * xx * polevl(x, &AN) / polevl(x, &AD);
    }

    let x = 1.0 / (xx * xx);
    if xx < 6.25 {
        let y = 1.0 / xx + x * polevl(x, &BN) / (p1evl(x, &BD) * xx);
        return sign * 0.5 * y;
    }
    if xx > 1.0e9 {
        return (sign * 0.5) / xx;
    }
    let y = 1.0 / xx + x * polevl(x, &CN) / (p1evl(x, &CD) * xx);
    sign * 0.5 * y
}

/// [`dawsn`] with error reporting; finite for every argument.
pub fn dawsn_checked(x: f64) -> Checked<f64> {
    Checked::ok(dawsn(x))
}
