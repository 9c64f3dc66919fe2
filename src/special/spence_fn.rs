//! Dilogarithm.

use libm::log;

use super::polevl::polevl;
use super::{Checked, SpecialError, PI};

const A: [f64; 8] = [
    4.65128586073990045278E-5,
    7.31589045238094711071E-3,
    1.33847639578309018650E-1,
    8.79691311754530315341E-1,
    2.71149851196553469920E0,
    4.25697156008121755724E0,
    3.29771340985225106936E0,
    1.00000000000000000126E0,
];
const B: [f64; 8] = [
    6.90990488912553276999E-4,
    2.54043763932544379113E-2,
    2.82974860602568089943E-1,
    1.41172597751831069617E0,
    3.63800533345137075418E0,
    5.03278880143316990390E0,
    3.54771340985225096217E0,
    9.99999999999999998740E-1,
];

/// Dilogarithm in Spence's form, −∫₁ˣ ln t/(t − 1) dt = Li₂(1 − x).
///
/// A rational approximation on [0.5, 1.5] is extended to the rest of the
/// positive axis by the reflection x → 1 − x and the inversion x → 1/x.
/// Negative x returns 0 with a domain error.
///
/// # Example
///
/// ```
/// use transcendental::special::spence;
///
/// let pi2 = core::f64::consts::PI * core::f64::consts::PI;
/// assert!((spence(0.0) - pi2 / 6.0).abs() < 1e-15);
/// assert!((spence(2.0) + pi2 / 12.0).abs() < 1e-14);
/// ```
pub fn spence(x: f64) -> f64 {
    spence_checked(x).value
}

/// [`spence`] with error reporting.
pub fn spence_checked(x: f64) -> Checked<f64> {
    if x < 0.0 {
        return Checked::fail("spence", SpecialError::Domain, 0.0);
    }
    if x == 1.0 {
        return Checked::ok(0.0);
    }
    if x == 0.0 {
        return Checked::ok(PI * PI / 6.0);
    }

    let mut x = x;
    let mut reflect = false;
    let mut invert = false;
    if x > 2.0 {
        x = 1.0 / x;
        invert = true;
    }
    let w = if x > 1.5 {
        invert = true;
        1.0 / x - 1.0
    } else if x < 0.5 {
        reflect = true;
        -x
    } else {
        x - 1.0
    };

    let mut y = -w * polevl(w, &A) / polevl(w, &B);
    if reflect {
        y = PI * PI / 6.0 - log(x) * log(1.0 - x) - y;
    }
    if invert {
        let z = log(x);
        y = -0.5 * z * z - y;
    }
    Checked::ok(y)
}
