//! Cube root.

use libm::{frexp, scalbn};

use super::polevl::polevl;
use super::Checked;

/// Cube root of a number in [0.5, 1), relative error 9.2e-6.
const SEED: [f64; 5] = [
    -1.3466110473359520655053E-1,
    5.4664601366395524503440E-1,
    -9.5438224771509446525043E-1,
    1.1399983354717293273738E0,
    4.0238979564544752126924E-1,
];

const CBRT2: f64 = 1.2599210498948731647672;
const CBRT4: f64 = 1.5874010519681994747517;
const CBRT2I: f64 = 0.79370052598409973737585;
const CBRT4I: f64 = 0.62996052494743658238361;

/// Real cube root.
///
/// Splits off the binary exponent, seeds the mantissa's root with a
/// polynomial and finishes with two Newton steps. Zero, infinities and NaN
/// are returned unchanged.
///
/// # Example
///
/// ```
/// use transcendental::special::cbrt;
///
/// assert!((cbrt(27.0) - 3.0).abs() < 1e-15);
/// assert!((cbrt(-2.0) + 1.2599210498948732).abs() < 1e-15);
/// ```
pub fn cbrt(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let negative = x < 0.0;
    let z = if negative { -x } else { x };

    let (m, e) = frexp(z);
    let mut r = polevl(m, &SEED);

    // Exponent divided by 3, remainder folded into the mantissa
    let q = e / 3;
    let rem = e - 3 * q;
    r *= match rem {
        1 => CBRT2,
        2 => CBRT4,
        -1 => CBRT2I,
        -2 => CBRT4I,
        _ => 1.0,
    };
    let mut r = scalbn(r, q);

    // Newton
    r -= (r - z / (r * r)) * 0.33333333333333333333;
    r -= (r - z / (r * r)) * 0.33333333333333333333;

    if negative { -r } else { r }
}

/// [`cbrt`] with error reporting; no error is ever raised.
pub fn cbrt_checked(x: f64) -> Checked<f64> {
    Checked::ok(cbrt(x))
}
