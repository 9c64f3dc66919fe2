//! Polynomial and Chebyshev series evaluators.
//!
//! Coefficient slices are stored highest order first. The degree is implied
//! by the slice length.

/// Evaluate `c[0]·xᴺ + c[1]·xᴺ⁻¹ + … + c[N]` by Horner's rule, N = `coef.len() - 1`.
///
/// # Example
///
/// ```
/// use transcendental::special::polevl;
///
/// // 2x² + 3x + 4 at x = 2
/// assert_eq!(polevl(2.0, &[2.0, 3.0, 4.0]), 18.0);
/// ```
#[inline]
pub fn polevl(x: f64, coef: &[f64]) -> f64 {
    debug_assert!(!coef.is_empty());
    let (first, rest) = match coef.split_first() {
        Some(split) => split,
        None => return 0.0,
    };
    rest.iter().fold(*first, |ans, &c| ans * x + c)
}

/// Evaluate `xᴺ + c[0]·xᴺ⁻¹ + … + c[N-1]`, N = `coef.len()`.
///
/// The leading coefficient is an implicit 1 and is not stored.
///
/// # Example
///
/// ```
/// use transcendental::special::p1evl;
///
/// // x² + 3x + 4 at x = 2
/// assert_eq!(p1evl(2.0, &[3.0, 4.0]), 14.0);
/// ```
#[inline]
pub fn p1evl(x: f64, coef: &[f64]) -> f64 {
    debug_assert!(!coef.is_empty());
    coef.iter().fold(1.0, |ans, &c| ans * x + c)
}

/// Sum a Chebyshev series by the Clenshaw recurrence.
///
/// `coef` holds the highest-order term first and the constant term last. The
/// series is in Tₖ(x/2), so the argument must already be mapped into
/// [-2, 2]. The constant term enters with weight one half.
///
/// # Example
///
/// ```
/// use transcendental::special::chbevl;
///
/// // c1·T1(x/2) + c0/2 with coefficients stored [c1, c0]
/// let v = chbevl(0.3, &[2.0, 4.0]);
/// assert!((v - (2.0 + 2.0 * 0.3 / 2.0)).abs() < 1e-15);
/// ```
#[inline]
pub fn chbevl(x: f64, coef: &[f64]) -> f64 {
    debug_assert!(!coef.is_empty());
    let (first, rest) = match coef.split_first() {
        Some(split) => split,
        None => return 0.0,
    };
    let mut b0 = *first;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &c in rest {
        b2 = b1;
        b1 = b0;
        b0 = x * b1 - b2 + c;
    }
    0.5 * (b0 - b2)
}
