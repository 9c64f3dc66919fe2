use libm::{exp, log};

use crate::special::{igam_checked, igamc_checked, igami_checked, lgamma, Checked, SpecialError};
use crate::Storage;
use super::{positive, DiscreteDistribution, StatsError};

/// Poisson distribution function, the sum of terms 0 through `k`:
/// Σ_{j=0}^{k} e⁻ᵐ mʲ / j!.
///
/// Evaluated as the complemented incomplete gamma integral igamc(k + 1, m).
/// Negative `k` or `m` returns 0 with a domain error.
///
/// # Example
///
/// ```
/// use transcendental::stats::pdtr;
///
/// // P(X ≤ 1) = e⁻² (1 + 2)
/// assert!((pdtr(1, 2.0) - 3.0 * (-2.0f64).exp()).abs() < 1e-15);
/// ```
pub fn pdtr(k: i32, m: f64) -> f64 {
    pdtr_checked(k, m).value
}

/// [`pdtr`] with error reporting.
pub fn pdtr_checked(k: i32, m: f64) -> Checked<f64> {
    if k < 0 || !(m >= 0.0) {
        return Checked::fail("pdtr", SpecialError::Domain, 0.0);
    }
    lower_tail(f64::from(k), m)
}

/// Complemented Poisson distribution, the sum of terms `k + 1` to infinity.
///
/// Evaluated as igam(k + 1, m).
pub fn pdtrc(k: i32, m: f64) -> f64 {
    pdtrc_checked(k, m).value
}

/// [`pdtrc`] with error reporting.
pub fn pdtrc_checked(k: i32, m: f64) -> Checked<f64> {
    if k < 0 || !(m >= 0.0) {
        return Checked::fail("pdtrc", SpecialError::Domain, 0.0);
    }
    upper_tail(f64::from(k), m)
}

/// Inverse Poisson distribution: the mean m such that `pdtr(k, m) == y`.
///
/// Requires k ≥ 0 and 0 ≤ y < 1.
///
/// # Example
///
/// ```
/// use transcendental::stats::{pdtr, pdtri};
///
/// let m = pdtri(3, 0.25);
/// assert!((pdtr(3, m) - 0.25).abs() < 1e-12);
/// ```
pub fn pdtri(k: i32, y: f64) -> f64 {
    pdtri_checked(k, y).value
}

/// [`pdtri`] with error reporting.
pub fn pdtri_checked(k: i32, y: f64) -> Checked<f64> {
    if k < 0 || !(0.0..1.0).contains(&y) {
        return Checked::fail("pdtri", SpecialError::Domain, 0.0);
    }
    igami_checked(f64::from(k) + 1.0, y)
}

fn lower_tail(k: f64, m: f64) -> Checked<f64> {
    if m == 0.0 {
        return Checked::ok(1.0);
    }
    igamc_checked(k + 1.0, m)
}

fn upper_tail(k: f64, m: f64) -> Checked<f64> {
    if m == 0.0 {
        return Checked::ok(0.0);
    }
    igam_checked(k + 1.0, m)
}

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k!
///
/// # Example
///
/// ```
/// use transcendental::stats::{Poisson, DiscreteDistribution};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert!((p.pmf(0) - (-3.0_f64).exp()).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: Storage> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if !positive(lambda.to_f64()) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }
}

impl<T: Storage> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: u64) -> T {
        T::from_f64(exp(self.ln_pmf(k).to_f64()))
    }

    fn ln_pmf(&self, k: u64) -> T {
        let lambda = self.lambda.to_f64();
        let kf = k as f64;
        T::from_f64(kf * log(lambda) - lambda - lgamma(kf + 1.0))
    }

    fn cdf(&self, k: u64) -> T {
        T::from_f64(lower_tail(k as f64, self.lambda.to_f64()).value)
    }

    fn sf(&self, k: u64) -> T {
        T::from_f64(upper_tail(k as f64, self.lambda.to_f64()).value)
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }
}
