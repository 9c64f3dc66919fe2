use libm::{exp, log};

use crate::special::{ndtr, ndtri};
use crate::Storage;
use super::{positive, quantile_edges, ContinuousDistribution, StatsError};

/// ln √(2π)
const LN_SQRT_2PI: f64 = 0.91893853320467274178;

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Example
///
/// ```
/// use transcendental::stats::{Normal, ContinuousDistribution};
///
/// let n = Normal::new(0.0_f64, 1.0).unwrap();
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
/// assert!((n.quantile(0.975) - 1.96).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal<T> {
    mu: T,
    sigma: T,
}

impl<T: Storage> Normal<T> {
    /// Create a normal distribution with mean `mu` and standard deviation `sigma`.
    ///
    /// Requires `sigma > 0`.
    pub fn new(mu: T, sigma: T) -> Result<Self, StatsError> {
        if !positive(sigma.to_f64()) || !mu.to_f64().is_finite() {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { mu, sigma })
    }

    fn standardize(&self, x: T) -> f64 {
        (x.to_f64() - self.mu.to_f64()) / self.sigma.to_f64()
    }
}

impl<T: Storage> ContinuousDistribution<T> for Normal<T> {
    fn pdf(&self, x: T) -> T {
        T::from_f64(exp(self.ln_pdf(x).to_f64()))
    }

    fn ln_pdf(&self, x: T) -> T {
        let z = self.standardize(x);
        T::from_f64(-log(self.sigma.to_f64()) - LN_SQRT_2PI - 0.5 * z * z)
    }

    fn cdf(&self, x: T) -> T {
        T::from_f64(ndtr(self.standardize(x)))
    }

    fn sf(&self, x: T) -> T {
        T::from_f64(ndtr(-self.standardize(x)))
    }

    fn quantile(&self, p: T) -> T {
        let p = p.to_f64();
        let z = quantile_edges(p, f64::NEG_INFINITY, f64::INFINITY).unwrap_or_else(|| ndtri(p));
        T::from_f64(self.mu.to_f64() + self.sigma.to_f64() * z)
    }

    fn mean(&self) -> T {
        self.mu
    }

    fn variance(&self) -> T {
        let s = self.sigma.to_f64();
        T::from_f64(s * s)
    }
}
