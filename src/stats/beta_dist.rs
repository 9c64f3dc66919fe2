use libm::{exp, log, log1p};

use crate::special::{incbet, incbi, lbeta_sign};
use crate::Storage;
use super::{positive, quantile_edges, ContinuousDistribution, StatsError};

/// Beta distribution with shape parameters α and β.
///
/// f(x) = x^{α−1} (1−x)^{β−1} / B(α, β) for x ∈ [0, 1].
///
/// # Example
///
/// ```
/// use transcendental::stats::{Beta, ContinuousDistribution};
///
/// let b = Beta::new(2.0_f64, 5.0).unwrap();
/// assert!((b.mean() - 2.0 / 7.0).abs() < 1e-14);
/// assert!((b.cdf(b.quantile(0.3)) - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
}

impl<T: Storage> Beta<T> {
    /// Create a Beta distribution with shape parameters `alpha` and `beta`.
    /// Requires both > 0.
    pub fn new(alpha: T, beta: T) -> Result<Self, StatsError> {
        if !positive(alpha.to_f64()) || !positive(beta.to_f64()) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { alpha, beta })
    }

    fn params(&self) -> (f64, f64) {
        (self.alpha.to_f64(), self.beta.to_f64())
    }
}

impl<T: Storage> ContinuousDistribution<T> for Beta<T> {
    fn pdf(&self, x: T) -> T {
        let xf = x.to_f64();
        if !(0.0..=1.0).contains(&xf) {
            return T::zero();
        }
        T::from_f64(exp(self.ln_pdf(x).to_f64()))
    }

    fn ln_pdf(&self, x: T) -> T {
        let (a, b) = self.params();
        let x = x.to_f64();
        if !(0.0..=1.0).contains(&x) {
            return T::from_f64(f64::NEG_INFINITY);
        }
        let (lb, _) = lbeta_sign(a, b);
        T::from_f64((a - 1.0) * log(x) + (b - 1.0) * log1p(-x) - lb)
    }

    fn cdf(&self, x: T) -> T {
        let (a, b) = self.params();
        let x = x.to_f64();
        if x <= 0.0 {
            return T::zero();
        }
        if x >= 1.0 {
            return T::one();
        }
        T::from_f64(incbet(a, b, x))
    }

    fn sf(&self, x: T) -> T {
        let (a, b) = self.params();
        let x = x.to_f64();
        if x <= 0.0 {
            return T::one();
        }
        if x >= 1.0 {
            return T::zero();
        }
        T::from_f64(incbet(b, a, 1.0 - x))
    }

    fn quantile(&self, p: T) -> T {
        let (a, b) = self.params();
        let p = p.to_f64();
        let x = quantile_edges(p, 0.0, 1.0).unwrap_or_else(|| incbi(a, b, p));
        T::from_f64(x)
    }

    fn mean(&self) -> T {
        let (a, b) = self.params();
        T::from_f64(a / (a + b))
    }

    fn variance(&self) -> T {
        let (a, b) = self.params();
        let ab = a + b;
        T::from_f64(a * b / (ab * ab * (ab + 1.0)))
    }
}
