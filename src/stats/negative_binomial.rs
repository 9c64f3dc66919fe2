use libm::{exp, log, log1p};

use crate::special::{incbet_checked, incbi_checked, lgamma, Checked, SpecialError};
use crate::Storage;
use super::{positive, DiscreteDistribution, StatsError};

/// Negative binomial distribution function, the sum of terms 0 through
/// `k`: Σ_{j=0}^{k} C(n + j − 1, j) pⁿ (1 − p)ʲ.
///
/// This is the probability of at most `k` failures before the `n`th
/// success, with success probability `p`. Evaluated as I_p(n, k + 1).
///
/// # Example
///
/// ```
/// use transcendental::stats::nbdtr;
///
/// // Geometric case: P(X ≤ k) = 1 − (1 − p)^{k+1}
/// assert!((nbdtr(3, 1, 0.25) - (1.0 - 0.75f64.powi(4))).abs() < 1e-15);
/// ```
pub fn nbdtr(k: i32, n: i32, p: f64) -> f64 {
    nbdtr_checked(k, n, p).value
}

/// [`nbdtr`] with error reporting.
pub fn nbdtr_checked(k: i32, n: i32, p: f64) -> Checked<f64> {
    if !(0.0..=1.0).contains(&p) || k < 0 || n < 1 {
        return Checked::fail("nbdtr", SpecialError::Domain, 0.0);
    }
    lower_tail(f64::from(k), f64::from(n), p)
}

/// Complemented negative binomial distribution, the sum of terms `k + 1`
/// to infinity. Evaluated as I_{1−p}(k + 1, n).
pub fn nbdtrc(k: i32, n: i32, p: f64) -> f64 {
    nbdtrc_checked(k, n, p).value
}

/// [`nbdtrc`] with error reporting.
pub fn nbdtrc_checked(k: i32, n: i32, p: f64) -> Checked<f64> {
    if !(0.0..=1.0).contains(&p) || k < 0 || n < 1 {
        return Checked::fail("nbdtrc", SpecialError::Domain, 0.0);
    }
    upper_tail(f64::from(k), f64::from(n), p)
}

/// Inverse negative binomial distribution: the success probability p such
/// that `nbdtr(k, n, p) == y`.
///
/// # Example
///
/// ```
/// use transcendental::stats::{nbdtr, nbdtri};
///
/// let p = nbdtri(5, 3, 0.4);
/// assert!((nbdtr(5, 3, p) - 0.4).abs() < 1e-12);
/// ```
pub fn nbdtri(k: i32, n: i32, y: f64) -> f64 {
    nbdtri_checked(k, n, y).value
}

/// [`nbdtri`] with error reporting.
pub fn nbdtri_checked(k: i32, n: i32, y: f64) -> Checked<f64> {
    if !(0.0..=1.0).contains(&y) || k < 0 || n < 1 {
        return Checked::fail("nbdtri", SpecialError::Domain, 0.0);
    }
    incbi_checked(f64::from(n), f64::from(k) + 1.0, y)
}

fn lower_tail(k: f64, n: f64, p: f64) -> Checked<f64> {
    incbet_checked(n, k + 1.0, p)
}

fn upper_tail(k: f64, n: f64, p: f64) -> Checked<f64> {
    incbet_checked(k + 1.0, n, 1.0 - p)
}

/// Negative binomial distribution NB(r, p): the number of failures before
/// the r-th success, with success probability p.
///
/// P(X = k) = Γ(k + r) / (k! Γ(r)) pʳ (1 − p)ᵏ. The success count r may be
/// any positive real.
///
/// # Example
///
/// ```
/// use transcendental::stats::{NegativeBinomial, DiscreteDistribution};
///
/// let nb = NegativeBinomial::new(3.0_f64, 0.5).unwrap();
/// assert!((nb.mean() - 3.0).abs() < 1e-14);
/// assert!((nb.variance() - 6.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NegativeBinomial<T> {
    r: T,
    p: T,
}

impl<T: Storage> NegativeBinomial<T> {
    /// Create a negative binomial distribution with `r` successes and success
    /// probability `p`. Requires `r > 0` and `0 < p ≤ 1`.
    pub fn new(r: T, p: T) -> Result<Self, StatsError> {
        let pf = p.to_f64();
        if !positive(r.to_f64()) || !(pf > 0.0 && pf <= 1.0) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { r, p })
    }
}

impl<T: Storage> DiscreteDistribution<T> for NegativeBinomial<T> {
    fn pmf(&self, k: u64) -> T {
        T::from_f64(exp(self.ln_pmf(k).to_f64()))
    }

    fn ln_pmf(&self, k: u64) -> T {
        let r = self.r.to_f64();
        let p = self.p.to_f64();
        if p == 1.0 {
            return T::from_f64(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
        }
        let kf = k as f64;
        let ln = lgamma(kf + r) - lgamma(kf + 1.0) - lgamma(r) + r * log(p) + kf * log1p(-p);
        T::from_f64(ln)
    }

    fn cdf(&self, k: u64) -> T {
        T::from_f64(lower_tail(k as f64, self.r.to_f64(), self.p.to_f64()).value)
    }

    fn sf(&self, k: u64) -> T {
        T::from_f64(upper_tail(k as f64, self.r.to_f64(), self.p.to_f64()).value)
    }

    fn mean(&self) -> T {
        let p = self.p.to_f64();
        T::from_f64(self.r.to_f64() * (1.0 - p) / p)
    }

    fn variance(&self) -> T {
        let p = self.p.to_f64();
        T::from_f64(self.r.to_f64() * (1.0 - p) / (p * p))
    }
}
