use libm::{exp, expm1, log, log1p, pow};

use crate::special::{incbet, incbet_checked, incbi, lgamma, Checked, SpecialError};
use crate::Storage;
use super::{DiscreteDistribution, StatsError};

/// Binomial distribution function, the sum of terms 0 through `k`:
/// Σ_{j=0}^{k} C(n, j) pʲ (1 − p)ⁿ⁻ʲ.
///
/// Evaluated as the incomplete beta integral I_{1−p}(n − k, k + 1).
/// Requires 0 ≤ k ≤ n and 0 ≤ p ≤ 1; otherwise returns 0 with a domain
/// error.
///
/// # Example
///
/// ```
/// use transcendental::stats::bdtr;
///
/// assert!((bdtr(2, 10, 0.5) - 0.0546875).abs() < 1e-15);
/// assert_eq!(bdtr(10, 10, 0.3), 1.0);
/// ```
pub fn bdtr(k: i32, n: i32, p: f64) -> f64 {
    bdtr_checked(k, n, p).value
}

/// [`bdtr`] with error reporting.
pub fn bdtr_checked(k: i32, n: i32, p: f64) -> Checked<f64> {
    if !(0.0..=1.0).contains(&p) || k < 0 || n < k {
        return Checked::fail("bdtr", SpecialError::Domain, 0.0);
    }
    lower_tail(f64::from(k), f64::from(n), p)
}

/// Complemented binomial distribution, the sum of terms `k + 1` through `n`.
///
/// Evaluated as I_p(k + 1, n − k). Negative `k` returns 1.
///
/// # Example
///
/// ```
/// use transcendental::stats::{bdtr, bdtrc};
///
/// assert!((bdtr(3, 8, 0.4) + bdtrc(3, 8, 0.4) - 1.0).abs() < 1e-15);
/// ```
pub fn bdtrc(k: i32, n: i32, p: f64) -> f64 {
    bdtrc_checked(k, n, p).value
}

/// [`bdtrc`] with error reporting.
pub fn bdtrc_checked(k: i32, n: i32, p: f64) -> Checked<f64> {
    const NAME: &str = "bdtrc";

    if !(0.0..=1.0).contains(&p) {
        return Checked::fail(NAME, SpecialError::Domain, 0.0);
    }
    if k < 0 {
        return Checked::ok(1.0);
    }
    if n < k {
        return Checked::fail(NAME, SpecialError::Domain, 0.0);
    }
    upper_tail(f64::from(k), f64::from(n), p)
}

/// Inverse binomial distribution: the event probability p such that
/// `bdtr(k, n, p) == y`.
///
/// Requires 0 ≤ k < n and 0 ≤ y ≤ 1; otherwise returns 0 with a domain
/// error.
///
/// # Example
///
/// ```
/// use transcendental::stats::{bdtr, bdtri};
///
/// let p = bdtri(4, 20, 0.3);
/// assert!((bdtr(4, 20, p) - 0.3).abs() < 1e-12);
/// ```
pub fn bdtri(k: i32, n: i32, y: f64) -> f64 {
    bdtri_checked(k, n, y).value
}

/// [`bdtri`] with error reporting.
pub fn bdtri_checked(k: i32, n: i32, y: f64) -> Checked<f64> {
    if !(0.0..=1.0).contains(&y) || k < 0 || n <= k {
        return Checked::fail("bdtri", SpecialError::Domain, 0.0);
    }

    let dn = f64::from(n - k);
    if k == 0 {
        // bdtr(0, n, p) = (1 − p)ⁿ inverts in closed form
        let p = if y > 0.8 {
            -expm1(log1p(y - 1.0) / dn)
        } else {
            1.0 - pow(y, 1.0 / dn)
        };
        return Checked::ok(p);
    }

    let dk = f64::from(k) + 1.0;
    // Invert whichever tail keeps the target away from 1
    let p = if incbet(dn, dk, 0.5) > 0.5 {
        incbi(dk, dn, 1.0 - y)
    } else {
        1.0 - incbi(dn, dk, y)
    };
    Checked::ok(p)
}

fn lower_tail(k: f64, n: f64, p: f64) -> Checked<f64> {
    if k == n {
        return Checked::ok(1.0);
    }
    let dn = n - k;
    if k == 0.0 {
        return Checked::ok(pow(1.0 - p, dn));
    }
    incbet_checked(dn, k + 1.0, 1.0 - p)
}

fn upper_tail(k: f64, n: f64, p: f64) -> Checked<f64> {
    if k == n {
        return Checked::ok(0.0);
    }
    let dn = n - k;
    if k == 0.0 {
        let q = if p < 0.01 {
            -expm1(dn * log1p(-p))
        } else {
            1.0 - pow(1.0 - p, dn)
        };
        return Checked::ok(q);
    }
    incbet_checked(k + 1.0, dn, p)
}

/// Binomial distribution B(n, p).
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n.
///
/// # Example
///
/// ```
/// use transcendental::stats::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5_f64).unwrap();
/// assert!((b.mean() - 5.0).abs() < 1e-14);
/// assert!((b.variance() - 2.5).abs() < 1e-14);
/// assert!((b.cdf(2) - 0.0546875).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial<T> {
    n: u64,
    p: T,
}

impl<T: Storage> Binomial<T> {
    /// Create a binomial distribution with `n` trials and success probability `p`.
    /// Requires `0 ≤ p ≤ 1`.
    pub fn new(n: u64, p: T) -> Result<Self, StatsError> {
        if !(T::zero()..=T::one()).contains(&p) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { n, p })
    }
}

impl<T: Storage> DiscreteDistribution<T> for Binomial<T> {
    fn pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::zero();
        }
        T::from_f64(exp(self.ln_pmf(k).to_f64()))
    }

    fn ln_pmf(&self, k: u64) -> T {
        let p = self.p.to_f64();
        let ln = if k > self.n {
            f64::NEG_INFINITY
        } else if p == 0.0 || p == 1.0 {
            // Point mass at 0 or n
            let at = if p == 0.0 { 0 } else { self.n };
            if k == at { 0.0 } else { f64::NEG_INFINITY }
        } else {
            let nf = self.n as f64;
            let kf = k as f64;
            lgamma(nf + 1.0) - lgamma(kf + 1.0) - lgamma(nf - kf + 1.0)
                + kf * log(p)
                + (nf - kf) * log1p(-p)
        };
        T::from_f64(ln)
    }

    fn cdf(&self, k: u64) -> T {
        if k >= self.n {
            return T::one();
        }
        T::from_f64(lower_tail(k as f64, self.n as f64, self.p.to_f64()).value)
    }

    fn sf(&self, k: u64) -> T {
        if k >= self.n {
            return T::zero();
        }
        T::from_f64(upper_tail(k as f64, self.n as f64, self.p.to_f64()).value)
    }

    fn mean(&self) -> T {
        T::from_f64(self.n as f64 * self.p.to_f64())
    }

    fn variance(&self) -> T {
        let p = self.p.to_f64();
        T::from_f64(self.n as f64 * p * (1.0 - p))
    }
}
