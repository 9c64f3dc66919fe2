//! Probability distributions built on the incomplete gamma and beta integrals.
//!
//! Two layers are provided. The free functions are the classical
//! cumulative distribution functions, their complements and inverses, taking
//! `f64` arguments (integer counts and degrees of freedom as `i32`) and
//! following the same [`Checked`](crate::special::Checked) error model as
//! [`special`](crate::special). The distribution objects wrap the same
//! machinery behind [`ContinuousDistribution`] and [`DiscreteDistribution`],
//! generic over any [`Storage`](crate::Storage) type.
//!
//! # Distribution functions
//!
//! | Family | CDF | Complement | Inverse |
//! |---|---|---|---|
//! | Binomial | [`bdtr`] | [`bdtrc`] | [`bdtri`] |
//! | Negative binomial | [`nbdtr`] | [`nbdtrc`] | [`nbdtri`] |
//! | Poisson | [`pdtr`] | [`pdtrc`] | [`pdtri`] |
//! | Gamma | [`gdtr`] | [`gdtrc`] | |
//! | Chi-square | [`chdtr`] | [`chdtrc`] | [`chdtri`] (of the complement) |
//! | F | [`fdtr`] | [`fdtrc`] | [`fdtri`] (of the complement) |
//! | Student's t | [`stdtr`] | | [`stdtri`] |
//! | Normal | [`ndtr`] | | [`ndtri`] |
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Gamma`] | shape α, rate β | (0, ∞) |
//! | [`Beta`] | shape α, shape β | [0, 1] |
//! | [`ChiSquared`] | degrees of freedom k | [0, ∞) |
//! | [`StudentT`] | degrees of freedom ν | (−∞, ∞) |
//! | [`FisherF`] | degrees of freedom d₁, d₂ | [0, ∞) |
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`NegativeBinomial`] | successes r, probability p | {0, 1, 2, …} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//!
//! # Example
//!
//! ```
//! use transcendental::stats::{bdtr, Normal, ContinuousDistribution};
//!
//! // P(X ≤ 2) for X ~ B(10, ½)
//! assert!((bdtr(2, 10, 0.5) - 0.0546875).abs() < 1e-15);
//!
//! let n = Normal::new(0.0_f64, 1.0).unwrap();
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!((n.quantile(0.975) - 1.959963984540054).abs() < 1e-14);
//! ```

mod normal;
mod gamma_dist;
mod beta_dist;
mod chi_squared;
mod student_t;
mod fisher_f;
mod binomial;
mod negative_binomial;
mod poisson;

#[cfg(test)]
mod tests;

pub use crate::special::{ndtr, ndtr_checked, ndtri, ndtri_checked};
pub use normal::Normal;
pub use gamma_dist::{gdtr, gdtr_checked, gdtrc, gdtrc_checked, Gamma};
pub use beta_dist::Beta;
pub use chi_squared::{
    chdtr, chdtr_checked, chdtrc, chdtrc_checked, chdtri, chdtri_checked, ChiSquared,
};
pub use student_t::{stdtr, stdtr_checked, stdtri, stdtri_checked, StudentT};
pub use fisher_f::{fdtr, fdtr_checked, fdtrc, fdtrc_checked, fdtri, fdtri_checked, FisherF};
pub use binomial::{bdtr, bdtr_checked, bdtrc, bdtrc_checked, bdtri, bdtri_checked, Binomial};
pub use negative_binomial::{
    nbdtr, nbdtr_checked, nbdtrc, nbdtrc_checked, nbdtri, nbdtri_checked, NegativeBinomial,
};
pub use poisson::{pdtr, pdtr_checked, pdtrc, pdtrc_checked, pdtri, pdtri_checked, Poisson};

/// Errors from distribution construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Survival function P(X > x), computed directly rather than as 1 − cdf.
    fn sf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

/// Trait for discrete probability distributions.
pub trait DiscreteDistribution<T> {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: u64) -> T;
    /// Natural log of the probability mass function.
    fn ln_pmf(&self, k: u64) -> T;
    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: u64) -> T;
    /// Survival function P(X > k).
    fn sf(&self, k: u64) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// `true` when `x` is a finite value strictly above zero.
#[inline]
pub(crate) fn positive(x: f64) -> bool {
    x > 0.0 && x.is_finite()
}

/// Map a quantile probability onto the support edges, or `None` when the
/// inverse has to be computed.
#[inline]
pub(crate) fn quantile_edges(p: f64, lo: f64, hi: f64) -> Option<f64> {
    if p.is_nan() {
        Some(f64::NAN)
    } else if p <= 0.0 {
        Some(lo)
    } else if p >= 1.0 {
        Some(hi)
    } else {
        None
    }
}
