//! Special mathematical functions.
//!
//! Gamma and beta families, incomplete integrals and their inverses, error
//! functions, Bessel functions of integer and real order, elliptic integrals,
//! hypergeometric functions and a handful of other classical transcendentals.
//! Every routine computes in `f64`, is no-std compatible and stack-only.
//!
//! Each function comes in two forms. The plain form (`gamma`) returns the
//! value alone. The `_checked` form (`gamma_checked`) returns a [`Checked`]
//! carrying the same value plus the [`SpecialError`] raised while computing
//! it, if any. A function never panics and never withholds its value: domain
//! errors, poles and overflow produce a documented sentinel instead.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`polevl`], [`p1evl`], [`chbevl`] | Horner and Clenshaw evaluators |
//! | [`gamma`], [`lgamma`], [`lgamma_sign`], [`rgamma`] | Γ(x), ln\|Γ(x)\|, 1/Γ(x) |
//! | [`psi`] | Digamma ψ(x) |
//! | [`beta`], [`lbeta_sign`], [`fac`] | Beta function, factorial |
//! | [`igam`], [`igamc`], [`igami`] | Regularized incomplete gamma and inverse |
//! | [`incbet`], [`incbi`] | Regularized incomplete beta and inverse |
//! | [`erf`], [`erfc`], [`ndtr`], [`ndtri`] | Error function, normal CDF and inverse |
//! | [`dawsn`], [`fresnl`] | Dawson and Fresnel integrals |
//! | [`expn`], [`shichi`], [`sici`] | Exponential, hyperbolic and trigonometric integrals |
//! | [`j0`], [`j1`], [`jn`], [`jv`] | Bessel J |
//! | [`y0`], [`y1`], [`yn`], [`yv`] | Bessel Y |
//! | [`i0`], [`i0e`], [`i1`], [`i1e`], [`iv`] | Modified Bessel I |
//! | [`k0`], [`k0e`], [`k1`], [`k1e`], [`kn`] | Modified Bessel K |
//! | [`airy`] | Airy Ai, Ai′, Bi, Bi′ |
//! | [`hyperg`], [`hyp2f1`] | Confluent and Gauss hypergeometric |
//! | [`struve`] | Struve H |
//! | [`ellpe`], [`ellpk`], [`ellie`], [`ellik`], [`ellpj`] | Elliptic integrals and Jacobi functions |
//! | [`zeta`], [`zetac`] | Hurwitz zeta and Riemann ζ(x) − 1 |
//! | [`spence`], [`cbrt`] | Dilogarithm, cube root |
//!
//! # Example
//!
//! ```
//! use transcendental::special::{gamma, gamma_checked, incbet, SpecialError};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0) - 24.0).abs() < 1e-12);
//!
//! // Poles are reported, not hidden
//! let r = gamma_checked(-2.0);
//! assert_eq!(r.error, Some(SpecialError::Singularity));
//!
//! // I_{0.5}(2, 3) = 11/16
//! assert!((incbet(2.0, 3.0, 0.5) - 0.6875).abs() < 1e-14);
//! ```

use core::fmt;

mod polevl;
mod gamma_fn;
mod digamma_fn;
mod beta_fn;
mod incgamma;
mod betainc;
mod erf_fn;
mod dawson;
mod fresnel;
mod expint;
mod bessel_j;
mod bessel_jv;
mod bessel_i;
mod bessel_k;
mod airy_fn;
mod hyperg;
mod hyp2f1_fn;
mod struve_fn;
mod elliptic;
mod zeta_fn;
mod spence_fn;
mod cbrt_fn;

#[cfg(test)]
mod tests;

pub use polevl::{chbevl, p1evl, polevl};
pub use gamma_fn::{
    fac, fac_checked, gamma, gamma_checked, lgamma, lgamma_checked, lgamma_sign,
    lgamma_sign_checked, rgamma, rgamma_checked,
};
pub use digamma_fn::{psi, psi_checked};
pub use beta_fn::{beta, beta_checked, lbeta_sign, lbeta_sign_checked};
pub use incgamma::{igam, igam_checked, igamc, igamc_checked, igami, igami_checked};
pub use betainc::{incbet, incbet_checked, incbi, incbi_checked};
pub use erf_fn::{
    erf, erf_checked, erfc, erfc_checked, ndtr, ndtr_checked, ndtri, ndtri_checked,
};
pub use dawson::{dawsn, dawsn_checked};
pub use fresnel::{fresnl, fresnl_checked};
pub use expint::{expn, expn_checked, shichi, shichi_checked, sici, sici_checked};
pub use bessel_j::{
    j0, j0_checked, j1, j1_checked, jn, jn_checked, y0, y0_checked, y1, y1_checked, yn,
    yn_checked,
};
pub use bessel_jv::{jv, jv_checked, yv, yv_checked};
pub use bessel_i::{
    i0, i0_checked, i0e, i0e_checked, i1, i1_checked, i1e, i1e_checked, iv, iv_checked,
};
pub use bessel_k::{
    k0, k0_checked, k0e, k0e_checked, k1, k1_checked, k1e, k1e_checked, kn, kn_checked,
};
pub use airy_fn::{airy, airy_checked, Airy};
pub use hyperg::{hyperg, hyperg_checked};
pub use hyp2f1_fn::{hyp2f1, hyp2f1_checked};
pub use struve_fn::{struve, struve_checked};
pub use elliptic::{
    ellie, ellie_checked, ellik, ellik_checked, ellpe, ellpe_checked, ellpj, ellpj_checked,
    ellpk, ellpk_checked, Jacobi,
};
pub use zeta_fn::{zeta, zeta_checked, zetac, zetac_checked};
pub use spence_fn::{spence, spence_checked};
pub use cbrt_fn::{cbrt, cbrt_checked};

// ---------------------------------------------------------------------------
// Error model
// ---------------------------------------------------------------------------

/// Error classes raised by special function evaluation.
///
/// None of these abort a computation. The function that raises one still
/// returns a value, which is either a conventional sentinel (0, ±[`MAXNUM`],
/// ±∞ or NaN) or the best estimate it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialError {
    /// Argument outside the function's domain.
    Domain,
    /// Argument at a pole.
    Singularity,
    /// Result too large to represent.
    Overflow,
    /// Result too small to represent.
    Underflow,
    /// Partial loss of precision; the value is a usable estimate.
    PartialLoss,
    /// Total loss of precision; the value should not be trusted.
    TotalLoss,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => write!(f, "argument domain error"),
            Self::Singularity => write!(f, "function singularity"),
            Self::Overflow => write!(f, "overflow range error"),
            Self::Underflow => write!(f, "underflow range error"),
            Self::PartialLoss => write!(f, "partial loss of precision"),
            Self::TotalLoss => write!(f, "total loss of precision"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

/// A computed value together with the error class raised while computing it.
///
/// # Example
///
/// ```
/// use transcendental::special::{k0_checked, SpecialError};
///
/// let r = k0_checked(-1.0);
/// assert_eq!(r.error, Some(SpecialError::Domain));
/// assert_eq!(r.value, f64::MAX);
/// assert!(r.into_result().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checked<T> {
    /// The returned value. Always present, even when `error` is set.
    pub value: T,
    /// The error raised, if any.
    pub error: Option<SpecialError>,
}

impl<T> Checked<T> {
    /// A clean result.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A result that raised `kind` inside function `name`.
    #[inline]
    pub fn fail(name: &'static str, kind: SpecialError, value: T) -> Self {
        report(name, kind);
        Self { value, error: Some(kind) }
    }

    /// A result whose error state was accumulated by the caller.
    #[inline]
    pub fn with(name: &'static str, value: T, error: Option<SpecialError>) -> Self {
        if let Some(kind) = error {
            report(name, kind);
        }
        Self { value, error }
    }

    /// `true` when no error was raised.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, discarding the value if an error was raised.
    #[inline]
    pub fn into_result(self) -> Result<T, SpecialError> {
        match self.error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }

    /// Transform the value, keeping the error.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked { value: f(self.value), error: self.error }
    }
}

#[cfg(feature = "log")]
#[inline]
fn report(name: &'static str, kind: SpecialError) {
    log::debug!("{name}: {kind}");
}

#[cfg(not(feature = "log"))]
#[inline(always)]
fn report(_name: &'static str, _kind: SpecialError) {}

// ---------------------------------------------------------------------------
// Machine constants (IEEE 754 double precision)
// ---------------------------------------------------------------------------

/// 2⁻⁵³, the unit roundoff.
pub const MACHEP: f64 = 1.11022302462515654042E-16;
/// ln(f64::MAX).
pub const MAXLOG: f64 = 7.09782712893383996732E2;
/// ln of the smallest denormal.
pub const MINLOG: f64 = -7.451332191019412076235E2;
/// Largest finite double.
pub const MAXNUM: f64 = f64::MAX;
/// Largest argument for which Γ(x) is finite.
pub const MAXGAM: f64 = 171.624376956302725;

pub(crate) const PI: f64 = core::f64::consts::PI;
pub(crate) const PIO2: f64 = core::f64::consts::FRAC_PI_2;
pub(crate) const PIO4: f64 = core::f64::consts::FRAC_PI_4;
/// √2 / 2
pub(crate) const SQRTH: f64 = 7.07106781186547524401E-1;
/// √(2/π)
pub(crate) const SQ2OPI: f64 = 7.9788456080286535587989E-1;
/// 2/π
pub(crate) const TWOOPI: f64 = 6.36619772367581343075535E-1;
/// 3π/4
pub(crate) const THPIO4: f64 = 2.35619449019234492885;
/// √(2π)
pub(crate) const SQTPI: f64 = 2.50662827463100050242;
/// Euler–Mascheroni constant.
pub(crate) const EULER: f64 = 0.57721566490153286061;
/// Continued-fraction rescaling threshold and its reciprocal.
pub(crate) const BIG: f64 = 4.503599627370496e15;
pub(crate) const BIGINV: f64 = 2.22044604925031308085e-16;
