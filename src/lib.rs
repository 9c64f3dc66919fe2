//! # transcendental
//!
//! Pure-Rust special functions and probability distributions, no-std
//! compatible. Gamma, beta, incomplete integrals, error functions, Bessel,
//! Airy, elliptic, hypergeometric and zeta functions, evaluated in `f64` with
//! minimax rational approximations, continued fractions, power series and
//! asymptotic expansions. Stack-only, no global state.
//!
//! ## Quick start
//!
//! ```
//! use transcendental::special::{gamma, incbet, jv};
//! use transcendental::stats::{bdtr, stdtri};
//!
//! assert!((gamma(5.0) - 24.0).abs() < 1e-12);
//! assert!((incbet(2.0, 3.0, 0.5) - 0.6875).abs() < 1e-14);
//! assert!((jv(0.5, 1.0) - 0.6713967071418031).abs() < 1e-13);
//!
//! // P(X ≤ 2) for X ~ B(10, ½)
//! assert!((bdtr(2, 10, 0.5) - 0.0546875).abs() < 1e-15);
//! assert!((stdtri(10, 0.975) - 2.228138851986274).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — The special functions. Each comes in a plain form that
//!   returns the value and a `_checked` form returning a
//!   [`Checked`](special::Checked) with the raised
//!   [`SpecialError`](special::SpecialError), if any. Errors never abort: a
//!   documented sentinel is always returned.
//!
//! - [`stats`] — Binomial, negative binomial, Poisson, gamma, chi-square,
//!   F, Student's t and normal distribution functions with complements and
//!   inverses, plus distribution objects implementing
//!   [`ContinuousDistribution`](stats::ContinuousDistribution) /
//!   [`DiscreteDistribution`](stats::DiscreteDistribution).
//!
//! - [`ufunc`] — Elementwise evaluation of any scalar function over slices
//!   of a [`Storage`] type, with single and multi-output forms.
//!
//! - [`traits`] — [`Storage`], the `f64`-convertible element type used by
//!   [`ufunc`] and the distribution objects.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. `std::error::Error` impls |
//! | `alloc` | via std | `Vec`-returning [`ufunc`] conveniences |
//! | `half`  | no      | [`Storage`] for `half::f16` and `half::bf16` |
//! | `log`   | no      | Emit every raised error through `log::debug!` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;
pub mod ufunc;

pub use traits::Storage;
