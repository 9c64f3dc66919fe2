use core::fmt::Debug;
use num_traits::{One, Zero};

/// Floating-point storage type for arguments and results.
///
/// Every function in this crate evaluates in `f64`. A storage type only has
/// to widen into `f64` and narrow back from it, so narrower formats get the
/// full double-precision algorithm with a single rounding on store.
///
/// Implemented for `f32` and `f64`, and for `half::f16` / `half::bf16` with
/// the `half` feature. `f64` is the widest storage available.
///
/// # Example
///
/// ```
/// use transcendental::Storage;
///
/// let x = <f32 as Storage>::from_f64(0.1);
/// assert_eq!(x, 0.1_f32);
/// assert_eq!(Storage::to_f64(2.5_f32), 2.5);
/// ```
pub trait Storage: Copy + PartialOrd + Debug + Zero + One {
    /// Widen to `f64`. Exact for every implementor.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, rounding to nearest.
    fn from_f64(v: f64) -> Self;
}

impl Storage for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Storage for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

#[cfg(feature = "half")]
macro_rules! impl_storage_half {
    ($($t:ty),*) => {
        $(
            impl Storage for $t {
                #[inline] fn to_f64(self) -> f64 { <$t>::to_f64(self) }
                #[inline] fn from_f64(v: f64) -> Self { <$t>::from_f64(v) }
            }
        )*
    };
}

#[cfg(feature = "half")]
impl_storage_half!(half::f16, half::bf16);
