//! Element types a benchmark run can be instantiated at.
//!
//! The whole pipeline is generic over [`Element`] so one code base covers the
//! single- and double-precision builds; the `double` cargo feature picks the
//! concrete type through the `Prec` alias in the crate root.

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul};

use rand::Rng;
use rand::distributions::Standard;
use rand::rngs::StdRng;

/// A floating-point matrix element.
///
/// Implemented for `f32` and `f64`. Everything a strategy needs is here:
/// the additive identity, [0,1) sampling for reproducible inputs, the
/// oracle-comparison tolerance, and the external gemm hook.
pub trait Element:
    Copy + Send + Sync + Debug + Display + AddAssign + Mul<Output = Self> + 'static
{
    /// Additive identity. The all-zero bit pattern for both element types,
    /// which is what lets freshly zeroed allocations serve as valid C.
    const ZERO: Self;

    /// Element-wise tolerance for comparison against the naive oracle.
    /// Blocked and offloaded strategies reorder the accumulation, so results
    /// agree only up to rounding, never bit-exactly.
    const TOLERANCE: f64;

    /// Draw a value in [0,1).
    fn sample(rng: &mut StdRng) -> Self;

    /// Widen for error measurement in tests.
    fn to_f64(self) -> f64;

    /// Delegate C = A * B to the external dense-multiply routine for this
    /// element type, row-major, no transposes, alpha = 1, beta = 0.
    ///
    /// # Safety
    ///
    /// `a`, `b`, and `c` must be valid for m*p, p*n, and m*n elements.
    unsafe fn gemm(m: usize, p: usize, n: usize, a: *const Self, b: *const Self, c: *mut Self);
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const TOLERANCE: f64 = 1e-5;

    fn sample(rng: &mut StdRng) -> Self {
        rng.sample(Standard)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    unsafe fn gemm(m: usize, p: usize, n: usize, a: *const Self, b: *const Self, c: *mut Self) {
        // SAFETY: caller guarantees the pointer extents; strides describe the
        // same row-major layout the rest of the crate uses.
        unsafe {
            matrixmultiply::sgemm(
                m,
                p,
                n,
                1.0,
                a,
                p as isize,
                1,
                b,
                n as isize,
                1,
                0.0,
                c,
                n as isize,
                1,
            );
        }
    }
}

impl Element for f64 {
    const ZERO: Self = 0.0;
    const TOLERANCE: f64 = 1e-12;

    fn sample(rng: &mut StdRng) -> Self {
        rng.sample(Standard)
    }

    fn to_f64(self) -> f64 {
        self
    }

    unsafe fn gemm(m: usize, p: usize, n: usize, a: *const Self, b: *const Self, c: *mut Self) {
        // SAFETY: caller guarantees the pointer extents; strides describe the
        // same row-major layout the rest of the crate uses.
        unsafe {
            matrixmultiply::dgemm(
                m,
                p,
                n,
                1.0,
                a,
                p as isize,
                1,
                b,
                n as isize,
                1,
                0.0,
                c,
                n as isize,
                1,
            );
        }
    }
}
