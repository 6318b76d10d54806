//! Execution strategies sharing one input/output contract.
//!
//! Every strategy consumes read-only A (m×p) and B (p×n) and produces C (m×n)
//! into a pre-zeroed, caller-owned buffer. None of the three may alias.
//! The naive strategy is the oracle the others are tested against.

pub mod blocked;
pub mod library;
pub mod naive;
pub mod offload;
pub mod simd;

use crate::error::BenchError;
use crate::matrix::element::Element;

/// The benchmarked execution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Direct triple loop; the correctness oracle.
    Naive,
    /// Cache-tiled loops with a vectorizable inner reduction.
    Blocked,
    /// Untiled, SIMD-shaped inner loop.
    Simd,
    /// External dense-multiply library.
    Gemm,
    /// Per-element task dispatch with a completion barrier.
    Offload,
}

impl Kind {
    /// Every strategy, in report order.
    pub const ALL: [Kind; 5] = [
        Kind::Naive,
        Kind::Blocked,
        Kind::Simd,
        Kind::Gemm,
        Kind::Offload,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Kind::Naive => "naive",
            Kind::Blocked => "blocked",
            Kind::Simd => "simd",
            Kind::Gemm => "gemm",
            Kind::Offload => "offload",
        }
    }

    /// Run this strategy: C += A * B (C pre-zeroed by the caller).
    ///
    /// # Panics
    ///
    /// Panics if the slice lengths don't match m, n, p.
    pub fn run<T: Element>(
        self,
        a: &[T],
        b: &[T],
        c: &mut [T],
        m: usize,
        n: usize,
        p: usize,
    ) -> Result<(), BenchError> {
        assert_eq!(a.len(), m * p, "A: expected {}x{}={} elements", m, p, m * p);
        assert_eq!(b.len(), p * n, "B: expected {}x{}={} elements", p, n, p * n);
        assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

        match self {
            Kind::Naive => naive::multiply(a, b, c, m, n, p),
            Kind::Blocked => blocked::multiply(a, b, c, m, n, p),
            Kind::Simd => simd::multiply(a, b, c, m, n, p),
            Kind::Gemm => library::multiply(a, b, c, m, n, p),
            Kind::Offload => offload::multiply(a, b, c, m, n, p)?,
        }
        Ok(())
    }
}
