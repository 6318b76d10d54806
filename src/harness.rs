//! Benchmark lifecycle: configure, initialize, run, report, release.
//!
//! One run moves strictly forward, from [`Benchmark`] (configured) to
//! [`Prepared`] (buffers allocated, A/B seeded, C zeroed) to [`Completed`]
//! (timed, throughput derived), then report and drop. Each transition
//! consumes the previous state, so a released run cannot be re-entered and
//! every buffer is freed exactly once, on every path including early errors.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::BenchError;
use crate::matrix::buffer::{Buffer, VECTOR_ALIGN};
use crate::matrix::element::Element;
use crate::matrix::init::{random_fill, seeded_rng, zero_fill};
use crate::matrix::print::print_corner;
use crate::strategy::Kind;

/// Dimension used on every axis when the command line supplies none.
pub const DEFAULT_DIM: usize = 4;

/// Problem dimensions: C (m×n) = A (m×p) × B (p×n).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    /// Rows of A and C.
    pub m: usize,
    /// Columns of B and C.
    pub n: usize,
    /// Columns of A, rows of B.
    pub p: usize,
}

impl Dims {
    /// Validated dimensions. Zero extents are legal and produce empty
    /// matrices; element counts that overflow `usize` are not.
    pub fn new(m: usize, n: usize, p: usize) -> Result<Self, BenchError> {
        for (rows, cols) in [(m, p), (p, n), (m, n)] {
            if rows.checked_mul(cols).is_none() {
                return Err(BenchError::Argument(format!(
                    "{m} {n} {p}: matrix element count overflows usize"
                )));
            }
        }
        Ok(Self { m, n, p })
    }

    pub fn a_len(&self) -> usize {
        self.m * self.p
    }

    pub fn b_len(&self) -> usize {
        self.p * self.n
    }

    pub fn c_len(&self) -> usize {
        self.m * self.n
    }

    /// Floating-point operations in one multiply. Each C element costs p
    /// multiplies but only p-1 useful additions (the first add lands on a
    /// zero), hence the subtracted m*p term.
    pub fn flops(&self) -> f64 {
        2.0 * self.m as f64 * self.n as f64 * self.p as f64 - self.m as f64 * self.p as f64
    }
}

impl Default for Dims {
    fn default() -> Self {
        Self {
            m: DEFAULT_DIM,
            n: DEFAULT_DIM,
            p: DEFAULT_DIM,
        }
    }
}

/// Throughput in GFLOP/s for one multiply at `dims` taking `seconds`.
pub fn gigaflops(dims: Dims, seconds: f64) -> f64 {
    dims.flops() / seconds / 1e9
}

/// A configured benchmark run: dimensions fixed, nothing allocated yet.
pub struct Benchmark {
    dims: Dims,
}

impl Benchmark {
    pub fn new(dims: Dims) -> Self {
        Self { dims }
    }

    /// Allocate the three matrices and initialize them: A and B filled from
    /// a freshly reseeded generator, C zeroed. All of this happens before any
    /// timing starts.
    pub fn prepare<T: Element>(self) -> Result<Prepared<T>, BenchError> {
        let Dims { m, n, p } = self.dims;
        debug!(m, n, p, "allocating matrices");
        let mut a = Buffer::<T>::allocate(m, p, VECTOR_ALIGN)?;
        let mut b = Buffer::<T>::allocate(p, n, VECTOR_ALIGN)?;
        let mut c = Buffer::<T>::allocate(m, n, VECTOR_ALIGN)?;

        let mut rng = seeded_rng();
        random_fill(&mut a, &mut rng);
        random_fill(&mut b, &mut rng);
        zero_fill(&mut c);
        debug!("inputs seeded, output zeroed");

        Ok(Prepared {
            dims: self.dims,
            a,
            b,
            c,
        })
    }
}

/// An initialized run, ready to execute exactly one strategy.
pub struct Prepared<T: Element> {
    dims: Dims,
    a: Buffer<T>,
    b: Buffer<T>,
    c: Buffer<T>,
}

impl<T: Element> Prepared<T> {
    /// Execute `strategy` once. The clock brackets exactly the strategy call;
    /// allocation and initialization cost is excluded, and for the offload
    /// strategy the call does not return until its completion barrier.
    pub fn run(mut self, strategy: Kind) -> Result<Completed<T>, BenchError> {
        let Dims { m, n, p } = self.dims;
        debug!(strategy = strategy.label(), "dispatching");

        let start = Instant::now();
        strategy.run(&self.a, &self.b, &mut self.c, m, n, p)?;
        let elapsed = start.elapsed();

        let gflops = gigaflops(self.dims, elapsed.as_secs_f64());
        Ok(Completed {
            dims: self.dims,
            a: self.a,
            b: self.b,
            c: self.c,
            elapsed,
            gflops,
        })
    }
}

/// A finished run holding its inputs, result, and measurements.
///
/// Dropping it releases the three buffers; the consumed earlier states leave
/// no way back in.
pub struct Completed<T: Element> {
    dims: Dims,
    a: Buffer<T>,
    b: Buffer<T>,
    c: Buffer<T>,
    elapsed: Duration,
    gflops: f64,
}

impl<T: Element> Completed<T> {
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn gflops(&self) -> f64 {
        self.gflops
    }

    pub fn a(&self) -> &[T] {
        &self.a
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    pub fn c(&self) -> &[T] {
        &self.c
    }

    /// Print the timing line, the throughput line, and the three corner
    /// dumps, in that order.
    pub fn report(&self) {
        let Dims { m, n, p } = self.dims;
        println!("Timing: {:10.3} (s)", self.elapsed.as_secs_f64());
        println!("Performance: {:10.3} (GFlops)", self.gflops);
        print_corner(&self.a, m, p, "A =");
        print_corner(&self.b, p, n, "B =");
        print_corner(&self.c, m, n, "C =");
    }
}

/// Full lifecycle for one strategy: prepare, run, report, release.
pub fn drive<T: Element>(strategy: Kind, dims: Dims) -> Result<(), BenchError> {
    let completed = Benchmark::new(dims).prepare::<T>()?.run(strategy)?;
    completed.report();
    debug!("releasing buffers");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flops_counts_multiply_adds() {
        let dims = Dims::new(4, 4, 4).unwrap();
        assert_eq!(dims.flops(), 112.0);
    }

    #[test]
    fn default_dims_are_4x4x4() {
        assert_eq!(Dims::default(), Dims { m: 4, n: 4, p: 4 });
    }

    #[test]
    fn overflowing_dims_are_rejected() {
        let err = Dims::new(usize::MAX, usize::MAX, 2).unwrap_err();
        assert!(matches!(err, BenchError::Argument(_)));
    }
}
