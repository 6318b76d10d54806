//! Micro-benchmarks for dense matrix multiplication strategies.
//!
//! Five strategies compute C = A×B on row-major matrices. They all run under
//! the same harness: inputs come from a fixed seed and the clock brackets
//! exactly the multiply call, so their numbers are directly comparable:
//!
//! - `naive`: the textbook triple loop, and the correctness oracle
//! - `blocked`: 16-edge cache tiling with a vectorizable inner loop
//! - `simd`: the naive nest with only the inner loop restructured for SIMD
//! - `gemm`: an external dense-multiply library, treated as a black box
//! - `offload`: one task per output element, bulk-dispatched and joined
//!
//! ## Usage
//!
//! ```
//! use matbench::harness::{Benchmark, Dims};
//! use matbench::strategy::Kind;
//!
//! let dims = Dims::new(8, 8, 8).unwrap();
//! let done = Benchmark::new(dims)
//!     .prepare::<f64>()
//!     .unwrap()
//!     .run(Kind::Blocked)
//!     .unwrap();
//! assert_eq!(done.c().len(), 64);
//! ```
//!
//! Each strategy also ships as its own binary (`naive [M N P]`, etc.), and
//! the default `matbench` binary runs them all side by side.

pub mod cli;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod strategy;

pub use error::BenchError;
pub use harness::{Benchmark, Dims, drive, gigaflops};
pub use strategy::Kind;

/// Element type selected at build time, mirroring the single/double switch of
/// the reference kernels: `f32` by default, `f64` with `--features double`.
#[cfg(not(feature = "double"))]
pub type Prec = f32;
/// Element type selected at build time.
#[cfg(feature = "double")]
pub type Prec = f64;
