//! Offloaded multiplication: one task per output element.
//!
//! Models the accelerator pattern on host threads: share A, B, and C with a
//! worker pool, bulk-dispatch one task per (i,j) over the m×n index space,
//! then join before anything reads C or the clock.

use rayon::prelude::*;

use crate::error::BenchError;
use crate::matrix::element::Element;

/// Dispatch the multiply as m*n independent per-element tasks.
///
/// Each task owns the full reduction over k for its (i,j) and writes exactly
/// one element of C; the write sets are pairwise disjoint, so the scatter
/// needs no locks. Tasks never touch A or B mutably.
///
/// The pool is built per call; a pool that cannot be brought up is a
/// [`BenchError::Backend`], reported separately from allocation failure.
/// `install` returns only once every task has finished, which is the
/// completion barrier the harness times against.
pub fn multiply<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    p: usize,
) -> Result<(), BenchError> {
    debug_assert_eq!(c.len(), m * n);

    let pool = rayon::ThreadPoolBuilder::new()
        .build()
        .map_err(|e| BenchError::Backend(e.to_string()))?;

    pool.install(|| {
        c.par_iter_mut().enumerate().for_each(|(idx, c_ij)| {
            let i = idx / n;
            let j = idx % n;
            let mut acc = T::ZERO;
            for k in 0..p {
                acc += a[i * p + k] * b[k * n + j];
            }
            *c_ij += acc;
        });
    });

    Ok(())
}
