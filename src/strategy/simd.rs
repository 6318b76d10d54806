//! Vectorized-only multiplication, no tiling.
//!
//! Isolation point: same loop nest as the naive strategy, only the inner loop
//! is restructured for SIMD. Comparing this against naive measures the
//! vectorization gain; comparing against blocked measures what cache tiling
//! adds on top.

use crate::matrix::element::Element;

/// Untiled multiplication with a vectorizable inner loop.
///
/// `a[i,k]` is hoisted and the j-loop walks full rows of C and B as zipped
/// slice windows. Each lane accumulates into a distinct `c[i,j]` with no
/// bounds checks left in the loop body, so the backend is free to reorder the
/// lanes into SIMD reductions.
///
/// Same contract as the naive strategy: C pre-zeroed, accumulated into.
pub fn multiply<T: Element>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, p: usize) {
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for k in 0..p {
            let a_ik = a[i * p + k];
            let b_row = &b[k * n..(k + 1) * n];
            for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ik * b_kj;
            }
        }
    }
}
