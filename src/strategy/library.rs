//! Library-backed multiplication.
//!
//! The external routine is a black box; the only contract owned here is the
//! call shape. Getting a leading dimension wrong silently corrupts the
//! result, so the mapping is pinned in one place and exercised by the oracle
//! tests.

use crate::matrix::element::Element;

/// Delegate C = A * B to the external dense-multiply routine.
///
/// Row-major, no transposes, alpha = 1, beta = 0. The leading dimensions are
/// the row strides of the three operands: p for A, n for B, n for C.
/// beta = 0 overwrites C, which coincides with the accumulate-into-zero
/// contract the other strategies follow as long as C arrives pre-zeroed.
///
/// # Panics
///
/// Panics if the slice lengths don't match the dimensions; the lengths are
/// what make the raw-pointer call below sound.
pub fn multiply<T: Element>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, p: usize) {
    assert_eq!(a.len(), m * p, "A: expected {}x{}={} elements", m, p, m * p);
    assert_eq!(b.len(), p * n, "B: expected {}x{}={} elements", p, n, p * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    // SAFETY: the asserts above guarantee each pointer is valid for exactly
    // the extent the routine will touch.
    unsafe { T::gemm(m, p, n, a.as_ptr(), b.as_ptr(), c.as_mut_ptr()) }
}
