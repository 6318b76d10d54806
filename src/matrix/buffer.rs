//! Alignment-constrained matrix storage.

use std::alloc::{self, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::BenchError;
use crate::matrix::element::Element;

/// Alignment (bytes) required by the widest vector loads the strategies may
/// compile down to. One 64-byte line also matches the cache-line size the
/// blocked strategy tiles for.
pub const VECTOR_ALIGN: usize = 64;

/// A flat, row-major rows×cols allocation of a single element type.
///
/// Elements come back zeroed from the allocator, which for the float element
/// types is the additive identity, so a fresh buffer is already a valid C.
/// Deallocation is paired 1:1 with allocation in `Drop`; a zero-element
/// request never touches the allocator and yields an empty buffer, not an
/// error.
#[derive(Debug)]
pub struct Buffer<T: Element> {
    ptr: NonNull<T>,
    len: usize,
    layout: Option<Layout>,
}

impl<T: Element> Buffer<T> {
    /// Allocate a zeroed rows×cols buffer aligned to `align` bytes.
    pub fn allocate(rows: usize, cols: usize, align: usize) -> Result<Self, BenchError> {
        if !align.is_power_of_two() {
            return Err(BenchError::Alignment {
                align,
                reason: "alignment must be a power of two",
            });
        }
        if align < align_of::<T>() {
            return Err(BenchError::Alignment {
                align,
                reason: "alignment is below the element's natural alignment",
            });
        }

        let len = rows.checked_mul(cols).ok_or_else(|| {
            BenchError::Argument(format!("{rows}x{cols} element count overflows usize"))
        })?;
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
                layout: None,
            });
        }

        let bytes = len.saturating_mul(size_of::<T>());
        let layout = Layout::from_size_align(bytes, align).map_err(|_| BenchError::Allocation {
            rows,
            cols,
            bytes,
        })?;
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(BenchError::Allocation {
            rows,
            cols,
            bytes,
        })?;

        Ok(Self {
            ptr,
            len,
            layout: Some(layout),
        })
    }
}

impl<T: Element> Deref for Buffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: ptr is valid for len initialized elements (zeroed at
        // allocation); for len == 0 it is a dangling but aligned pointer,
        // which is what an empty slice requires.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as above, plus &mut self guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Drop for Buffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout {
            // SAFETY: allocated with exactly this layout, freed only here.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
