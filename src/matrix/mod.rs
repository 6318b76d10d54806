//! Matrix storage, initialization, and inspection.
//!
//! Buffers are flat row-major allocations; element (i,j) of an m×n matrix
//! lives at offset `i*n + j`. The harness owns all three buffers of a run and
//! strategies only ever borrow them.

pub mod buffer;
pub mod element;
pub mod init;
pub mod print;
