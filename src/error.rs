//! Error taxonomy for benchmark runs.

use thiserror::Error;

/// Everything that can abort a benchmark run.
///
/// Backend failures are kept distinct from allocation failures so an operator
/// can tell "no compute resources" apart from "out of memory".
#[derive(Debug, Error)]
pub enum BenchError {
    /// The allocator could not satisfy a buffer request.
    #[error("cannot allocate {bytes} bytes for a {rows}x{cols} matrix")]
    Allocation {
        rows: usize,
        cols: usize,
        bytes: usize,
    },

    /// The requested buffer alignment cannot be honored.
    #[error("cannot honor {align}-byte alignment: {reason}")]
    Alignment { align: usize, reason: &'static str },

    /// Dimension arguments that survive parsing but are still unusable.
    #[error("invalid dimensions: {0}")]
    Argument(String),

    /// A delegated strategy (library or offload) could not run.
    #[error("compute backend unavailable: {0}")]
    Backend(String),
}

impl BenchError {
    /// Process exit code for this failure. Argument problems share code 2
    /// with clap's usage errors; the rest get their own codes so failure
    /// modes are distinguishable from the shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchError::Argument(_) => 2,
            BenchError::Allocation { .. } => 3,
            BenchError::Alignment { .. } => 4,
            BenchError::Backend(_) => 5,
        }
    }
}
