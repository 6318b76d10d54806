//! Command-line surface shared by the benchmark binaries.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::Prec;
use crate::error::BenchError;
use crate::harness::{Dims, drive};
use crate::strategy::Kind;

/// `<binary> [M N P]`: dimensions of C (M×N) = A (M×P) * B (P×N).
///
/// All three dimensions or none; none means 4 4 4. Non-numeric or partial
/// argument lists are rejected up front rather than coerced to zero.
#[derive(Debug, Parser)]
pub struct Cli {
    /// Matrix dimensions.
    #[arg(value_names = ["M", "N", "P"], num_args = 3)]
    dims: Vec<usize>,
}

impl Cli {
    /// Dimensions from the command line, or the default when none were given.
    pub fn dims(&self) -> Result<Dims, BenchError> {
        match *self.dims.as_slice() {
            [] => Ok(Dims::default()),
            [m, n, p] => Dims::new(m, n, p),
            _ => unreachable!("clap enforces exactly three values"),
        }
    }
}

/// Entry point shared by the per-strategy binaries: install the subscriber,
/// parse dimensions, run one benchmark, map failures to exit codes.
pub fn run_binary(strategy: Kind) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.dims().and_then(|dims| drive::<Prec>(strategy, dims)) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_4x4x4() {
        let cli = Cli::try_parse_from(["bench"]).unwrap();
        assert_eq!(cli.dims().unwrap(), Dims::default());
    }

    #[test]
    fn three_args_parse_in_order() {
        let cli = Cli::try_parse_from(["bench", "8", "5", "13"]).unwrap();
        assert_eq!(cli.dims().unwrap(), Dims { m: 8, n: 5, p: 13 });
    }

    #[test]
    fn explicit_4_4_4_equals_default() {
        let cli = Cli::try_parse_from(["bench", "4", "4", "4"]).unwrap();
        assert_eq!(cli.dims().unwrap(), Dims::default());
    }

    #[test]
    fn partial_args_are_rejected() {
        assert!(Cli::try_parse_from(["bench", "8", "5"]).is_err());
    }

    #[test]
    fn non_numeric_args_are_rejected() {
        assert!(Cli::try_parse_from(["bench", "8", "x", "13"]).is_err());
        assert!(Cli::try_parse_from(["bench", "8", "-1", "13"]).is_err());
    }
}
