//! Vectorized-only benchmark binary: `simd [M N P]`.

use matbench::Kind;
use matbench::cli::run_binary;

fn main() {
    run_binary(Kind::Simd);
}
