//! Library-backed benchmark binary: `gemm [M N P]`.

use matbench::Kind;
use matbench::cli::run_binary;

fn main() {
    run_binary(Kind::Gemm);
}
