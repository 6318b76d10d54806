//! Compare-all benchmark runner.
//!
//! Runs every strategy on identically seeded inputs and prints a summary
//! table with speedups relative to the naive baseline. Per-strategy output in
//! the plain `Timing:`/`Performance:` format comes from the individual
//! binaries (`naive`, `blocked`, `simd`, `gemm`, `offload`).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use matbench::Prec;
use matbench::cli::Cli;
use matbench::harness::Benchmark;
use matbench::strategy::Kind;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let dims = match cli.dims() {
        Ok(dims) => dims,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    };

    println!("=== Matrix Multiplication Strategies ===\n");
    println!(
        "C ({m}x{n}) = A ({m}x{p}) x B ({p}x{n})\n",
        m = dims.m,
        n = dims.n,
        p = dims.p
    );

    // Each prepare() reseeds from the fixed constant, so every strategy sees
    // bit-identical inputs.
    let mut results: Vec<(&'static str, f64, f64)> = Vec::new();
    for kind in Kind::ALL {
        let outcome = Benchmark::new(dims)
            .prepare::<Prec>()
            .and_then(|prep| prep.run(kind));
        match outcome {
            Ok(done) => results.push((kind.label(), done.elapsed().as_secs_f64(), done.gflops())),
            Err(err) => {
                eprintln!("{}: {err}", kind.label());
                std::process::exit(err.exit_code());
            }
        }
    }

    let baseline = results[0].1;
    println!(
        "{:<10} {:>12} {:>12} {:>10}",
        "strategy", "time (s)", "GFLOP/s", "speedup"
    );
    println!("{}", "-".repeat(48));
    for (label, secs, gflops) in &results {
        println!(
            "{:<10} {:>12.6} {:>12.3} {:>9.1}x",
            label,
            secs,
            gflops,
            baseline / secs
        );
    }
}
