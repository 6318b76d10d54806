use matbench::harness::{Benchmark, Dims, gigaflops};
use matbench::matrix::buffer::{Buffer, VECTOR_ALIGN};
use matbench::matrix::element::Element;
use matbench::matrix::init::{random_fill, seeded_rng, zero_fill};
use matbench::strategy::{Kind, blocked, naive, offload};
use matbench::BenchError;

fn assert_matrices_close<T: Element>(expected: &[T], actual: &[T], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        let e = expected[i].to_f64();
        let a = actual[i].to_f64();
        let tol = T::TOLERANCE * e.abs().max(1.0);
        assert!(
            (e - a).abs() <= tol,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            e,
            a
        );
    }
}

/// Seeded A and B exactly as the harness produces them: one fresh generator,
/// A filled first, then B.
fn seeded_inputs<T: Element>(dims: Dims) -> (Vec<T>, Vec<T>) {
    let mut rng = seeded_rng();
    let mut a = vec![T::ZERO; dims.a_len()];
    let mut b = vec![T::ZERO; dims.b_len()];
    random_fill(&mut a, &mut rng);
    random_fill(&mut b, &mut rng);
    (a, b)
}

fn oracle<T: Element>(a: &[T], b: &[T], dims: Dims) -> Vec<T> {
    let mut c = vec![T::ZERO; dims.c_len()];
    naive::multiply(a, b, &mut c, dims.m, dims.n, dims.p);
    c
}

// ============================================================
// Oracle agreement
// ============================================================

#[test]
fn test_all_strategies_match_oracle() {
    let cases = [
        (4, 4, 4),
        (16, 16, 16),
        (32, 8, 20),
        (13, 17, 19),
        (100, 50, 75),
        (1, 1, 1),
        (1, 64, 3),
    ];

    for (m, n, p) in cases {
        let dims = Dims::new(m, n, p).unwrap();
        let (a, b) = seeded_inputs::<f64>(dims);
        let expected = oracle(&a, &b, dims);

        for kind in [Kind::Blocked, Kind::Simd, Kind::Gemm, Kind::Offload] {
            let mut c = vec![0.0f64; dims.c_len()];
            zero_fill(&mut c);
            kind.run(&a, &b, &mut c, m, n, p).unwrap();
            assert_matrices_close(
                &expected,
                &c,
                &format!("{}_{}x{}x{}", kind.label(), m, n, p),
            );
        }
    }
}

#[test]
fn test_single_precision_matches_oracle() {
    let dims = Dims::new(17, 13, 29).unwrap();
    let (a, b) = seeded_inputs::<f32>(dims);
    let expected = oracle(&a, &b, dims);

    for kind in [Kind::Blocked, Kind::Simd, Kind::Gemm, Kind::Offload] {
        let mut c = vec![0.0f32; dims.c_len()];
        kind.run(&a, &b, &mut c, dims.m, dims.n, dims.p).unwrap();
        assert_matrices_close(&expected, &c, kind.label());
    }
}

// ============================================================
// Tile boundaries
// ============================================================

#[test]
fn test_blocked_tile_remainders() {
    // TILE is 16; these sizes leave remainder tiles on every axis. The
    // clamped bounds must stay inside the matrices and still produce the
    // oracle result.
    assert_eq!(blocked::TILE, 16);
    for size in [5, 17, 31] {
        let dims = Dims::new(size, size, size).unwrap();
        let (a, b) = seeded_inputs::<f64>(dims);
        let expected = oracle(&a, &b, dims);

        let mut c = vec![0.0f64; dims.c_len()];
        blocked::multiply(&a, &b, &mut c, size, size, size);
        assert_matrices_close(&expected, &c, &format!("blocked_size_{}", size));
    }
}

#[test]
fn test_blocked_mixed_remainders() {
    // Remainders on some axes only.
    for (m, n, p) in [(16, 5, 32), (5, 16, 17), (33, 31, 16)] {
        let dims = Dims::new(m, n, p).unwrap();
        let (a, b) = seeded_inputs::<f64>(dims);
        let expected = oracle(&a, &b, dims);

        let mut c = vec![0.0f64; dims.c_len()];
        blocked::multiply(&a, &b, &mut c, m, n, p);
        assert_matrices_close(&expected, &c, &format!("blocked_{}x{}x{}", m, n, p));
    }
}

// ============================================================
// Initializer determinism
// ============================================================

#[test]
fn test_seeded_inputs_are_bit_identical_across_runs() {
    let dims = Dims::new(24, 24, 24).unwrap();
    let (a1, b1) = seeded_inputs::<f64>(dims);
    let (a2, b2) = seeded_inputs::<f64>(dims);
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

#[test]
fn test_harness_inputs_match_manual_seeding() {
    let dims = Dims::new(6, 7, 8).unwrap();
    let (a, b) = seeded_inputs::<f64>(dims);

    let done = Benchmark::new(dims)
        .prepare::<f64>()
        .unwrap()
        .run(Kind::Naive)
        .unwrap();
    assert_eq!(done.a(), &a[..]);
    assert_eq!(done.b(), &b[..]);
}

#[test]
fn test_values_are_in_unit_interval() {
    let dims = Dims::new(32, 32, 32).unwrap();
    let (a, b) = seeded_inputs::<f64>(dims);
    for v in a.iter().chain(b.iter()) {
        assert!((0.0..1.0).contains(v), "value {} outside [0,1)", v);
    }
}

// ============================================================
// Offload decomposition
// ============================================================

#[test]
fn test_offload_2x2_known_product() {
    let a = vec![1.0f64, 2.0, 3.0, 4.0];
    let b = vec![5.0f64, 6.0, 7.0, 8.0];
    let mut c = vec![0.0f64; 4];

    offload::multiply(&a, &b, &mut c, 2, 2, 2).unwrap();
    assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
}

// ============================================================
// Degenerate dimensions
// ============================================================

#[test]
fn test_zero_dims_produce_empty_or_zero_results() {
    for (m, n, p) in [(0, 4, 4), (4, 0, 4), (4, 4, 0), (0, 0, 0)] {
        let dims = Dims::new(m, n, p).unwrap();
        let (a, b) = seeded_inputs::<f64>(dims);

        for kind in Kind::ALL {
            let mut c = vec![0.0f64; dims.c_len()];
            kind.run(&a, &b, &mut c, m, n, p).unwrap();
            // p == 0 leaves an m×n result of empty sums: all zeros.
            assert!(c.iter().all(|v| *v == 0.0), "{}: nonzero output", kind.label());
        }
    }
}

#[test]
fn test_zero_dims_through_harness() {
    let dims = Dims::new(0, 4, 4).unwrap();
    let done = Benchmark::new(dims)
        .prepare::<f64>()
        .unwrap()
        .run(Kind::Blocked)
        .unwrap();
    assert!(done.c().is_empty());
}

// ============================================================
// Throughput formula
// ============================================================

#[test]
fn test_gigaflops_at_reference_point() {
    let dims = Dims::new(4, 4, 4).unwrap();
    assert_eq!(gigaflops(dims, 1.0), 1.12e-7);
}

// ============================================================
// Buffers
// ============================================================

#[test]
fn test_buffer_is_aligned_and_zeroed() {
    let buf = Buffer::<f64>::allocate(33, 7, VECTOR_ALIGN).unwrap();
    assert_eq!(buf.len(), 33 * 7);
    assert_eq!(buf.as_ptr() as usize % VECTOR_ALIGN, 0);
    assert!(buf.iter().all(|v| *v == 0.0));
}

#[test]
fn test_zero_element_buffer_is_not_an_error() {
    let buf = Buffer::<f32>::allocate(0, 128, VECTOR_ALIGN).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn test_unhonorable_alignment_is_rejected() {
    let err = Buffer::<f64>::allocate(4, 4, 3).unwrap_err();
    assert!(matches!(err, BenchError::Alignment { .. }));
    let err = Buffer::<f64>::allocate(4, 4, 4).unwrap_err();
    assert!(matches!(err, BenchError::Alignment { .. }));
}

// ============================================================
// Harness end to end
// ============================================================

#[test]
fn test_run_produces_oracle_result_and_measurements() {
    let dims = Dims::new(20, 20, 20).unwrap();
    let (a, b) = seeded_inputs::<f64>(dims);
    let expected = oracle(&a, &b, dims);

    let done = Benchmark::new(dims)
        .prepare::<f64>()
        .unwrap()
        .run(Kind::Offload)
        .unwrap();
    assert_matrices_close(&expected, done.c(), "harness_offload");
    assert!(done.elapsed().as_secs_f64() >= 0.0);
    assert!(done.gflops().is_finite());
    assert!(done.gflops() >= 0.0);
}
