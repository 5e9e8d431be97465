//! # Matrix Compute Benchmarks
//!
//! | Target | What is measured |
//! |--------|------------------|
//! | `kernel` | One output row, single thread |
//! | `cpu-engine` | Full row-parallel multiply via `spawn_blocking` + rayon |
//! | `reference` | Naive triple loop, for comparison |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lw_02_matrix_compute::backends::cpu::CpuEngine;
use lw_02_matrix_compute::kernel::multiply_row;
use lw_02_matrix_compute::MatrixEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::Matrix;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const SIZES: [usize; 3] = [64, 128, 256];

fn inputs(size: usize) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(7);
    (
        Matrix::random(size, 100, &mut rng),
        Matrix::random(size, 100, &mut rng),
    )
}

fn bench_kernel_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    let token = CancellationToken::new();

    for size in SIZES {
        let (a, b) = inputs(size);
        let mut out = vec![0i64; size];

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("multiply_row", size), &size, |bench, _| {
            bench.iter(|| black_box(multiply_row(&a, &b, 0, &mut out, &token)))
        });
    }

    group.finish();
}

fn bench_cpu_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu-engine");
    group.measurement_time(Duration::from_secs(10));

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => panic!("failed to build tokio runtime: {e}"),
    };
    let engine = CpuEngine::new();

    for size in SIZES {
        let (a, b) = inputs(size);
        let (a, b) = (Arc::new(a), Arc::new(b));

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |bench, _| {
            bench.iter(|| {
                runtime.block_on(engine.multiply(
                    Arc::clone(&a),
                    Arc::clone(&b),
                    CancellationToken::new(),
                ))
            })
        });

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bench, _| {
            bench.iter(|| black_box(a.reference_multiply(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernel_row, bench_cpu_engine);
criterion_main!(benches);
