//! Benchmark: exhaustive search against the dynamic program on small grids.
//!
//! Run with:
//! `cargo bench --bench solvers`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cranes_dp::{Algorithm, GridBuilder};

fn bench_small_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("crane_unloading_small");
    for n in 2usize..=8 {
        let grid = GridBuilder::new(n, n).with_seed(n as u64).build();
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &grid, |b, grid| {
                b.iter(|| {
                    let path = algorithm.solve(black_box(grid));
                    black_box(path.total_cranes());
                });
            });
        }
    }
    group.finish();
}

fn bench_dyn_prog_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("crane_unloading_dyn_prog");
    for &n in &[16usize, 64, 256] {
        let grid = GridBuilder::new(n, n).with_seed(7).build();
        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| black_box(Algorithm::DynProg.solve(black_box(grid)).total_cranes()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_small_grids, bench_dyn_prog_scaling);
criterion_main!(benches);
