//! Diffusion pass throughput on tournament-sized boards.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use formic_core::Cell;
use formic_field::{FixedSources, PotentialField, SourceTuning};
use formic_grid::{Grid, Observation, Visibility, VisionOffsets};

fn build(rows: u16, cols: u16) -> (Grid, FixedSources, PotentialField) {
    let mut grid = Grid::new(rows, cols).unwrap();
    // Scatter some terrain and sources so the pass is not all-zero work.
    for i in 0..(rows as u32 * cols as u32 / 20) {
        let cell = Cell::new(((i * 7) % rows as u32) as u16, ((i * 13) % cols as u32) as u16);
        let obs = if i % 3 == 0 {
            Observation::Water
        } else {
            Observation::Food
        };
        let _ = grid.apply(cell, obs);
    }
    let offsets = VisionOffsets::new(77);
    let vis = Visibility::new(rows, cols);
    let mut sources = FixedSources::new(rows, cols);
    sources.rebuild(&grid, &vis, &offsets, &SourceTuning::default());
    let mut field = PotentialField::new(rows, cols);
    field.reseed(&sources);
    (grid, sources, field)
}

fn bench_diffusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("diffuse_pass");
    for &(rows, cols) in &[(60u16, 90u16), (150, 150), (200, 200)] {
        let (grid, sources, mut field) = build(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(),
            |b, _| {
                b.iter(|| {
                    field.diffuse_pass(&grid);
                    field.reseed(&sources);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_diffusion);
criterion_main!(benches);
