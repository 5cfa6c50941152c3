use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use conway_core::{Grid, randomize_with, step};

fn bench_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let grid: Grid = randomize_with(&mut rng, 0.75);

    c.bench_function("step_default_grid", |b| b.iter(|| step(black_box(&grid))));

    let large: Grid<200, 200> = randomize_with(&mut rng, 0.75);
    c.bench_function("step_200x200", |b| b.iter(|| step(black_box(&large))));
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
