use criterion::{criterion_group, criterion_main, Criterion};
use mazecast::game::{Player, PlayerConfig, Raycaster, WorldMap};
use mazecast::maze::{DepthFirstGenerator, RecursiveDivisionGenerator};

fn bench_depth_first_63(c: &mut Criterion) {
    let mut generator = DepthFirstGenerator::new(rand::random());

    c.bench_function("depth_first_63", move |b| {
        b.iter(|| generator.generate(63, 63))
    });
}

fn bench_recursive_division_63(c: &mut Criterion) {
    let mut generator = RecursiveDivisionGenerator::new(rand::random());

    c.bench_function("recursive_division_63", move |b| {
        b.iter(|| generator.generate(63, 63))
    });
}

fn bench_raycast_320_columns(c: &mut Criterion) {
    let mut generator = DepthFirstGenerator::new(rand::random());
    let map = WorldMap::new(generator.generate(63, 63).unwrap());
    let player = Player::with_map(&map, 1.5, 1.5, 0.0, PlayerConfig::default());
    let caster = Raycaster::default();

    c.bench_function("raycast_320_columns", |b| {
        b.iter(|| caster.cast_all_columns(&player, &map, 320))
    });
}

fn bench_grid_digest_63(c: &mut Criterion) {
    let mut generator = RecursiveDivisionGenerator::new(rand::random());
    let grid = generator.generate(63, 63).unwrap();

    c.bench_function("grid_digest_63", move |b| b.iter(|| grid.digest()));
}

criterion_group!(
    benches,
    bench_depth_first_63,
    bench_recursive_division_63,
    bench_raycast_320_columns,
    bench_grid_digest_63
);
criterion_main!(benches);
