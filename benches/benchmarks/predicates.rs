use criterion::{criterion_group, BatchSize, Criterion};
use planar::{
    batch::{self, Workers},
    Point, Polygon,
};
use rand::Rng;

type Sample = [[f64; 2]; 1000];

fn random_polygon() -> Polygon<f64> {
    let mut rng = rand::rng();

    Polygon::from(rng.random::<Sample>().to_vec())
}

fn random_points() -> Vec<Point<f64>> {
    let mut rng = rand::rng();

    rng.random::<Sample>()
        .into_iter()
        .map(Point::from)
        .collect()
}

pub fn large_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large polygons");

    group.bench_function("contains", |b| {
        b.iter_batched(
            || (random_polygon(), random_points()),
            |(polygon, points)| {
                points
                    .iter()
                    .filter(|point| polygon.contains(point).unwrap_or_default())
                    .count()
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("batch contains", |b| {
        b.iter_batched(
            || (random_polygon(), random_points()),
            |(polygon, points)| batch::contains_all(&polygon, &points, Workers::Auto),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("overlaps", |b| {
        b.iter_batched(
            || [random_polygon(), random_polygon()],
            |[polygon, rhs]| polygon.overlaps(&rhs),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_polygons);
