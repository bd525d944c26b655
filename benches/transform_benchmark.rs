use criterion::{criterion_group, criterion_main, Criterion};
use matrix_shapes::matrix_ops::{apply, Matrix, Operation};
use matrix_shapes::shape_transform::{
    enlarge, reflect, rotate, translate, Direction, ShapeCatalog, ShapeId, TransformKind,
};
use nalgebra::Vector2;
use std::hint::black_box;

fn bench_shape_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_transforms");

    let shape = ShapeCatalog::shape(TransformKind::Rotation, ShapeId::One);

    group.bench_function("translate", |b| {
        b.iter(|| translate(black_box(&shape), black_box(Vector2::new(-2.0, 3.0))));
    });

    group.bench_function("rotate", |b| {
        b.iter(|| rotate(black_box(&shape), black_box(37.0), Direction::Clockwise));
    });

    group.bench_function("reflect", |b| {
        b.iter(|| reflect(black_box(&shape)));
    });

    group.bench_function("enlarge", |b| {
        b.iter(|| enlarge(black_box(&shape), black_box(2.0), black_box(Vector2::new(1.0, 0.0))));
    });

    group.finish();
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_multiply");

    for n in [4usize, 16, 64] {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| (i * n + j) as f64).collect())
            .collect();
        let a = Matrix::from_rows(&rows).unwrap();
        let b = a.clone();

        group.bench_function(format!("{}x{}", n, n), |bench| {
            bench.iter(|| apply(Operation::Multiply, black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shape_transforms, bench_matrix_multiply);
criterion_main!(benches);
