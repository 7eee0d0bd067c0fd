use criterion::{criterion_group, criterion_main, Criterion};
use matvec::Matrix;

// Diagonally-dominant square matrix, guaranteed invertible.
fn dense(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i + 1) * (j + 1)) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
    })
    .unwrap()
}

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");

    for n in [10, 50] {
        g.bench_function(format!("{n}x{n}"), |b| {
            let a = dense(n);
            let m = dense(n);
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }

    g.finish();
}

fn determinant(c: &mut Criterion) {
    let mut g = c.benchmark_group("determinant");

    for n in [4, 10, 50] {
        g.bench_function(format!("{n}x{n}"), |b| {
            let a = dense(n);
            b.iter(|| std::hint::black_box(&a).determinant().unwrap())
        });
    }

    g.finish();
}

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");

    // Cofactor expansion runs a determinant per element; keep sizes small.
    for n in [3, 5, 7] {
        g.bench_function(format!("{n}x{n}"), |b| {
            let a = dense(n);
            b.iter(|| std::hint::black_box(&a).inverse().unwrap())
        });
    }

    g.finish();
}

criterion_group!(benches, matmul, determinant, inverse);
criterion_main!(benches);
