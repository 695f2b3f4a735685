//! Benchmarks for encoding and decoding throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matrix_codec::{
    decode_dense_matrix, decode_sparse_matrix, encode_dense_matrix, encode_sparse_matrix,
    CodecConfig, DuplicatePolicy, SparseMatrixCSC,
};
use ndarray::Array2;

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_matrix");
    let config = CodecConfig::default();

    for &n in &[64usize, 256, 1024] {
        let matrix = Array2::from_shape_fn((n, n), |(i, j)| (i * n + j) as f64);
        let bytes = encode_dense_matrix(&matrix).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", n), &matrix, |b, m| {
            b.iter(|| encode_dense_matrix(black_box(m)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", n), &bytes, |b, bytes| {
            b.iter(|| decode_dense_matrix::<f64>(black_box(bytes), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_matrix");
    let config = CodecConfig::default();

    for &n in &[1_000usize, 10_000, 100_000] {
        let matrix = create_banded_matrix(n, 5);
        let bytes = encode_sparse_matrix(&matrix).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", n), &matrix, |b, m| {
            b.iter(|| encode_sparse_matrix(black_box(m)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", n), &bytes, |b, bytes| {
            b.iter(|| decode_sparse_matrix::<f64>(black_box(bytes), &config).unwrap())
        });
    }

    group.finish();
}

/// Creates an n × n banded matrix with `half_width` entries on each side of the diagonal
fn create_banded_matrix(n: usize, half_width: usize) -> SparseMatrixCSC<f64> {
    let mut triplets = Vec::new();
    for i in 0..n {
        let start = i.saturating_sub(half_width);
        let end = (i + half_width + 1).min(n);
        for j in start..end {
            triplets.push((i, j, 1.0 / (1 + i.abs_diff(j)) as f64));
        }
    }
    SparseMatrixCSC::from_triplets(n, n, triplets, DuplicatePolicy::Sum).unwrap()
}

criterion_group!(benches, bench_dense, bench_sparse);
criterion_main!(benches);
