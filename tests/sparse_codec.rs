//! Integration tests for sparse matrix encoding

use matrix_codec::{
    decode_sparse_matrix, decode_sprs_matrix, encode_sparse_matrix, encode_sprs_matrix,
    from_sprs, read_sparse_matrix, read_sparse_matrix_into, sparse_matrix_encoded_len,
    CodecConfig, DuplicatePolicy, SparseMatrixCSC,
};
use sprs::{CsMat, TriMat};

/// Hand-built sparse stream, bypassing the encoder
fn raw_stream(rows: i32, cols: i32, triplets: &[(i32, i32, f64)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&rows.to_le_bytes());
    bytes.extend_from_slice(&cols.to_le_bytes());
    bytes.extend_from_slice(&(triplets.len() as i32).to_le_bytes());
    for &(row, col, value) in triplets {
        bytes.extend_from_slice(&row.to_le_bytes());
        bytes.extend_from_slice(&col.to_le_bytes());
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Creates a tridiagonal matrix
fn create_tridiagonal(n: usize) -> SparseMatrixCSC<f64> {
    let mut triplets = Vec::new();
    for i in 0..n {
        if i > 0 {
            triplets.push((i, i - 1, 1.0));
        }
        triplets.push((i, i, 2.0));
        if i < n - 1 {
            triplets.push((i, i + 1, 1.0));
        }
    }
    SparseMatrixCSC::from_triplets(n, n, triplets, DuplicatePolicy::Sum).unwrap()
}

#[test]
fn test_three_by_three_two_entries() {
    let matrix = SparseMatrixCSC::from_triplets(
        3, 3,
        vec![(0, 0, 5.0f64), (1, 2, 3.5)],
        DuplicatePolicy::Sum,
    )
    .unwrap();

    let bytes = encode_sparse_matrix(&matrix).unwrap();
    assert_eq!(bytes.len(), 12 + 2 * 16);

    let decoded: SparseMatrixCSC<f64> =
        decode_sparse_matrix(&bytes, &CodecConfig::default()).unwrap();
    assert_eq!((decoded.n_rows, decoded.n_cols, decoded.nnz()), (3, 3, 2));

    let dense = decoded.to_dense();
    for i in 0..3 {
        for j in 0..3 {
            let expected = match (i, j) {
                (0, 0) => 5.0,
                (1, 2) => 3.5,
                _ => 0.0,
            };
            assert_eq!(dense[[i, j]], expected, "mismatch at ({}, {})", i, j);
        }
    }
}

#[test]
fn test_tridiagonal_roundtrip() {
    let matrix = create_tridiagonal(50);
    let bytes = encode_sparse_matrix(&matrix).unwrap();
    assert_eq!(bytes.len(), sparse_matrix_encoded_len::<f64>(matrix.nnz()).unwrap());

    let decoded = decode_sparse_matrix::<f64>(&bytes, &CodecConfig::default()).unwrap();
    assert_eq!(decoded, matrix);
}

#[test]
fn test_duplicates_sum_by_default() {
    let bytes = raw_stream(2, 2, &[(1, 1, 1.5), (0, 0, 1.0), (1, 1, 2.0)]);
    let matrix = decode_sparse_matrix::<f64>(&bytes, &CodecConfig::default()).unwrap();

    assert_eq!(matrix.nnz(), 2);
    assert_eq!(matrix.get(1, 1), Some(&3.5));
    assert_eq!(matrix.get(0, 0), Some(&1.0));
}

#[test]
fn test_duplicates_last_wins() {
    let bytes = raw_stream(2, 2, &[(1, 1, 1.5), (0, 0, 1.0), (1, 1, 2.0)]);
    let config = CodecConfig::default().with_duplicate_policy(DuplicatePolicy::LastWins);
    let matrix = decode_sparse_matrix::<f64>(&bytes, &config).unwrap();

    assert_eq!(matrix.nnz(), 2);
    assert_eq!(matrix.get(1, 1), Some(&2.0));
}

#[test]
fn test_more_triplets_than_cells() {
    let bytes = raw_stream(1, 1, &[(0, 0, 1.0), (0, 0, 2.0)]);

    let summed = decode_sparse_matrix::<f64>(&bytes, &CodecConfig::default()).unwrap();
    assert_eq!(summed.nnz(), 1);
    assert_eq!(summed.get(0, 0), Some(&3.0));

    let config = CodecConfig::default().with_duplicate_policy(DuplicatePolicy::LastWins);
    let last = decode_sparse_matrix::<f64>(&bytes, &config).unwrap();
    assert_eq!(last.nnz(), 1);
    assert_eq!(last.get(0, 0), Some(&2.0));
}

#[test]
fn test_unordered_triplets_accepted() {
    let bytes = raw_stream(3, 2, &[(2, 1, 6.0), (0, 0, 1.0), (1, 1, 4.0), (2, 0, 5.0)]);
    let matrix = decode_sparse_matrix::<f64>(&bytes, &CodecConfig::default()).unwrap();

    let triplets: Vec<_> = matrix.iter().map(|(i, j, &v)| (i, j, v)).collect();
    assert_eq!(
        triplets,
        vec![(0, 0, 1.0), (2, 0, 5.0), (1, 1, 4.0), (2, 1, 6.0)]
    );
}

#[test]
fn test_explicit_zero_entries_kept() {
    let matrix = SparseMatrixCSC::from_triplets(
        2, 2,
        vec![(0, 1, 0.0f64), (1, 0, 7.0)],
        DuplicatePolicy::Sum,
    )
    .unwrap();

    let bytes = encode_sparse_matrix(&matrix).unwrap();
    assert_eq!(bytes.len(), sparse_matrix_encoded_len::<f64>(2).unwrap());

    let decoded = decode_sparse_matrix::<f64>(&bytes, &CodecConfig::default()).unwrap();
    assert_eq!(decoded.nnz(), 2);
    assert_eq!(decoded.get(0, 1), Some(&0.0));
}

#[test]
fn test_sprs_roundtrip() {
    let mut trip = TriMat::new((5, 4));
    trip.add_triplet(0, 0, 1.0f32);
    trip.add_triplet(4, 3, 2.0);
    trip.add_triplet(2, 1, -3.0);
    let csc: CsMat<f32> = trip.to_csc();

    let bytes = encode_sprs_matrix(&csc).unwrap();
    assert_eq!(bytes.len(), sparse_matrix_encoded_len::<f32>(3).unwrap());

    let decoded: CsMat<f32> = decode_sprs_matrix(&bytes, &CodecConfig::default()).unwrap();
    assert_eq!(decoded, csc);
}

#[test]
fn test_sprs_and_native_encodings_agree() {
    let matrix = create_tridiagonal(6);
    let native = encode_sparse_matrix(&matrix).unwrap();

    let as_sprs = matrix_codec::to_sprs_csc(&matrix);
    assert_eq!(encode_sprs_matrix(&as_sprs).unwrap(), native);
    assert_eq!(from_sprs(as_sprs), matrix);
}

#[test]
fn test_read_into_reuses_destination() {
    let bytes = encode_sparse_matrix(&create_tridiagonal(4)).unwrap();
    let mut dest = create_tridiagonal(10);

    read_sparse_matrix_into(&mut bytes.as_slice(), &mut dest, &CodecConfig::default()).unwrap();
    assert_eq!(dest, create_tridiagonal(4));
}

#[test]
fn test_stream_reader_leaves_following_bytes() {
    let mut bytes = encode_sparse_matrix(&create_tridiagonal(3)).unwrap();
    bytes.extend_from_slice(b"tail");

    let mut slice = bytes.as_slice();
    let matrix = read_sparse_matrix::<f64, _>(&mut slice, &CodecConfig::default()).unwrap();
    assert_eq!(matrix, create_tridiagonal(3));
    assert_eq!(slice, b"tail");
}
