//! # matrix-codec: fixed-layout binary persistence for numeric matrices
//!
//! Writes dense matrices, dense vectors and sparse matrices to a byte stream
//! and reads them back bit-for-bit.
//!
//! ## Format
//!
//! Every integer is a 4-byte signed little-endian value. Scalars are written
//! little-endian at the width of their Rust type (see [`Scalar`]). There is
//! no magic number, version field or type tag.
//!
//! ```text
//! dense matrix:  [rows][cols] rows*cols values, row-major
//! dense vector:  [size] size values
//! sparse matrix: [rows][cols][nnz] nnz × ([row][col][value])
//! ```
//!
//! Sparse triplets are written in the storage order of the source matrix,
//! column-major for [`SparseMatrixCSC`].
//!
//! ## Usage
//!
//! ```
//! use matrix_codec::{decode_dense_matrix, encode_dense_matrix, CodecConfig};
//! use ndarray::array;
//!
//! let matrix = array![[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! let bytes = encode_dense_matrix(&matrix).unwrap();
//! assert_eq!(bytes.len(), 56);
//!
//! let decoded: ndarray::Array2<f64> =
//!     decode_dense_matrix(&bytes, &CodecConfig::default()).unwrap();
//! assert_eq!(decoded, matrix);
//! ```
//!
//! Sparse matrices go through the same pair of calls:
//!
//! ```
//! use matrix_codec::{decode_sparse_matrix, encode_sparse_matrix};
//! use matrix_codec::{CodecConfig, DuplicatePolicy, SparseMatrixCSC};
//!
//! let matrix = SparseMatrixCSC::from_triplets(
//!     3, 3,
//!     vec![(0, 0, 5.0f64), (1, 2, 3.5)],
//!     DuplicatePolicy::Sum,
//! ).unwrap();
//!
//! let bytes = encode_sparse_matrix(&matrix).unwrap();
//! assert_eq!(bytes.len(), 44);
//!
//! let decoded = decode_sparse_matrix::<f64>(&bytes, &CodecConfig::default()).unwrap();
//! assert_eq!(decoded, matrix);
//! ```

pub mod codec;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod utils;

// Re-export primary components
pub use codec::{
    decode_dense_matrix, decode_dense_vector, decode_sparse_matrix, decode_sprs_matrix,
    encode_dense_matrix, encode_dense_vector, encode_sparse_matrix, encode_sprs_matrix,
};
pub use codec::{
    read_dense_matrix, read_dense_matrix_into, read_dense_vector, read_dense_vector_into,
    read_sparse_matrix, read_sparse_matrix_into, read_sprs_matrix,
};
pub use codec::{write_dense_matrix, write_dense_vector, write_sparse_matrix, write_sprs_matrix};
pub use codec::{
    dense_matrix_encoded_len, dense_vector_encoded_len, read_header, sparse_matrix_encoded_len,
    Header,
};
pub use error::{CodecError, ContainerKind, ErrorKind, Result};
pub use matrix::{CodecConfig, DuplicatePolicy, SparseMatrixCSC};
pub use scalar::Scalar;
pub use utils::{from_sprs, to_sprs_csc};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
