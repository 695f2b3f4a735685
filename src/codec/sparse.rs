//! Sparse matrix codec
//!
//! Layout, all fields little-endian:
//!
//! ```text
//! [rows:i32][cols:i32][nnz:i32]
//! nnz × [row:i32][col:i32][value]
//! ```
//!
//! Triplets are written in the storage order of the source matrix. On read
//! they are validated against the declared shape and handed to
//! [`SparseMatrixCSC::from_triplets`], so their order does not matter and
//! duplicates are merged per [`CodecConfig::duplicate_policy`].

use crate::codec::header::{self, Header};
use crate::codec::stream::{ensure_non_empty, output_buffer, write_index, StreamReader};
use crate::error::{CodecError, ContainerKind, Result};
use crate::matrix::config::CodecConfig;
use crate::matrix::SparseMatrixCSC;
use crate::scalar::{Scalar, INDEX_WIDTH};
use crate::utils::formats::to_sprs_csc;
use sprs::CsMat;
use std::io::{Read, Write};

/// Writes a CSC matrix to `writer`, triplets in column-major order
pub fn write_sparse_matrix<T, W>(matrix: &SparseMatrixCSC<T>, writer: &mut W) -> Result<()>
where
    T: Scalar,
    W: Write + ?Sized,
{
    write_sparse_header(writer, matrix.n_rows, matrix.n_cols, matrix.nnz())?;
    for (row, col, &value) in matrix.iter() {
        write_triplet(writer, row, col, value)?;
    }
    Ok(())
}

/// Reads a sparse matrix from `reader`
///
/// # Errors
///
/// - [`CodecError::NonPositiveDimension`] / [`CodecError::InvalidNnz`] for a bad header
/// - [`CodecError::TripletOutOfBounds`] for an entry outside the declared shape
/// - [`CodecError::Truncated`] if the stream ends before `nnz` triplets
pub fn read_sparse_matrix<T, R>(reader: &mut R, config: &CodecConfig) -> Result<SparseMatrixCSC<T>>
where
    T: Scalar,
    R: Read + ?Sized,
{
    let mut stream = StreamReader::new(reader);
    read_sparse_matrix_from(&mut stream, config)
}

/// Reads a sparse matrix from `reader`, replacing `dest`
///
/// `dest` is left untouched on error.
pub fn read_sparse_matrix_into<T, R>(
    reader: &mut R,
    dest: &mut SparseMatrixCSC<T>,
    config: &CodecConfig,
) -> Result<()>
where
    T: Scalar,
    R: Read + ?Sized,
{
    *dest = read_sparse_matrix(reader, config)?;
    Ok(())
}

/// Encodes a CSC matrix into a new byte buffer
pub fn encode_sparse_matrix<T: Scalar>(matrix: &SparseMatrixCSC<T>) -> Result<Vec<u8>> {
    let mut buf = output_buffer(header::sparse_matrix_encoded_len::<T>(matrix.nnz()));
    write_sparse_matrix(matrix, &mut buf)?;
    Ok(buf)
}

/// Decodes a sparse matrix from a byte slice
pub fn decode_sparse_matrix<T: Scalar>(
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<SparseMatrixCSC<T>> {
    let mut stream = StreamReader::with_len(bytes, bytes.len());
    let matrix = read_sparse_matrix_from(&mut stream, config)?;
    header::finish(&stream, ContainerKind::SparseMatrix, config)?;
    Ok(matrix)
}

/// Writes a sprs matrix to `writer`, triplets in the matrix's own storage order
///
/// A CSC matrix is written column by column, a CSR matrix row by row.
pub fn write_sprs_matrix<T, W>(matrix: &CsMat<T>, writer: &mut W) -> Result<()>
where
    T: Scalar,
    W: Write + ?Sized,
{
    write_sparse_header(writer, matrix.rows(), matrix.cols(), matrix.nnz())?;

    let is_csc = matrix.is_csc();
    for (outer, lane) in matrix.outer_iterator().enumerate() {
        for (inner, &value) in lane.iter() {
            let (row, col) = if is_csc { (inner, outer) } else { (outer, inner) };
            write_triplet(writer, row, col, value)?;
        }
    }
    Ok(())
}

/// Reads a sparse matrix from `reader` as a CSC sprs matrix
pub fn read_sprs_matrix<T, R>(reader: &mut R, config: &CodecConfig) -> Result<CsMat<T>>
where
    T: Scalar + Default,
    R: Read + ?Sized,
{
    let matrix = read_sparse_matrix(reader, config)?;
    Ok(to_sprs_csc(&matrix))
}

/// Encodes a sprs matrix into a new byte buffer
pub fn encode_sprs_matrix<T: Scalar>(matrix: &CsMat<T>) -> Result<Vec<u8>> {
    let mut buf = output_buffer(header::sparse_matrix_encoded_len::<T>(matrix.nnz()));
    write_sprs_matrix(matrix, &mut buf)?;
    Ok(buf)
}

/// Decodes a sparse matrix from a byte slice as a CSC sprs matrix
pub fn decode_sprs_matrix<T>(bytes: &[u8], config: &CodecConfig) -> Result<CsMat<T>>
where
    T: Scalar + Default,
{
    let matrix = decode_sparse_matrix(bytes, config)?;
    Ok(to_sprs_csc(&matrix))
}

fn write_sparse_header<W: Write + ?Sized>(
    writer: &mut W,
    rows: usize,
    cols: usize,
    nnz: usize,
) -> Result<()> {
    let kind = ContainerKind::SparseMatrix;
    ensure_non_empty(kind, "rows", rows)?;
    ensure_non_empty(kind, "cols", cols)?;

    write_index(writer, "rows", rows)?;
    write_index(writer, "cols", cols)?;
    write_index(writer, "nnz", nnz)?;

    log::debug!("Encoding {} × {} sparse matrix with {} entries", rows, cols, nnz);
    Ok(())
}

fn write_triplet<T: Scalar, W: Write + ?Sized>(
    writer: &mut W,
    row: usize,
    col: usize,
    value: T,
) -> Result<()> {
    write_index(writer, "row", row)?;
    write_index(writer, "col", col)?;
    value.write_le(writer)?;
    Ok(())
}

fn read_sparse_matrix_from<T: Scalar, R: Read>(
    stream: &mut StreamReader<R>,
    config: &CodecConfig,
) -> Result<SparseMatrixCSC<T>> {
    let (rows, cols, nnz) =
        match header::read_header_from(stream, ContainerKind::SparseMatrix, config)? {
            Header::SparseMatrix { rows, cols, nnz } => (rows, cols, nnz),
            other => unreachable!("sparse matrix header decoded as {:?}", other),
        };

    stream.ensure_available(nnz, 2 * INDEX_WIDTH + T::WIDTH, "triplet")?;

    let mut triplets = Vec::with_capacity(stream.prealloc_hint(nnz));
    for index in 0..nnz {
        let row = stream.read_i32("triplet row")?;
        let col = stream.read_i32("triplet col")?;
        let value = stream.read_scalar("triplet value")?;

        if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
            return Err(CodecError::TripletOutOfBounds {
                index,
                row: row.into(),
                col: col.into(),
                rows,
                cols,
            });
        }
        triplets.push((row as usize, col as usize, value));
    }

    SparseMatrixCSC::from_triplets(rows, cols, triplets, config.duplicate_policy)
}
