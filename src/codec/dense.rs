//! Dense matrix and vector codecs
//!
//! Layout, all fields little-endian:
//!
//! ```text
//! matrix: [rows:i32][cols:i32] value(0,0) value(0,1) ... value(rows-1,cols-1)
//! vector: [size:i32] value(0) ... value(size-1)
//! ```
//!
//! Matrix values are always written in logical row-major order, whatever the
//! memory layout of the array being encoded.

use crate::codec::header::{self, Header};
use crate::codec::stream::{ensure_non_empty, output_buffer, to_index, write_index, StreamReader};
use crate::error::{ContainerKind, Result};
use crate::matrix::config::CodecConfig;
use crate::scalar::Scalar;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use std::io::{Read, Write};

/// Writes a dense matrix to `writer`
///
/// # Errors
///
/// [`CodecError::EmptyDimension`](crate::CodecError::EmptyDimension) if the matrix has no rows or columns,
/// [`CodecError::DimensionOverflow`](crate::CodecError::DimensionOverflow) if a dimension exceeds `i32::MAX`.
pub fn write_dense_matrix<T, S, W>(matrix: &ArrayBase<S, Ix2>, writer: &mut W) -> Result<()>
where
    T: Scalar,
    S: Data<Elem = T>,
    W: Write + ?Sized,
{
    let (rows, cols) = matrix.dim();
    let kind = ContainerKind::DenseMatrix;
    ensure_non_empty(kind, "rows", rows)?;
    ensure_non_empty(kind, "cols", cols)?;

    write_index(writer, "rows", rows)?;
    write_index(writer, "cols", cols)?;

    for &value in matrix.iter() {
        value.write_le(writer)?;
    }

    log::debug!("Encoded {} × {} dense matrix", rows, cols);
    Ok(())
}

/// Reads a dense matrix from `reader`
///
/// The header is validated before any value is read. Any short read is
/// reported as [`CodecError::Truncated`](crate::CodecError::Truncated).
pub fn read_dense_matrix<T, R>(reader: &mut R, config: &CodecConfig) -> Result<Array2<T>>
where
    T: Scalar,
    R: Read + ?Sized,
{
    let mut stream = StreamReader::new(reader);
    read_dense_matrix_from(&mut stream, config)
}

/// Reads a dense matrix from `reader`, replacing the contents of `dest`
///
/// `dest` is left untouched on error.
pub fn read_dense_matrix_into<T, R>(
    reader: &mut R,
    dest: &mut Array2<T>,
    config: &CodecConfig,
) -> Result<()>
where
    T: Scalar,
    R: Read + ?Sized,
{
    *dest = read_dense_matrix(reader, config)?;
    Ok(())
}

/// Encodes a dense matrix into a new byte buffer
pub fn encode_dense_matrix<T, S>(matrix: &ArrayBase<S, Ix2>) -> Result<Vec<u8>>
where
    T: Scalar,
    S: Data<Elem = T>,
{
    let (rows, cols) = matrix.dim();
    // Broadcast views can claim shapes far beyond what the header can hold
    to_index("rows", rows)?;
    to_index("cols", cols)?;
    let mut buf = output_buffer(header::dense_matrix_encoded_len::<T>(rows, cols));
    write_dense_matrix(matrix, &mut buf)?;
    Ok(buf)
}

/// Decodes a dense matrix from a byte slice
pub fn decode_dense_matrix<T: Scalar>(bytes: &[u8], config: &CodecConfig) -> Result<Array2<T>> {
    let mut stream = StreamReader::with_len(bytes, bytes.len());
    let matrix = read_dense_matrix_from(&mut stream, config)?;
    header::finish(&stream, ContainerKind::DenseMatrix, config)?;
    Ok(matrix)
}

/// Writes a dense vector to `writer`
pub fn write_dense_vector<T, S, W>(vector: &ArrayBase<S, Ix1>, writer: &mut W) -> Result<()>
where
    T: Scalar,
    S: Data<Elem = T>,
    W: Write + ?Sized,
{
    let size = vector.len();
    ensure_non_empty(ContainerKind::DenseVector, "size", size)?;

    write_index(writer, "size", size)?;
    for &value in vector.iter() {
        value.write_le(writer)?;
    }

    log::debug!("Encoded dense vector of length {}", size);
    Ok(())
}

/// Reads a dense vector from `reader`
pub fn read_dense_vector<T, R>(reader: &mut R, config: &CodecConfig) -> Result<Array1<T>>
where
    T: Scalar,
    R: Read + ?Sized,
{
    let mut stream = StreamReader::new(reader);
    read_dense_vector_from(&mut stream, config)
}

/// Reads a dense vector from `reader`, replacing the contents of `dest`
///
/// `dest` is left untouched on error.
pub fn read_dense_vector_into<T, R>(
    reader: &mut R,
    dest: &mut Array1<T>,
    config: &CodecConfig,
) -> Result<()>
where
    T: Scalar,
    R: Read + ?Sized,
{
    *dest = read_dense_vector(reader, config)?;
    Ok(())
}

/// Encodes a dense vector into a new byte buffer
pub fn encode_dense_vector<T, S>(vector: &ArrayBase<S, Ix1>) -> Result<Vec<u8>>
where
    T: Scalar,
    S: Data<Elem = T>,
{
    to_index("size", vector.len())?;
    let mut buf = output_buffer(header::dense_vector_encoded_len::<T>(vector.len()));
    write_dense_vector(vector, &mut buf)?;
    Ok(buf)
}

/// Decodes a dense vector from a byte slice
pub fn decode_dense_vector<T: Scalar>(bytes: &[u8], config: &CodecConfig) -> Result<Array1<T>> {
    let mut stream = StreamReader::with_len(bytes, bytes.len());
    let vector = read_dense_vector_from(&mut stream, config)?;
    header::finish(&stream, ContainerKind::DenseVector, config)?;
    Ok(vector)
}

fn read_dense_matrix_from<T: Scalar, R: Read>(
    stream: &mut StreamReader<R>,
    config: &CodecConfig,
) -> Result<Array2<T>> {
    let (rows, cols) = match header::read_header_from(stream, ContainerKind::DenseMatrix, config)? {
        Header::DenseMatrix { rows, cols } => (rows, cols),
        other => unreachable!("dense matrix header decoded as {:?}", other),
    };

    let values = read_values(stream, rows * cols)?;

    // Row-major Vec of exactly rows * cols elements
    Ok(Array2::from_shape_vec((rows, cols), values)
        .unwrap_or_else(|_| unreachable!("value count matches shape")))
}

fn read_dense_vector_from<T: Scalar, R: Read>(
    stream: &mut StreamReader<R>,
    config: &CodecConfig,
) -> Result<Array1<T>> {
    let size = match header::read_header_from(stream, ContainerKind::DenseVector, config)? {
        Header::DenseVector { size } => size,
        other => unreachable!("dense vector header decoded as {:?}", other),
    };

    Ok(Array1::from_vec(read_values(stream, size)?))
}

fn read_values<T: Scalar, R: Read>(stream: &mut StreamReader<R>, count: usize) -> Result<Vec<T>> {
    stream.ensure_available(count, T::WIDTH, "value")?;

    let mut values = Vec::with_capacity(stream.prealloc_hint(count));
    for _ in 0..count {
        values.push(stream.read_scalar("value")?);
    }
    Ok(values)
}
