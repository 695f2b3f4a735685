//! Container headers and encoded-size arithmetic

use crate::codec::stream::StreamReader;
use crate::error::{CodecError, ContainerKind, Result};
use crate::matrix::config::CodecConfig;
use crate::scalar::{Scalar, INDEX_WIDTH};
use std::io::Read;

/// The validated leading fields of an encoded container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    DenseMatrix { rows: usize, cols: usize },
    DenseVector { size: usize },
    SparseMatrix { rows: usize, cols: usize, nnz: usize },
}

impl Header {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Header::DenseMatrix { .. } => ContainerKind::DenseMatrix,
            Header::DenseVector { .. } => ContainerKind::DenseVector,
            Header::SparseMatrix { .. } => ContainerKind::SparseMatrix,
        }
    }

    /// Number of payload records that follow the header, `None` if it overflows `usize`
    pub fn element_count(&self) -> Option<usize> {
        match *self {
            Header::DenseMatrix { rows, cols } => rows.checked_mul(cols),
            Header::DenseVector { size } => Some(size),
            Header::SparseMatrix { nnz, .. } => Some(nnz),
        }
    }

    /// Total encoded size in bytes for scalar type `T`, header included
    pub fn encoded_len<T: Scalar>(&self) -> Option<usize> {
        match *self {
            Header::DenseMatrix { rows, cols } => dense_matrix_encoded_len::<T>(rows, cols),
            Header::DenseVector { size } => dense_vector_encoded_len::<T>(size),
            Header::SparseMatrix { nnz, .. } => sparse_matrix_encoded_len::<T>(nnz),
        }
    }
}

/// Encoded size of a `rows × cols` dense matrix, `None` if it overflows `usize`
pub fn dense_matrix_encoded_len<T: Scalar>(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)?
        .checked_mul(T::WIDTH)?
        .checked_add(2 * INDEX_WIDTH)
}

/// Encoded size of a dense vector of length `size`, `None` if it overflows `usize`
pub fn dense_vector_encoded_len<T: Scalar>(size: usize) -> Option<usize> {
    size.checked_mul(T::WIDTH)?.checked_add(INDEX_WIDTH)
}

/// Encoded size of a sparse matrix with `nnz` stored entries, `None` if it overflows `usize`
pub fn sparse_matrix_encoded_len<T: Scalar>(nnz: usize) -> Option<usize> {
    nnz.checked_mul(2 * INDEX_WIDTH + T::WIDTH)?
        .checked_add(3 * INDEX_WIDTH)
}

/// Reads and validates the header of a `kind` container without touching its payload
///
/// Element-count limits from `CodecConfig::default()` apply.
pub fn read_header<R: Read>(reader: &mut R, kind: ContainerKind) -> Result<Header> {
    let mut stream = StreamReader::new(reader);
    read_header_from(&mut stream, kind, &CodecConfig::default())
}

pub(crate) fn read_header_from<R: Read>(
    stream: &mut StreamReader<R>,
    kind: ContainerKind,
    config: &CodecConfig,
) -> Result<Header> {
    let header = match kind {
        ContainerKind::DenseMatrix => {
            let rows = stream.read_i32("rows")?;
            let cols = stream.read_i32("cols")?;
            let rows = positive(kind, "rows", rows)?;
            let cols = positive(kind, "cols", cols)?;
            check_limit(kind, rows as u128 * cols as u128, config)?;
            Header::DenseMatrix { rows, cols }
        }
        ContainerKind::DenseVector => {
            let size = stream.read_i32("size")?;
            let size = positive(kind, "size", size)?;
            check_limit(kind, size as u128, config)?;
            Header::DenseVector { size }
        }
        ContainerKind::SparseMatrix => {
            let rows = stream.read_i32("rows")?;
            let cols = stream.read_i32("cols")?;
            let nnz = stream.read_i32("nnz")?;
            let rows = positive(kind, "rows", rows)?;
            let cols = positive(kind, "cols", cols)?;
            // Duplicate triplets may outnumber the cells; the payload length bounds nnz
            if nnz < 0 {
                return Err(CodecError::InvalidNnz { nnz });
            }
            let nnz = nnz as usize;
            check_limit(kind, nnz as u128, config)?;
            Header::SparseMatrix { rows, cols, nnz }
        }
    };

    log::debug!("Decoded {} header: {:?}", kind, header);
    Ok(header)
}

/// Rejects leftover bytes after a slice decode, if the config asks for it
pub(crate) fn finish<R: Read>(
    stream: &StreamReader<R>,
    kind: ContainerKind,
    config: &CodecConfig,
) -> Result<()> {
    match stream.remaining() {
        Some(extra) if extra > 0 && config.reject_trailing_bytes => {
            Err(CodecError::TrailingBytes { kind, extra })
        }
        _ => {
            log::trace!("Decoded {} from {} bytes", kind, stream.offset());
            Ok(())
        }
    }
}

fn positive(kind: ContainerKind, field: &'static str, value: i32) -> Result<usize> {
    if value <= 0 {
        return Err(CodecError::NonPositiveDimension { kind, field, value });
    }
    Ok(value as usize)
}

fn check_limit(kind: ContainerKind, count: u128, config: &CodecConfig) -> Result<()> {
    if count > config.max_elements as u128 {
        return Err(CodecError::TooManyElements {
            kind,
            count,
            limit: config.max_elements,
        });
    }
    Ok(())
}
