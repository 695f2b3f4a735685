//! Error types for the matrix codec

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias using the codec's error
pub type Result<T> = std::result::Result<T, CodecError>;

/// The container shape a header or payload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// `rows × cols` grid with every cell stored
    DenseMatrix,
    /// 1-D sequence of `size` values
    DenseVector,
    /// `rows × cols` grid stored as `(row, col, value)` triplets
    SparseMatrix,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::DenseMatrix => "dense matrix",
            ContainerKind::DenseVector => "dense vector",
            ContainerKind::SparseMatrix => "sparse matrix",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a [`CodecError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The stream content violates the format
    CorruptFormat,
    /// The stream ended before a read could be satisfied
    TruncatedStream,
    /// An in-memory container cannot be expressed in the format
    Unrepresentable,
    /// Any other failure of the underlying reader or writer
    Io,
}

/// Errors that can occur while encoding or decoding a container
#[derive(Error, Debug)]
pub enum CodecError {
    /// A dimension in the header is zero or negative
    #[error("Corrupt {kind} header: {field} = {value}, expected a positive value")]
    NonPositiveDimension {
        kind: ContainerKind,
        field: &'static str,
        value: i32,
    },

    /// The stored-entry count is negative
    #[error("Corrupt sparse matrix header: nnz = {nnz}, expected a non-negative value")]
    InvalidNnz { nnz: i32 },

    /// A triplet addresses a cell outside the declared shape
    #[error("Triplet {index} at ({row}, {col}) lies outside a {rows} × {cols} matrix")]
    TripletOutOfBounds {
        index: usize,
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// The header asks for more elements than the decoder accepts
    #[error("{kind} declares {count} elements, limit is {limit}")]
    TooManyElements {
        kind: ContainerKind,
        count: u128,
        limit: usize,
    },

    /// Bytes remain after a container decoded from a slice
    #[error("{extra} trailing bytes after {kind}")]
    TrailingBytes { kind: ContainerKind, extra: usize },

    /// End of stream reached in the middle of a read
    #[error("Truncated stream while reading {what} at byte offset {offset}")]
    Truncated { what: &'static str, offset: u64 },

    /// A dimension, index or count does not fit in a 4-byte signed integer
    #[error("{field} = {value} does not fit in int32")]
    DimensionOverflow { field: &'static str, value: usize },

    /// The format has no encoding for an empty container
    #[error("Cannot encode {kind} with {field} = 0")]
    EmptyDimension {
        kind: ContainerKind,
        field: &'static str,
    },

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Returns the coarse error class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::NonPositiveDimension { .. }
            | CodecError::InvalidNnz { .. }
            | CodecError::TripletOutOfBounds { .. }
            | CodecError::TooManyElements { .. }
            | CodecError::TrailingBytes { .. } => ErrorKind::CorruptFormat,
            CodecError::Truncated { .. } => ErrorKind::TruncatedStream,
            CodecError::DimensionOverflow { .. } | CodecError::EmptyDimension { .. } => {
                ErrorKind::Unrepresentable
            }
            CodecError::Io(_) => ErrorKind::Io,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        self.kind() == ErrorKind::CorruptFormat
    }

    pub fn is_truncated(&self) -> bool {
        self.kind() == ErrorKind::TruncatedStream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let err = CodecError::NonPositiveDimension {
            kind: ContainerKind::DenseMatrix,
            field: "rows",
            value: 0,
        };
        assert_eq!(err.kind(), ErrorKind::CorruptFormat);
        assert!(err.is_corrupt());

        let err = CodecError::Truncated { what: "value", offset: 8 };
        assert!(err.is_truncated());
        assert!(!err.is_corrupt());

        let err = CodecError::DimensionOverflow { field: "rows", value: usize::MAX };
        assert_eq!(err.kind(), ErrorKind::Unrepresentable);

        let err = CodecError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_messages() {
        let err = CodecError::NonPositiveDimension {
            kind: ContainerKind::DenseVector,
            field: "size",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "Corrupt dense vector header: size = -3, expected a positive value"
        );

        let err = CodecError::TrailingBytes { kind: ContainerKind::SparseMatrix, extra: 4 };
        assert_eq!(err.to_string(), "4 trailing bytes after sparse matrix");

        let err = CodecError::InvalidNnz { nnz: -2 };
        assert_eq!(
            err.to_string(),
            "Corrupt sparse matrix header: nnz = -2, expected a non-negative value"
        );
    }
}
