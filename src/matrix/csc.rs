//! Compressed Sparse Column (CSC) matrix format implementation

use crate::error::{CodecError, Result};
use crate::matrix::config::DuplicatePolicy;
use crate::utils::exclusive_scan;
use ndarray::Array2;
use num_traits::Num;
use std::fmt;

/// A sparse matrix in Compressed Sparse Column (CSC) format
///
/// The CSC format stores a sparse matrix using three arrays:
/// - col_ptr: Array of size n_cols + 1 containing indices into row_idx and values arrays
/// - row_idx: Array of size nnz containing row indices of stored elements
/// - values: Array of size nnz containing the stored values
///
/// Iterating the columns in order and the entries of each column in order
/// gives the column-major storage order the codec writes triplets in.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSC<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Column pointers (size: n_cols + 1)
    /// col_ptr[j] is the index in row_idx and values where column j starts
    /// col_ptr[n_cols] is equal to nnz
    pub col_ptr: Vec<usize>,

    /// Row indices (size: nnz)
    pub row_idx: Vec<usize>,

    /// Stored values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSC<T>
where
    T: Copy + Num,
{
    /// Wraps raw CSC storage
    ///
    /// # Panics
    ///
    /// Panics unless the storage is canonical: `col_ptr` has `n_cols + 1`
    /// non-decreasing entries from 0 to `nnz`, `row_idx` and `values` have the
    /// same length, and rows within each column are strictly increasing and
    /// below `n_rows`.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(col_ptr.len(), n_cols + 1, "col_ptr needs n_cols + 1 entries");
        assert_eq!(row_idx.len(), values.len(), "row_idx and values differ in length");
        assert_eq!(col_ptr[0], 0, "col_ptr must start at 0");
        assert_eq!(col_ptr[n_cols], row_idx.len(), "col_ptr must end at nnz");
        assert!(
            col_ptr.windows(2).all(|w| w[0] <= w[1]),
            "col_ptr must be non-decreasing"
        );

        for j in 0..n_cols {
            let rows = &row_idx[col_ptr[j]..col_ptr[j + 1]];
            assert!(
                rows.windows(2).all(|w| w[0] < w[1]),
                "rows in column {} must be strictly increasing",
                j
            );
            if let Some(&last) = rows.last() {
                assert!(last < n_rows, "Row index {} out of bounds (n_rows = {})", last, n_rows);
            }
        }

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Triplets may come in any order. Each column's entries end up sorted by
    /// row, and triplets addressing the same cell are merged according to
    /// `policy`. `LastWins` keeps the value that came last in `triplets`.
    ///
    /// Returns [`CodecError::TripletOutOfBounds`] for a triplet outside the
    /// `n_rows × n_cols` shape.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        mut triplets: Vec<(usize, usize, T)>,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        for (index, &(row, col, _)) in triplets.iter().enumerate() {
            if row >= n_rows || col >= n_cols {
                return Err(CodecError::TripletOutOfBounds {
                    index,
                    row: row as i64,
                    col: col as i64,
                    rows: n_rows,
                    cols: n_cols,
                });
            }
        }

        // Stable sort, so equal cells keep their input order
        triplets.sort_by_key(|&(row, col, _)| (col, row));

        let mut col_counts = vec![0; n_cols];
        let mut row_idx = Vec::with_capacity(triplets.len());
        let mut values: Vec<T> = Vec::with_capacity(triplets.len());
        let mut previous = None;
        let mut merged = 0usize;

        for (row, col, value) in triplets {
            if previous == Some((row, col)) {
                if let Some(slot) = values.last_mut() {
                    *slot = match policy {
                        DuplicatePolicy::Sum => *slot + value,
                        DuplicatePolicy::LastWins => value,
                    };
                }
                merged += 1;
                continue;
            }

            row_idx.push(row);
            values.push(value);
            col_counts[col] += 1;
            previous = Some((row, col));
        }

        if merged > 0 {
            log::warn!(
                "Merged {} duplicate sparse entries using {:?} policy",
                merged,
                policy
            );
        }

        Ok(Self {
            n_rows,
            n_cols,
            col_ptr: exclusive_scan(&col_counts),
            row_idx,
            values,
        })
    }

    /// Returns the number of stored elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the stored elements in column j
    ///
    /// Each item is a tuple (row_idx, value) representing a stored element
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }

    /// Returns an iterator over all stored elements as (row, col, value),
    /// in column-major storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.n_cols).flat_map(move |j| self.col_iter(j).map(move |(i, val)| (i, j, val)))
    }

    /// Returns the stored value at (row, col), if any
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.n_rows || col >= self.n_cols {
            return None;
        }

        self.col_iter(col).find(|&(i, _)| i == row).map(|(_, val)| val)
    }

    /// Expands the matrix into a dense row-major array
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));

        for (i, j, &val) in self.iter() {
            dense[[i, j]] = dense[[i, j]] + val;
        }

        dense
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            col_ptr: vec![0; n_cols + 1],
            row_idx: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSC<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSC {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_cols_to_print = 5.min(self.n_cols);

        if max_cols_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for j in 0..max_cols_to_print {
                write!(f, "    col {}: ", j)?;
                let start = self.col_ptr[j];
                let end = self.col_ptr[j + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for i in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.row_idx[i], self.values[i])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_cols > max_cols_to_print {
                writeln!(f, "    ... ({} more columns)", self.n_cols - max_cols_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
