//! Utilities for converting between our sparse format and sprs

use crate::matrix::SparseMatrixCSC;
use num_traits::Num;
use sprs::CsMat;

/// Converts our CSC matrix format to sprs CsMat format (as CSC)
///
/// # Panics
///
/// sprs rejects unsorted or repeated row indices within a column. Matrices
/// produced by [`SparseMatrixCSC::from_triplets`] always satisfy this.
pub fn to_sprs_csc<T>(matrix: &SparseMatrixCSC<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new_csc(
        (matrix.n_rows, matrix.n_cols),
        matrix.col_ptr.clone(),
        matrix.row_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a sprs CsMat in either storage to our SparseMatrixCSC format
pub fn from_sprs<T>(matrix: CsMat<T>) -> SparseMatrixCSC<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSC format
    let matrix = if matrix.is_csc() {
        matrix
    } else {
        matrix.to_csc()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSC::new(shape.0, shape.1, indptr, indices, data)
}
