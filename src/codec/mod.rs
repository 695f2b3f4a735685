// Binary encoders and decoders for dense and sparse containers

pub mod dense;
pub mod header;
pub mod sparse;
mod stream;

pub use dense::{
    decode_dense_matrix, decode_dense_vector, encode_dense_matrix, encode_dense_vector,
    read_dense_matrix, read_dense_matrix_into, read_dense_vector, read_dense_vector_into,
    write_dense_matrix, write_dense_vector,
};
pub use header::{
    dense_matrix_encoded_len, dense_vector_encoded_len, read_header, sparse_matrix_encoded_len,
    Header,
};
pub use sparse::{
    decode_sparse_matrix, decode_sprs_matrix, encode_sparse_matrix, encode_sprs_matrix,
    read_sparse_matrix, read_sparse_matrix_into, read_sprs_matrix, write_sparse_matrix,
    write_sprs_matrix,
};
pub use stream::PREALLOC_LIMIT;
