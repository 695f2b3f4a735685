// Matrix data structures and decoding configuration

pub mod config;
pub mod csc;

pub use config::{CodecConfig, DuplicatePolicy};
pub use csc::SparseMatrixCSC;
