//! Configuration for decoding

/// How sparse construction combines triplets that address the same cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Add all values for the cell together
    #[default]
    Sum,
    /// Keep the value of the triplet that appears last in the input
    LastWins,
}

/// Configuration for the matrix codec
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Policy for duplicate `(row, col)` entries in a sparse stream
    pub duplicate_policy: DuplicatePolicy,

    /// Largest element count accepted from a header
    /// (`rows * cols` for dense matrices, `size` for vectors, `nnz` for sparse)
    pub max_elements: usize,

    /// Whether slice decoding fails when bytes remain after the container
    pub reject_trailing_bytes: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Sum,
            max_elements: i32::MAX as usize,
            reject_trailing_bytes: true,
        }
    }
}

impl CodecConfig {
    /// Creates a configuration with the given duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Creates a configuration with the given element limit
    pub fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = limit;
        self
    }

    /// Creates a configuration that tolerates trailing bytes
    pub fn with_trailing_bytes_allowed(mut self) -> Self {
        self.reject_trailing_bytes = false;
        self
    }
}
