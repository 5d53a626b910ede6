use thiserror::Error;

/// Errors surfaced by the alignment entry points. The algorithms themselves
/// are total over well-formed token slices; everything here is caught before
/// any matrix is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// Scoring parameters that cannot produce a meaningful alignment
    /// (the reward must stay positive and the penalty negative).
    #[error("invalid scoring parameters: reward={reward}, penalty={penalty}")]
    InvalidArgument { reward: i32, penalty: i32 },

    /// The score matrix for this input pair would exceed the cell cap.
    #[error("score matrix of {rows}x{cols} cells exceeds the limit of {limit}")]
    ResourceExceeded {
        rows: usize,
        cols: usize,
        limit: usize,
    },
}
