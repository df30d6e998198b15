//! Submodule providing the errors enumeration for the dense LSAP solver.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
/// Errors that can occur while solving the Linear Sum Assignment Problem.
pub enum AssignmentError {
    /// The matrix is not square.
    #[error("The cost matrix is not square.")]
    NonSquareMatrix,
    /// The matrix is empty.
    #[error("The cost matrix is empty.")]
    EmptyMatrix,
    /// The matrix contains a negative value.
    #[error("The cost matrix contains a negative value.")]
    NegativeValue,
    /// The matrix contains a non-finite value (`NaN` or `±∞`).
    #[error("The cost matrix contains a non-finite value.")]
    NonFiniteValue,
}
