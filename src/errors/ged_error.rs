//! Submodule providing the errors enumeration for the public GED surface.

use super::AssignmentError;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
/// Errors that can occur while computing a graph edit distance or
/// enumerating edit paths.
pub enum GedError {
    /// A cost callback returned a negative or non-finite value.
    ///
    /// `callback` names the offending callback (e.g. `"node_subst_cost"`)
    /// and `value` is the value it returned, so that the caller can trace
    /// the offending attribute pair back to their own cost model.
    #[error("The `{callback}` callback returned an invalid cost: {value}")]
    InvalidCost {
        /// Name of the callback that returned the invalid cost.
        callback: &'static str,
        /// The invalid value it returned.
        value: f64,
    },
    /// `G1` and `G2` do not agree on directedness.
    #[error("G1 and G2 must both be directed or both be undirected.")]
    IncompatibleGraphs,
    /// The internal LSAP solver rejected a cost matrix.
    ///
    /// This only surfaces if a cost callback's output, after sentinel
    /// construction (see [`crate::algorithms::initial_matrix`]), produces a
    /// matrix the solver considers malformed; a correctly implemented cost
    /// model never triggers this variant.
    #[error("internal assignment solver error: {0}")]
    Assignment(#[from] AssignmentError),
}
