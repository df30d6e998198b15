//! Exact Graph Edit Distance (GED) via branch-and-bound search with an
//! LSAP relaxation.
//!
//! Given two attributed graphs `G1` and `G2` and a user-supplied cost
//! model, this crate enumerates minimum-cost edit paths transforming `G1`
//! into a graph isomorphic to `G2`. An edit path is a sequence of node and
//! edge substitutions, deletions and insertions; its cost is the sum of
//! the costs of its operations under the supplied [`traits::EditCosts`]
//! model.
//!
//! The search is a depth-first branch-and-bound: at each partial
//! assignment of vertices (and the edges that assignment forces), the
//! [Linear Sum Assignment Problem][lsap] on the remaining, yet-unmatched
//! vertices and edges is solved to obtain an admissible lower bound on the
//! cost of any completion, which is used to prune branches that cannot
//! improve on the best path found so far.
//!
//! [lsap]: algorithms::assignment
//!
//! # Quick start
//!
//! ```
//! use graph_edit_distance::api::graph_edit_distance;
//! use graph_edit_distance::naive_structs::NaiveGraph;
//! use graph_edit_distance::traits::DefaultEditCosts;
//!
//! let g1: NaiveGraph<()> = NaiveGraph::cycle(6);
//! let g2: NaiveGraph<()> = NaiveGraph::wheel(7);
//!
//! let ged = graph_edit_distance(&g1, &g2, &DefaultEditCosts::default(), None)
//!     .expect("cost model never reports a negative cost");
//! assert_eq!(ged, Some(7.0));
//! ```

pub mod algorithms;
pub mod api;
pub mod errors;
pub mod naive_structs;
pub mod traits;

/// Prelude module re-exporting the crate's most commonly used items.
pub mod prelude {
    pub use crate::api::*;
    pub use crate::errors::*;
    pub use crate::naive_structs::*;
    pub use crate::traits::*;
}
