//! Submodule providing `NaiveGraph`, a reference [`crate::traits::Graph`]
//! implementation.
//!
//! Graph data structures themselves are out of scope for this crate (see
//! the crate-level documentation's "out of scope" note): `NaiveGraph` is
//! explicitly a convenience, not a product feature. It exists only so the
//! engine is testable and has doctest-friendly examples without requiring
//! every caller to write their own [`crate::traits::Graph`] implementor.

mod naive_graph;

pub use naive_graph::{NaiveGraph, NaiveGraphBuilder};
