//! Submodule providing the traits consumed and produced by the GED engine.

mod edit_costs;
mod graph;

pub use edit_costs::{DefaultEditCosts, EditCosts};
pub use graph::Graph;
