//! Submodule defining the edit-cost model consumed by the GED engine.

use super::graph::Graph;

/// Cost model for node and edge edit operations.
///
/// Every method is provided with a default so that a cost model only needs
/// to override the callbacks it cares about. The substitution callbacks
/// (`node_subst_cost`, `edge_subst_cost`) and the match predicates
/// (`node_match`, `edge_match`) both return an [`Option`]: `None` means
/// "not specified", letting [`EditCosts::resolved_node_subst_cost`] /
/// [`EditCosts::resolved_edge_subst_cost`] fall through to the next rule —
/// an explicit substitution cost overrides a match predicate, which in
/// turn overrides the default substitution cost of `0.0` (attributes
/// ignored).
///
/// # Examples
///
/// ```
/// use graph_edit_distance::prelude::*;
///
/// struct LabelMatch;
///
/// impl EditCosts<NaiveGraph<&'static str>, NaiveGraph<&'static str>> for LabelMatch {
///     fn node_match(&self, a: &&'static str, b: &&'static str) -> Option<bool> {
///         Some(a == b)
///     }
/// }
///
/// let cost_model = LabelMatch;
/// assert_eq!(cost_model.resolved_node_subst_cost(&"a", &"a"), 0.0);
/// assert_eq!(cost_model.resolved_node_subst_cost(&"a", &"b"), 1.0);
/// ```
pub trait EditCosts<G1: Graph, G2: Graph> {
    /// Cost of substituting a `G1` node for a `G2` node, or `None` to fall
    /// back to [`EditCosts::node_match`].
    #[inline]
    fn node_subst_cost(&self, _n1: &G1::Attributes, _n2: &G2::Attributes) -> Option<f64> {
        None
    }

    /// Cost of deleting a `G1` node. Defaults to `1.0`.
    #[inline]
    fn node_del_cost(&self, _n1: &G1::Attributes) -> f64 {
        1.0
    }

    /// Cost of inserting a `G2` node. Defaults to `1.0`.
    #[inline]
    fn node_ins_cost(&self, _n2: &G2::Attributes) -> f64 {
        1.0
    }

    /// Whether a `G1` node and a `G2` node should be considered equal, or
    /// `None` if node attributes should not be considered at all.
    /// Ignored if [`EditCosts::node_subst_cost`] returns `Some`.
    #[inline]
    fn node_match(&self, _n1: &G1::Attributes, _n2: &G2::Attributes) -> Option<bool> {
        None
    }

    /// Cost of substituting a `G1` edge for a `G2` edge, or `None` to fall
    /// back to [`EditCosts::edge_match`].
    #[inline]
    fn edge_subst_cost(&self, _g: &G1::Attributes, _h: &G2::Attributes) -> Option<f64> {
        None
    }

    /// Cost of deleting a `G1` edge. Defaults to `1.0`.
    #[inline]
    fn edge_del_cost(&self, _g: &G1::Attributes) -> f64 {
        1.0
    }

    /// Cost of inserting a `G2` edge. Defaults to `1.0`.
    #[inline]
    fn edge_ins_cost(&self, _h: &G2::Attributes) -> f64 {
        1.0
    }

    /// Whether a `G1` edge and a `G2` edge should be considered equal, or
    /// `None` if edge attributes should not be considered at all.
    /// Ignored if [`EditCosts::edge_subst_cost`] returns `Some`.
    #[inline]
    fn edge_match(&self, _g: &G1::Attributes, _h: &G2::Attributes) -> Option<bool> {
        None
    }

    /// Resolves the node substitution cost following the priority order
    /// documented on the trait: explicit cost, then match predicate, then
    /// the default of `0.0`.
    #[inline]
    fn resolved_node_subst_cost(&self, n1: &G1::Attributes, n2: &G2::Attributes) -> f64 {
        if let Some(cost) = self.node_subst_cost(n1, n2) {
            cost
        } else if let Some(matches) = self.node_match(n1, n2) {
            if matches { 0.0 } else { 1.0 }
        } else {
            0.0
        }
    }

    /// Resolves the edge substitution cost following the same priority
    /// order as [`EditCosts::resolved_node_subst_cost`].
    #[inline]
    fn resolved_edge_subst_cost(&self, g: &G1::Attributes, h: &G2::Attributes) -> f64 {
        if let Some(cost) = self.edge_subst_cost(g, h) {
            cost
        } else if let Some(matches) = self.edge_match(g, h) {
            if matches { 0.0 } else { 1.0 }
        } else {
            0.0
        }
    }
}

/// An [`EditCosts`] model using the default cost for every operation:
/// substitution is free (attributes ignored), deletion and insertion each
/// cost `1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEditCosts;

impl<G1: Graph, G2: Graph> EditCosts<G1, G2> for DefaultEditCosts {}
