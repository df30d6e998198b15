//! Submodule building the initial vertex and edge [`CostMatrix`] values
//! the search driver starts from.

use crate::algorithms::cost_matrix::CostMatrix;
use crate::errors::GedError;
use crate::traits::{EditCosts, Graph};

/// The two initial cost matrices and the node/edge identifier lists they
/// are indexed against.
pub(crate) struct InitialMatrices<G1: Graph, G2: Graph> {
    /// Vertex cost matrix, sized `|nodes1| + |nodes2|`.
    pub(crate) cv: CostMatrix,
    /// Edge cost matrix, sized `|edges1| + |edges2|`.
    pub(crate) ce: CostMatrix,
    /// `G1`'s nodes, in the order rows `0..nodes1.len()` of `cv` refer to.
    pub(crate) nodes1: Vec<G1::NodeId>,
    /// `G2`'s nodes, in the order columns `0..nodes2.len()` of `cv` refer
    /// to.
    pub(crate) nodes2: Vec<G2::NodeId>,
    /// `G1`'s edges, in the order rows `0..edges1.len()` of `ce` refer
    /// to.
    pub(crate) edges1: Vec<(G1::NodeId, G1::NodeId)>,
    /// `G2`'s edges, in the order columns `0..edges2.len()` of `ce`
    /// refer to.
    pub(crate) edges2: Vec<(G2::NodeId, G2::NodeId)>,
}

/// Builds the initial `Cv` and `Ce` matrices for `g1` and `g2` under
/// `costs`.
///
/// # Errors
///
/// Returns [`GedError::IncompatibleGraphs`] if `g1` and `g2` disagree on
/// directedness, or [`GedError::InvalidCost`] if any cost callback
/// returns a negative or non-finite value.
pub(crate) fn build<G1: Graph, G2: Graph, C: EditCosts<G1, G2>>(
    g1: &G1,
    g2: &G2,
    costs: &C,
) -> Result<InitialMatrices<G1, G2>, GedError> {
    if g1.is_directed() != g2.is_directed() {
        return Err(GedError::IncompatibleGraphs);
    }

    let nodes1 = g1.nodes();
    let nodes2 = g2.nodes();
    let edges1 = g1.edges();
    let edges2 = g2.edges();

    let node_subst = build_subst_block(&nodes1, &nodes2, "node substitution cost", |a, b| {
        costs.resolved_node_subst_cost(&g1.node_attributes(a), &g2.node_attributes(b))
    })?;
    let node_del = build_cost_vec(&nodes1, "node deletion cost", |n| {
        costs.node_del_cost(&g1.node_attributes(n))
    })?;
    let node_ins = build_cost_vec(&nodes2, "node insertion cost", |n| {
        costs.node_ins_cost(&g2.node_attributes(n))
    })?;
    let cv = CostMatrix::construct(assemble(&node_subst, &node_del, &node_ins), nodes1.len(), nodes2.len())?;

    let edge_subst = build_subst_block(&edges1, &edges2, "edge substitution cost", |a, b| {
        costs.resolved_edge_subst_cost(&g1.edge_attributes(a), &g2.edge_attributes(b))
    })?;
    let edge_del = build_cost_vec(&edges1, "edge deletion cost", |e| {
        costs.edge_del_cost(&g1.edge_attributes(e))
    })?;
    let edge_ins = build_cost_vec(&edges2, "edge insertion cost", |e| {
        costs.edge_ins_cost(&g2.edge_attributes(e))
    })?;
    let ce = CostMatrix::construct(assemble(&edge_subst, &edge_del, &edge_ins), edges1.len(), edges2.len())?;

    Ok(InitialMatrices { cv, ce, nodes1, nodes2, edges1, edges2 })
}

fn validate(callback: &'static str, value: f64) -> Result<f64, GedError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GedError::InvalidCost { callback, value })
    }
}

fn build_subst_block<A, B>(
    items1: &[A],
    items2: &[B],
    callback: &'static str,
    mut cost: impl FnMut(A, B) -> f64,
) -> Result<Vec<Vec<f64>>, GedError>
where
    A: Copy,
    B: Copy,
{
    items1
        .iter()
        .map(|&a| items2.iter().map(|&b| validate(callback, cost(a, b))).collect::<Result<Vec<_>, _>>())
        .collect()
}

fn build_cost_vec<A>(
    items: &[A],
    callback: &'static str,
    mut cost: impl FnMut(A) -> f64,
) -> Result<Vec<f64>, GedError>
where
    A: Copy,
{
    items.iter().map(|&a| validate(callback, cost(a))).collect()
}

/// Assembles the `(m+n) x (m+n)` matrix out of the substitution block and
/// the deletion/insertion cost vectors, per the layout documented on
/// [`CostMatrix`].
fn assemble(subst: &[Vec<f64>], del_costs: &[f64], ins_costs: &[f64]) -> Vec<Vec<f64>> {
    let m = del_costs.len();
    let n = ins_costs.len();
    let size = m + n;

    let sentinel = subst.iter().flatten().sum::<f64>()
        + del_costs.iter().sum::<f64>()
        + ins_costs.iter().sum::<f64>()
        + 1.0;

    let mut c = vec![vec![sentinel; size]; size];

    for (i, row) in subst.iter().enumerate() {
        c[i][..n].copy_from_slice(row);
    }
    for i in 0..m {
        c[i][n + i] = del_costs[i];
    }
    for j in 0..n {
        c[m + j][j] = ins_costs[j];
    }
    for row in c.iter_mut().skip(m) {
        for cell in &mut row[n..n + m] {
            *cell = 0.0;
        }
    }

    c
}
