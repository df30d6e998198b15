//! Submodule providing the crate's public entry points.
//!
//! These are thin shells over the branch-and-bound engine in
//! [`crate::algorithms`]: building the initial cost matrices, choosing the
//! `strictly_decreasing` flag appropriate to the convenience being
//! offered, and reshaping the resulting iterator. None of the "hard"
//! engineering lives here.

use crate::algorithms::{OptimizeEditPaths as Search, initial_matrix};
use crate::errors::GedError;
use crate::traits::{EditCosts, Graph};

/// One entry of a complete vertex edit path.
///
/// `(Some(u), Some(v))` is a substitution, `(Some(u), None)` a deletion of
/// `u`, `(None, Some(v))` an insertion of `v`.
pub type VertexEdit<G1, G2> = (Option<<G1 as Graph>::NodeId>, Option<<G2 as Graph>::NodeId>);

/// One entry of a complete edge edit path, analogous to [`VertexEdit`].
pub type EdgeEdit<G1, G2> = (
    Option<(<G1 as Graph>::NodeId, <G1 as Graph>::NodeId)>,
    Option<(<G2 as Graph>::NodeId, <G2 as Graph>::NodeId)>,
);

/// A complete edit path: the vertex assignment, the edge assignment it
/// induces, and the path's total cost under the cost model it was
/// produced with.
pub type EditPath<G1, G2> = (Vec<VertexEdit<G1, G2>>, Vec<EdgeEdit<G1, G2>>, f64);

/// Options shared by every entry point below, gathering what would
/// otherwise be a growing list of optional positional parameters.
///
/// `upper_bound`, if set, prunes away any completion whose cost would
/// exceed it; a search with no path at or under `upper_bound` closes
/// empty rather than reporting an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// The largest cost a reported path may have, or `None` for no bound.
    pub upper_bound: Option<f64>,
}

impl SearchOptions {
    /// Builds options with the given `upper_bound` and no other limits.
    #[inline]
    #[must_use]
    pub fn with_upper_bound(upper_bound: f64) -> Self {
        Self { upper_bound: Some(upper_bound) }
    }
}

/// Enumerates minimum-cost edit paths from `g1` to a graph isomorphic to
/// `g2`, under `costs`.
///
/// When `strictly_decreasing` is `true`, every yielded path's cost is
/// strictly less than the previous one's and the final yield is the exact
/// graph edit distance — this is the mode [`graph_edit_distance`] and
/// [`optimize_graph_edit_distance`] are built on. When `false`, yielded
/// costs are non-increasing and every path sharing the eventual minimum
/// cost is yielded — the mode [`optimal_edit_paths`] is built on.
///
/// # Errors
///
/// Returns [`GedError::IncompatibleGraphs`] if `g1` and `g2` disagree on
/// directedness, or [`GedError::InvalidCost`] if a cost callback returns a
/// negative or non-finite value while building the initial matrices. Once
/// the iterator is returned, a further [`GedError`] (from the internal
/// LSAP solver) can still surface as a single terminal `Some(Err(_))`
/// item, after which the iterator is exhausted.
///
/// # Examples
///
/// ```
/// use graph_edit_distance::api::{SearchOptions, optimize_edit_paths};
/// use graph_edit_distance::naive_structs::NaiveGraph;
/// use graph_edit_distance::traits::DefaultEditCosts;
///
/// let g1: NaiveGraph<()> = NaiveGraph::path(3);
/// let g2: NaiveGraph<()> = NaiveGraph::path(3);
/// let mut paths =
///     optimize_edit_paths(&g1, &g2, &DefaultEditCosts, SearchOptions::default(), true).unwrap();
/// let (_, _, cost) = paths.next().unwrap().unwrap();
/// assert_eq!(cost, 0.0);
/// ```
pub fn optimize_edit_paths<G1, G2, C>(
    g1: &G1,
    g2: &G2,
    costs: &C,
    options: SearchOptions,
    strictly_decreasing: bool,
) -> Result<impl Iterator<Item = Result<EditPath<G1, G2>, GedError>>, GedError>
where
    G1: Graph,
    G2: Graph,
    C: EditCosts<G1, G2>,
{
    let initial = initial_matrix::build(g1, g2, costs)?;
    Ok(Search::new(
        initial.nodes1,
        initial.nodes2,
        initial.cv,
        initial.edges1,
        initial.edges2,
        initial.ce,
        g1.is_directed(),
        options.upper_bound,
        strictly_decreasing,
    ))
}

/// Returns the exact graph edit distance between `g1` and `g2`, or `None`
/// if no edit path exists at or under `upper_bound`.
///
/// # Errors
///
/// See [`optimize_edit_paths`].
///
/// # Examples
///
/// ```
/// use graph_edit_distance::api::graph_edit_distance;
/// use graph_edit_distance::naive_structs::NaiveGraph;
/// use graph_edit_distance::traits::DefaultEditCosts;
///
/// let g1: NaiveGraph<()> = NaiveGraph::cycle(3);
/// let g2: NaiveGraph<()> = NaiveGraph::cycle(3);
/// assert_eq!(graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap(), Some(0.0));
///
/// // An upper bound of 0 on two non-isomorphic graphs yields no path.
/// let g3: NaiveGraph<()> = NaiveGraph::path(3);
/// assert_eq!(graph_edit_distance(&g1, &g3, &DefaultEditCosts, Some(0.0)).unwrap(), None);
/// ```
pub fn graph_edit_distance<G1, G2, C>(
    g1: &G1,
    g2: &G2,
    costs: &C,
    upper_bound: Option<f64>,
) -> Result<Option<f64>, GedError>
where
    G1: Graph,
    G2: Graph,
    C: EditCosts<G1, G2>,
{
    let options = SearchOptions { upper_bound };
    let mut best = None;
    for step in optimize_edit_paths(g1, g2, costs, options, true)? {
        let (_, _, cost) = step?;
        best = Some(cost);
    }
    Ok(best)
}

/// Returns every optimal edit path from `g1` to `g2` together with the
/// shared minimum cost, or `None` if no path exists at or under
/// `upper_bound`.
///
/// # Errors
///
/// See [`optimize_edit_paths`].
///
/// # Examples
///
/// ```
/// use graph_edit_distance::api::optimal_edit_paths;
/// use graph_edit_distance::naive_structs::NaiveGraph;
/// use graph_edit_distance::traits::DefaultEditCosts;
///
/// // K3 versus K3 with one edge removed: every optimal path deletes
/// // exactly one edge.
/// let g1: NaiveGraph<()> = NaiveGraph::complete(3);
/// let g2: NaiveGraph<()> =
///     NaiveGraph::builder().node(0, ()).node(1, ()).node(2, ()).edge(0, 2, ()).edge(1, 2, ()).build();
/// let (paths, cost) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();
/// assert_eq!(cost, 1.0);
/// assert!(!paths.is_empty());
/// ```
pub fn optimal_edit_paths<G1, G2, C>(
    g1: &G1,
    g2: &G2,
    costs: &C,
    upper_bound: Option<f64>,
) -> Result<Option<(Vec<EditPath<G1, G2>>, f64)>, GedError>
where
    G1: Graph,
    G2: Graph,
    C: EditCosts<G1, G2>,
{
    let options = SearchOptions { upper_bound };
    let mut best_cost: Option<f64> = None;
    let mut paths = Vec::new();

    for step in optimize_edit_paths(g1, g2, costs, options, false)? {
        let (vertex_path, edge_path, cost) = step?;
        match best_cost {
            Some(best) if cost < best => {
                best_cost = Some(cost);
                paths.clear();
                paths.push((vertex_path, edge_path, cost));
            }
            Some(_) => paths.push((vertex_path, edge_path, cost)),
            None => {
                best_cost = Some(cost);
                paths.push((vertex_path, edge_path, cost));
            }
        }
    }

    Ok(best_cost.map(|cost| (paths, cost)))
}

/// Streams successive upper bounds on the graph edit distance between
/// `g1` and `g2`, each strictly lower than the last; the final item is
/// the exact distance.
///
/// # Errors
///
/// See [`optimize_edit_paths`].
///
/// # Examples
///
/// ```
/// use graph_edit_distance::api::optimize_graph_edit_distance;
/// use graph_edit_distance::naive_structs::NaiveGraph;
/// use graph_edit_distance::traits::DefaultEditCosts;
///
/// let g1: NaiveGraph<()> = NaiveGraph::empty();
/// let g2: NaiveGraph<()> = NaiveGraph::builder().node(0, ()).build();
/// let costs: Vec<f64> =
///     optimize_graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap().collect::<Result<_, _>>().unwrap();
/// assert_eq!(costs, vec![1.0]);
/// ```
pub fn optimize_graph_edit_distance<G1, G2, C>(
    g1: &G1,
    g2: &G2,
    costs: &C,
    upper_bound: Option<f64>,
) -> Result<impl Iterator<Item = Result<f64, GedError>>, GedError>
where
    G1: Graph,
    G2: Graph,
    C: EditCosts<G1, G2>,
{
    let options = SearchOptions { upper_bound };
    let iter = optimize_edit_paths(g1, g2, costs, options, true)?;
    Ok(iter.map(|step| step.map(|(_, _, cost)| cost)))
}
