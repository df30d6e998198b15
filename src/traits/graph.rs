//! Submodule defining the graph abstraction consumed by the GED engine.

use core::fmt::Debug;
use core::hash::Hash;

/// Capabilities the GED engine requires of an input graph.
///
/// The engine never constructs, mutates or owns a [`Graph`] implementor —
/// it only calls the methods below. Node and edge attribute mappings are
/// opaque to the engine: they are handed verbatim to the cost callbacks of
/// [`super::EditCosts`] and never inspected directly.
///
/// # Examples
///
/// ```
/// use graph_edit_distance::prelude::*;
///
/// let graph: NaiveGraph<&str> = NaiveGraph::builder()
///     .node(0, "carbon")
///     .node(1, "oxygen")
///     .edge(0, 1, "single-bond")
///     .build();
///
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.edges().len(), 1);
/// assert!(!graph.is_directed());
/// ```
pub trait Graph {
    /// Identifier type of a node. Cheap to copy and compare; carries no
    /// attribute data itself.
    type NodeId: Copy + Eq + Hash + Ord + Debug;
    /// Opaque attribute mapping associated with a node or an edge.
    type Attributes;

    /// Returns the graph's nodes, in a stable, implementor-defined order.
    fn nodes(&self) -> Vec<Self::NodeId>;

    /// Returns whether `node` belongs to the graph.
    fn contains_node(&self, node: Self::NodeId) -> bool;

    /// Returns the attribute mapping of `node`.
    ///
    /// # Panics
    ///
    /// Implementors may panic if `node` does not belong to the graph; the
    /// engine only ever calls this with node identifiers obtained from
    /// [`Graph::nodes`].
    fn node_attributes(&self, node: Self::NodeId) -> Self::Attributes;

    /// Returns the graph's edges, each as an ordered pair of endpoints, in
    /// a stable, implementor-defined order.
    ///
    /// For an undirected graph each unordered pair must appear exactly
    /// once; the order of the two endpoints within the pair is not
    /// significant but must be consistent with [`Graph::edge_attributes`].
    fn edges(&self) -> Vec<(Self::NodeId, Self::NodeId)>;

    /// Returns the attribute mapping of the edge `(source, destination)`.
    ///
    /// # Panics
    ///
    /// Implementors may panic if the edge does not belong to the graph;
    /// the engine only ever calls this with edges obtained from
    /// [`Graph::edges`].
    fn edge_attributes(&self, edge: (Self::NodeId, Self::NodeId)) -> Self::Attributes;

    /// Returns whether the graph's edges are directed.
    fn is_directed(&self) -> bool;
}
