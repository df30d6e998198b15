//! Submodule providing the [`NaiveGraph`] adjacency-list structure and its
//! builder.

use crate::traits::Graph;

/// A small, ordinary adjacency-list graph over `usize` node identifiers,
/// carrying an attribute of type `A` on every node and edge.
///
/// Nodes and edges are stored in insertion order, which is the order
/// [`Graph::nodes`] and [`Graph::edges`] report them in; this makes the
/// doctests and unit tests built on `NaiveGraph` reproducible.
#[derive(Debug, Clone)]
pub struct NaiveGraph<A> {
    nodes: Vec<(usize, A)>,
    edges: Vec<((usize, usize), A)>,
    directed: bool,
}

impl<A> NaiveGraph<A> {
    /// Starts a [`NaiveGraphBuilder`].
    #[inline]
    #[must_use]
    pub fn builder() -> NaiveGraphBuilder<A> {
        NaiveGraphBuilder::default()
    }

    /// The graph with no nodes and no edges.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::builder().build()
    }
}

impl NaiveGraph<()> {
    /// An undirected cycle on `n` vertices `0..n`, each edge `(i, i+1 mod
    /// n)`. `n < 3` degenerates to a path (no cycle exists on fewer
    /// vertices without repeating an edge).
    #[must_use]
    pub fn cycle(n: usize) -> Self {
        let mut builder = Self::builder();
        for i in 0..n {
            builder = builder.node(i, ());
        }
        if n < 3 {
            for i in 0..n.saturating_sub(1) {
                builder = builder.edge(i, i + 1, ());
            }
        } else {
            for i in 0..n {
                builder = builder.edge(i, (i + 1) % n, ());
            }
        }
        builder.build()
    }

    /// An undirected wheel on `n` vertices: an `(n-1)`-cycle on vertices
    /// `0..n-1` (the rim) plus a hub vertex `n-1` connected to every rim
    /// vertex.
    #[must_use]
    pub fn wheel(n: usize) -> Self {
        let rim = n.saturating_sub(1);
        let mut builder = Self::builder();
        for i in 0..n {
            builder = builder.node(i, ());
        }
        for i in 0..rim {
            builder = builder.edge(i, (i + 1) % rim, ());
        }
        for i in 0..rim {
            builder = builder.edge(i, rim, ());
        }
        builder.build()
    }

    /// An undirected path on `n` vertices `0..n`, edges `(i, i+1)`.
    #[must_use]
    pub fn path(n: usize) -> Self {
        let mut builder = Self::builder();
        for i in 0..n {
            builder = builder.node(i, ());
        }
        for i in 0..n.saturating_sub(1) {
            builder = builder.edge(i, i + 1, ());
        }
        builder.build()
    }

    /// The complete undirected graph on `n` vertices `0..n`.
    #[must_use]
    pub fn complete(n: usize) -> Self {
        let mut builder = Self::builder();
        for i in 0..n {
            builder = builder.node(i, ());
        }
        for i in 0..n {
            for j in (i + 1)..n {
                builder = builder.edge(i, j, ());
            }
        }
        builder.build()
    }
}

impl<A: Clone> Graph for NaiveGraph<A> {
    type NodeId = usize;
    type Attributes = A;

    fn nodes(&self) -> Vec<usize> {
        self.nodes.iter().map(|&(id, _)| id).collect()
    }

    fn contains_node(&self, node: usize) -> bool {
        self.nodes.iter().any(|&(id, _)| id == node)
    }

    fn node_attributes(&self, node: usize) -> A {
        self.nodes
            .iter()
            .find(|&&(id, _)| id == node)
            .map(|(_, attr)| attr.clone())
            .expect("node belongs to the graph")
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|&(edge, _)| edge).collect()
    }

    fn edge_attributes(&self, edge: (usize, usize)) -> A {
        self.edges
            .iter()
            .find(|&&(candidate, _)| candidate == edge || (!self.directed && candidate == (edge.1, edge.0)))
            .map(|(_, attr)| attr.clone())
            .expect("edge belongs to the graph")
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

/// Builder for [`NaiveGraph`], accumulating nodes and edges before a
/// final [`NaiveGraphBuilder::build`].
///
/// Mixing [`NaiveGraphBuilder::edge`] and [`NaiveGraphBuilder::directed_edge`]
/// on the same builder is not meaningful: whichever is called marks the
/// whole graph as directed or undirected, so use one or the other
/// consistently for a given graph.
#[derive(Debug, Clone)]
pub struct NaiveGraphBuilder<A> {
    nodes: Vec<(usize, A)>,
    edges: Vec<((usize, usize), A)>,
    directed: bool,
}

impl<A> Default for NaiveGraphBuilder<A> {
    fn default() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new(), directed: false }
    }
}

impl<A> NaiveGraphBuilder<A> {
    /// Adds a node with the given identifier and attribute.
    #[must_use]
    pub fn node(mut self, id: usize, attributes: A) -> Self {
        self.nodes.push((id, attributes));
        self
    }

    /// Adds an undirected edge `(a, b)` with the given attribute.
    #[must_use]
    pub fn edge(mut self, a: usize, b: usize, attributes: A) -> Self {
        self.edges.push(((a, b), attributes));
        self
    }

    /// Adds a directed edge `(a, b)` with the given attribute, and marks
    /// the graph being built as directed.
    #[must_use]
    pub fn directed_edge(mut self, a: usize, b: usize, attributes: A) -> Self {
        self.directed = true;
        self.edges.push(((a, b), attributes));
        self
    }

    /// Consumes the builder, producing the [`NaiveGraph`].
    #[must_use]
    pub fn build(self) -> NaiveGraph<A> {
        NaiveGraph { nodes: self.nodes, edges: self.edges, directed: self.directed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_n_nodes_and_n_edges() {
        let g = NaiveGraph::cycle(6);
        assert_eq!(g.nodes().len(), 6);
        assert_eq!(g.edges().len(), 6);
    }

    #[test]
    fn wheel_has_n_nodes_and_two_n_minus_two_edges() {
        let g = NaiveGraph::wheel(7);
        assert_eq!(g.nodes().len(), 7);
        // 6 rim edges + 6 spokes.
        assert_eq!(g.edges().len(), 12);
    }

    #[test]
    fn path_has_n_minus_one_edges() {
        let g = NaiveGraph::path(4);
        assert_eq!(g.nodes().len(), 4);
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn complete_graph_has_n_choose_two_edges() {
        let g = NaiveGraph::complete(5);
        assert_eq!(g.edges().len(), 10);
    }

    #[test]
    fn empty_graph_has_no_nodes_or_edges() {
        let g: NaiveGraph<()> = NaiveGraph::empty();
        assert!(g.nodes().is_empty());
        assert!(g.edges().is_empty());
    }

    #[test]
    fn directed_edge_marks_the_graph_directed() {
        let g = NaiveGraph::<()>::builder().node(0, ()).node(1, ()).directed_edge(0, 1, ()).build();
        assert!(g.is_directed());
    }

    #[test]
    fn edge_attributes_are_order_independent_for_undirected_graphs() {
        let g = NaiveGraph::builder().node(0, ()).node(1, ()).edge(0, 1, "bond").build();
        assert_eq!(g.edge_attributes((0, 1)), "bond");
        assert_eq!(g.edge_attributes((1, 0)), "bond");
    }

    #[test]
    fn contains_node_reflects_membership() {
        let g = NaiveGraph::<()>::builder().node(0, ()).build();
        assert!(g.contains_node(0));
        assert!(!g.contains_node(1));
    }
}
