//! Shared graph builders for the integration test suite.

use graph_edit_distance::naive_structs::NaiveGraph;

/// Builds a labeled path graph: node `i` carries `labels[i]`, consecutive
/// nodes are joined by an edge labeled `"edge"`.
pub fn labeled_path(labels: &[&'static str]) -> NaiveGraph<&'static str> {
    let mut builder = NaiveGraph::builder();
    for (i, &label) in labels.iter().enumerate() {
        builder = builder.node(i, label);
    }
    for i in 0..labels.len().saturating_sub(1) {
        builder = builder.edge(i, i + 1, "edge");
    }
    builder.build()
}

/// `K3` with the single edge `(a, b)` removed, keeping the other two.
pub fn triangle_minus_edge(a: usize, b: usize) -> NaiveGraph<()> {
    let mut builder = NaiveGraph::builder().node(0, ()).node(1, ()).node(2, ());
    for (u, v) in [(0, 1), (0, 2), (1, 2)] {
        if (u, v) != (a.min(b), a.max(b)) {
            builder = builder.edge(u, v, ());
        }
    }
    builder.build()
}
