//! The six concrete scenarios (C1-C6) with literal expected outputs.

use graph_edit_distance::api::{graph_edit_distance, optimal_edit_paths};
use graph_edit_distance::naive_structs::NaiveGraph;
use graph_edit_distance::traits::{DefaultEditCosts, EditCosts};

mod common;

#[test]
fn c1_cycle6_vs_wheel7() {
    let g1: NaiveGraph<()> = NaiveGraph::cycle(6);
    let g2: NaiveGraph<()> = NaiveGraph::wheel(7);

    assert_eq!(graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap(), Some(7.0));

    let (paths, cost) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();
    assert_eq!(cost, 7.0);
    assert_eq!(paths.len(), 84);
}

#[test]
fn c2_identical_paths_of_four_vertices() {
    let g1: NaiveGraph<()> = NaiveGraph::path(4);
    let g2: NaiveGraph<()> = NaiveGraph::path(4);

    assert_eq!(graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap(), Some(0.0));

    let (paths, cost) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();
    assert_eq!(cost, 0.0);
    assert_eq!(paths.len(), 1);
    let (_, edge_path, _) = &paths[0];
    assert!(edge_path.iter().all(|&(g_edge, h_edge)| g_edge == h_edge));
}

#[test]
fn c3_k3_vs_k3_minus_one_edge() {
    let g1: NaiveGraph<()> = NaiveGraph::complete(3);
    let g2 = common::triangle_minus_edge(0, 1);

    assert_eq!(graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap(), Some(1.0));

    let (paths, cost) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();
    assert_eq!(cost, 1.0);
    assert_eq!(paths.len(), 3);
}

#[test]
fn c4_empty_graph_vs_single_node() {
    let g1: NaiveGraph<()> = NaiveGraph::empty();
    let g2: NaiveGraph<()> = NaiveGraph::builder().node(0, ()).build();

    assert_eq!(graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap(), Some(1.0));

    let (paths, cost) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();
    assert_eq!(cost, 1.0);
    assert_eq!(paths, vec![(vec![(None, Some(0))], Vec::new(), 1.0)]);
}

struct OnlyIdenticalLabelsMatch;

impl EditCosts<NaiveGraph<&'static str>, NaiveGraph<&'static str>> for OnlyIdenticalLabelsMatch {
    fn node_match(&self, a: &&'static str, b: &&'static str) -> Option<bool> {
        Some(a == b)
    }
}

#[test]
fn c5_path3_differing_in_one_label() {
    let g1 = common::labeled_path(&["a", "b", "c"]);
    let g2 = common::labeled_path(&["a", "b", "d"]);

    assert_eq!(graph_edit_distance(&g1, &g2, &OnlyIdenticalLabelsMatch, None).unwrap(), Some(1.0));
}

#[test]
fn c6_unreachable_upper_bound_on_non_isomorphic_graphs() {
    let g1: NaiveGraph<()> = NaiveGraph::cycle(6);
    let g2: NaiveGraph<()> = NaiveGraph::wheel(7);

    assert_eq!(graph_edit_distance(&g1, &g2, &DefaultEditCosts, Some(0.0)).unwrap(), None);
    assert!(optimal_edit_paths(&g1, &g2, &DefaultEditCosts, Some(0.0)).unwrap().is_none());
}
