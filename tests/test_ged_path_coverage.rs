//! Property 7: every yielded path's node-pair projection covers `G1`'s
//! and `G2`'s nodes exactly, its edge-pair projection covers their edges
//! exactly, and its cost equals the sum of the node and edge operation
//! costs it realises under the supplied cost model.

use std::collections::BTreeSet;

use graph_edit_distance::api::optimal_edit_paths;
use graph_edit_distance::naive_structs::NaiveGraph;
use graph_edit_distance::traits::{DefaultEditCosts, EditCosts, Graph};

mod common;

#[test]
fn every_path_covers_both_node_sets_exactly() {
    let g1: NaiveGraph<()> = NaiveGraph::cycle(6);
    let g2: NaiveGraph<()> = NaiveGraph::wheel(7);
    let (paths, _) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();

    let nodes1: BTreeSet<usize> = g1.nodes().into_iter().collect();
    let nodes2: BTreeSet<usize> = g2.nodes().into_iter().collect();

    for (vertex_path, _, _) in &paths {
        let covered1: BTreeSet<usize> = vertex_path.iter().filter_map(|&(u, _)| u).collect();
        let covered2: BTreeSet<usize> = vertex_path.iter().filter_map(|&(_, v)| v).collect();
        assert_eq!(covered1, nodes1);
        assert_eq!(covered2, nodes2);
    }
}

#[test]
fn every_path_covers_both_edge_sets_exactly() {
    let g1: NaiveGraph<()> = NaiveGraph::complete(3);
    let g2 = common::triangle_minus_edge(0, 1);
    let (paths, _) = optimal_edit_paths(&g1, &g2, &DefaultEditCosts, None).unwrap().unwrap();

    let edges1: BTreeSet<(usize, usize)> = g1.edges().into_iter().collect();
    let edges2: BTreeSet<(usize, usize)> = g2.edges().into_iter().collect();

    for (_, edge_path, _) in &paths {
        let covered1: BTreeSet<(usize, usize)> = edge_path.iter().filter_map(|&(g_edge, _)| g_edge).collect();
        let covered2: BTreeSet<(usize, usize)> = edge_path.iter().filter_map(|&(_, h_edge)| h_edge).collect();
        assert_eq!(covered1, edges1);
        assert_eq!(covered2, edges2);
    }
}

#[test]
fn cost_equals_the_sum_of_realised_operation_costs() {
    let g1: NaiveGraph<()> = NaiveGraph::path(3);
    let g2: NaiveGraph<()> = NaiveGraph::path(3);
    let costs = DefaultEditCosts;
    let (paths, reported_cost) = optimal_edit_paths(&g1, &g2, &costs, None).unwrap().unwrap();

    for (vertex_path, edge_path, cost) in &paths {
        let mut total = 0.0;
        for &(u, v) in vertex_path {
            total += match (u, v) {
                (Some(a), Some(b)) => costs.resolved_node_subst_cost(&g1.node_attributes(a), &g2.node_attributes(b)),
                (Some(a), None) => costs.node_del_cost(&g1.node_attributes(a)),
                (None, Some(b)) => costs.node_ins_cost(&g2.node_attributes(b)),
                (None, None) => 0.0,
            };
        }
        for &(g_edge, h_edge) in edge_path {
            total += match (g_edge, h_edge) {
                (Some(e1), Some(e2)) => {
                    costs.resolved_edge_subst_cost(&g1.edge_attributes(e1), &g2.edge_attributes(e2))
                }
                (Some(e1), None) => costs.edge_del_cost(&g1.edge_attributes(e1)),
                (None, Some(e2)) => costs.edge_ins_cost(&g2.edge_attributes(e2)),
                (None, None) => 0.0,
            };
        }
        assert!((total - cost).abs() < 1e-9);
        assert!((*cost - reported_cost).abs() < 1e-9);
    }
}
