//! Properties 4-6: strictly-decreasing mode yields strictly decreasing
//! costs ending at the optimum; all-optima mode yields non-increasing
//! costs covering every tie at the minimum; lowering `upper_bound` cannot
//! increase the reported minimum.

use graph_edit_distance::api::{SearchOptions, graph_edit_distance, optimize_edit_paths, optimize_graph_edit_distance};
use graph_edit_distance::naive_structs::NaiveGraph;
use graph_edit_distance::traits::DefaultEditCosts;

mod common;

#[test]
fn strictly_decreasing_mode_ends_at_the_true_optimum() {
    let g1: NaiveGraph<()> = NaiveGraph::cycle(6);
    let g2: NaiveGraph<()> = NaiveGraph::wheel(7);
    let costs: Vec<f64> =
        optimize_graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap().collect::<Result<_, _>>().unwrap();

    assert!(!costs.is_empty());
    for pair in costs.windows(2) {
        assert!(pair[1] < pair[0]);
    }
    assert_eq!(*costs.last().unwrap(), 7.0);
}

#[test]
fn all_optima_mode_yields_non_increasing_costs() {
    let g1: NaiveGraph<()> = NaiveGraph::complete(3);
    let g2 = common::triangle_minus_edge(0, 1);
    let paths: Vec<_> = optimize_edit_paths(&g1, &g2, &DefaultEditCosts, SearchOptions::default(), false)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert!(!paths.is_empty());
    for pair in paths.windows(2) {
        assert!(pair[1].2 <= pair[0].2 + 1e-9);
    }
}

#[test]
fn lowering_the_upper_bound_cannot_increase_the_reported_minimum() {
    let g1: NaiveGraph<()> = NaiveGraph::cycle(6);
    let g2: NaiveGraph<()> = NaiveGraph::wheel(7);

    let unbounded = graph_edit_distance(&g1, &g2, &DefaultEditCosts, None).unwrap();
    let bounded_at_optimum = graph_edit_distance(&g1, &g2, &DefaultEditCosts, Some(7.0)).unwrap();
    let too_tight = graph_edit_distance(&g1, &g2, &DefaultEditCosts, Some(6.0)).unwrap();

    assert_eq!(unbounded, bounded_at_optimum);
    assert!(too_tight.is_none());
}
