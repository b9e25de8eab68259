// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the matching-polynomial driver against known
//! polynomials and the brute-force reference.

mod common;

use common::*;
use matchpoly::{
    complete_poly, matching_polynomial, matching_polynomial_with, CompleteCache, Graph, IntPoly,
    MatchingError,
};

#[test]
fn test_empty_graph_is_power_of_x() {
    init_logging();
    for n in 0..8 {
        let poly = matching_polynomial(&Graph::new(n)).unwrap();
        let mut coeffs = vec![0i64; n + 1];
        coeffs[n] = 1;
        assert_eq!(poly, IntPoly::from_i64_coeffs(&coeffs));
    }
}

#[test]
fn test_triangle_matches_complete_family() {
    init_logging();
    let poly = matching_polynomial(&complete_graph(3)).unwrap();
    assert_eq!(poly, IntPoly::from_i64_coeffs(&[0, -3, 0, 1]));
    assert_eq!(poly, complete_poly(3));
}

#[test]
fn test_path_of_length_two() {
    init_logging();
    let path = Graph::from_edges(3, &[(0, 1), (0, 2)]);
    assert_eq!(
        matching_polynomial(&path).unwrap(),
        IntPoly::from_i64_coeffs(&[0, -2, 0, 1])
    );
}

#[test]
fn test_single_edge_with_isolated_vertex() {
    init_logging();
    let graph = Graph::from_edges(3, &[(0, 1)]);
    assert_eq!(
        matching_polynomial(&graph).unwrap(),
        IntPoly::from_i64_coeffs(&[0, -1, 0, 1])
    );
}

#[test]
fn test_three_disjoint_edges() {
    init_logging();
    // m_0 = 1, m_1 = 3, m_2 = 3, m_3 = 1.
    let poly = matching_polynomial(&disjoint_edges(3)).unwrap();
    assert_eq!(poly, IntPoly::from_i64_coeffs(&[-1, 0, 3, 0, -3, 0, 1]));
    assert_eq!(poly.to_string(), "x^6 - 3*x^4 + 3*x^2 - 1");
}

#[test]
fn test_petersen_graph_known_polynomial() {
    init_logging();
    let poly = matching_polynomial(&petersen_graph()).unwrap();
    let expected = IntPoly::from_i64_coeffs(&[-6, 0, 90, 0, -145, 0, 75, 0, -15, 0, 1]);
    assert_eq!(poly, expected);
    // And the brute-force reference agrees.
    assert_eq!(poly, reference_matching_polynomial(&petersen_graph()));
}

#[test]
fn test_paths_and_cycles_match_brute_force() {
    init_logging();
    for n in 1..8 {
        let path = path_graph(n);
        assert_eq!(
            matching_polynomial(&path).unwrap(),
            reference_matching_polynomial(&path),
            "path on {} vertices",
            n
        );
    }
    for n in 3..8 {
        let cycle = cycle_graph(n);
        assert_eq!(
            matching_polynomial(&cycle).unwrap(),
            reference_matching_polynomial(&cycle),
            "cycle on {} vertices",
            n
        );
    }
}

#[test]
fn test_complete_graphs_match_cached_family() {
    init_logging();
    for n in 0..7 {
        let poly = matching_polynomial(&complete_graph(n)).unwrap();
        assert_eq!(poly, complete_poly(n), "M(K_{})", n);
    }
}

#[test]
fn test_complement_optimization_is_invisible() {
    init_logging();
    // Graphs straddling the density threshold.
    let graphs = [
        complete_graph(6),
        petersen_graph().complement(), // density 2/3
        Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)]),
        cycle_graph(5),
    ];
    for graph in &graphs {
        let mut cache = CompleteCache::new();
        let with_opt = matching_polynomial_with(graph, true, &mut cache).unwrap();
        let without_opt = matching_polynomial_with(graph, false, &mut cache).unwrap();
        assert_eq!(with_opt, without_opt);
    }
}

#[test]
fn test_relabeling_does_not_change_result() {
    init_logging();
    let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 2)]);
    let baseline = matching_polynomial(&graph).unwrap();
    let permutations: [[usize; 5]; 3] = [[4, 3, 2, 1, 0], [1, 2, 3, 4, 0], [2, 0, 4, 1, 3]];
    for permutation in &permutations {
        let relabeled = graph.relabel(permutation);
        assert_eq!(matching_polynomial(&relabeled).unwrap(), baseline);
    }
}

#[test]
fn test_multigraph_is_a_fatal_input() {
    init_logging();
    let multi = Graph::from_edges(3, &[(0, 1), (1, 0), (1, 2)]);
    assert_eq!(
        matching_polynomial(&multi),
        Err(MatchingError::UnsupportedInput {
            u: 0,
            v: 1,
            multiplicity: 2
        })
    );
}

#[test]
fn test_loops_are_silently_stripped() {
    init_logging();
    let looped = Graph::from_edges(4, &[(0, 0), (0, 1), (2, 2), (2, 3)]);
    assert_eq!(
        matching_polynomial(&looped).unwrap(),
        matching_polynomial(&disjoint_edges(2)).unwrap()
    );
}

#[test]
fn test_coefficients_respect_vertex_parity() {
    init_logging();
    let graph = petersen_graph();
    let poly = matching_polynomial(&graph).unwrap();
    let n = graph.num_vertices();
    for k in 0..poly.len() {
        if (n - k) % 2 == 1 {
            assert_eq!(poly.coeff(k), 0.into(), "coefficient of x^{}", k);
        }
    }
}
