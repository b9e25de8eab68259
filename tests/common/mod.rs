// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)] // Not every suite uses every builder.

use matchpoly::{Graph, IntPoly};
use num_bigint::BigInt;
use num_traits::Zero;

/// Route `log::debug!` output from the driver through the test harness.
///
/// Safe to call from every test; only the first call in the process wins.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The complete graph `K_n`.
pub fn complete_graph(n: usize) -> Graph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    Graph::from_edges(n, &edges)
}

/// The path on `n` vertices (`n − 1` edges).
pub fn path_graph(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    Graph::from_edges(n, &edges)
}

/// The cycle on `n` vertices. Requires `n >= 3`.
pub fn cycle_graph(n: usize) -> Graph {
    assert!(n >= 3, "cycles need at least 3 vertices");
    let mut edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    edges.push((n - 1, 0));
    Graph::from_edges(n, &edges)
}

/// `k` pairwise disjoint edges on `2k` vertices (a perfect matching).
pub fn disjoint_edges(k: usize) -> Graph {
    let edges: Vec<_> = (0..k).map(|i| (2 * i, 2 * i + 1)).collect();
    Graph::from_edges(2 * k, &edges)
}

/// The Petersen graph: outer 5-cycle, inner 5-cycle with step 2, spokes.
pub fn petersen_graph() -> Graph {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5)); // outer cycle
        edges.push((5 + i, 5 + (i + 2) % 5)); // inner pentagram
        edges.push((i, 5 + i)); // spoke
    }
    Graph::from_edges(10, &edges)
}

/// Build a graph on `n` vertices from a bitmask over the `u < v` pairs in
/// lexicographic order. Used by the property tests to enumerate graphs.
pub fn graph_from_bitmask(n: usize, mut mask: u64) -> Graph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if mask & 1 == 1 {
                edges.push((u, v));
            }
            mask >>= 1;
        }
    }
    Graph::from_edges(n, &edges)
}

/// Count `k`-edge matchings by brute force over all edge subsets.
///
/// Only usable on small graphs (cost `2^edges`), but entirely independent of
/// the deletion-contraction recursion, which is the point.
pub fn matching_counts(graph: &Graph) -> Vec<BigInt> {
    let edges: Vec<(usize, usize)> = graph.edges().to_vec();
    assert!(edges.len() <= 20, "brute force limited to 20 edges");
    let n = graph.num_vertices();
    let mut counts = vec![BigInt::zero(); n / 2 + 1];
    for mask in 0u32..(1 << edges.len()) {
        let mut covered = vec![false; n];
        let mut valid = true;
        let mut size = 0;
        for (i, &(u, v)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            if covered[u] || covered[v] {
                valid = false;
                break;
            }
            covered[u] = true;
            covered[v] = true;
            size += 1;
        }
        if valid {
            counts[size] += 1u32;
        }
    }
    counts
}

/// The matching polynomial assembled directly from brute-force counts:
/// `Σ_k (−1)^k m_k x^{n−2k}`.
pub fn reference_matching_polynomial(graph: &Graph) -> IntPoly {
    let n = graph.num_vertices();
    let mut coeffs = vec![BigInt::zero(); n + 1];
    for (k, count) in matching_counts(graph).iter().enumerate() {
        let mut signed = count.clone();
        if k % 2 == 1 {
            signed = -signed;
        }
        coeffs[n - 2 * k] = signed;
    }
    IntPoly::from_coeffs(coeffs)
}
