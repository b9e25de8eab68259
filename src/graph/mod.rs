// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple-graph collaborator for the matching-polynomial engine.
//!
//! Vertices are integers `0..n`. Adjacency is held as a word-packed bit
//! matrix (one row of `u64` words per vertex), so `has_edge` is O(1) and the
//! driver's edge-list construction is a cheap row scan.
//!
//! # Multi-edges and loops
//!
//! The builder records the edge *multiset* exactly as inserted, alongside the
//! deduplicating bit matrix. This lets the driver reject multigraphs with a
//! precise error ([`Graph::parallel_edge`]) and strip self-loops
//! ([`Graph::without_loops`]) before any computation, while all query
//! operations (`degree`, `complement`, …) remain defined on the underlying
//! simple graph.
//!
//! # Mutation model
//!
//! Query operations never mutate. `relabel`, `complement` and
//! `without_loops` return fresh copies; the driver never touches the caller's
//! graph.

/// An undirected graph on vertices `0..n` with bit-matrix adjacency.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Number of vertices.
    n: usize,
    /// Words per adjacency row.
    row_words: usize,
    /// Bit matrix, `n * row_words` words. Bit `v` of row `u` means `u ~ v`.
    adj: Vec<u64>,
    /// Edge multiset as inserted, each pair normalized to `(min, max)`.
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Create an edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        let row_words = n.div_ceil(64);
        Self {
            n,
            row_words,
            adj: vec![0u64; n * row_words],
            edges: Vec::new(),
        }
    }

    /// Create a graph from an edge list.
    ///
    /// # Panics
    ///
    /// Panics if any endpoint is `>= n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Add an edge (or loop) between `u` and `v`.
    ///
    /// Parallel insertions are recorded and later rejected by the driver;
    /// they are not collapsed here.
    ///
    /// # Panics
    ///
    /// Panics if `u >= n` or `v >= n`.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.n, "vertex out of range: {}", u);
        assert!(v < self.n, "vertex out of range: {}", v);
        let (a, b) = if u <= v { (u, v) } else { (v, u) };
        self.edges.push((a, b));
        self.set_bit(a, b);
        self.set_bit(b, a);
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Number of edges as inserted (parallel copies and loops included).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether `u` and `v` are adjacent. `has_edge(u, u)` reports a loop.
    ///
    /// # Panics
    ///
    /// Panics if `u >= n` or `v >= n`.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        assert!(u < self.n, "vertex out of range: {}", u);
        assert!(v < self.n, "vertex out of range: {}", v);
        self.adj[u * self.row_words + v / 64] & (1u64 << (v % 64)) != 0
    }

    /// Edge density: edges divided by the maximum `n(n-1)/2`.
    ///
    /// Graphs with fewer than two vertices have density 0.
    pub fn density(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let max_edges = self.n * (self.n - 1) / 2;
        self.edges.len() as f64 / max_edges as f64
    }

    /// Degree of `v` in the underlying simple graph.
    pub fn degree(&self, v: usize) -> usize {
        assert!(v < self.n, "vertex out of range: {}", v);
        let row = &self.adj[v * self.row_words..(v + 1) * self.row_words];
        row.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// `(vertex, degree)` pairs for all vertices, in vertex order.
    pub fn degree_sequence(&self) -> Vec<(usize, usize)> {
        (0..self.n).map(|v| (v, self.degree(v))).collect()
    }

    /// The raw edge multiset, each pair normalized to `(min, max)`.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Find a vertex pair with parallel edges, with its multiplicity.
    ///
    /// Returns the first duplicated pair in normalized sort order, or `None`
    /// if the graph is multi-edge free. Repeated loops on one vertex count.
    pub fn parallel_edge(&self) -> Option<(usize, usize, usize)> {
        let mut sorted = self.edges.clone();
        sorted.sort_unstable();
        let mut run = 1;
        for window in sorted.windows(2) {
            if window[0] == window[1] {
                run += 1;
            } else if run > 1 {
                return Some((window[0].0, window[0].1, run));
            } else {
                run = 1;
            }
        }
        if run > 1 {
            let &(u, v) = sorted.last().unwrap();
            return Some((u, v, run));
        }
        None
    }

    /// Whether any vertex pair carries more than one edge.
    pub fn has_multiple_edges(&self) -> bool {
        self.parallel_edge().is_some()
    }

    /// Whether the graph has any self-loop.
    pub fn has_loops(&self) -> bool {
        self.edges.iter().any(|&(u, v)| u == v)
    }

    /// A copy with all self-loops removed.
    pub fn without_loops(&self) -> Graph {
        let kept: Vec<(usize, usize)> = self
            .edges
            .iter()
            .copied()
            .filter(|&(u, v)| u != v)
            .collect();
        Graph::from_edges(self.n, &kept)
    }

    /// A copy with vertex `v` renamed to `mapping[v]`.
    ///
    /// # Panics
    ///
    /// Panics if `mapping` is not a permutation of `0..n`.
    pub fn relabel(&self, mapping: &[usize]) -> Graph {
        assert_eq!(mapping.len(), self.n, "relabel mapping has wrong length");
        let mut seen = vec![false; self.n];
        for &image in mapping {
            assert!(image < self.n, "relabel image out of range: {}", image);
            assert!(!seen[image], "relabel mapping is not a permutation");
            seen[image] = true;
        }
        let relabeled: Vec<(usize, usize)> = self
            .edges
            .iter()
            .map(|&(u, v)| (mapping[u], mapping[v]))
            .collect();
        Graph::from_edges(self.n, &relabeled)
    }

    /// The simple complement: `u ~ v` exactly where this graph has no edge.
    ///
    /// Never introduces loops; parallel edges in this graph are ignored (the
    /// complement of any graph is simple).
    pub fn complement(&self) -> Graph {
        let mut complement = Graph::new(self.n);
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if !self.has_edge(u, v) {
                    complement.add_edge(u, v);
                }
            }
        }
        complement
    }

    #[inline]
    fn set_bit(&mut self, u: usize, v: usize) {
        self.adj[u * self.row_words + v / 64] |= 1u64 << (v % 64);
    }
}

/// Equality as labeled graphs: same vertex count, same edge multiset.
/// Insertion order is irrelevant.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.n != other.n {
            return false;
        }
        let mut mine = self.edges.clone();
        let mut theirs = other.edges.clone();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl Eq for Graph {}
