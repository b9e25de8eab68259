// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matching-polynomial driver.
//!
//! The driver owns everything around the recursive core: input validation,
//! loop stripping, the complement decision, degree-ascending relabeling,
//! edge-list construction, and the final sign pass that turns the unsigned
//! accumulator into the classical matching polynomial
//! `M(G, x) = Σ_k (−1)^k m_k x^{n−2k}`.
//!
//! # Phases
//!
//! 1. Reject multigraphs ([`MatchingError::UnsupportedInput`]) before any
//!    computation; strip self-loops silently.
//! 2. If the complement optimization is on and density exceeds
//!    [`COMPLEMENT_DENSITY_THRESHOLD`], compute `M(Ḡ)` (the complement's
//!    density is below the threshold, so that computation recurses directly)
//!    and combine it with cached complete-graph polynomials.
//! 3. Otherwise relabel vertices by ascending degree (high-degree vertices
//!    get high labels, which makes the pruning scan in `expand` terminate
//!    early more often), build the sorted edge list, run the recursion
//!    against a zeroed accumulator, and apply the parity sign pass.
//!
//! # Resources
//!
//! The edge arena and the accumulator are created per call and dropped on
//! every exit path; only the complete-graph cache outlives a call.

pub(crate) mod expand;

use crate::error::MatchingError;
use crate::graph::Graph;
use crate::memo::complete::with_global_cache;
use crate::memo::CompleteCache;
use crate::poly::IntPoly;
use crate::state::EdgeArena;
use num_bigint::BigInt;
use num_traits::Zero;

/// Edge density above which the complement shortcut pays off.
///
/// Tunable: correctness never depends on the exact value, only the cost of
/// the recursion does. 1/2 is the classical break-even point.
pub const COMPLEMENT_DENSITY_THRESHOLD: f64 = 0.5;

/// The matching polynomial of `graph`, with the complement optimization on
/// and the process-wide complete-graph cache.
///
/// The result has coefficient slots `0..=n` for an `n`-vertex graph and is
/// monic of degree `n`.
///
/// # Errors
///
/// - [`MatchingError::UnsupportedInput`] if the graph has parallel edges.
/// - [`MatchingError::ResourceExhaustion`] if the edge arena cannot be
///   allocated.
///
/// # Examples
///
/// ```
/// use matchpoly::{matching_polynomial, Graph};
///
/// let triangle = Graph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
/// assert_eq!(matching_polynomial(&triangle)?.to_string(), "x^3 - 3*x");
/// # Ok::<(), matchpoly::MatchingError>(())
/// ```
pub fn matching_polynomial(graph: &Graph) -> Result<IntPoly, MatchingError> {
    with_global_cache(|cache| matching_polynomial_with(graph, true, cache))
}

/// The matching polynomial of `graph`, with explicit control over the
/// complement optimization and the complete-graph cache.
///
/// Disabling `use_complement` forces the direct recursion regardless of
/// density; the result is identical either way. Passing a private
/// [`CompleteCache`] isolates the call from the process-wide instance.
///
/// # Errors
///
/// As [`matching_polynomial`].
pub fn matching_polynomial_with(
    graph: &Graph,
    use_complement: bool,
    cache: &mut CompleteCache,
) -> Result<IntPoly, MatchingError> {
    if let Some((u, v, multiplicity)) = graph.parallel_edge() {
        return Err(MatchingError::UnsupportedInput { u, v, multiplicity });
    }

    let graph = if graph.has_loops() {
        log::debug!("stripping self-loops before matching-polynomial computation");
        graph.without_loops()
    } else {
        graph.clone()
    };

    let n = graph.num_vertices();
    assert!(n <= u32::MAX as usize, "graph too large: {} vertices", n);

    if use_complement && graph.density() > COMPLEMENT_DENSITY_THRESHOLD {
        log::debug!(
            "density {:.3} above {}; recursing on the complement",
            graph.density(),
            COMPLEMENT_DENSITY_THRESHOLD
        );
        let complement = matching_polynomial_with(&graph.complement(), use_complement, cache)?;
        return Ok(combine_with_complement(n, &complement, cache));
    }

    // Low-degree vertices get low labels; see the module docs.
    let mut order = graph.degree_sequence();
    order.sort_by_key(|&(_, degree)| degree);
    let mut mapping = vec![0usize; n];
    for (new_label, &(old_label, _)) in order.iter().enumerate() {
        mapping[old_label] = new_label;
    }
    let graph = graph.relabel(&mapping);

    // All edges with u < v, sorted by smaller endpoint then larger: the
    // ordering the pruning scan in expand() depends on.
    let mut edges: Vec<(u32, u32)> = Vec::with_capacity(graph.num_edges());
    for u in 0..n {
        for v in (u + 1)..n {
            if graph.has_edge(u, v) {
                edges.push((u as u32, v as u32));
            }
        }
    }
    debug_assert_eq!(edges.len(), graph.num_edges());

    let mut arena = EdgeArena::new(edges.len())?;
    arena.write_initial(&edges);

    let mut acc = vec![BigInt::zero(); n + 1];
    expand::expand(&mut arena, &mut acc, 0, n, edges.len());

    // Parity sign pass: coefficient of x^i picks up (−1)^((n−i)/2). Only
    // same-parity slots are nonzero, so the integer division is exact where
    // it matters.
    for (i, coeff) in acc.iter_mut().enumerate() {
        if ((n - i) / 2) % 2 == 1 {
            *coeff = -std::mem::take(coeff);
        }
    }
    Ok(IntPoly::from_coeffs(acc))
}

/// Combine `M(Ḡ)` with cached complete-graph polynomials:
/// `M(G) = Σ_{i=0}^{⌊n/2⌋} (−1)^i · M(K_{n−2i}) · [x^{n−2i}] M(Ḡ)`.
fn combine_with_complement(n: usize, complement: &IntPoly, cache: &mut CompleteCache) -> IntPoly {
    let mut result = IntPoly::zeros(n);
    for i in 0..=(n / 2) {
        let k = n - 2 * i;
        let mut scale = complement.coeff(k);
        if scale.is_zero() {
            continue;
        }
        if i % 2 == 1 {
            scale = -scale;
        }
        let complete = cache.get(k).clone();
        result.scaled_add(&complete, &scale);
    }
    result
}
