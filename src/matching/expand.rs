// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The deletion-contraction recursion.
//!
//! `expand` walks the edge arena and accumulates *unsigned* matching counts
//! into the shared coefficient accumulator; the driver reinterprets the signs
//! in a final parity pass. Keeping the recursion sign-free keeps its
//! arithmetic to bare increments.
//!
//! # Branch structure
//!
//! The pivot is always the *last* edge of the current list. Contracting it
//! recurses one depth deeper on the filtered edge list; deleting it is simply
//! the next iteration of the loop with the edge count trimmed by one, reusing
//! the current depth's rows. Call-stack depth is therefore bounded by the
//! contraction depth, at most the original edge count.
//!
//! # Canonical-edge pruning
//!
//! The contraction scan relies on the edge list being sorted by smaller
//! endpoint (the driver constructs it that way and filtering preserves
//! relative order). With pivot `(a, b)`, `a < b`, every edge before the pivot
//! whose smaller endpoint equals `a` — and everything after it — is incident
//! to `a`, so the scan stops at the first such edge. Edges before that point
//! have smaller endpoint `< a < b`, so only their *larger* endpoint needs
//! testing against `a` and `b`.

use crate::state::EdgeArena;
use num_bigint::BigInt;

/// Recursively accumulate matching counts for the current subproblem.
///
/// `acc[k]` receives one contribution per matching leaving `k` vertices
/// uncovered; `nverts` and `nedges` describe the subproblem stored in the
/// arena's depth-`depth` rows.
///
/// Only three accumulator slots are ever written directly: `acc[nverts]`
/// (edge set exhausted), and `acc[3]` / `acc[1]` (three-vertex residue
/// shortcut). Everything else arises from recursive composition.
pub(crate) fn expand(
    arena: &mut EdgeArena,
    acc: &mut [BigInt],
    depth: usize,
    nverts: usize,
    mut nedges: usize,
) {
    // Three vertices support only the empty matching or one single-edge
    // matching per remaining edge; short-circuit the cheapest level.
    if nverts == 3 {
        acc[3] += 1u32;
        acc[1] += nedges as u64;
        return;
    }

    while nedges > 0 {
        // Delete the pivot up front; the contraction scan below only looks
        // at the edges before it.
        nedges -= 1;

        let kept = {
            let ((a_cur, b_cur), (a_next, b_next)) = arena.levels(depth);
            let a = a_cur[nedges];
            let b = b_cur[nedges];

            let mut kept = 0;
            for i in 0..nedges {
                if a_cur[i] == a {
                    // Sorted by smaller endpoint: this and every later edge
                    // is incident to a.
                    break;
                }
                if b_cur[i] != a && b_cur[i] != b {
                    a_next[kept] = a_cur[i];
                    b_next[kept] = b_cur[i];
                    kept += 1;
                }
            }
            kept
        };

        // Contraction branch: both pivot endpoints leave the graph.
        expand(arena, acc, depth + 1, nverts - 2, kept);
    }

    // Edge set exhausted: the empty matching covers nothing.
    acc[nverts] += 1u32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn run(nverts: usize, edges: &[(u32, u32)]) -> Vec<BigInt> {
        let mut arena = EdgeArena::new(edges.len()).unwrap();
        arena.write_initial(edges);
        let mut acc = vec![BigInt::zero(); nverts + 1];
        expand(&mut arena, &mut acc, 0, nverts, edges.len());
        acc
    }

    fn as_i64(acc: &[BigInt]) -> Vec<i64> {
        acc.iter().map(|c| i64::try_from(c).unwrap()).collect()
    }

    #[test]
    fn test_no_edges() {
        assert_eq!(as_i64(&run(5, &[])), vec![0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_single_edge() {
        // One matching covering nothing, one covering both endpoints.
        assert_eq!(as_i64(&run(2, &[(0, 1)])), vec![1, 0, 1]);
    }

    #[test]
    fn test_three_vertex_shortcut() {
        // Triangle: empty matching (x^3 slot) plus one per edge (x^1 slot).
        assert_eq!(as_i64(&run(3, &[(0, 1), (0, 2), (1, 2)])), vec![0, 3, 0, 1]);
    }

    #[test]
    fn test_unsigned_matching_counts() {
        // Path 0-1-2-3: m_0 = 1, m_1 = 3, m_2 = 1, so the unsigned
        // accumulator reads [coeff x^0, x^2, x^4] = [1, 3, 1].
        let acc = as_i64(&run(4, &[(0, 1), (1, 2), (2, 3)]));
        assert_eq!(acc, vec![1, 0, 3, 0, 1]);
    }
}
