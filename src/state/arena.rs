// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-indexed edge storage for the deletion-contraction recursion.
//!
//! The recursion keeps one edge list per depth: reading the current depth's
//! list while writing the contracted subset into the next depth's. The C
//! ancestry of this algorithm does that with an array of raw pointers indexed
//! by `2·depth`; here it is two flat `Vec<u32>` buffers carved into
//! fixed-stride rows, with `split_at_mut` providing the simultaneous
//! read-lower/write-upper access without aliasing.
//!
//! # Capacity bounds
//!
//! Every row has capacity `num_edges`: no depth can ever hold more edges than
//! the original total. Depth only advances on contraction and each
//! contraction removes at least the pivot edge, so depth `d` holds at most
//! `num_edges − d` edges and the deepest write lands at row `num_edges`;
//! the arena therefore allocates `num_edges + 1` rows per endpoint buffer.
//!
//! # Allocation failure
//!
//! The buffers are quadratic in the edge count, so allocation is the one
//! fallible step of a computation. It uses `try_reserve_exact` and surfaces
//! failure as [`MatchingError::ResourceExhaustion`]; the partially reserved
//! buffer is dropped with the arena.

use crate::error::MatchingError;

/// Pre-allocated per-depth endpoint rows for one recursion.
#[derive(Debug)]
pub struct EdgeArena {
    /// Row capacity: the original edge count.
    stride: usize,
    /// Smaller endpoints, `num_edges + 1` rows of `stride` entries.
    ends_a: Vec<u32>,
    /// Larger endpoints, same shape as `ends_a`.
    ends_b: Vec<u32>,
}

impl EdgeArena {
    /// Allocate an arena for a graph with `num_edges` edges.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingError::ResourceExhaustion`] if the buffers cannot
    /// be allocated (including arithmetic overflow of the buffer size).
    pub fn new(num_edges: usize) -> Result<Self, MatchingError> {
        let exhausted = || MatchingError::ResourceExhaustion { edges: num_edges };
        let total = num_edges
            .checked_add(1)
            .and_then(|levels| levels.checked_mul(num_edges))
            .ok_or_else(exhausted)?;

        let mut ends_a = Vec::new();
        ends_a.try_reserve_exact(total).map_err(|_| exhausted())?;
        ends_a.resize(total, 0);

        let mut ends_b = Vec::new();
        ends_b.try_reserve_exact(total).map_err(|_| exhausted())?;
        ends_b.resize(total, 0);

        Ok(Self {
            stride: num_edges,
            ends_a,
            ends_b,
        })
    }

    /// Row capacity (the original edge count).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.stride
    }

    /// Write the full edge list into the depth-0 rows.
    ///
    /// # Panics
    ///
    /// Panics if `edges.len()` differs from the arena capacity.
    pub fn write_initial(&mut self, edges: &[(u32, u32)]) {
        assert_eq!(
            edges.len(),
            self.stride,
            "initial edge list must fill the depth-0 rows"
        );
        for (i, &(a, b)) in edges.iter().enumerate() {
            self.ends_a[i] = a;
            self.ends_b[i] = b;
        }
    }

    /// The depth-`d` rows read-only, with the depth-`d+1` rows mutable.
    ///
    /// Returns `((a_cur, b_cur), (a_next, b_next))`. The current rows are
    /// full-capacity slices; callers track live edge counts themselves.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is the last row (there is no `depth + 1` to write).
    #[inline]
    pub fn levels(&mut self, depth: usize) -> ((&[u32], &[u32]), (&mut [u32], &mut [u32])) {
        assert!(depth < self.stride, "arena depth out of range: {}", depth);
        let start = depth * self.stride;
        let mid = (depth + 1) * self.stride;
        let (lower_a, upper_a) = self.ends_a.split_at_mut(mid);
        let (lower_b, upper_b) = self.ends_b.split_at_mut(mid);
        (
            (&lower_a[start..], &lower_b[start..]),
            (&mut upper_a[..self.stride], &mut upper_b[..self.stride]),
        )
    }

    /// The depth-`d` rows read-only (test support).
    #[cfg(test)]
    pub fn level(&self, depth: usize) -> (&[u32], &[u32]) {
        let start = depth * self.stride;
        let end = start + self.stride;
        (&self.ends_a[start..end], &self.ends_b[start..end])
    }
}
