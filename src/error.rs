// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the matching-polynomial engine.
//!
//! All failures are detected synchronously, before or during setup: input
//! validation happens up front and the only fallible resource acquisition is
//! the edge arena allocation. The recursive core itself cannot fail once the
//! arena exists, so no partial polynomial is ever returned on an error path.
//!
//! Caller contract violations (out-of-range vertex indices, malformed relabel
//! mappings) are not represented here; they are programming errors and are
//! checked with assertions at the point of use.

use thiserror::Error;

/// Errors surfaced by [`matching_polynomial`](crate::matching_polynomial).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// The input graph has parallel edges between some vertex pair.
    ///
    /// Multigraphs are rejected before any computation is attempted; the
    /// matching polynomial as implemented here is defined on simple graphs
    /// only. Self-loops are *not* reported through this variant (they are
    /// silently stripped), but a repeated loop on the same vertex is.
    #[error(
        "multigraphs are not supported: {multiplicity} parallel edges between vertices {u} and {v}"
    )]
    UnsupportedInput {
        /// Smaller endpoint of the offending vertex pair.
        u: usize,
        /// Larger endpoint of the offending vertex pair.
        v: usize,
        /// How many copies of the edge were found.
        multiplicity: usize,
    },

    /// Allocating the per-call edge arena failed.
    ///
    /// The arena needs one pair of endpoint rows per recursion depth, which
    /// is quadratic in the edge count; pathologically large graphs can
    /// exhaust memory here. All partially acquired buffers are released
    /// before this error propagates.
    #[error("failed to allocate edge arena for {edges} edges")]
    ResourceExhaustion {
        /// Edge count the arena was sized for.
        edges: usize,
    },
}
