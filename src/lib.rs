// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact matching polynomials of simple graphs.
//!
//! The matching polynomial of an `n`-vertex graph `G` is
//! `M(G, x) = Σ_k (−1)^k m_k x^{n−2k}`, where `m_k` counts the matchings
//! with exactly `k` edges. This crate computes it with exact integer
//! coefficients by deletion-contraction recursion, with a complement
//! shortcut that makes dense graphs cheap.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO data (shared, append-only)
//!
//! The family of complete-graph matching polynomials `M(K_0), M(K_1), …`
//! used by the complement shortcut, grown on demand by a three-term
//! recurrence and never invalidated. A process-wide instance backs
//! [`complete_poly`] and [`matching_polynomial`]; tests inject their own
//! [`CompleteCache`] through [`matching_polynomial_with`].
//!
//! ## Tier 2: Per-call data (exclusively owned)
//!
//! State created for one computation and dropped on every exit path:
//! - [`state::EdgeArena`] - one pair of endpoint rows per recursion depth
//! - the unsigned coefficient accumulator the recursion adds into
//!
//! # Algorithm
//!
//! A computation proceeds in three phases:
//!
//! 1. **Validation**: reject multigraphs, strip self-loops.
//! 2. **Complement decision**: above the density threshold, compute the
//!    complement's polynomial instead and combine it with cached
//!    complete-graph polynomials.
//! 3. **Recursion**: relabel vertices by ascending degree, lay the sorted
//!    edge list into the arena, run the deletion-contraction recursion with
//!    canonical-edge pruning, then apply the parity sign pass.
//!
//! # Concurrency
//!
//! The recursive core is single-threaded and CPU-bound. Concurrent
//! computations are safe: per-call state is never shared, and access to the
//! process-wide cache is serialized by a mutex.
//!
//! # References
//!
//! - Godsil, C. D. (1993). "Algebraic Combinatorics", chapter 1 — matching
//!   polynomial theory and the complete-graph recurrence.
//! - Farrell, E. J. (1979). "An introduction to matching polynomials."
//!   Journal of Combinatorial Theory, Series B.

pub mod error;
pub mod graph;
pub mod matching;
pub mod memo;
pub mod poly;
pub mod state;

// Re-export commonly used types
pub use error::MatchingError;
pub use graph::Graph;
pub use matching::{matching_polynomial, matching_polynomial_with, COMPLEMENT_DENSITY_THRESHOLD};
pub use memo::{complete_poly, CompleteCache};
pub use poly::IntPoly;
