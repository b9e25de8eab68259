// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized data shared across computations.
//!
//! The only memoized structure the engine needs is the family of
//! complete-graph matching polynomials used by the complement shortcut. It is
//! append-only: entries are computed once, never invalidated, and persist for
//! the life of the process (or of an injected [`CompleteCache`]) so repeated
//! dense-graph computations amortize the cost.

pub mod complete;

pub use complete::{complete_poly, CompleteCache};
