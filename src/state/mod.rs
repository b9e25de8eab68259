// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-call mutable state.
//!
//! Unlike the memo tier, everything here is exclusively owned by one
//! top-level driver call: the edge arena is allocated when the call starts
//! and dropped on every exit path, so concurrent computations never share
//! mutable state.

pub mod arena;

pub use arena::EdgeArena;
