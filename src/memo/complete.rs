// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matching polynomials of complete graphs.
//!
//! The complement shortcut rewrites `M(G)` as a combination of `M(Ḡ)` with
//! the matching polynomials of complete graphs `K_0, K_1, K_2, …`. Those are
//! the (signed) Hermite-like family defined by
//!
//! ```text
//! M(K_0) = 1
//! M(K_1) = x
//! M(K_n) = x·M(K_{n-1}) − (n−1)·M(K_{n-2})     for n ≥ 2
//! ```
//!
//! # Growth model
//!
//! The cache is an ordered sequence indexed by vertex count, seeded with the
//! `K_0` and `K_1` entries. A request for an uncached `n` extends the
//! sequence iteratively from the last two entries up to `n`; nothing is ever
//! recomputed or evicted.
//!
//! # Sharing
//!
//! Production code normally goes through the process-wide instance behind
//! [`complete_poly`]; access is serialized by a mutex, which is all the
//! synchronization the append-only growth needs. Tests (and callers wanting
//! isolation) construct their own [`CompleteCache`] and pass it to
//! [`matching_polynomial_with`](crate::matching_polynomial_with).

use crate::poly::IntPoly;
use num_bigint::BigInt;
use num_traits::Zero;
use std::sync::{Mutex, OnceLock};

/// Append-only cache of complete-graph matching polynomials.
///
/// Entry `n` is `M(K_n)`, a degree-`n` polynomial with `n + 1` coefficient
/// slots. The sequence only ever grows.
#[derive(Debug, Clone)]
pub struct CompleteCache {
    polys: Vec<IntPoly>,
}

impl CompleteCache {
    /// Create a cache seeded with the `K_0` and `K_1` base cases.
    pub fn new() -> Self {
        Self {
            polys: vec![IntPoly::one(), IntPoly::x()],
        }
    }

    /// Number of cached entries (always ≥ 2).
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// True if the cache holds no entries. Never true by construction.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// The matching polynomial of `K_n`, extending the cache if needed.
    pub fn get(&mut self, n: usize) -> &IntPoly {
        if n >= self.polys.len() {
            self.extend_to(n);
        }
        &self.polys[n]
    }

    /// Extend the sequence up to entry `n` via the three-term recurrence.
    fn extend_to(&mut self, n: usize) {
        log::debug!(
            "extending complete-graph cache from K_{} to K_{}",
            self.polys.len() - 1,
            n
        );
        for m in self.polys.len()..=n {
            // M(K_m)[k] = M(K_{m-1})[k-1] − (m−1)·M(K_{m-2})[k]
            let factor = BigInt::from(m as u64 - 1);
            let mut coeffs = Vec::with_capacity(m + 1);
            coeffs.push(BigInt::zero());
            coeffs.extend(self.polys[m - 1].coeffs().iter().cloned());
            for (k, c) in self.polys[m - 2].coeffs().iter().enumerate() {
                coeffs[k] -= c * &factor;
            }
            self.polys.push(IntPoly::from_coeffs(coeffs));
        }
    }
}

impl Default for CompleteCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide cache instance, created on first use.
static GLOBAL_CACHE: OnceLock<Mutex<CompleteCache>> = OnceLock::new();

/// Run `body` against the process-wide cache, holding its lock.
pub(crate) fn with_global_cache<T>(body: impl FnOnce(&mut CompleteCache) -> T) -> T {
    let cache = GLOBAL_CACHE.get_or_init(|| Mutex::new(CompleteCache::new()));
    // A panicking extension leaves only fully-built entries behind, so a
    // poisoned cache is still valid and can be reused.
    let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    body(&mut guard)
}

/// The matching polynomial of the complete graph `K_n`.
///
/// Served from the process-wide cache; independently useful and the public
/// face of the cached family.
///
/// # Examples
///
/// ```
/// use matchpoly::{complete_poly, IntPoly};
///
/// assert_eq!(complete_poly(0), IntPoly::one());
/// assert_eq!(complete_poly(3).to_string(), "x^3 - 3*x");
/// ```
pub fn complete_poly(n: usize) -> IntPoly {
    with_global_cache(|cache| cache.get(n).clone())
}
