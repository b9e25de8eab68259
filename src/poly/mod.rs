// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact single-variable integer polynomials.
//!
//! Matching-polynomial coefficients count matchings, which grow factorially
//! with graph size, so coefficients are arbitrary-precision integers
//! ([`num_bigint::BigInt`]). The representation is dense: `coeffs[k]` is the
//! coefficient of `x^k`.
//!
//! Two invariants matter for the rest of the crate:
//!
//! - The coefficient vector is never empty (the zero polynomial is `[0]`).
//! - Trailing zero coefficients are legal and preserved. The driver returns a
//!   polynomial with slots `0..=n` for an `n`-vertex graph, even when high
//!   coefficients are zero; [`IntPoly::degree`] skips trailing zeros, and
//!   equality ignores them.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A dense polynomial with [`BigInt`] coefficients, indexed by exponent.
#[derive(Debug, Clone)]
pub struct IntPoly {
    /// Coefficients, `coeffs[k]` for `x^k`. Never empty.
    coeffs: Vec<BigInt>,
}

impl IntPoly {
    /// The zero polynomial with coefficient slots `0..=degree`.
    pub fn zeros(degree: usize) -> Self {
        Self {
            coeffs: vec![BigInt::zero(); degree + 1],
        }
    }

    /// Build a polynomial from its coefficient vector.
    ///
    /// An empty vector yields the zero polynomial.
    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        if coeffs.is_empty() {
            return Self::zeros(0);
        }
        Self { coeffs }
    }

    /// Build a polynomial from small integer coefficients (test convenience).
    pub fn from_i64_coeffs(coeffs: &[i64]) -> Self {
        Self::from_coeffs(coeffs.iter().map(|&c| BigInt::from(c)).collect())
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self {
            coeffs: vec![BigInt::one()],
        }
    }

    /// The monomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![BigInt::zero(), BigInt::one()],
        }
    }

    /// The coefficient of `x^k` (zero beyond the stored slots).
    pub fn coeff(&self, k: usize) -> BigInt {
        self.coeffs.get(k).cloned().unwrap_or_else(BigInt::zero)
    }

    /// All stored coefficient slots, lowest exponent first.
    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Number of stored coefficient slots (degree bound + 1).
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True if there are no stored slots. Never true by construction.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The degree: highest exponent with a nonzero coefficient.
    ///
    /// The zero polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// True if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Add `scale · other` into `self`, growing the slot count as needed.
    ///
    /// This is the only compound operation the driver needs: the complement
    /// combination is a sum of scaled complete-graph polynomials.
    pub fn scaled_add(&mut self, other: &IntPoly, scale: &BigInt) {
        if scale.is_zero() {
            return;
        }
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize_with(other.coeffs.len(), BigInt::zero);
        }
        for (slot, c) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *slot += c * scale;
        }
    }

    /// Evaluate at `x` by Horner's rule.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }
}

/// Equality up to trailing zero coefficients.
impl PartialEq for IntPoly {
    fn eq(&self, other: &Self) -> bool {
        let longest = self.coeffs.len().max(other.coeffs.len());
        (0..longest).all(|k| self.coeff(k) == other.coeff(k))
    }
}

impl Eq for IntPoly {}

/// Conventional rendering, highest exponent first: `x^3 - 3*x`.
impl fmt::Display for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for k in (0..=self.degree()).rev() {
            let c = &self.coeffs[k];
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
                first = false;
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let magnitude = c.abs();
            match k {
                0 => write!(f, "{}", magnitude)?,
                _ => {
                    if !magnitude.is_one() {
                        write!(f, "{}*", magnitude)?;
                    }
                    if k == 1 {
                        write!(f, "x")?;
                    } else {
                        write!(f, "x^{}", k)?;
                    }
                }
            }
        }
        Ok(())
    }
}
