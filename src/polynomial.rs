//! Coefficient vectors and the polynomials they describe.
//!
//! A [`Coefficients`] value is the ordered list `[c0, c1, c2, ...]` where
//! `ci` multiplies `x^i`. The empty vector is the zero function.
//!
//! ```
//! use polywalk::polynomial::Coefficients;
//!
//! let p = Coefficients::from(vec![1.0, 0.0, -0.5]);
//! assert_eq!(p.eval(2.0), 1.0 - 0.5 * 4.0);
//! assert_eq!(p.to_string(), "1 + 0*x^1 + -0.5*x^2");
//! ```

use core::fmt;
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered coefficient vector; index `i` is the coefficient of `x^i`.
///
/// Walks never edit a vector in place: every proposal builds a new one from
/// the current vector, and the current vector is replaced wholesale on
/// acceptance.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Coefficients(Vec<f64>);

impl Coefficients {
    /// The empty vector, i.e. the zero function.
    #[must_use]
    pub fn zero() -> Self {
        Self(Vec::new())
    }

    /// Draw `len` coefficients uniformly from `[0, 1)`.
    #[must_use]
    pub fn random(len: usize, rng: &mut fastrand::Rng) -> Self {
        Self((0..len).map(|_| rng.f64()).collect())
    }

    /// Evaluate the polynomial at `x` using Horner's rule.
    ///
    /// Large `|x|` with high-degree terms may overflow to an infinity or NaN;
    /// that is left for the caller to interpret.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// The highest power of `x` in the vector, or `None` for the zero vector.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// Consume the wrapper and return the raw coefficients.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Returns `true` if both vectors hold the same coefficients bit for bit.
    ///
    /// Unlike `==`, a NaN coefficient matches an identical NaN.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    /// Human-readable expression `c0 + c1*x^1 + c2*x^2 + ...`, ready to paste
    /// into a graphing calculator.
    #[must_use]
    pub fn graph_expression(&self) -> String {
        if self.0.is_empty() {
            return "0".to_owned();
        }
        self.0
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    format!("{c}")
                } else {
                    format!("{c}*x^{i}")
                }
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub(crate) fn pop(&mut self) -> Option<f64> {
        self.0.pop()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl Deref for Coefficients {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Coefficients {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Coefficients {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Coefficients {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.graph_expression())
    }
}
