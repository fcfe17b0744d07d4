//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};

/// A 1D vector of `f32` values.
///
/// Rows of the interaction matrix are handed around as `Vector`s; the
/// similarity engine works on them through [`dot`](Vector::dot) and
/// [`norm`](Vector::norm).
///
/// # Examples
///
/// ```
/// use sugerir::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 2.0]);
/// assert_eq!(v.len(), 3);
/// assert!((v.norm() - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector from an owned `Vec`.
    #[must_use]
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Creates a zero vector of the given length.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Gets the element at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn get(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Sums all elements.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Dot product with another vector of the same length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ; callers validate lengths first.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        assert_eq!(self.data.len(), other.data.len());
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean (L2) norm.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Returns true if every element is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
