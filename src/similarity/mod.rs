//! User similarity computation.
//!
//! This module provides cosine similarity between interaction vectors and
//! the all-pairs [`UserSimilarity`] table built from an
//! [`InteractionMatrix`](crate::interaction::InteractionMatrix).
//!
//! # Quick Start
//!
//! ```
//! use sugerir::similarity::cosine_similarity;
//! use sugerir::primitives::Vector;
//!
//! let a = Vector::from_slice(&[1.0, 2.0, 0.0]);
//! let b = Vector::from_slice(&[2.0, 4.0, 0.0]);
//!
//! let sim = cosine_similarity(&a, &b).unwrap();
//! assert!((sim - 1.0).abs() < 1e-6); // same direction
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SugerirError};
use crate::interaction::InteractionMatrix;
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Measures the cosine of the angle between the vectors, insensitive to
/// magnitude. For the non-negative interaction vectors this crate produces,
/// the result lands in [0, 1].
///
/// If either vector is the zero vector, the similarity is defined as 0.0,
/// including the self-similarity of a zero vector. This is a deliberate
/// convention to keep division by zero and NaN out of the similarity table,
/// not an error.
///
/// # Errors
///
/// Returns [`SugerirError::DimensionMismatch`] if the lengths differ, or
/// [`SugerirError::EmptyInput`] for empty vectors.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::cosine_similarity;
/// use sugerir::primitives::Vector;
///
/// let a = Vector::from_slice(&[1.0, 0.0]);
/// let b = Vector::from_slice(&[0.0, 1.0]);
/// let sim = cosine_similarity(&a, &b).unwrap();
/// assert!(sim.abs() < 1e-6); // orthogonal
/// ```
pub fn cosine_similarity(a: &Vector, b: &Vector) -> Result<f32> {
    if a.len() != b.len() {
        return Err(SugerirError::dimension_mismatch(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(SugerirError::empty_input("similarity vectors"));
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(a.dot(b) / (norm_a * norm_b))
}

/// Square, symmetric all-pairs user similarity table.
///
/// Rows and columns follow the same ascending user-id ordering as the
/// interaction matrix the table was built from. The diagonal is 1.0 for
/// every user with at least one interaction and 0.0 for a zero row (see
/// [`cosine_similarity`]). Recomputed from scratch whenever the interaction
/// matrix changes; there is no incremental update.
///
/// Pairwise computation is O(U² · I) time and O(U²) space. That is fine at
/// the target scale of hundreds of users and is this table's known scaling
/// limit; large-U optimization is out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSimilarity {
    values: Matrix,
    user_ids: Vec<i64>,
}

impl UserSimilarity {
    /// Computes the all-pairs cosine similarity table.
    ///
    /// Only the upper triangle is computed; the lower triangle is mirrored.
    /// Row blocks run in parallel; results are positioned by index, so the
    /// outcome is identical to the sequential computation.
    #[must_use]
    pub fn from_interactions(interactions: &InteractionMatrix) -> Self {
        let n = interactions.n_users();
        let table = interactions.values();

        let norms: Vec<f32> = (0..n)
            .map(|i| table.row_slice(i).iter().map(|x| x * x).sum::<f32>().sqrt())
            .collect();

        // Row i holds similarities to users i..n (the upper-triangle tail).
        let tails: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let row_i = table.row_slice(i);
                (i..n)
                    .map(|j| {
                        if i == j {
                            return if norms[i] > 0.0 { 1.0 } else { 0.0 };
                        }
                        if norms[i] == 0.0 || norms[j] == 0.0 {
                            return 0.0;
                        }
                        let dot: f32 = row_i
                            .iter()
                            .zip(table.row_slice(j))
                            .map(|(a, b)| a * b)
                            .sum();
                        dot / (norms[i] * norms[j])
                    })
                    .collect()
            })
            .collect();

        let mut values = Matrix::zeros(n, n);
        for (i, tail) in tails.iter().enumerate() {
            for (offset, &sim) in tail.iter().enumerate() {
                let j = i + offset;
                values.set(i, j, sim);
                values.set(j, i, sim);
            }
        }

        Self {
            values,
            user_ids: interactions.user_ids().to_vec(),
        }
    }

    /// Returns the number of users on each axis.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.values.n_rows()
    }

    /// User ids in row order (ascending), matching the interaction matrix.
    #[must_use]
    pub fn user_ids(&self) -> &[i64] {
        &self.user_ids
    }

    /// Similarity between two users by dense index.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values.get(i, j)
    }

    /// Similarity row for a dense user index as a borrowed slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row_slice(&self, i: usize) -> &[f32] {
        self.values.row_slice(i)
    }

    /// Similarity row for a user id (inspection boundary).
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::UnknownUser`] if the id is absent.
    pub fn user_row(&self, user_id: i64) -> Result<Vector> {
        let idx = self
            .user_ids
            .binary_search(&user_id)
            .map_err(|_| SugerirError::UnknownUser { user_id })?;
        Ok(Vector::from_slice(self.row_slice(idx)))
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_similarity_contract.rs"]
mod similarity_contract;
