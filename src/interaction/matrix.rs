//! Dense user-by-item matrix with id-to-index mappings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::InteractionCount;
use crate::error::{Result, SugerirError};
use crate::primitives::{Matrix, Vector};

/// Dense user-by-item interaction matrix.
///
/// Rows are users and columns are items, both in ascending id order. The
/// axis ordering is a public contract: downstream stages index by position
/// and only translate back to ids at the query boundary. Absent pairs are
/// zero. Immutable after construction.
///
/// # Examples
///
/// ```
/// use sugerir::interaction::{InteractionAggregator, InteractionEvent, InteractionMatrix};
///
/// let events = vec![
///     InteractionEvent::new(7, 100),
///     InteractionEvent::new(3, 200),
///     InteractionEvent::new(7, 200),
/// ];
/// let aggregated = InteractionAggregator::new().aggregate(&events).unwrap();
/// let matrix = InteractionMatrix::from_counts(&aggregated.counts).unwrap();
///
/// // Users sorted ascending: row 0 is user 3, row 1 is user 7.
/// assert_eq!(matrix.user_ids(), &[3, 7]);
/// assert_eq!(matrix.item_ids(), &[100, 200]);
/// assert_eq!(matrix.get(3, 100), Some(0.0));
/// assert_eq!(matrix.get(7, 200), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionMatrix {
    values: Matrix,
    user_ids: Vec<i64>,
    item_ids: Vec<i64>,
    user_index: HashMap<i64, usize>,
    item_index: HashMap<i64, usize>,
}

impl InteractionMatrix {
    /// Builds the dense matrix from aggregated per-pair totals.
    ///
    /// Distinct user and item ids are collected and sorted ascending, and
    /// each total is written at its (row, column) position. Duplicate pairs
    /// in the input accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::EmptyInput`] if `counts` is empty; callers
    /// must treat this as "no recommendations possible".
    pub fn from_counts(counts: &[InteractionCount]) -> Result<Self> {
        if counts.is_empty() {
            return Err(SugerirError::empty_input("interaction counts"));
        }

        let mut user_ids: Vec<i64> = counts.iter().map(|c| c.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let mut item_ids: Vec<i64> = counts.iter().map(|c| c.item_id).collect();
        item_ids.sort_unstable();
        item_ids.dedup();

        let user_index: HashMap<i64, usize> = user_ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        let item_index: HashMap<i64, usize> = item_ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut values = Matrix::zeros(user_ids.len(), item_ids.len());
        for count in counts {
            let row = user_index[&count.user_id];
            let col = item_index[&count.item_id];
            values.set(row, col, values.get(row, col) + count.count);
        }

        Ok(Self {
            values,
            user_ids,
            item_ids,
            user_index,
            item_index,
        })
    }

    /// Returns the shape as (n_users, n_items).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Returns the number of users (rows).
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.values.n_rows()
    }

    /// Returns the number of items (columns).
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.values.n_cols()
    }

    /// User ids in row order (ascending).
    #[must_use]
    pub fn user_ids(&self) -> &[i64] {
        &self.user_ids
    }

    /// Item ids in column order (ascending).
    #[must_use]
    pub fn item_ids(&self) -> &[i64] {
        &self.item_ids
    }

    /// Dense row index for a user id, if present.
    #[must_use]
    pub fn user_index(&self, user_id: i64) -> Option<usize> {
        self.user_index.get(&user_id).copied()
    }

    /// Dense column index for an item id, if present.
    #[must_use]
    pub fn item_index(&self, item_id: i64) -> Option<usize> {
        self.item_index.get(&item_id).copied()
    }

    /// User id at a dense row index.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn user_id_at(&self, row: usize) -> i64 {
        self.user_ids[row]
    }

    /// Item id at a dense column index.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn item_id_at(&self, col: usize) -> i64 {
        self.item_ids[col]
    }

    /// Interaction value for a (user, item) id pair; `None` if either id
    /// is unknown.
    #[must_use]
    pub fn get(&self, user_id: i64, item_id: i64) -> Option<f32> {
        let row = self.user_index(user_id)?;
        let col = self.item_index(item_id)?;
        Some(self.values.get(row, col))
    }

    /// Interaction row for a user id as a copied [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::UnknownUser`] if the id is absent.
    pub fn user_row(&self, user_id: i64) -> Result<Vector> {
        let row = self
            .user_index(user_id)
            .ok_or(SugerirError::UnknownUser { user_id })?;
        Ok(self.values.row(row))
    }

    /// Borrowed access to the dense value table.
    #[must_use]
    pub fn values(&self) -> &Matrix {
        &self.values
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
