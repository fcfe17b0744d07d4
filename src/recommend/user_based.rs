//! User-based collaborative filtering recommender.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SugerirError};
use crate::interaction::{
    Aggregated, InteractionAggregator, InteractionCount, InteractionEvent, InteractionMatrix,
    ValidationPolicy,
};
use crate::primitives::Vector;
use crate::similarity::UserSimilarity;
use crate::traits::Recommender;

/// Default number of items returned by a query.
pub const DEFAULT_TOP_N: usize = 5;

/// Default number of nearest neighbors consulted per query.
pub const DEFAULT_NEIGHBORHOOD: usize = 10;

/// User-based collaborative filtering recommender.
///
/// Owns the full batch pipeline: aggregated events become a dense
/// user-by-item matrix, an all-pairs similarity table is computed once at
/// fit time, and queries rank the neighborhood's consumption. Both tables
/// are immutable after [`fit`](UserBasedRecommender::fit); each instance is
/// independent, so tests and callers can build as many as they like.
///
/// # Algorithm
///
/// For a query `recommend(user, top_n, neighborhood_size)`:
///
/// 1. Look the user up in the matrix's row index.
/// 2. Sort the other users by descending similarity, ties broken by
///    ascending user id.
/// 3. Keep the first `neighborhood_size` users.
/// 4. Sum the neighborhood's interaction rows column-wise.
/// 5. Drop every item the target user already owns, and items with no
///    positive neighbor support.
/// 6. Sort by descending aggregated score, ties broken by ascending item
///    id, and return the first `top_n` ids.
///
/// # Examples
///
/// ```
/// use sugerir::interaction::InteractionEvent;
/// use sugerir::recommend::UserBasedRecommender;
///
/// let events = vec![
///     InteractionEvent::new(1, 10),
///     InteractionEvent::new(2, 10),
///     InteractionEvent::new(2, 20),
/// ];
/// let recommender = UserBasedRecommender::fit(&events).unwrap();
/// assert_eq!(recommender.recommend(1, 5, 10).unwrap(), vec![20]);
/// ```
///
/// # Performance
///
/// - Fit: O(U² · I) time, O(U² + U·I) space
/// - Query: O(U log U + I log I)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBasedRecommender {
    interactions: InteractionMatrix,
    similarity: UserSimilarity,
    skipped: usize,
}

impl UserBasedRecommender {
    /// Builds the pipeline from raw events with the default
    /// abort-on-invalid policy.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidEvent`] for a malformed event, or
    /// [`SugerirError::EmptyInput`] if no usable interactions remain.
    pub fn fit(events: &[InteractionEvent]) -> Result<Self> {
        Self::fit_with_policy(events, ValidationPolicy::Abort)
    }

    /// Builds the pipeline from raw events under an explicit validation
    /// policy. Under [`ValidationPolicy::Skip`] the number of dropped
    /// events is kept and reported by
    /// [`n_skipped`](UserBasedRecommender::n_skipped).
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidEvent`] under the abort policy, or
    /// [`SugerirError::EmptyInput`] if no usable interactions remain.
    pub fn fit_with_policy(
        events: &[InteractionEvent],
        policy: ValidationPolicy,
    ) -> Result<Self> {
        let Aggregated { counts, skipped } = InteractionAggregator::new()
            .with_policy(policy)
            .aggregate(events)?;
        let mut recommender = Self::from_counts(&counts)?;
        recommender.skipped = skipped;
        Ok(recommender)
    }

    /// Builds the pipeline from already-aggregated per-pair totals.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::EmptyInput`] if `counts` is empty.
    pub fn from_counts(counts: &[InteractionCount]) -> Result<Self> {
        let interactions = InteractionMatrix::from_counts(counts)?;
        let similarity = UserSimilarity::from_interactions(&interactions);
        Ok(Self {
            interactions,
            similarity,
            skipped: 0,
        })
    }

    /// Ranked top-`top_n` item ids for a user, consulting at most
    /// `neighborhood_size` nearest neighbors.
    ///
    /// Items the user already owns never appear in the output. An empty
    /// list (not an error) comes back when no unowned item has positive
    /// neighbor support or when there are no other users. Output is fully
    /// deterministic: similarity ties resolve by ascending user id, score
    /// ties by ascending item id.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::UnknownUser`] if `user_id` is absent from
    /// the matrix. Callers should treat that as "new user / no history"
    /// and fall back to a non-personalized strategy.
    pub fn recommend(
        &self,
        user_id: i64,
        top_n: usize,
        neighborhood_size: usize,
    ) -> Result<Vec<i64>> {
        let target = self
            .interactions
            .user_index(user_id)
            .ok_or(SugerirError::UnknownUser { user_id })?;

        let sim_row = self.similarity.row_slice(target);

        // Rows are in ascending user-id order, so the index tie-break below
        // is the ascending-id tie-break.
        let mut neighbors: Vec<usize> = (0..self.interactions.n_users())
            .filter(|&row| row != target)
            .collect();
        neighbors.sort_by(|&a, &b| {
            sim_row[b]
                .partial_cmp(&sim_row[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });
        neighbors.truncate(neighborhood_size);

        let owned = self.interactions.values().row_slice(target);
        let scores = self.interactions.values().sum_rows(&neighbors);

        // Columns are in ascending item-id order; same index tie-break.
        let mut ranked: Vec<(usize, f32)> = scores
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(col, &score)| owned[col] == 0.0 && score > 0.0)
            .map(|(col, &score)| (col, score))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(top_n);

        Ok(ranked
            .into_iter()
            .map(|(col, _)| self.interactions.item_id_at(col))
            .collect())
    }

    /// [`recommend`](UserBasedRecommender::recommend) with the default
    /// `top_n` of 5 and neighborhood of 10.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::UnknownUser`] if `user_id` is absent.
    pub fn recommend_default(&self, user_id: i64) -> Result<Vec<i64>> {
        self.recommend(user_id, DEFAULT_TOP_N, DEFAULT_NEIGHBORHOOD)
    }

    /// Matrix shape as (n_users, n_items). Inspection only.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.interactions.shape()
    }

    /// A single user's similarity row, for external reporting.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::UnknownUser`] if the id is absent.
    pub fn similarity_row(&self, user_id: i64) -> Result<Vector> {
        self.similarity.user_row(user_id)
    }

    /// Number of malformed events dropped at fit time under
    /// [`ValidationPolicy::Skip`].
    #[must_use]
    pub fn n_skipped(&self) -> usize {
        self.skipped
    }

    /// Borrowed access to the interaction matrix.
    #[must_use]
    pub fn interactions(&self) -> &InteractionMatrix {
        &self.interactions
    }

    /// Borrowed access to the similarity table.
    #[must_use]
    pub fn similarity(&self) -> &UserSimilarity {
        &self.similarity
    }
}

impl Recommender for UserBasedRecommender {
    fn recommend(&self, user_id: i64, top_n: usize) -> Result<Vec<i64>> {
        UserBasedRecommender::recommend(self, user_id, top_n, DEFAULT_NEIGHBORHOOD)
    }
}

#[cfg(test)]
#[path = "user_based_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_user_based_contract.rs"]
mod user_based_contract;
