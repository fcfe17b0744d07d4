//! Core traits for recommenders.
//!
//! These traits define the API contract at the query seam, so callers can
//! swap ranking strategies (or mock one in tests) behind a common surface.

use crate::error::Result;

/// Trait for recommenders that rank items for a user.
///
/// # Examples
///
/// ```
/// use sugerir::prelude::*;
///
/// let events = vec![
///     InteractionEvent::new(1, 10),
///     InteractionEvent::new(2, 10),
///     InteractionEvent::new(2, 20),
/// ];
/// let model = UserBasedRecommender::fit(&events).unwrap();
///
/// let r: &dyn Recommender = &model;
/// assert_eq!(r.recommend(1, 5).unwrap(), vec![20]);
/// ```
pub trait Recommender {
    /// Ranked item ids for a user, at most `top_n` of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is unknown to the model.
    fn recommend(&self, user_id: i64, top_n: usize) -> Result<Vec<i64>>;
}
