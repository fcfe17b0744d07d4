//! Interaction data model and matrix construction.
//!
//! This module turns a raw stream of purchase events into the dense
//! user-by-item table the similarity and ranking stages compute over:
//!
//! - [`InteractionEvent`]: one observed (user, item) interaction
//! - [`InteractionAggregator`]: collapses events into per-pair totals
//! - [`InteractionMatrix`]: dense matrix with sorted id axes and
//!   id-to-index mappings
//!
//! # Quick Start
//!
//! ```
//! use sugerir::interaction::{InteractionAggregator, InteractionEvent, InteractionMatrix};
//!
//! let events = vec![
//!     InteractionEvent::new(1, 10),
//!     InteractionEvent::new(1, 10),
//!     InteractionEvent::new(2, 20),
//! ];
//!
//! let aggregated = InteractionAggregator::new().aggregate(&events).unwrap();
//! let matrix = InteractionMatrix::from_counts(&aggregated.counts).unwrap();
//!
//! assert_eq!(matrix.shape(), (2, 2));
//! assert_eq!(matrix.get(1, 10), Some(2.0));
//! ```

mod aggregate;
mod matrix;

pub use aggregate::{Aggregated, InteractionAggregator, ValidationPolicy};
pub use matrix::InteractionMatrix;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SugerirError};

/// One observed purchase/interaction of a user with an item.
///
/// Immutable input record; consumed by [`InteractionAggregator`] and not
/// retained afterward. `weight` defaults to 1.0 when absent, so a plain
/// event stream reduces to occurrence counting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Identifier of the interacting user (positive).
    pub user_id: i64,
    /// Identifier of the item interacted with (positive).
    pub item_id: i64,
    /// Optional interaction strength; must be finite and non-negative.
    pub weight: Option<f32>,
}

impl InteractionEvent {
    /// Creates an unweighted event (weight counts as 1.0).
    #[must_use]
    pub fn new(user_id: i64, item_id: i64) -> Self {
        Self {
            user_id,
            item_id,
            weight: None,
        }
    }

    /// Creates a weighted event.
    #[must_use]
    pub fn weighted(user_id: i64, item_id: i64, weight: f32) -> Self {
        Self {
            user_id,
            item_id,
            weight: Some(weight),
        }
    }

    /// The weight this event contributes to its (user, item) total.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        self.weight.unwrap_or(1.0)
    }

    /// Checks the event against the input contract.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidEvent`] if either id is non-positive
    /// or the weight is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if self.user_id <= 0 {
            return Err(SugerirError::invalid_event(
                self.user_id,
                self.item_id,
                "user_id must be positive",
            ));
        }
        if self.item_id <= 0 {
            return Err(SugerirError::invalid_event(
                self.user_id,
                self.item_id,
                "item_id must be positive",
            ));
        }
        if let Some(w) = self.weight {
            if !w.is_finite() || w < 0.0 {
                return Err(SugerirError::invalid_event(
                    self.user_id,
                    self.item_id,
                    "weight must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Total interaction weight for one (user, item) pair.
///
/// Produced by [`InteractionAggregator`]; one entry per pair observed at
/// least once, `count > 0`. Pairs never observed are implicitly zero and
/// never materialized. `count` equals the number of events when all
/// weights are the default 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionCount {
    /// Identifier of the interacting user.
    pub user_id: i64,
    /// Identifier of the item interacted with.
    pub item_id: i64,
    /// Summed interaction weight for the pair.
    pub count: f32,
}
