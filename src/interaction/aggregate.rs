//! Aggregation of raw events into per-pair interaction totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{InteractionCount, InteractionEvent};
use crate::error::Result;

/// Policy for malformed events encountered during aggregation.
///
/// The default aborts the whole batch, preserving data integrity; `Skip`
/// drops offending events and counts them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// Fail the whole batch on the first malformed event (default).
    #[default]
    Abort,
    /// Drop malformed events and report how many were dropped.
    Skip,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregated {
    /// Per-pair totals, sorted by (user_id, item_id) ascending.
    pub counts: Vec<InteractionCount>,
    /// Number of malformed events dropped under [`ValidationPolicy::Skip`].
    pub skipped: usize,
}

/// Collapses a stream of [`InteractionEvent`]s into per-(user, item) totals.
///
/// The reduction is commutative and associative: input order never affects
/// the result. Output is sorted by (user_id, item_id) so downstream stages
/// see a stable ordering.
///
/// # Examples
///
/// ```
/// use sugerir::interaction::{InteractionAggregator, InteractionEvent};
///
/// let events = vec![
///     InteractionEvent::new(2, 30),
///     InteractionEvent::new(1, 10),
///     InteractionEvent::new(1, 10),
/// ];
///
/// let aggregated = InteractionAggregator::new().aggregate(&events).unwrap();
/// assert_eq!(aggregated.counts.len(), 2);
/// assert_eq!(aggregated.counts[0].user_id, 1);
/// assert!((aggregated.counts[0].count - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionAggregator {
    policy: ValidationPolicy,
}

impl InteractionAggregator {
    /// Creates an aggregator with the default abort-on-invalid policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for malformed events.
    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured validation policy.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Groups events by (user_id, item_id) and sums their weights.
    ///
    /// Pure function of its input; the aggregator itself holds only the
    /// validation policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SugerirError::InvalidEvent`] for the first
    /// malformed event under [`ValidationPolicy::Abort`].
    pub fn aggregate(&self, events: &[InteractionEvent]) -> Result<Aggregated> {
        let mut totals: BTreeMap<(i64, i64), f32> = BTreeMap::new();
        let mut skipped = 0;

        for event in events {
            match event.validate() {
                Ok(()) => {
                    *totals.entry((event.user_id, event.item_id)).or_insert(0.0) +=
                        event.effective_weight();
                }
                Err(err) => match self.policy {
                    ValidationPolicy::Abort => return Err(err),
                    ValidationPolicy::Skip => skipped += 1,
                },
            }
        }

        let counts = totals
            .into_iter()
            .map(|((user_id, item_id), count)| InteractionCount {
                user_id,
                item_id,
                count,
            })
            .collect();

        Ok(Aggregated { counts, skipped })
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
