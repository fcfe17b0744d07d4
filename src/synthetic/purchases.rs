//! Seeded purchase stream simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interaction::InteractionEvent;

/// Generator of pseudo-random purchase events.
///
/// Draws user and item ids uniformly from `1..=n_users` and `1..=n_items`.
/// Unweighted by default, so aggregation reduces to purchase counting;
/// [`with_weight_range`](PurchaseSimulator::with_weight_range) switches to
/// weighted events with weights rounded to one decimal.
///
/// With a seed the stream is fully deterministic, which is what the
/// determinism tests lean on.
///
/// # Examples
///
/// ```
/// use sugerir::synthetic::PurchaseSimulator;
///
/// let a = PurchaseSimulator::new(50, 10).with_seed(7).generate(100);
/// let b = PurchaseSimulator::new(50, 10).with_seed(7).generate(100);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct PurchaseSimulator {
    n_users: u32,
    n_items: u32,
    weight_range: Option<(f32, f32)>,
    seed: Option<u64>,
}

impl PurchaseSimulator {
    /// Creates a simulator over the given user and item populations.
    ///
    /// # Panics
    ///
    /// Panics if either population is zero.
    #[must_use]
    pub fn new(n_users: u32, n_items: u32) -> Self {
        assert!(n_users > 0, "simulator needs at least one user");
        assert!(n_items > 0, "simulator needs at least one item");
        Self {
            n_users,
            n_items,
            weight_range: None,
            seed: None,
        }
    }

    /// Fixes the random seed for reproducible streams.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Emits weighted events with weights drawn uniformly from
    /// `[low, high)` and rounded to one decimal.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 <= low < high`.
    #[must_use]
    pub fn with_weight_range(mut self, low: f32, high: f32) -> Self {
        assert!(low >= 0.0 && low < high, "weight range must be 0 <= low < high");
        self.weight_range = Some((low, high));
        self
    }

    /// Generates `n_events` pseudo-random purchase events.
    #[must_use]
    pub fn generate(&self, n_events: usize) -> Vec<InteractionEvent> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        (0..n_events)
            .map(|_| {
                let user_id = i64::from(rng.gen_range(1..=self.n_users));
                let item_id = i64::from(rng.gen_range(1..=self.n_items));
                match self.weight_range {
                    Some((low, high)) => {
                        let weight = (rng.gen_range(low..high) * 10.0).round() / 10.0;
                        InteractionEvent::weighted(user_id, item_id, weight)
                    }
                    None => InteractionEvent::new(user_id, item_id),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "purchases_tests.rs"]
mod tests;
