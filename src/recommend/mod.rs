//! Recommendation systems.
//!
//! This module provides user-based collaborative filtering over historical
//! purchase interactions: users with similar consumption patterns vote for
//! the items the target user has not interacted with yet.
//!
//! # Algorithms
//!
//! - **User-Based CF**: all-pairs cosine similarity over the user-by-item
//!   matrix, neighborhood aggregation, owned-item exclusion
//!
//! # Quick Start
//!
//! ```
//! use sugerir::interaction::InteractionEvent;
//! use sugerir::recommend::UserBasedRecommender;
//!
//! let events = vec![
//!     InteractionEvent::new(1, 10),
//!     InteractionEvent::new(1, 20),
//!     InteractionEvent::new(2, 10),
//!     InteractionEvent::new(2, 20),
//!     InteractionEvent::new(2, 30),
//! ];
//!
//! let recommender = UserBasedRecommender::fit(&events).unwrap();
//!
//! // User 1 looks like user 2 and is missing item 30.
//! let picks = recommender.recommend(1, 5, 10).unwrap();
//! assert_eq!(picks, vec![30]);
//! ```

mod user_based;

pub use user_based::{UserBasedRecommender, DEFAULT_NEIGHBORHOOD, DEFAULT_TOP_N};
