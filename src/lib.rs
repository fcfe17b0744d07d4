//! Sugerir: user-based collaborative filtering in pure Rust.
//!
//! Sugerir turns historical purchase interactions into personalized
//! product recommendations. The pipeline is batch and single-process:
//! aggregate raw events, build a dense user-by-item matrix, compute
//! all-pairs cosine similarity between users, and rank the neighborhood's
//! items for a target user.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
//!
//! // Purchase history: user 1 looks like user 2, who also bought item 30.
//! let events = vec![
//!     InteractionEvent::new(1, 10),
//!     InteractionEvent::new(1, 20),
//!     InteractionEvent::new(2, 10),
//!     InteractionEvent::new(2, 20),
//!     InteractionEvent::new(2, 30),
//!     InteractionEvent::new(3, 40),
//! ];
//!
//! let recommender = UserBasedRecommender::fit(&events).unwrap();
//!
//! // Item 30 leads on neighbor support; item 40 trails via the
//! // dissimilar user 3, who still lands in the (large) neighborhood.
//! let picks = recommender.recommend(1, 5, 10).unwrap();
//! assert_eq!(picks, vec![30, 40]);
//!
//! // Unknown users are a recoverable error, not a panic.
//! assert!(recommender.recommend(99, 5, 10).is_err());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`interaction`]: Event model, aggregation, and the user-item matrix
//! - [`similarity`]: Cosine similarity and the all-pairs user table
//! - [`recommend`]: Neighborhood-based ranking
//! - [`synthetic`]: Seeded purchase stream generation
//! - [`traits`]: The `Recommender` query seam
//!
//! # Design
//!
//! Each fitted [`recommend::UserBasedRecommender`] owns its matrices and
//! is immutable after construction. There is no global state, so independent
//! instances can coexist (and tests build them freely). Similarity is
//! recomputed from scratch per fit; incremental updates, persistence, and
//! item-based filtering are out of scope.

pub mod error;
pub mod interaction;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod similarity;
pub mod synthetic;
pub mod traits;

pub use error::{Result, SugerirError};
pub use primitives::{Matrix, Vector};
pub use recommend::UserBasedRecommender;
pub use traits::Recommender;
