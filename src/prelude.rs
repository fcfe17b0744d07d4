//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::error::{Result, SugerirError};
pub use crate::interaction::{
    InteractionAggregator, InteractionCount, InteractionEvent, InteractionMatrix,
    ValidationPolicy,
};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::UserBasedRecommender;
pub use crate::similarity::{cosine_similarity, UserSimilarity};
pub use crate::synthetic::PurchaseSimulator;
pub use crate::traits::Recommender;
