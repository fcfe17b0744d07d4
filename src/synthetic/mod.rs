//! Synthetic interaction data generation.
//!
//! Seeded pseudo-random purchase streams for exercising the pipeline
//! without production data. Generated events are well-formed by
//! construction (positive ids, finite non-negative weights), so they feed
//! straight into the aggregator.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::synthetic::PurchaseSimulator;
//!
//! let events = PurchaseSimulator::new(500, 100)
//!     .with_seed(42)
//!     .generate(10_000);
//!
//! assert_eq!(events.len(), 10_000);
//! assert!(events.iter().all(|e| e.validate().is_ok()));
//! ```

mod purchases;

pub use purchases::PurchaseSimulator;
