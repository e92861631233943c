//! # denserank Learning
//!
//! Active-learning candidate selection with information density.
//!
//! - [`UncertaintyModel`] - capability contract for pluggable base models
//! - [`InformationDensityRanker`] - weights base uncertainty by pool density
//! - [`ScoredUncertainty`] - wraps a scoring closure as a base model
//!
//! ## Example
//!
//! ```rust
//! use denserank_core::FeatureVector;
//! use denserank_learning::{InformationDensityRanker, ScoredUncertainty};
//!
//! let base = ScoredUncertainty::from_scores("margin", vec![0.2, 0.3, 0.9]);
//! let mut ranker: InformationDensityRanker<FeatureVector> = InformationDensityRanker::new(base);
//! ranker.set_training_data(vec![FeatureVector::from_numeric(&[0.5, 0.5]).with_label("pos")]);
//! ranker.set_candidate_pool(vec![
//!     FeatureVector::from_numeric(&[1.0, 0.0]),
//!     FeatureVector::from_numeric(&[0.9, 0.1]),
//!     FeatureVector::from_numeric(&[-1.0, 0.0]),
//! ]);
//!
//! let result = ranker.compute_ranking(2).unwrap();
//! assert_eq!(result.len(), 2);
//! assert!(!result.indices().contains(&2));
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Candidate  │────>│  Density    │──────┐
//! │    pool     │     │  cache      │      │
//! └─────────────┘     └─────────────┘      v
//!       │             ┌─────────────┐ ┌─────────────┐
//!       └────────────>│ Base model  │>│  Combine +  │
//!                     │ (ranking)   │ │  truncate   │
//!                     └─────────────┘ └─────────────┘
//! ```

pub mod model;
pub mod scored;
pub mod ranker;

pub use model::UncertaintyModel;
pub use scored::ScoredUncertainty;
pub use ranker::{DensityRanking, InformationDensityRanker, RankerConfig, Selection};
