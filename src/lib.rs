//! # denserank
//!
//! Density-weighted informativeness ranking for active learning.
//!
//! Given a pool of unlabeled candidates and a pluggable base uncertainty
//! model, denserank picks the candidates most worth sending to an oracle for
//! labeling. Each candidate's informativeness is discounted by how
//! dissimilar it is from the rest of the pool, so outliers do not soak up
//! labeling effort.
//!
//! ## Quick Start
//!
//! ### As a Library
//!
//! ```rust
//! use denserank::prelude::*;
//!
//! let base = ScoredUncertainty::from_scores("entropy", vec![0.2, 0.3, 0.9]);
//! let mut ranker: InformationDensityRanker<FeatureVector> = InformationDensityRanker::new(base);
//! ranker.set_training_data(Vec::<FeatureVector>::new());
//! ranker.set_candidate_pool(vec![
//!     FeatureVector::from_numeric(&[1.0, 0.0]),
//!     FeatureVector::from_numeric(&[0.9, 0.1]),
//!     FeatureVector::from_numeric(&[-1.0, 0.0]),
//! ]);
//!
//! let result = ranker.compute_ranking(2).unwrap();
//! println!("remaining uncertainty: {}", result.remaining_uncertainty);
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! denserank --input pool.json --count 10 --pretty
//! ```
//!
//! ## Crate Structure
//!
//! - [`denserank-core`](https://docs.rs/denserank-core) - Feature vectors, rankings, errors, snapshots
//! - [`denserank-similarity`](https://docs.rs/denserank-similarity) - Cosine similarity, density, density cache
//! - [`denserank-learning`](https://docs.rs/denserank-learning) - Base model contract and the density ranker

// Re-export core types
pub use denserank_core::{
    Feature, FeatureAccess, FeatureType, FeatureValue, FeatureVector,
    RankedEntry, Ranking,
    PoolSnapshot, ScoredCandidate,
    Error, Result,
};

// Re-export similarity
pub use denserank_similarity::{cosine_similarity, density_values, DensityCache};

// Re-export learning
pub use denserank_learning::{
    DensityRanking, InformationDensityRanker, RankerConfig, ScoredUncertainty, Selection,
    UncertaintyModel,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Feature, FeatureAccess, FeatureType, FeatureValue, FeatureVector,
        Ranking, PoolSnapshot,
        Error, Result,
        cosine_similarity,
        DensityRanking, InformationDensityRanker, RankerConfig, ScoredUncertainty,
        UncertaintyModel,
    };
}
