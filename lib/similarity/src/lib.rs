//! # denserank Similarity
//!
//! Similarity and density over typed feature vectors.
//!
//! - [`cosine_similarity`] - cosine over the numeric positions two vectors share
//! - [`density_values`] - average similarity of each candidate to the rest of its pool
//! - [`DensityCache`] - per-epoch memo of pool densities, indexed by candidate position
//!
//! ## Example
//!
//! ```rust
//! use denserank_core::FeatureVector;
//! use denserank_similarity::{cosine_similarity, DensityCache};
//!
//! let pool = vec![
//!     FeatureVector::from_numeric(&[1.0, 0.0]),
//!     FeatureVector::from_numeric(&[0.9, 0.1]),
//!     FeatureVector::from_numeric(&[-1.0, 0.0]),
//! ];
//! assert!(cosine_similarity(&pool[0], &pool[1]) > 0.99);
//!
//! let mut cache = DensityCache::new();
//! let density = cache.get_or_compute(&pool, false);
//! assert!(density[0] > density[2]);
//! ```

pub mod distance;
pub mod density;

pub use distance::cosine_similarity;
pub use density::{density_values, DensityCache};
