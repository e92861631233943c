//! # denserank Core
//!
//! Core types shared by the denserank crates:
//!
//! - [`FeatureAccess`] - positional read access to typed features
//! - [`FeatureVector`] - a concrete vector of named, typed features
//! - [`Ranking`] - entries kept sorted ascending by score key
//! - [`Error`] - the error taxonomy for ranking and model contracts
//! - [`PoolSnapshot`] - JSON bundle of training data and a scored candidate pool
//!
//! ## Example
//!
//! ```rust
//! use denserank_core::{Feature, FeatureAccess, FeatureType, FeatureVector, Ranking};
//!
//! let fv = FeatureVector::new(vec![
//!     Feature::numeric("price", 1.99),
//!     Feature::categorical("category", "salumi"),
//! ]);
//! assert_eq!(fv.feature_count(), 2);
//! assert_eq!(fv.feature_type_at(1), Some(FeatureType::Categorical));
//!
//! let mut ranking = Ranking::new();
//! ranking.insert(0.8, "b");
//! ranking.insert(0.2, "a");
//! assert_eq!(ranking.first().unwrap().value, "a");
//! ```

pub mod error;
pub mod feature;
pub mod vector;
pub mod ranking;
pub mod snapshot;

pub use error::{Error, Result};
pub use feature::{Feature, FeatureAccess, FeatureType, FeatureValue};
pub use vector::FeatureVector;
pub use ranking::{RankedEntry, Ranking};
pub use snapshot::{PoolSnapshot, ScoredCandidate};
