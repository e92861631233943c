//! JSON pool snapshots
//!
//! A snapshot bundles a labeled training set with a candidate pool whose base
//! uncertainty scores were computed elsewhere.

use crate::{FeatureVector, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A candidate vector with its externally computed uncertainty score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub vector: FeatureVector,
    /// Base-model score in [0, 1], lower means more informative
    pub uncertainty: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolSnapshot {
    #[serde(default)]
    pub training: Vec<FeatureVector>,
    #[serde(default)]
    pub candidates: Vec<ScoredCandidate>,
}

impl PoolSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn candidate_vectors(&self) -> Vec<FeatureVector> {
        self.candidates.iter().map(|c| c.vector.clone()).collect()
    }

    /// Uncertainty scores in candidate order
    pub fn uncertainties(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.uncertainty).collect()
    }
}
