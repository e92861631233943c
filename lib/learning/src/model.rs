//! Pluggable base uncertainty models
//!
//! A base model ranks the candidate pool by how uncertain it is about each
//! candidate. Scores live in [0, 1] and **lower means more informative**; the
//! density-weighted ranker relies on that direction.

use denserank_core::{Ranking, Result};
use std::sync::Arc;

/// Capability contract for a base uncertainty model
///
/// Ranking entries pair a score with the candidate's position in the pool
/// last passed to [`set_candidate_pool`](Self::set_candidate_pool).
pub trait UncertaintyModel<V> {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Human readable description
    fn description(&self) -> &str {
        self.name()
    }

    /// Replace the labeled training set
    fn set_training_data(&mut self, vectors: Arc<[V]>);

    /// Replace the candidate pool
    fn set_candidate_pool(&mut self, vectors: Arc<[V]>);

    /// Rank the pool ascending by score and keep the first `count` entries
    ///
    /// With `count` equal to the pool size the ranking must cover every
    /// candidate exactly once. Fails with
    /// [`Error::MissingTrainingData`](denserank_core::Error::MissingTrainingData) or
    /// [`Error::MissingCandidates`](denserank_core::Error::MissingCandidates)
    /// when either input is unset.
    fn rank_candidates(&mut self, count: usize) -> Result<Ranking<usize>>;
}

impl<V, M: UncertaintyModel<V> + ?Sized> UncertaintyModel<V> for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn set_training_data(&mut self, vectors: Arc<[V]>) {
        (**self).set_training_data(vectors)
    }

    fn set_candidate_pool(&mut self, vectors: Arc<[V]>) {
        (**self).set_candidate_pool(vectors)
    }

    fn rank_candidates(&mut self, count: usize) -> Result<Ranking<usize>> {
        (**self).rank_candidates(count)
    }
}
