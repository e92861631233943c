//! Closure-backed uncertainty model
//!
//! Wraps any scoring function `(position, vector) -> score` as an
//! [`UncertaintyModel`]. Useful when scores come from an external classifier,
//! a precomputed file, or a test fixture.

use crate::model::UncertaintyModel;
use denserank_core::{Error, Ranking, Result};
use std::sync::Arc;

pub struct ScoredUncertainty<V, F> {
    name: String,
    score: F,
    training: Option<Arc<[V]>>,
    candidates: Option<Arc<[V]>>,
}

impl<V, F> ScoredUncertainty<V, F>
where
    F: Fn(usize, &V) -> f64,
{
    pub fn new(name: impl Into<String>, score: F) -> Self {
        Self {
            name: name.into(),
            score,
            training: None,
            candidates: None,
        }
    }

    pub fn training_len(&self) -> Option<usize> {
        self.training.as_ref().map(|t| t.len())
    }
}

impl<V> ScoredUncertainty<V, ()> {
    /// Model that returns `scores[i]` for the candidate at position `i`
    pub fn from_scores(
        name: impl Into<String>,
        scores: Vec<f64>,
    ) -> ScoredUncertainty<V, impl Fn(usize, &V) -> f64> {
        ScoredUncertainty::new(name, move |index: usize, _: &V| {
            scores.get(index).copied().unwrap_or(f64::NAN)
        })
    }
}

impl<V, F> UncertaintyModel<V> for ScoredUncertainty<V, F>
where
    F: Fn(usize, &V) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn set_training_data(&mut self, vectors: Arc<[V]>) {
        self.training = Some(vectors);
    }

    fn set_candidate_pool(&mut self, vectors: Arc<[V]>) {
        self.candidates = Some(vectors);
    }

    fn rank_candidates(&mut self, count: usize) -> Result<Ranking<usize>> {
        if self.training.is_none() {
            return Err(Error::MissingTrainingData);
        }
        let candidates = self.candidates.as_ref().ok_or(Error::MissingCandidates)?;

        let mut scored = Vec::with_capacity(candidates.len());
        for (index, vector) in candidates.iter().enumerate() {
            let score = (self.score)(index, vector);
            if !(0.0..=1.0).contains(&score) {
                return Err(Error::Model(format!(
                    "{}: candidate {} scored {} outside [0, 1]",
                    self.name, index, score
                )));
            }
            scored.push((score, index));
        }

        let mut ranking: Ranking<usize> = scored.into_iter().collect();
        ranking.truncate(count);
        Ok(ranking)
    }
}
