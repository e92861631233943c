//! Information-density active learning
//!
//! Combines a base model's uncertainty with how representative each candidate
//! is of the pool (Settles & Craven, "An Analysis of Active Learning Strategies
//! for Sequence Labeling Tasks", section 3.4), so labeling effort is not spent
//! on outliers.
//!
//! For a candidate with base score `p` (lower is more informative) and density
//! `w`, the combined score is
//!
//! ```text
//! uninterestingness = 1 - (1 - p) * w
//! ```
//!
//! and, like the base score, lower values are selected first.

use crate::model::UncertaintyModel;
use denserank_core::{Error, FeatureAccess, Ranking, Result};
use denserank_similarity::DensityCache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Ranker configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Density weighting exponent.
    ///
    /// Accepted and kept for API compatibility, but the combination formula
    /// does not read it yet: changing it does not change any ranking.
    pub beta: f64,
    /// Pool size from which densities are computed with rayon
    pub parallel_threshold: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            beta: 1.0,
            parallel_threshold: 256,
        }
    }
}

impl RankerConfig {
    pub fn with_beta(beta: f64) -> Self {
        Self {
            beta,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.beta.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "beta must be finite, got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

/// A selected candidate with the signals that produced its rank
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection<V> {
    /// Position in the candidate pool
    pub index: usize,
    pub vector: V,
    /// Score reported by the base model
    pub base_score: f64,
    /// Density of the candidate within its pool
    pub density: f64,
}

/// Result of one ranking call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DensityRanking<V> {
    /// Selections ascending by uninterestingness
    pub ranking: Ranking<Selection<V>>,
    /// Mean of `1 - uninterestingness` over the whole pool
    pub remaining_uncertainty: f64,
}

impl<V> DensityRanking<V> {
    pub fn empty() -> Self {
        Self {
            ranking: Ranking::new(),
            remaining_uncertainty: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    pub fn vectors(&self) -> Vec<&V> {
        self.ranking.values().map(|s| &s.vector).collect()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.ranking.values().map(|s| s.index).collect()
    }

    pub fn into_vectors(self) -> Vec<V> {
        self.ranking.into_values().into_iter().map(|s| s.vector).collect()
    }
}

/// Density-weighted ranker over a pluggable base uncertainty model
pub struct InformationDensityRanker<V> {
    base_model: Box<dyn UncertaintyModel<V>>,
    config: RankerConfig,
    training: Option<Arc<[V]>>,
    candidates: Arc<[V]>,
    density: DensityCache,
    remaining_uncertainty: f64,
}

impl<V> InformationDensityRanker<V>
where
    V: FeatureAccess + Clone + Sync,
{
    /// Create a ranker with the default configuration (`beta = 1.0`)
    pub fn new<M>(base_model: M) -> Self
    where
        M: UncertaintyModel<V> + 'static,
    {
        Self {
            base_model: Box::new(base_model),
            config: RankerConfig::default(),
            training: None,
            candidates: Vec::<V>::new().into(),
            density: DensityCache::new(),
            remaining_uncertainty: 0.0,
        }
    }

    pub fn with_config<M>(base_model: M, config: RankerConfig) -> Result<Self>
    where
        M: UncertaintyModel<V> + 'static,
    {
        config.validate()?;
        let mut ranker = Self::new(base_model);
        ranker.config = config;
        Ok(ranker)
    }

    #[inline]
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// The configured weighting exponent. Has no effect on rankings.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.config.beta
    }

    pub fn base_model(&self) -> &dyn UncertaintyModel<V> {
        &*self.base_model
    }

    /// Swap the base model. Compatibility is only checked when ranking.
    pub fn set_base_model<M>(&mut self, base_model: M)
    where
        M: UncertaintyModel<V> + 'static,
    {
        self.base_model = Box::new(base_model);
    }

    pub fn set_training_data(&mut self, vectors: impl Into<Arc<[V]>>) {
        self.training = Some(vectors.into());
    }

    /// Replace the candidate pool and drop its cached densities
    pub fn set_candidate_pool(&mut self, vectors: impl Into<Arc<[V]>>) {
        self.candidates = vectors.into();
        self.density.invalidate();
    }

    #[inline]
    pub fn candidate_pool(&self) -> &[V] {
        &self.candidates
    }

    /// Cached densities for the current pool, if computed
    #[inline]
    pub fn density(&self) -> &DensityCache {
        &self.density
    }

    /// Diagnostic of the last successful [`compute_ranking`](Self::compute_ranking)
    #[inline]
    pub fn remaining_uncertainty(&self) -> f64 {
        self.remaining_uncertainty
    }

    /// Rank the pool and keep the `count` most valuable candidates
    ///
    /// # Errors
    /// - [`Error::InvalidCount`] if `count` is negative
    /// - [`Error::RankingSizeMismatch`], [`Error::UnknownCandidate`] or
    ///   [`Error::DuplicateCandidate`] if the base model does not rank every
    ///   candidate exactly once
    /// - any error raised by the base model, unchanged
    pub fn compute_ranking(&mut self, count: i64) -> Result<DensityRanking<V>> {
        let count = usize::try_from(count).map_err(|_| Error::InvalidCount(count))?;

        let pool_size = self.candidates.len();
        if pool_size == 0 {
            self.remaining_uncertainty = 0.0;
            debug!(count, "empty candidate pool");
            return Ok(DensityRanking::empty());
        }

        let parallel = pool_size >= self.config.parallel_threshold;
        let density = self.density.get_or_compute(&self.candidates[..], parallel);

        if let Some(training) = &self.training {
            self.base_model.set_training_data(Arc::clone(training));
        }
        self.base_model.set_candidate_pool(Arc::clone(&self.candidates));
        let base = self.base_model.rank_candidates(pool_size)?;

        if base.len() != pool_size {
            return Err(Error::RankingSizeMismatch {
                expected: pool_size,
                actual: base.len(),
            });
        }

        let mut seen = vec![false; pool_size];
        let mut combined = Vec::with_capacity(pool_size);
        let mut remaining = 0.0f64;

        for entry in base.iter() {
            let index = entry.value;
            if index >= pool_size {
                return Err(Error::UnknownCandidate { index, pool_size });
            }
            if seen[index] {
                return Err(Error::DuplicateCandidate(index));
            }
            seen[index] = true;

            let p = entry.key;
            let w = density[index];
            let uninterestingness = 1.0 - (1.0 - p) * w;
            remaining += 1.0 - uninterestingness;
            combined.push((uninterestingness, (index, p, w)));
        }

        let mut ranking: Ranking<(usize, f64, f64)> = combined.into_iter().collect();
        ranking.truncate(count);

        let candidates = &self.candidates;
        let ranking = ranking.map_values(|(index, base_score, density)| Selection {
            index,
            vector: candidates[index].clone(),
            base_score,
            density,
        });

        let remaining_uncertainty = remaining / pool_size as f64;
        self.remaining_uncertainty = remaining_uncertainty;

        debug!(
            model = self.base_model.name(),
            pool_size,
            count,
            retained = ranking.len(),
            remaining_uncertainty,
            "information density ranking computed"
        );

        Ok(DensityRanking {
            ranking,
            remaining_uncertainty,
        })
    }
}

impl<V> UncertaintyModel<V> for InformationDensityRanker<V>
where
    V: FeatureAccess + Clone + Sync,
{
    fn name(&self) -> &str {
        "InformationDensityActiveLearning"
    }

    fn description(&self) -> &str {
        "Base model uncertainty weighted by candidate density"
    }

    fn set_training_data(&mut self, vectors: Arc<[V]>) {
        InformationDensityRanker::set_training_data(self, vectors);
    }

    fn set_candidate_pool(&mut self, vectors: Arc<[V]>) {
        InformationDensityRanker::set_candidate_pool(self, vectors);
    }

    fn rank_candidates(&mut self, count: usize) -> Result<Ranking<usize>> {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        let result = self.compute_ranking(count)?;
        Ok(result.ranking.map_values(|s| s.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scored::ScoredUncertainty;
    use denserank_core::FeatureVector;
    use std::cell::Cell;
    use std::rc::Rc;

    fn fv(values: &[f64]) -> FeatureVector {
        FeatureVector::from_numeric(values)
    }

    fn three_pool() -> Vec<FeatureVector> {
        vec![fv(&[1.0, 0.0]), fv(&[0.9, 0.1]), fv(&[-1.0, 0.0])]
    }

    fn ranker_with_scores(scores: Vec<f64>) -> InformationDensityRanker<FeatureVector> {
        let mut ranker: InformationDensityRanker<FeatureVector> =
            InformationDensityRanker::new(ScoredUncertainty::from_scores("fixed", scores));
        ranker.set_training_data(Vec::<FeatureVector>::new());
        ranker
    }

    /// Model that returns a fixed ranking regardless of the pool
    struct FixedRanking(Vec<(f64, usize)>);

    impl UncertaintyModel<FeatureVector> for FixedRanking {
        fn name(&self) -> &str {
            "fixed-ranking"
        }

        fn set_training_data(&mut self, _: Arc<[FeatureVector]>) {}

        fn set_candidate_pool(&mut self, _: Arc<[FeatureVector]>) {}

        fn rank_candidates(&mut self, _: usize) -> Result<Ranking<usize>> {
            Ok(self.0.iter().copied().collect())
        }
    }

    struct Failing;

    impl UncertaintyModel<FeatureVector> for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn set_training_data(&mut self, _: Arc<[FeatureVector]>) {}

        fn set_candidate_pool(&mut self, _: Arc<[FeatureVector]>) {}

        fn rank_candidates(&mut self, _: usize) -> Result<Ranking<usize>> {
            Err(Error::Model("classifier not trained".to_string()))
        }
    }

    #[test]
    fn test_three_vector_scenario() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());

        let result = ranker.compute_ranking(3).unwrap();

        let ab = 0.9 / 0.82f64.sqrt();
        let w = [(ab - 1.0) / 3.0, 0.0, (-1.0 - ab) / 3.0];
        let p = [0.2, 0.3, 0.9];
        let u: Vec<f64> = (0..3).map(|i| 1.0 - (1.0 - p[i]) * w[i]).collect();

        // B (u = 1.0) < A (u slightly above 1) < C
        assert_eq!(result.indices(), vec![1, 0, 2]);
        for entry in result.ranking.iter() {
            assert!((entry.key - u[entry.value.index]).abs() < 1e-12);
            assert!((entry.value.density - w[entry.value.index]).abs() < 1e-12);
        }

        let expected_remaining = u.iter().map(|x| 1.0 - x).sum::<f64>() / 3.0;
        assert!((result.remaining_uncertainty - expected_remaining).abs() < 1e-12);
        assert_eq!(ranker.remaining_uncertainty(), result.remaining_uncertainty);
    }

    #[test]
    fn test_density_discounts_outlier() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());

        let top_two = ranker.compute_ranking(2).unwrap();
        let indices = top_two.indices();
        assert!(indices.contains(&0));
        assert!(indices.contains(&1));
        assert!(!indices.contains(&2));
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());
        assert!(matches!(ranker.compute_ranking(-1), Err(Error::InvalidCount(-1))));
    }

    #[test]
    fn test_negative_count_rejected_on_empty_pool() {
        let mut ranker = ranker_with_scores(Vec::new());
        assert!(matches!(ranker.compute_ranking(-3), Err(Error::InvalidCount(-3))));
    }

    #[test]
    fn test_truncation_law() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());

        for count in 0..6i64 {
            let result = ranker.compute_ranking(count).unwrap();
            assert_eq!(result.len(), (count as usize).min(3));
        }
    }

    #[test]
    fn test_empty_pool() {
        let mut ranker = ranker_with_scores(Vec::new());
        ranker.set_candidate_pool(Vec::<FeatureVector>::new());

        let result = ranker.compute_ranking(5).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.remaining_uncertainty, 0.0);
        assert_eq!(ranker.remaining_uncertainty(), 0.0);
    }

    #[test]
    fn test_density_cached_across_calls() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());

        let first = ranker.compute_ranking(3).unwrap();
        let second = ranker.compute_ranking(1).unwrap();
        let third = ranker.compute_ranking(3).unwrap();

        assert_eq!(ranker.density().builds(), 1);
        assert_eq!(first, third);
        assert_eq!(second.ranking.first(), first.ranking.first());
    }

    #[test]
    fn test_set_candidate_pool_invalidates_density() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());
        let before = ranker.compute_ranking(3).unwrap();
        let density_before = ranker.density().values().unwrap().to_vec();

        let mut changed = three_pool();
        changed[2] = fv(&[1.0, 0.05]);
        ranker.set_candidate_pool(changed);
        assert!(!ranker.density().is_valid());

        let after = ranker.compute_ranking(3).unwrap();
        let density_after = ranker.density().values().unwrap().to_vec();

        assert_eq!(ranker.density().builds(), 2);
        assert_ne!(density_before, density_after);
        assert_ne!(before.remaining_uncertainty, after.remaining_uncertainty);
    }

    #[test]
    fn test_training_and_pool_forwarded() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let model = ScoredUncertainty::new("counting", move |_, _: &FeatureVector| {
            counter.set(counter.get() + 1);
            0.5
        });

        let mut ranker: InformationDensityRanker<FeatureVector> = InformationDensityRanker::new(model);
        ranker.set_candidate_pool(three_pool());
        assert!(matches!(ranker.compute_ranking(1), Err(Error::MissingTrainingData)));

        ranker.set_training_data(vec![fv(&[0.0, 1.0]).with_label("neg")]);
        ranker.compute_ranking(1).unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_short_base_ranking_is_contract_violation() {
        let mut ranker: InformationDensityRanker<FeatureVector> =
            InformationDensityRanker::new(FixedRanking(vec![(0.1, 0), (0.2, 1)]));
        ranker.set_candidate_pool(three_pool());

        let err = ranker.compute_ranking(3).unwrap_err();
        assert!(matches!(err, Error::RankingSizeMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_unknown_and_duplicate_candidates() {
        let mut ranker: InformationDensityRanker<FeatureVector> =
            InformationDensityRanker::new(FixedRanking(vec![(0.1, 0), (0.2, 1), (0.3, 7)]));
        ranker.set_candidate_pool(three_pool());
        assert!(matches!(
            ranker.compute_ranking(3),
            Err(Error::UnknownCandidate { index: 7, pool_size: 3 })
        ));

        ranker.set_base_model(FixedRanking(vec![(0.1, 0), (0.2, 1), (0.3, 1)]));
        assert!(matches!(ranker.compute_ranking(3), Err(Error::DuplicateCandidate(1))));
    }

    #[test]
    fn test_delegate_failure_propagates() {
        let mut ranker = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        ranker.set_candidate_pool(three_pool());
        let ok = ranker.compute_ranking(3).unwrap();

        ranker.set_base_model(Failing);
        let err = ranker.compute_ranking(3).unwrap_err();
        assert!(matches!(err, Error::Model(ref msg) if msg == "classifier not trained"));
        // The diagnostic still reflects the last successful call
        assert_eq!(ranker.remaining_uncertainty(), ok.remaining_uncertainty);
    }

    #[test]
    fn test_beta_is_preserved_but_inert() {
        let scores = vec![0.2, 0.3, 0.9];
        let mut plain = ranker_with_scores(scores.clone());
        let mut weighted: InformationDensityRanker<FeatureVector> = InformationDensityRanker::with_config(
            ScoredUncertainty::from_scores("fixed", scores),
            RankerConfig::with_beta(3.5),
        )
        .unwrap();
        weighted.set_training_data(Vec::<FeatureVector>::new());

        plain.set_candidate_pool(three_pool());
        weighted.set_candidate_pool(three_pool());

        assert_eq!(plain.beta(), 1.0);
        assert_eq!(weighted.beta(), 3.5);
        assert_eq!(plain.compute_ranking(3).unwrap(), weighted.compute_ranking(3).unwrap());
    }

    #[test]
    fn test_non_finite_beta_rejected() {
        let result: Result<InformationDensityRanker<FeatureVector>> = InformationDensityRanker::with_config(
            ScoredUncertainty::from_scores("fixed", Vec::new()),
            RankerConfig::with_beta(f64::NAN),
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_parallel_density_gives_same_ranking() {
        let pool: Vec<FeatureVector> = (0..40)
            .map(|i| fv(&[(i as f64 * 0.3).cos(), (i as f64 * 0.7).sin().abs(), 0.5]))
            .collect();
        let scores: Vec<f64> = (0..40).map(|i| (i % 10) as f64 / 10.0).collect();

        let mut sequential = ranker_with_scores(scores.clone());
        let mut parallel: InformationDensityRanker<FeatureVector> = InformationDensityRanker::with_config(
            ScoredUncertainty::from_scores("fixed", scores),
            RankerConfig { parallel_threshold: 1, ..RankerConfig::default() },
        )
        .unwrap();
        parallel.set_training_data(Vec::<FeatureVector>::new());

        sequential.set_candidate_pool(pool.clone());
        parallel.set_candidate_pool(pool);

        assert_eq!(sequential.compute_ranking(10).unwrap(), parallel.compute_ranking(10).unwrap());
    }

    #[test]
    fn test_ranker_as_base_model() {
        let mut inner = ranker_with_scores(vec![0.2, 0.3, 0.9]);
        inner.set_candidate_pool(three_pool());
        let direct = inner.compute_ranking(3).unwrap();

        let mut as_model: Box<dyn UncertaintyModel<FeatureVector>> = Box::new(inner);
        as_model.set_candidate_pool(three_pool().into());
        let ranking = as_model.rank_candidates(3).unwrap();
        assert_eq!(ranking.into_values(), direct.indices());
        assert_eq!(as_model.name(), "InformationDensityActiveLearning");
    }
}
