//! Pool density and its per-epoch cache
//!
//! The density of candidate `i` is the sum of its cosine similarities to every
//! other candidate, divided by the pool size. Values live in an arena indexed
//! by candidate position; nothing is keyed by vector identity.

use crate::distance::cosine_similarity;
use denserank_core::FeatureAccess;
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Compute the density of every candidate in `pool`
///
/// The sequential path computes each unordered pair once. The parallel path
/// computes one row per task. Both accumulate each candidate's sum in
/// increasing index order, so they agree bit for bit.
pub fn density_values<V>(pool: &[V], parallel: bool) -> Vec<f64>
where
    V: FeatureAccess + Sync,
{
    let u = pool.len();
    if u == 0 {
        return Vec::new();
    }

    let sums = if parallel {
        (0..u)
            .into_par_iter()
            .map(|i| row_sum(pool, i))
            .collect::<Vec<f64>>()
    } else {
        pairwise_sums(pool)
    };

    let divisor = u as f64;
    sums.into_iter().map(|s| s / divisor).collect()
}

fn row_sum<V: FeatureAccess>(pool: &[V], i: usize) -> f64 {
    let mut sum = 0.0f64;
    for (j, other) in pool.iter().enumerate() {
        if j != i {
            sum += cosine_similarity(&pool[i], other);
        }
    }
    sum
}

fn pairwise_sums<V: FeatureAccess>(pool: &[V]) -> Vec<f64> {
    let u = pool.len();
    let mut sums = vec![0.0f64; u];
    for i in 0..u {
        for j in (i + 1)..u {
            let sim = cosine_similarity(&pool[i], &pool[j]);
            sums[i] += sim;
            sums[j] += sim;
        }
    }
    sums
}

/// Lazily built density values for one candidate pool epoch
#[derive(Debug, Clone, Default)]
pub struct DensityCache {
    values: Option<Vec<f64>>,
    epoch: u64,
    builds: u64,
}

impl DensityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop cached values and start a new epoch
    pub fn invalidate(&mut self) {
        self.values = None;
        self.epoch += 1;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.values.is_some()
    }

    #[inline]
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.as_ref().and_then(|v| v.get(index).copied())
    }

    /// Current epoch, bumped by every [`invalidate`](Self::invalidate)
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of times values were computed since creation
    #[inline]
    pub fn builds(&self) -> u64 {
        self.builds
    }

    /// Return the cached densities, computing them first if this epoch has none
    pub fn get_or_compute<V>(&mut self, pool: &[V], parallel: bool) -> &[f64]
    where
        V: FeatureAccess + Sync,
    {
        let stale = self
            .values
            .as_ref()
            .map_or(true, |values| values.len() != pool.len());

        if stale {
            let start = Instant::now();
            let values = density_values(pool, parallel);
            self.builds += 1;
            debug!(
                pool_size = pool.len(),
                epoch = self.epoch,
                parallel,
                elapsed_us = start.elapsed().as_micros() as u64,
                "density cache built"
            );
            self.values = Some(values);
        }

        self.values.as_deref().unwrap_or(&[])
    }
}
