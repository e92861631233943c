//! Cosine similarity over typed feature vectors
//!
//! Only positions where both vectors carry a numeric feature take part. Every
//! other position (categorical, text, boolean, or a type mismatch) is skipped.

use denserank_core::{FeatureAccess, FeatureType};

/// Cosine similarity between two feature vectors
///
/// # Returns
/// - `0.0` when the vectors have different feature counts
/// - `0.0` when either vector has no numeric mass (zero norm over the
///   shared numeric positions), so no NaN ever leaves this function
/// - `dot / (|a| * |b|)` otherwise
///
/// The result is bitwise symmetric in its arguments.
pub fn cosine_similarity<A, B>(a: &A, b: &B) -> f64
where
    A: FeatureAccess + ?Sized,
    B: FeatureAccess + ?Sized,
{
    let n = a.feature_count();
    if n != b.feature_count() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut sum_sq_a = 0.0f64;
    let mut sum_sq_b = 0.0f64;

    for i in 0..n {
        if let Some((x, y)) = numeric_pair(a, b, i) {
            dot += x * y;
            sum_sq_a += x * x;
            sum_sq_b += y * y;
        }
    }

    if sum_sq_a == 0.0 || sum_sq_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (sum_sq_a.sqrt() * sum_sq_b.sqrt());
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}

#[inline]
fn numeric_pair<A, B>(a: &A, b: &B, index: usize) -> Option<(f64, f64)>
where
    A: FeatureAccess + ?Sized,
    B: FeatureAccess + ?Sized,
{
    if a.feature_type_at(index) != Some(FeatureType::Numeric)
        || b.feature_type_at(index) != Some(FeatureType::Numeric)
    {
        return None;
    }
    Some((a.numeric_at(index)?, b.numeric_at(index)?))
}
