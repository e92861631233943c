use serde::{Deserialize, Serialize};
use crate::feature::{Feature, FeatureAccess, FeatureType, FeatureValue};

/// An ordered collection of named, typed features
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureVector {
    /// Optional caller-side identifier, never used for identity by the ranker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub features: Vec<Feature>,
    /// Known label for training vectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            id: None,
            features,
            label: None,
        }
    }

    /// Build a vector of numeric features named `f0`, `f1`, ...
    #[must_use]
    pub fn from_numeric(values: &[f64]) -> Self {
        Self::new(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Feature::numeric(format!("f{}", i), *v))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Look up a feature by name (first match)
    pub fn get_by_name(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name == name)
    }
}

impl FeatureAccess for FeatureVector {
    #[inline]
    fn feature_count(&self) -> usize {
        self.features.len()
    }

    #[inline]
    fn feature_type_at(&self, index: usize) -> Option<FeatureType> {
        self.features.get(index).map(Feature::feature_type)
    }

    #[inline]
    fn feature_value_at(&self, index: usize) -> Option<&FeatureValue> {
        self.features.get(index).map(|f| &f.value)
    }
}
