//! Typed features and the capability contract the ranker reads vectors through
//!
//! Vectors in one pool are compared position by position. Nothing here aligns
//! features by name.

use serde::{Deserialize, Serialize};

/// Feature type tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Real-valued feature, the only kind that takes part in cosine similarity
    Numeric,
    /// Category label
    Categorical,
    /// Free text
    Text,
    /// Boolean flag
    Boolean,
}

/// A typed feature value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(String),
    Text(String),
    Boolean(bool),
}

impl FeatureValue {
    #[inline]
    pub fn feature_type(&self) -> FeatureType {
        match self {
            FeatureValue::Numeric(_) => FeatureType::Numeric,
            FeatureValue::Categorical(_) => FeatureType::Categorical,
            FeatureValue::Text(_) => FeatureType::Text,
            FeatureValue::Boolean(_) => FeatureType::Boolean,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Numeric(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Boolean(v)
    }
}

/// A named feature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub name: String,
    pub value: FeatureValue,
}

impl Feature {
    pub fn new(name: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn numeric(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, FeatureValue::Numeric(value))
    }

    pub fn categorical(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FeatureValue::Categorical(value.into()))
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FeatureValue::Text(value.into()))
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, FeatureValue::Boolean(value))
    }

    #[inline]
    pub fn feature_type(&self) -> FeatureType {
        self.value.feature_type()
    }
}

/// Read access to a feature vector.
///
/// Any representation the caller owns can be ranked as long as it exposes
/// its features positionally through this trait.
pub trait FeatureAccess {
    /// Number of features in the vector
    fn feature_count(&self) -> usize;

    /// Type tag of the feature at `index`, `None` if out of range
    fn feature_type_at(&self, index: usize) -> Option<FeatureType>;

    /// Value of the feature at `index`, `None` if out of range
    fn feature_value_at(&self, index: usize) -> Option<&FeatureValue>;

    /// Numeric value at `index`, `None` for non-numeric or missing features
    #[inline]
    fn numeric_at(&self, index: usize) -> Option<f64> {
        self.feature_value_at(index).and_then(FeatureValue::as_f64)
    }
}

impl<T: FeatureAccess + ?Sized> FeatureAccess for &T {
    #[inline]
    fn feature_count(&self) -> usize {
        (**self).feature_count()
    }

    #[inline]
    fn feature_type_at(&self, index: usize) -> Option<FeatureType> {
        (**self).feature_type_at(index)
    }

    #[inline]
    fn feature_value_at(&self, index: usize) -> Option<&FeatureValue> {
        (**self).feature_value_at(index)
    }
}
