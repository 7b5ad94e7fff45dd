//! Inference results, one value per bundle target.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Predicted value per target, in the bundle's declared target order.
///
/// Values may be non-finite when a target's estimator failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceResult {
    entries: Vec<(String, f64)>,
}

impl InferenceResult {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, target: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == target)
            .map(|(_, v)| *v)
    }

    /// True when the target has a finite prediction.
    pub fn is_available(&self, target: &str) -> bool {
        self.get(target).is_some_and(f64::is_finite)
    }

    /// Targets whose prediction is not finite.
    pub fn unavailable(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for InferenceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(n, v)| {
                if v.is_finite() {
                    format!("{}={:.6}", n, v)
                } else {
                    format!("{}=n/a", n)
                }
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
