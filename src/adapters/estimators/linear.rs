//! Linear regression estimator with per-feature imputation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::inference::FeatureRow;
use crate::ports::{Estimator, EstimatorError};

/// `intercept + sum(coefficient * feature)`.
///
/// Missing features are replaced by their `impute` value, or 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearEstimator {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: BTreeMap<String, f64>,
    #[serde(default)]
    pub impute: BTreeMap<String, f64>,
}

impl LinearEstimator {
    pub fn new(intercept: f64, coefficients: BTreeMap<String, f64>) -> Self {
        Self {
            intercept,
            coefficients,
            impute: BTreeMap::new(),
        }
    }

    pub fn with_impute(mut self, feature: impl Into<String>, value: f64) -> Self {
        self.impute.insert(feature.into(), value);
        self
    }

    /// Names of parameters that are not finite, if any.
    pub fn non_finite_parameters(&self) -> Vec<String> {
        let mut bad = Vec::new();
        if !self.intercept.is_finite() {
            bad.push("intercept".to_string());
        }
        for (name, value) in self.coefficients.iter().chain(self.impute.iter()) {
            if !value.is_finite() {
                bad.push(name.clone());
            }
        }
        bad
    }
}

impl Estimator for LinearEstimator {
    fn predict(&self, row: &FeatureRow) -> Result<f64, EstimatorError> {
        let mut total = self.intercept;
        for (feature, coefficient) in &self.coefficients {
            let raw = row
                .get(feature)
                .ok_or_else(|| EstimatorError::MissingFeature(feature.clone()))?;
            let value = if raw.is_finite() {
                raw
            } else {
                self.impute.get(feature).copied().unwrap_or(0.0)
            };
            total += coefficient * value;
        }
        Ok(total)
    }
}
