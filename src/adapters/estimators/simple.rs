//! Constant and closure-backed estimators.

use std::fmt;

use crate::domain::inference::FeatureRow;
use crate::ports::{Estimator, EstimatorError};

/// Always predicts the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEstimator {
    value: f64,
}

impl ConstantEstimator {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Estimator for ConstantEstimator {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, EstimatorError> {
        Ok(self.value)
    }
}

/// Wraps a closure as an estimator. Handy for host-provided models.
pub struct FnEstimator<F> {
    name: String,
    f: F,
}

impl<F> FnEstimator<F>
where
    F: Fn(&FeatureRow) -> Result<f64, EstimatorError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> fmt::Debug for FnEstimator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEstimator").field("name", &self.name).finish()
    }
}

impl<F> Estimator for FnEstimator<F>
where
    F: Fn(&FeatureRow) -> Result<f64, EstimatorError> + Send + Sync,
{
    fn predict(&self, row: &FeatureRow) -> Result<f64, EstimatorError> {
        (self.f)(row)
    }
}
