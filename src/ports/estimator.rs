//! Estimator Port - Interface for pre-trained numeric regressors.
//!
//! Estimators are opaque callables: one feature row in, one number out.
//! They are shared read-only across inference calls and sessions.

use std::fmt::Debug;
use thiserror::Error;

use crate::domain::inference::FeatureRow;

/// Port for a single pre-trained regression estimator.
pub trait Estimator: Send + Sync + Debug {
    /// Predicts one value for the row. Missing features arrive as NaN.
    fn predict(&self, row: &FeatureRow) -> Result<f64, EstimatorError>;
}

/// Errors an estimator may report for one invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// A feature the estimator cannot impute is missing.
    #[error("required feature missing: {0}")]
    MissingFeature(String),

    /// Any other failure inside the estimator.
    #[error("estimator failed: {0}")]
    Failed(String),
}

impl EstimatorError {
    pub fn failed(message: impl Into<String>) -> Self {
        EstimatorError::Failed(message.into())
    }
}
