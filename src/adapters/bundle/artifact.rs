//! Serializable shape of a persisted regression bundle.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::estimators::{ConstantEstimator, LinearEstimator};
use crate::domain::inference::{BundleError, RegressionBundle};
use crate::ports::Estimator;

/// Entries every artifact must expose, checked in this order.
pub const REQUIRED_ENTRIES: [&str; 3] = ["models", "features_by_target", "targets"];

/// One persisted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatorSpec {
    Constant { value: f64 },
    Linear(LinearEstimator),
}

impl EstimatorSpec {
    fn build(self, target: &str) -> Result<Arc<dyn Estimator>, BundleError> {
        match self {
            EstimatorSpec::Constant { value } if !value.is_finite() => Err(BundleError::InvalidModel {
                target: target.to_string(),
                reason: "constant value is not finite".to_string(),
            }),
            EstimatorSpec::Constant { value } => Ok(Arc::new(ConstantEstimator::new(value))),
            EstimatorSpec::Linear(linear) => {
                let bad = linear.non_finite_parameters();
                if !bad.is_empty() {
                    return Err(BundleError::InvalidModel {
                        target: target.to_string(),
                        reason: format!("non-finite parameters: {}", bad.join(", ")),
                    });
                }
                Ok(Arc::new(linear))
            }
        }
    }
}

/// On-disk bundle layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleArtifact {
    pub targets: Vec<String>,
    pub features_by_target: HashMap<String, Vec<String>>,
    pub models: HashMap<String, EstimatorSpec>,
}

impl BundleArtifact {
    /// Checks structure entry by entry so a missing entry is named.
    pub fn from_value(value: Value) -> Result<Self, BundleError> {
        let Value::Object(object) = &value else {
            return Err(BundleError::Parse("bundle root must be a mapping".to_string()));
        };
        for entry in REQUIRED_ENTRIES {
            if !object.contains_key(entry) {
                return Err(BundleError::MissingEntry(entry.to_string()));
            }
        }
        serde_json::from_value(value).map_err(|e| BundleError::Parse(e.to_string()))
    }

    pub fn into_bundle(self) -> Result<RegressionBundle, BundleError> {
        let mut estimators = HashMap::with_capacity(self.models.len());
        for (target, spec) in self.models {
            let estimator = spec.build(&target)?;
            estimators.insert(target, estimator);
        }
        RegressionBundle::new(self.targets, self.features_by_target, estimators)
    }
}
