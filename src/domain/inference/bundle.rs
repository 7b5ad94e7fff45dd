//! Regression bundle: named targets, their feature lists and estimators.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Estimator;

/// Errors raised while assembling or loading a bundle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BundleError {
    #[error("bundle missing key: {0}")]
    MissingEntry(String),

    #[error("target '{target}' has no {missing}")]
    IncompleteTarget { target: String, missing: &'static str },

    #[error("target '{0}' is declared more than once")]
    DuplicateTarget(String),

    #[error("bundle declares no targets")]
    NoTargets,

    #[error("invalid model for target '{target}': {reason}")]
    InvalidModel { target: String, reason: String },

    #[error("unsupported bundle format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read bundle {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse bundle: {0}")]
    Parse(String),
}

/// Read-only bundle of estimators, safe to share across sessions.
///
/// Invariant: every target has both a feature list and an estimator.
#[derive(Clone)]
pub struct RegressionBundle {
    targets: Vec<String>,
    features_by_target: HashMap<String, Vec<String>>,
    estimators: HashMap<String, Arc<dyn Estimator>>,
}

impl RegressionBundle {
    pub fn new(
        targets: Vec<String>,
        features_by_target: HashMap<String, Vec<String>>,
        estimators: HashMap<String, Arc<dyn Estimator>>,
    ) -> Result<Self, BundleError> {
        if targets.is_empty() {
            return Err(BundleError::NoTargets);
        }

        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(target.as_str()) {
                return Err(BundleError::DuplicateTarget(target.clone()));
            }
            if !features_by_target.contains_key(target) {
                return Err(BundleError::IncompleteTarget {
                    target: target.clone(),
                    missing: "feature list",
                });
            }
            if !estimators.contains_key(target) {
                return Err(BundleError::IncompleteTarget {
                    target: target.clone(),
                    missing: "estimator",
                });
            }
        }

        Ok(Self {
            targets,
            features_by_target,
            estimators,
        })
    }

    /// Target names in declared order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Feature names a target needs, in declared order.
    pub fn features_for(&self, target: &str) -> &[String] {
        self.features_by_target
            .get(target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn estimator(&self, target: &str) -> Option<&Arc<dyn Estimator>> {
        self.estimators.get(target)
    }

    pub fn has_target(&self, target: &str) -> bool {
        self.features_by_target.contains_key(target)
    }
}

impl fmt::Debug for RegressionBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegressionBundle")
            .field("targets", &self.targets)
            .field("features_by_target", &self.features_by_target)
            .finish_non_exhaustive()
    }
}

impl From<BundleError> for DomainError {
    fn from(err: BundleError) -> Self {
        let error = DomainError::new(ErrorCode::BundleInvalid, err.to_string());
        match err {
            BundleError::MissingEntry(entry) => error.with_detail("entry", entry),
            BundleError::IncompleteTarget { target, .. }
            | BundleError::DuplicateTarget(target)
            | BundleError::InvalidModel { target, .. } => error.with_detail("target", target),
            BundleError::Io { path, .. } => error.with_detail("path", path),
            _ => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::estimators::ConstantEstimator;

    fn estimator(value: f64) -> Arc<dyn Estimator> {
        Arc::new(ConstantEstimator::new(value))
    }

    fn features(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(t, f)| (t.to_string(), f.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn builds_when_every_target_is_complete() {
        let bundle = RegressionBundle::new(
            vec!["bd".into(), "rho".into()],
            features(&[("bd", &["f_idx", "width"]), ("rho", &["bd"])]),
            HashMap::from([("bd".to_string(), estimator(1.0)), ("rho".to_string(), estimator(2.0))]),
        )
        .unwrap();

        assert_eq!(bundle.targets(), &["bd".to_string(), "rho".to_string()]);
        assert_eq!(bundle.features_for("rho"), &["bd".to_string()]);
        assert!(bundle.estimator("bd").is_some());
        assert!(bundle.features_for("unknown").is_empty());
    }

    #[test]
    fn rejects_target_without_features() {
        let err = RegressionBundle::new(
            vec!["bd".into()],
            HashMap::new(),
            HashMap::from([("bd".to_string(), estimator(1.0))]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BundleError::IncompleteTarget { target: "bd".into(), missing: "feature list" }
        );
    }

    #[test]
    fn rejects_target_without_estimator() {
        let err = RegressionBundle::new(
            vec!["bd".into()],
            features(&[("bd", &["width"])]),
            HashMap::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BundleError::IncompleteTarget { target: "bd".into(), missing: "estimator" }
        );
    }

    #[test]
    fn rejects_empty_and_duplicate_targets() {
        let empty = RegressionBundle::new(vec![], HashMap::new(), HashMap::new());
        assert_eq!(empty.unwrap_err(), BundleError::NoTargets);

        let dup = RegressionBundle::new(
            vec!["bd".into(), "bd".into()],
            features(&[("bd", &["width"])]),
            HashMap::from([("bd".to_string(), estimator(1.0))]),
        );
        assert_eq!(dup.unwrap_err(), BundleError::DuplicateTarget("bd".into()));
    }

    #[test]
    fn missing_entry_message_names_the_key() {
        assert_eq!(
            BundleError::MissingEntry("models".into()).to_string(),
            "bundle missing key: models"
        );
    }

    #[test]
    fn converts_to_domain_error_with_detail() {
        let err: DomainError = BundleError::MissingEntry("models".into()).into();
        assert_eq!(err.code, ErrorCode::BundleInvalid);
        assert_eq!(err.message, "bundle missing key: models");
        assert_eq!(err.details.get("entry").map(String::as_str), Some("models"));
    }
}
