//! Iterative inference loop.
//!
//! Runs every target's estimator for a fixed number of rounds. Outputs of
//! round k are written back to the feature pool only after every target of
//! round k has run, so feedback always lags exactly one round. There is no
//! convergence check: the last round's outputs are the result.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use super::bundle::RegressionBundle;
use super::pool::FeaturePool;
use super::result::InferenceResult;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::parameters::{CanonicalKey, ParameterRecord, RequiredSet};

/// Round count used by the reference behavior.
pub const DEFAULT_ROUNDS: u32 = 5;

/// Upper bound accepted for configured round counts.
pub const MAX_ROUNDS: u32 = 100;

/// Errors that stop an inference call before any estimator runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("required inputs missing: {}", format_keys(.missing))]
    IncompleteInput { missing: Vec<CanonicalKey> },
}

impl From<InferenceError> for DomainError {
    fn from(err: InferenceError) -> Self {
        let message = err.to_string();
        match err {
            InferenceError::IncompleteInput { missing } => {
                DomainError::new(ErrorCode::InferenceFailed, message)
                    .with_detail("missing", format_keys(&missing))
            }
        }
    }
}

fn format_keys(keys: &[CanonicalKey]) -> String {
    keys.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
}

/// Fixed-round inference over a regression bundle.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    rounds: u32,
    required: RequiredSet,
}

impl InferenceEngine {
    pub fn new(rounds: u32, required: RequiredSet) -> Result<Self, ValidationError> {
        if rounds == 0 || rounds > MAX_ROUNDS {
            return Err(ValidationError::out_of_range(
                "inference.rounds",
                1,
                i64::from(MAX_ROUNDS),
                i64::from(rounds),
            ));
        }
        Ok(Self { rounds, required })
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn required(&self) -> &RequiredSet {
        &self.required
    }

    /// Computes every target; a failing estimator yields NaN for its target.
    pub fn infer(
        &self,
        bundle: &RegressionBundle,
        record: &ParameterRecord,
    ) -> Result<InferenceResult, InferenceError> {
        let mut trace = self.infer_traced(bundle, record)?;
        Ok(trace.pop().unwrap_or_default())
    }

    /// Like [`infer`](Self::infer) but returns every round's outputs.
    pub fn infer_traced(
        &self,
        bundle: &RegressionBundle,
        record: &ParameterRecord,
    ) -> Result<Vec<InferenceResult>, InferenceError> {
        let missing = self.required.missing(record);
        if !missing.is_empty() {
            return Err(InferenceError::IncompleteInput { missing });
        }

        let mut pool = FeaturePool::seed(record);
        let mut rounds = Vec::with_capacity(self.rounds as usize);

        for round in 1..=self.rounds {
            let outputs: Vec<(String, f64)> = bundle
                .targets()
                .iter()
                .map(|target| (target.clone(), run_target(bundle, &pool, target, round)))
                .collect();

            pool.apply(outputs.iter().map(|(name, value)| (name.as_str(), *value)));
            tracing::debug!(round, outputs = ?outputs, "inference round complete");
            rounds.push(InferenceResult::new(outputs));
        }

        Ok(rounds)
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            required: RequiredSet::standard(),
        }
    }
}

fn run_target(bundle: &RegressionBundle, pool: &FeaturePool, target: &str, round: u32) -> f64 {
    let row = pool.row_for(bundle.features_for(target));
    let Some(estimator) = bundle.estimator(target) else {
        return f64::NAN;
    };
    match panic::catch_unwind(AssertUnwindSafe(|| estimator.predict(&row))) {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            tracing::warn!(target = %target, round, error = %e, "estimator failed");
            f64::NAN
        }
        Err(_) => {
            tracing::warn!(target = %target, round, "estimator panicked");
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::estimators::{ConstantEstimator, FnEstimator};
    use crate::domain::inference::FeatureRow;
    use crate::ports::{Estimator, EstimatorError};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn record() -> ParameterRecord {
        ParameterRecord::new()
            .with(CanonicalKey::Fck, 27.0)
            .with(CanonicalKey::Fy, 400.0)
            .with(CanonicalKey::Width, 300.0)
            .with(CanonicalKey::Height, 500.0)
            .with(CanonicalKey::PhiMn, 120.0)
    }

    fn bundle(specs: Vec<(&str, Vec<&str>, Arc<dyn Estimator>)>) -> RegressionBundle {
        let targets = specs.iter().map(|(t, _, _)| t.to_string()).collect();
        let features = specs
            .iter()
            .map(|(t, f, _)| (t.to_string(), f.iter().map(|s| s.to_string()).collect()))
            .collect();
        let estimators: HashMap<String, Arc<dyn Estimator>> =
            specs.into_iter().map(|(t, _, e)| (t.to_string(), e)).collect();
        RegressionBundle::new(targets, features, estimators).unwrap()
    }

    fn shared<E: Estimator + 'static>(estimator: E) -> Arc<dyn Estimator> {
        Arc::new(estimator)
    }

    fn engine(rounds: u32) -> InferenceEngine {
        InferenceEngine::new(rounds, RequiredSet::standard()).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn default_runs_five_rounds() {
            assert_eq!(InferenceEngine::default().rounds(), DEFAULT_ROUNDS);
            assert_eq!(DEFAULT_ROUNDS, 5);
        }

        #[test]
        fn rejects_zero_and_excessive_rounds() {
            assert!(InferenceEngine::new(0, RequiredSet::standard()).is_err());
            assert!(InferenceEngine::new(MAX_ROUNDS + 1, RequiredSet::standard()).is_err());
            assert!(InferenceEngine::new(1, RequiredSet::standard()).is_ok());
        }
    }

    #[test]
    fn constant_target_is_independent_of_round_count() {
        let b = bundle(vec![(
            "bd",
            vec!["f_idx", "width", "height"],
            shared(ConstantEstimator::new(500.0)),
        )]);
        for rounds in [1, 2, 5, 10] {
            let result = engine(rounds).infer(&b, &record()).unwrap();
            assert_eq!(result, InferenceResult::new(vec![("bd".into(), 500.0)]));
        }
    }

    #[test]
    fn incomplete_record_is_rejected() {
        let b = bundle(vec![("bd", vec!["width"], shared(ConstantEstimator::new(1.0)))]);
        let partial = ParameterRecord::new().with(CanonicalKey::Fck, 27.0);
        let err = engine(5).infer(&b, &partial).unwrap_err();
        assert_eq!(
            err,
            InferenceError::IncompleteInput {
                missing: vec![
                    CanonicalKey::Fy,
                    CanonicalKey::Width,
                    CanonicalKey::Height,
                    CanonicalKey::PhiMn
                ]
            }
        );
    }

    #[test]
    fn estimator_sees_declared_features_in_order() {
        let seen: Arc<Mutex<Vec<FeatureRow>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let b = bundle(vec![(
            "Sm",
            vec!["height", "f_idx", "rho"],
            shared(FnEstimator::new("probe", move |row: &FeatureRow| {
                sink.lock().unwrap().push(row.clone());
                Ok(1.0)
            })),
        )]);

        engine(1).infer(&b, &record()).unwrap();

        let rows = seen.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].columns(), &["height".to_string(), "f_idx".to_string(), "rho".to_string()]);
        assert_eq!(rows[0].get("height"), Some(500.0));
        assert_eq!(rows[0].get("f_idx"), Some(27.4));
        assert!(rows[0].is_missing("rho"));
    }

    #[test]
    fn updates_are_simultaneous_within_a_round() {
        // A reads B; B increments every round.
        let counter = Arc::new(Mutex::new(0.0));
        let tick = counter.clone();
        let b = bundle(vec![
            (
                "A",
                vec!["B"],
                shared(FnEstimator::new("echo-b", |row: &FeatureRow| {
                    Ok(row.get("B").filter(|v| v.is_finite()).unwrap_or(-1.0))
                })),
            ),
            (
                "B",
                vec![],
                shared(FnEstimator::new("counter", move |_row: &FeatureRow| {
                    let mut n = tick.lock().unwrap();
                    *n += 1.0;
                    Ok(*n)
                })),
            ),
        ]);

        let trace = engine(3).infer_traced(&b, &record()).unwrap();

        // Round 1: B absent from pool, so A reads the missing marker.
        assert_eq!(trace[0].get("A"), Some(-1.0));
        assert_eq!(trace[0].get("B"), Some(1.0));
        // Round k sees B's round k-1 value only.
        assert_eq!(trace[1].get("A"), Some(1.0));
        assert_eq!(trace[1].get("B"), Some(2.0));
        assert_eq!(trace[2].get("A"), Some(2.0));
        assert_eq!(trace[2].get("B"), Some(3.0));
    }

    #[test]
    fn failing_estimator_only_affects_its_target() {
        let b = bundle(vec![
            (
                "Sm",
                vec!["width"],
                shared(FnEstimator::new("broken", |_row: &FeatureRow| {
                    Err(EstimatorError::failed("model file corrupt"))
                })),
            ),
            ("bd", vec!["width"], shared(ConstantEstimator::new(150_000.0))),
        ]);

        let result = engine(5).infer(&b, &record()).unwrap();

        assert!(result.get("Sm").unwrap().is_nan());
        assert_eq!(result.get("bd"), Some(150_000.0));
        assert_eq!(result.unavailable(), vec!["Sm"]);
    }

    #[test]
    fn panicking_estimator_yields_nan_without_escaping() {
        let b = bundle(vec![
            (
                "rho",
                vec!["width"],
                shared(FnEstimator::new(
                    "panics",
                    |_row: &FeatureRow| -> Result<f64, EstimatorError> { panic!("index out of bounds") },
                )),
            ),
            ("bd", vec!["width"], shared(ConstantEstimator::new(150_000.0))),
        ]);

        let result = engine(2).infer(&b, &record()).unwrap();

        assert!(result.get("rho").unwrap().is_nan());
        assert_eq!(result.get("bd"), Some(150_000.0));
    }

    #[test]
    fn incomplete_input_converts_to_domain_error() {
        let err: DomainError = InferenceError::IncompleteInput {
            missing: vec![CanonicalKey::Height, CanonicalKey::PhiMn],
        }
        .into();
        assert_eq!(err.code, ErrorCode::InferenceFailed);
        assert_eq!(err.details.get("missing").map(String::as_str), Some("height, phi_mn"));
    }

    #[test]
    fn non_finite_prediction_keeps_previous_pool_value() {
        // phi_mn is both an input and a target; a NaN prediction must not erase it.
        let b = bundle(vec![
            (
                "phi_mn",
                vec![],
                shared(FnEstimator::new("nan", |_row: &FeatureRow| Ok(f64::NAN))),
            ),
            (
                "rho",
                vec!["phi_mn"],
                shared(FnEstimator::new("echo", |row: &FeatureRow| {
                    Ok(row.get("phi_mn").unwrap_or(f64::NAN))
                })),
            ),
        ]);

        let result = engine(3).infer(&b, &record()).unwrap();

        assert_eq!(result.get("rho"), Some(120.0));
    }

    #[test]
    fn feedback_reaches_dependent_target_next_round() {
        let b = bundle(vec![
            ("bd", vec!["width"], shared(ConstantEstimator::new(150_000.0))),
            (
                "rho",
                vec!["bd"],
                shared(FnEstimator::new("ratio", |row: &FeatureRow| {
                    let bd = row.get("bd").unwrap_or(f64::NAN);
                    if bd.is_finite() {
                        Ok(1500.0 / bd)
                    } else {
                        Err(EstimatorError::MissingFeature("bd".into()))
                    }
                })),
            ),
        ]);

        let trace = engine(2).infer_traced(&b, &record()).unwrap();

        assert!(trace[0].get("rho").unwrap().is_nan());
        assert_eq!(trace[1].get("rho"), Some(0.01));
    }
}
