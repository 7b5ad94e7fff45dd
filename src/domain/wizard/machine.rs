//! Slot-filling wizard transition function.
//!
//! One turn is evaluated against a fixed priority order:
//!
//! 0. `/cancel` while collecting ends the collection.
//! 1. No intent and not collecting: not a prediction turn.
//! 2. No bundle: readiness warning, back to idle.
//! 3. Collecting: merge the turn's extraction, then prompt or infer.
//! 4. Idle with intent: seed from the turn, then prompt or infer.

use crate::domain::extraction::{IntentClassifier, ParameterExtractor};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::inference::{InferenceEngine, InferenceError, InferenceResult, RegressionBundle};
use crate::domain::parameters::{CanonicalKey, ParameterRecord};

use super::state::WizardState;

/// Marker that abandons an in-progress collection.
pub const CANCEL_MARKER: &str = "/cancel";

pub fn is_cancel(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(CANCEL_MARKER)
}

/// What a single turn produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Ordinary conversation; hand the text to the chat engine.
    NotPrediction,
    /// Prediction requested but no bundle is installed.
    BundleNotReady,
    /// Collection continues until `missing` is supplied.
    AwaitingInput {
        missing: Vec<CanonicalKey>,
        collected: ParameterRecord,
    },
    Predicted {
        inputs: ParameterRecord,
        result: InferenceResult,
    },
    InferenceFailed {
        inputs: ParameterRecord,
        error: InferenceError,
    },
    Cancelled,
}

impl TurnOutcome {
    /// True when the turn was consumed by the prediction flow.
    pub fn is_prediction_flow(&self) -> bool {
        !matches!(self, TurnOutcome::NotPrediction)
    }

    /// The failure this turn reports, if any.
    pub fn error(&self) -> Option<DomainError> {
        match self {
            TurnOutcome::BundleNotReady => Some(DomainError::new(
                ErrorCode::BundleNotLoaded,
                "no regression bundle loaded",
            )),
            TurnOutcome::InferenceFailed { error, .. } => Some(error.clone().into()),
            _ => None,
        }
    }
}

/// Stateless wizard logic; the state itself lives in the session.
#[derive(Debug, Clone, Default)]
pub struct SlotFillingWizard {
    extractor: ParameterExtractor,
    classifier: IntentClassifier,
    engine: InferenceEngine,
}

impl SlotFillingWizard {
    pub fn new(
        extractor: ParameterExtractor,
        classifier: IntentClassifier,
        engine: InferenceEngine,
    ) -> Self {
        Self {
            extractor,
            classifier,
            engine,
        }
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    pub fn extractor(&self) -> &ParameterExtractor {
        &self.extractor
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Processes one turn to completion, mutating `state` in place.
    pub fn handle_turn(
        &self,
        state: &mut WizardState,
        text: &str,
        bundle: Option<&RegressionBundle>,
    ) -> TurnOutcome {
        if state.is_active() && is_cancel(text) {
            tracing::debug!(collected = %state.collected(), "collection cancelled");
            state.reset();
            return TurnOutcome::Cancelled;
        }

        if !state.is_active() && !self.classifier.is_prediction_intent(text) {
            return TurnOutcome::NotPrediction;
        }

        let Some(bundle) = bundle else {
            tracing::warn!("prediction requested without a loaded bundle");
            state.reset();
            return TurnOutcome::BundleNotReady;
        };

        let (update, source) = self.extractor.extract_with_source(text);
        tracing::debug!(?source, record = %update, active = state.is_active(), "wizard step");

        let step = if state.is_active() {
            state.absorb(&update)
        } else {
            state.begin(update)
        };
        if let Err(e) = step {
            tracing::error!(error = %e, "wizard transition rejected");
            state.reset();
            return TurnOutcome::NotPrediction;
        }

        let missing = self.engine.required().missing(state.collected());
        if !missing.is_empty() {
            return TurnOutcome::AwaitingInput {
                missing,
                collected: state.collected().clone(),
            };
        }

        let inputs = state.finish();
        match self.engine.infer(bundle, &inputs) {
            Ok(result) => {
                tracing::info!(inputs = %inputs, result = %result, "prediction complete");
                TurnOutcome::Predicted { inputs, result }
            }
            Err(error) => {
                tracing::warn!(error = %error, "inference rejected inputs");
                TurnOutcome::InferenceFailed { inputs, error }
            }
        }
    }
}
