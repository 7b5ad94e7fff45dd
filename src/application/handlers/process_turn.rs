//! ProcessTurnHandler - Runs one conversation turn through the wizard.

use std::sync::Arc;

use crate::application::PredictionSession;
use crate::domain::foundation::DomainError;
use crate::domain::wizard::{bundle_not_ready, cancelled, missing_prompt, SlotFillingWizard, TurnOutcome};
use crate::ports::ResultSummarizer;

/// Command carrying one line of user text.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub text: String,
}

impl ProcessTurnCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Outcome of a turn plus the reply to show, if the prediction flow owns it.
///
/// `reply` is `None` for [`TurnOutcome::NotPrediction`]; the caller routes
/// those turns to the general chat engine.
#[derive(Debug, Clone)]
pub struct ProcessTurnResult {
    pub outcome: TurnOutcome,
    pub reply: Option<String>,
    pub error: Option<DomainError>,
}

/// Handler for conversation turns.
pub struct ProcessTurnHandler {
    wizard: Arc<SlotFillingWizard>,
    summarizer: Arc<dyn ResultSummarizer>,
}

impl ProcessTurnHandler {
    pub fn new(wizard: Arc<SlotFillingWizard>, summarizer: Arc<dyn ResultSummarizer>) -> Self {
        Self { wizard, summarizer }
    }

    pub fn handle(&self, session: &mut PredictionSession, cmd: ProcessTurnCommand) -> ProcessTurnResult {
        // 1. Pin the bundle for the duration of the turn
        let bundle = session.bundle().cloned();

        // 2. Advance the wizard
        let outcome = self
            .wizard
            .handle_turn(session.wizard_mut(), &cmd.text, bundle.as_deref());
        tracing::debug!(session_id = %session.id(), outcome = ?outcome, "turn processed");

        // 3. Classify failures
        let error = outcome.error();
        if let Some(e) = &error {
            tracing::warn!(session_id = %session.id(), code = %e.code, "turn failed");
        }

        // 4. Render the reply
        let language = session.language();
        let reply = match &outcome {
            TurnOutcome::NotPrediction => None,
            TurnOutcome::BundleNotReady => Some(bundle_not_ready(language).to_string()),
            TurnOutcome::AwaitingInput { missing, .. } => Some(missing_prompt(missing, language)),
            TurnOutcome::Predicted { inputs, result } => {
                Some(self.summarizer.summarize(inputs, result))
            }
            TurnOutcome::InferenceFailed { .. } => error.as_ref().map(ToString::to_string),
            TurnOutcome::Cancelled => Some(cancelled(language).to_string()),
        };

        ProcessTurnResult {
            outcome,
            reply,
            error,
        }
    }
}
