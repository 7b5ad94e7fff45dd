//! Wizard phase state machine and per-session wizard state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::parameters::ParameterRecord;

/// Lifecycle phase of the slot-filling wizard.
///
/// - `Idle`: no collection in progress (initial and terminal)
/// - `Collecting`: partial inputs gathered, waiting for the rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    #[default]
    Idle,
    Collecting,
}

impl StateMachine for WizardPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardPhase::*;
        matches!(
            (self, target),
            // Intent with incomplete inputs starts a collection
            (Idle, Collecting) |
            // Another partial turn
            (Collecting, Collecting) |
            // Completed, failed or cancelled
            (Collecting, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardPhase::*;
        match self {
            Idle => vec![Collecting],
            Collecting => vec![Collecting, Idle],
        }
    }
}

/// Wizard state owned by exactly one conversation session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    phase: WizardPhase,
    collected: ParameterRecord,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == WizardPhase::Collecting
    }

    pub fn collected(&self) -> &ParameterRecord {
        &self.collected
    }

    /// Enters `Collecting` with a seed record.
    pub fn begin(&mut self, seed: ParameterRecord) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(WizardPhase::Collecting)?;
        self.collected = seed;
        Ok(())
    }

    /// Merges a newer partial record; newer values win.
    pub fn absorb(&mut self, update: &ParameterRecord) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(WizardPhase::Collecting)?;
        self.collected.merge(update);
        Ok(())
    }

    /// Returns to `Idle`, handing back whatever was collected.
    pub fn finish(&mut self) -> ParameterRecord {
        self.phase = WizardPhase::Idle;
        std::mem::take(&mut self.collected)
    }

    /// Unconditional reset to the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
