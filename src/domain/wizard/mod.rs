//! Slot-filling wizard.
//!
//! Collects the required design inputs across turns, then runs inference
//! once they are complete. The per-session [`WizardState`] is owned by the
//! caller; [`SlotFillingWizard`] holds only configuration.

mod machine;
mod prompt;
mod state;

pub use machine::{is_cancel, SlotFillingWizard, TurnOutcome, CANCEL_MARKER};
pub use prompt::{bundle_not_ready, cancelled, missing_prompt};
pub use state::{WizardPhase, WizardState};
