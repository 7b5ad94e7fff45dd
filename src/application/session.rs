//! Per-session prediction context.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{Language, SessionId};
use crate::domain::inference::RegressionBundle;
use crate::domain::parameters::CanonicalKey;
use crate::domain::wizard::{WizardPhase, WizardState};

/// Everything one conversation owns: its wizard state and its bundle.
///
/// Sessions never share wizard state. Bundles are shared read-only via `Arc`.
#[derive(Debug, Clone)]
pub struct PredictionSession {
    id: SessionId,
    language: Language,
    wizard: WizardState,
    bundle: Option<Arc<RegressionBundle>>,
}

/// Snapshot for status displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub session_id: SessionId,
    pub phase: WizardPhase,
    pub collected: Vec<(CanonicalKey, f64)>,
    pub bundle_targets: Option<Vec<String>>,
}

impl PredictionSession {
    pub fn new(language: Language) -> Self {
        Self {
            id: SessionId::new(),
            language,
            wizard: WizardState::new(),
            bundle: None,
        }
    }

    pub fn with_bundle(mut self, bundle: Arc<RegressionBundle>) -> Self {
        self.bundle = Some(bundle);
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WizardState {
        &mut self.wizard
    }

    pub fn bundle(&self) -> Option<&Arc<RegressionBundle>> {
        self.bundle.as_ref()
    }

    pub fn install_bundle(&mut self, bundle: Arc<RegressionBundle>) {
        self.bundle = Some(bundle);
    }

    pub fn discard_bundle(&mut self) -> Option<Arc<RegressionBundle>> {
        self.bundle.take()
    }

    /// Clears any in-progress collection; the bundle stays installed.
    pub fn reset(&mut self) {
        self.wizard.reset();
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            session_id: self.id,
            phase: self.wizard.phase(),
            collected: self.wizard.collected().iter().collect(),
            bundle_targets: self.bundle.as_ref().map(|b| b.targets().to_vec()),
        }
    }
}

impl Default for PredictionSession {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::estimators::ConstantEstimator;
    use crate::domain::parameters::ParameterRecord;
    use crate::ports::Estimator;
    use std::collections::HashMap;

    fn bundle() -> Arc<RegressionBundle> {
        let estimator: Arc<dyn Estimator> = Arc::new(ConstantEstimator::new(1.0));
        Arc::new(
            RegressionBundle::new(
                vec!["rho".to_string()],
                HashMap::from([("rho".to_string(), vec!["width".to_string()])]),
                HashMap::from([("rho".to_string(), estimator)]),
            )
            .unwrap(),
        )
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(PredictionSession::default().id(), PredictionSession::default().id());
    }

    #[test]
    fn status_reports_phase_and_bundle() {
        let mut session = PredictionSession::new(Language::En).with_bundle(bundle());
        session
            .wizard_mut()
            .begin(ParameterRecord::new().with(CanonicalKey::Fck, 27.0))
            .unwrap();

        let status = session.status();
        assert_eq!(status.phase, WizardPhase::Collecting);
        assert_eq!(status.collected, vec![(CanonicalKey::Fck, 27.0)]);
        assert_eq!(status.bundle_targets, Some(vec!["rho".to_string()]));
    }

    #[test]
    fn reset_keeps_bundle() {
        let mut session = PredictionSession::default().with_bundle(bundle());
        session.wizard_mut().begin(ParameterRecord::new()).unwrap();
        session.reset();
        assert!(!session.wizard().is_active());
        assert!(session.bundle().is_some());
    }

    #[test]
    fn shared_bundle_is_not_copied() {
        let shared = bundle();
        let a = PredictionSession::default().with_bundle(Arc::clone(&shared));
        let b = PredictionSession::default().with_bundle(Arc::clone(&shared));
        assert!(Arc::ptr_eq(a.bundle().unwrap(), b.bundle().unwrap()));
    }
}
