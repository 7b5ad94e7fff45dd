//! LoadBundleHandler - Installs a regression bundle into a session.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::PredictionSession;
use crate::domain::foundation::DomainError;
use crate::domain::inference::RegressionBundle;
use crate::ports::BundleLoader;

/// Command to load a bundle artifact from disk.
#[derive(Debug, Clone)]
pub struct LoadBundleCommand {
    pub path: PathBuf,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct LoadBundleResult {
    pub bundle: Arc<RegressionBundle>,
}

/// Handler for bundle installation.
pub struct LoadBundleHandler {
    loader: Arc<dyn BundleLoader>,
}

impl LoadBundleHandler {
    pub fn new(loader: Arc<dyn BundleLoader>) -> Self {
        Self { loader }
    }

    /// Replaces the session's bundle; on failure the session is left without one.
    pub fn handle(
        &self,
        session: &mut PredictionSession,
        cmd: LoadBundleCommand,
    ) -> Result<LoadBundleResult, DomainError> {
        match self.loader.load(&cmd.path) {
            Ok(bundle) => {
                let bundle = Arc::new(bundle);
                session.install_bundle(Arc::clone(&bundle));
                tracing::info!(
                    session_id = %session.id(),
                    path = %cmd.path.display(),
                    targets = bundle.targets().len(),
                    "bundle installed"
                );
                Ok(LoadBundleResult { bundle })
            }
            Err(e) => {
                let discarded = session.discard_bundle().is_some();
                tracing::warn!(
                    session_id = %session.id(),
                    path = %cmd.path.display(),
                    error = %e,
                    discarded,
                    "bundle load failed"
                );
                Err(e.into())
            }
        }
    }
}
