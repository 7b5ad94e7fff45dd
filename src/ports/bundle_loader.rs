//! Bundle Loader Port - Interface for reading persisted regression bundles.

use std::path::Path;

use crate::domain::inference::{BundleError, RegressionBundle};

/// Port for loading a [`RegressionBundle`] from a persisted artifact.
///
/// Implementations must fail with [`BundleError::MissingEntry`] when the
/// artifact lacks `targets`, `features_by_target` or `models`.
pub trait BundleLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<RegressionBundle, BundleError>;
}
