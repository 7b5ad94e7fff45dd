//! Regression bundle adapters.
//!
//! Reads persisted bundles (JSON or YAML) into domain [`RegressionBundle`]s.
//!
//! [`RegressionBundle`]: crate::domain::inference::RegressionBundle

mod artifact;
mod file_loader;

pub use artifact::{BundleArtifact, EstimatorSpec, REQUIRED_ENTRIES};
pub use file_loader::{ArtifactFormat, FileBundleLoader};
