//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Estimator` - one pre-trained regressor (feature row in, number out)
//! - `BundleLoader` - reads a persisted regression bundle
//! - `ResultSummarizer` - phrases inference results for the chat surface

mod bundle_loader;
mod estimator;
mod summarizer;

pub use bundle_loader::BundleLoader;
pub use estimator::{Estimator, EstimatorError};
pub use summarizer::ResultSummarizer;
