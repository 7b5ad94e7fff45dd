//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `estimators` - Estimator implementations (constant, closure, linear)
//! - `bundle` - File-based regression bundle loading (JSON, YAML)
//! - `summary` - Template-based result summaries

pub mod bundle;
pub mod estimators;
pub mod summary;

pub use bundle::FileBundleLoader;
pub use estimators::{ConstantEstimator, FnEstimator, LinearEstimator};
pub use summary::TemplateSummarizer;
