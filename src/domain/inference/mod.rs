//! Inference domain module.
//!
//! Drives a bundle of pre-trained estimators over a complete parameter
//! record, feeding predictions back as features for a fixed round count.

mod bundle;
mod engine;
mod pool;
mod result;
mod row;

pub use bundle::{BundleError, RegressionBundle};
pub use engine::{InferenceEngine, InferenceError, DEFAULT_ROUNDS, MAX_ROUNDS};
pub use pool::{composite_index, FeaturePool, COMPOSITE_FEATURE};
pub use result::InferenceResult;
pub use row::{FeatureRow, MISSING_VALUE};
