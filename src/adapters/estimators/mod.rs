//! Estimator adapters.
//!
//! - `ConstantEstimator` - fixed prediction, useful as a baseline
//! - `FnEstimator` - wraps a closure supplied by the host
//! - `LinearEstimator` - serializable linear model loaded from artifacts

mod linear;
mod simple;

pub use linear::LinearEstimator;
pub use simple::{ConstantEstimator, FnEstimator};
