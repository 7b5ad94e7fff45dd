//! Domain layer containing the design-parameter pipeline.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, language, errors, state machine)
//! - `parameters` - Canonical keys, alias table, parameter records
//! - `extraction` - Command and free-text parameter extraction, intent detection
//! - `inference` - Regression bundle and the iterative inference loop
//! - `wizard` - Multi-turn slot-filling over the required inputs

pub mod extraction;
pub mod foundation;
pub mod inference;
pub mod parameters;
pub mod wizard;
