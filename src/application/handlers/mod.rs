//! Application handlers.
//!
//! Command handlers that orchestrate domain operations for one session.

pub mod load_bundle;
pub mod process_turn;

pub use load_bundle::{LoadBundleCommand, LoadBundleHandler, LoadBundleResult};
pub use process_turn::{ProcessTurnCommand, ProcessTurnHandler, ProcessTurnResult};
