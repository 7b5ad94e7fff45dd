//! Application layer - Session context and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler operates on an explicit [`PredictionSession`] passed in by
//! the caller; nothing here is process-global.

pub mod handlers;
mod session;

pub use handlers::{
    LoadBundleCommand, LoadBundleHandler, LoadBundleResult,
    ProcessTurnCommand, ProcessTurnHandler, ProcessTurnResult,
};
pub use session::{PredictionSession, SessionStatus};
