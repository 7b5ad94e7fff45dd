//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait, the prompt language and
//! error types shared by the extraction, wizard and inference modules.

mod errors;
mod ids;
mod language;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use language::Language;
pub use state_machine::StateMachine;
