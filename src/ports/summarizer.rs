//! Result Summarizer Port - Interface for phrasing inference results.
//!
//! The production chat surface may hand results to a text-generation
//! engine; the core only needs something that turns numbers into a reply.

use crate::domain::inference::InferenceResult;
use crate::domain::parameters::ParameterRecord;

/// Port for rendering a prediction as a user-facing paragraph.
///
/// Implementations must use the numbers as given, never re-computing them.
pub trait ResultSummarizer: Send + Sync {
    fn summarize(&self, inputs: &ParameterRecord, result: &InferenceResult) -> String;
}
