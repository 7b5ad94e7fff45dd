//! Inference loop configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::inference::{InferenceEngine, DEFAULT_ROUNDS, MAX_ROUNDS};
use crate::domain::parameters::RequiredSet;

/// Inference configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Fixed number of feedback rounds per prediction
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

impl InferenceConfig {
    /// Validate inference configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(ValidationError::InvalidRounds {
                max: MAX_ROUNDS,
                actual: self.rounds,
            });
        }
        Ok(())
    }

    /// Build the engine over the standard required inputs
    pub fn engine(&self) -> Result<InferenceEngine, ValidationError> {
        self.validate()?;
        InferenceEngine::new(self.rounds, RequiredSet::standard()).map_err(|_| {
            ValidationError::InvalidRounds {
                max: MAX_ROUNDS,
                actual: self.rounds,
            }
        })
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
        }
    }
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}
