//! Conversation front-end configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::extraction::{IntentClassifier, DEFAULT_KEYWORD_THRESHOLD};
use crate::domain::foundation::Language;

/// Chat configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Language for prompts and summaries
    #[serde(default)]
    pub language: Language,

    /// Keyword hits needed for free text to count as a prediction request
    #[serde(default = "default_keyword_threshold")]
    pub keyword_threshold: usize,
}

impl ChatConfig {
    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.keyword_threshold == 0 {
            return Err(ValidationError::InvalidKeywordThreshold);
        }
        Ok(())
    }

    pub fn classifier(&self) -> IntentClassifier {
        IntentClassifier::standard().with_threshold(self.keyword_threshold)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            keyword_threshold: default_keyword_threshold(),
        }
    }
}

fn default_keyword_threshold() -> usize {
    DEFAULT_KEYWORD_THRESHOLD
}
