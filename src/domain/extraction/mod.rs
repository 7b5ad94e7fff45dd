//! Parameter extraction engine.
//!
//! Turns one line of user text into a partial [`ParameterRecord`], either
//! from command syntax (`/predict ...`) or from free bilingual text, and
//! decides whether a line is about prediction at all.

mod command;
mod intent;
mod natural;

pub use command::{is_command, CommandExtractor, COMMAND_MARKER};
pub use intent::{IntentClassifier, DEFAULT_KEYWORD_THRESHOLD};
pub use natural::{KeyMatcher, NaturalExtractor, NaturalMatch, NaturalPattern, STANDARD_PATTERNS};

use crate::domain::parameters::{AliasTable, ParameterRecord};

/// Which strategy produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Command,
    Natural,
}

/// Facade choosing the extraction strategy from the shape of the text.
///
/// Never fails: unrecognized input simply yields fewer keys.
#[derive(Debug, Clone)]
pub struct ParameterExtractor {
    aliases: AliasTable,
    natural: NaturalExtractor,
}

impl ParameterExtractor {
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            aliases,
            natural: NaturalExtractor::new(),
        }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Command-syntax only; `None` when the text carries no command marker.
    pub fn extract_command(&self, text: &str) -> Option<ParameterRecord> {
        CommandExtractor::new(&self.aliases).extract(text)
    }

    /// Free-text matching only.
    pub fn extract_natural(&self, text: &str) -> ParameterRecord {
        self.natural.extract(text)
    }

    /// Command extraction for command messages, natural extraction otherwise.
    pub fn extract_with_source(&self, text: &str) -> (ParameterRecord, ExtractionSource) {
        match self.extract_command(text) {
            Some(record) => (record, ExtractionSource::Command),
            None => (self.extract_natural(text), ExtractionSource::Natural),
        }
    }

    pub fn extract(&self, text: &str) -> ParameterRecord {
        self.extract_with_source(text).0
    }
}

impl Default for ParameterExtractor {
    fn default() -> Self {
        Self::new(AliasTable::standard().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::CanonicalKey;

    #[test]
    fn command_text_uses_command_strategy() {
        let extractor = ParameterExtractor::default();
        let (record, source) = extractor.extract_with_source("/predict fck=27 width 300");
        assert_eq!(source, ExtractionSource::Command);
        // "width 300" has no separator, so command parsing ignores it.
        assert_eq!(record, ParameterRecord::new().with(CanonicalKey::Fck, 27.0));
    }

    #[test]
    fn free_text_uses_natural_strategy() {
        let extractor = ParameterExtractor::default();
        let (record, source) = extractor.extract_with_source("width 300 and fck 27");
        assert_eq!(source, ExtractionSource::Natural);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn command_example_yields_full_record() {
        let record = ParameterExtractor::default()
            .extract("/predict fck=27 fy=400 width=300 height=500 phi_mn=120");
        let expected = ParameterRecord::new()
            .with(CanonicalKey::Fck, 27.0)
            .with(CanonicalKey::Fy, 400.0)
            .with(CanonicalKey::Width, 300.0)
            .with(CanonicalKey::Height, 500.0)
            .with(CanonicalKey::PhiMn, 120.0);
        assert_eq!(record, expected);
    }

    #[test]
    fn empty_text_yields_empty_record() {
        assert!(ParameterExtractor::default().extract("").is_empty());
    }
}
