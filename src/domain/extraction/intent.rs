//! Heuristic gate deciding whether a turn is about beam prediction.
//!
//! False positives and negatives are tolerated; the gate only keeps the
//! wizard from reacting to unrelated chat.

use once_cell::sync::Lazy;

use super::command::is_command;

/// Minimum keyword hits for free text to count as prediction intent.
pub const DEFAULT_KEYWORD_THRESHOLD: usize = 2;

static STANDARD_KEYWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "fck", "fy", "width", "height", "phi_mn", "mu", "moment", "mpa", "beam", "predict",
        "콘크리트", "철근", "강도", "단면", "폭", "높이", "모멘트", "예측", "설계",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
});

/// Keyword-count intent classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    keywords: Vec<String>,
    threshold: usize,
}

impl IntentClassifier {
    /// Builds a classifier; keywords are matched case-insensitively.
    pub fn new(keywords: Vec<String>, threshold: usize) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            threshold,
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_KEYWORDS.clone(), DEFAULT_KEYWORD_THRESHOLD)
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Total keyword occurrences (substring matches) in `text`.
    pub fn keyword_hits(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .map(|k| lowered.matches(k.as_str()).count())
            .sum()
    }

    /// True for command-syntax messages, or free text with enough keyword hits.
    pub fn is_prediction_intent(&self, text: &str) -> bool {
        is_command(text) || self.keyword_hits(text) >= self.threshold
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_marker_is_always_intent() {
        let classifier = IntentClassifier::standard();
        assert!(classifier.is_prediction_intent("/predict"));
        assert!(classifier.is_prediction_intent("/PREDICT hello"));
    }

    #[test]
    fn two_keyword_hits_are_intent() {
        let classifier = IntentClassifier::standard();
        assert!(classifier.is_prediction_intent("fck 27, fy 400"));
        assert!(classifier.is_prediction_intent("콘크리트 강도 27"));
    }

    #[test]
    fn repeated_keyword_counts_each_occurrence() {
        let classifier = IntentClassifier::standard();
        assert_eq!(classifier.keyword_hits("beam beam"), 2);
    }

    #[test]
    fn single_hit_is_not_intent() {
        let classifier = IntentClassifier::standard();
        assert_eq!(classifier.keyword_hits("what is the width?"), 1);
        assert!(!classifier.is_prediction_intent("what is the width?"));
    }

    #[test]
    fn unrelated_chat_is_not_intent() {
        let classifier = IntentClassifier::standard();
        assert!(!classifier.is_prediction_intent("안녕하세요, 오늘 날씨 어때?"));
        assert!(!classifier.is_prediction_intent("tell me a joke"));
        assert!(!classifier.is_prediction_intent(""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let classifier = IntentClassifier::standard();
        assert!(classifier.is_prediction_intent("FCK and FY please"));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let classifier = IntentClassifier::new(vec!["Span".to_string()], 1);
        assert!(classifier.is_prediction_intent("span 6m"));
        assert!(!classifier.is_prediction_intent("depth 6m"));
    }
}
