//! Template-based result summaries.
//!
//! Stands in for the text-generation engine: same facts, fixed phrasing.

use crate::domain::foundation::Language;
use crate::domain::inference::InferenceResult;
use crate::domain::parameters::{CanonicalKey, ParameterRecord};
use crate::ports::ResultSummarizer;

/// Renders results as one paragraph in the configured language.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummarizer {
    language: Language,
}

impl TemplateSummarizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn label(&self, name: &str) -> String {
        match name.parse::<CanonicalKey>() {
            Ok(key) => match self.language {
                Language::Ko => format!("{}({})", key.label_ko(), key.as_str()),
                Language::En => format!("{} ({})", key.label_en(), key.as_str()),
            },
            Err(_) => name.to_string(),
        }
    }

    fn unit(name: &str) -> &'static str {
        name.parse::<CanonicalKey>().map(|k| k.unit()).unwrap_or("")
    }
}

impl ResultSummarizer for TemplateSummarizer {
    fn summarize(&self, inputs: &ParameterRecord, result: &InferenceResult) -> String {
        let input_text = inputs
            .iter()
            .map(|(key, value)| with_unit(&format!("{}={}", key, format_value(value)), key.unit()))
            .collect::<Vec<_>>()
            .join(", ");

        let unavailable = match self.language {
            Language::Ko => "계산 불가",
            Language::En => "unavailable",
        };
        let predictions = result
            .iter()
            .map(|(name, value)| {
                let shown = if value.is_finite() {
                    with_unit(&format_value(value), Self::unit(name))
                } else {
                    unavailable.to_string()
                };
                match self.language {
                    Language::Ko => format!("{}은(는) {}", self.label(name), shown),
                    Language::En => format!("{} is {}", self.label(name), shown),
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        match self.language {
            Language::Ko => format!("입력값 {} 기준으로 {} 입니다.", input_text, predictions),
            Language::En => format!("For inputs {}, the {}.", input_text, predictions),
        }
    }
}

fn with_unit(text: &str, unit: &str) -> String {
    if unit.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", text, unit)
    }
}

/// Six significant digits, switching to scientific notation for extremes.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e9).contains(&magnitude) {
        return format!("{:.5e}", value);
    }
    let decimals = if magnitude == 0.0 {
        0
    } else {
        (5 - magnitude.log10().floor() as i32).max(0) as usize
    };
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ParameterRecord {
        ParameterRecord::new()
            .with(CanonicalKey::Fck, 27.0)
            .with(CanonicalKey::Width, 300.0)
    }

    fn result() -> InferenceResult {
        InferenceResult::new(vec![("rho".into(), 0.0123), ("bd".into(), f64::NAN)])
    }

    mod formatting {
        use super::*;

        #[test]
        fn integers_have_no_decimals() {
            assert_eq!(format_value(27.0), "27");
            assert_eq!(format_value(150000.0), "150000");
        }

        #[test]
        fn keeps_six_significant_digits() {
            assert_eq!(format_value(0.0123456789), "0.0123457");
            assert_eq!(format_value(27.4), "27.4");
        }

        #[test]
        fn extremes_use_scientific_notation() {
            assert_eq!(format_value(1.5e10), "1.50000e10");
        }

        #[test]
        fn zero_is_plain() {
            assert_eq!(format_value(0.0), "0");
        }
    }

    #[test]
    fn korean_summary_lists_inputs_and_predictions() {
        let text = TemplateSummarizer::new(Language::Ko).summarize(&inputs(), &result());
        assert_eq!(
            text,
            "입력값 fck=27 MPa, width=300 mm 기준으로 철근비(rho)은(는) 0.0123, 유효 단면적(bd)은(는) 계산 불가 입니다."
        );
    }

    #[test]
    fn english_summary_marks_unavailable_targets() {
        let text = TemplateSummarizer::new(Language::En).summarize(&inputs(), &result());
        assert!(text.starts_with("For inputs fck=27 MPa, width=300 mm"));
        assert!(text.contains("reinforcement ratio (rho) is 0.0123"));
        assert!(text.contains("effective area (bd) is unavailable"));
    }

    #[test]
    fn unknown_targets_use_raw_name() {
        let result = InferenceResult::new(vec![("deflection".into(), 12.0)]);
        let text = TemplateSummarizer::new(Language::En).summarize(&ParameterRecord::new(), &result);
        assert!(text.contains("deflection is 12"));
    }
}
