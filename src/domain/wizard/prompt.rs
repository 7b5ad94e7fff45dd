//! User-facing prompts emitted by the wizard.

use crate::domain::extraction::COMMAND_MARKER;
use crate::domain::foundation::Language;
use crate::domain::parameters::CanonicalKey;

/// Lists the still-missing keys with label and unit, in the given order.
pub fn missing_prompt(missing: &[CanonicalKey], language: Language) -> String {
    let items = missing
        .iter()
        .map(|key| describe(*key, language))
        .collect::<Vec<_>>()
        .join(", ");
    let example = format!("{} fck=27 fy=400 width=300 height=500 phi_mn=120", COMMAND_MARKER);

    match language {
        Language::Ko => format!(
            "예측에 필요한 값이 부족합니다. 다음 값을 알려주세요: {}. (예: {})",
            items, example
        ),
        Language::En => format!(
            "Some inputs are still missing. Please supply: {}. (e.g. {})",
            items, example
        ),
    }
}

pub fn bundle_not_ready(language: Language) -> &'static str {
    match language {
        Language::Ko => "예측 모델 번들이 아직 로드되지 않았습니다. /bundle <경로> 로 먼저 로드해 주세요.",
        Language::En => "No model bundle is loaded yet. Load one first with /bundle <path>.",
    }
}

pub fn cancelled(language: Language) -> &'static str {
    match language {
        Language::Ko => "입력 수집을 취소했습니다.",
        Language::En => "Input collection cancelled.",
    }
}

fn describe(key: CanonicalKey, language: Language) -> String {
    let label = match language {
        Language::Ko => key.label_ko(),
        Language::En => key.label_en(),
    };
    match key.unit() {
        "" => format!("{}({})", key, label),
        unit => format!("{}({}, {})", key, label, unit),
    }
}
