//! Natural-language extraction.
//!
//! Every canonical key owns one declarative matcher. Matchers run
//! independently over the whole text and the first match of each matcher
//! wins for its key, regardless of where other keys matched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::parameters::{CanonicalKey, ParameterRecord};

/// Declarative description of how a key is spotted in free text.
#[derive(Debug, Clone, Copy)]
pub struct NaturalPattern {
    pub key: CanonicalKey,
    /// Latin aliases and phrases, literal text. Guarded by a left boundary.
    pub latin: &'static [&'static str],
    /// Korean phrases as regex fragments (may contain `\s*`). Unguarded.
    pub hangul: &'static [&'static str],
    /// Optional unit tokens, literal text.
    pub units: &'static [&'static str],
}

const STRESS_UNITS: &[&str] = &["MPa", "N/mm²", "N/mm2"];
const LENGTH_UNITS: &[&str] = &["mm"];
const MOMENT_UNITS: &[&str] = &["kN·m", "kN-m", "kN.m", "kN*m", "kNm"];
const AREA_UNITS: &[&str] = &["mm²", "mm2", "mm³", "mm3"];

/// Standard matchers, one per canonical key.
pub const STANDARD_PATTERNS: &[NaturalPattern] = &[
    NaturalPattern {
        key: CanonicalKey::Fck,
        latin: &["fck", "f'c", "concrete strength", "concrete"],
        hangul: &[r"콘크리트\s*압축\s*강도", r"콘크리트\s*강도", r"압축\s*강도", "콘크리트"],
        units: STRESS_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::Fy,
        latin: &["fy", "yield strength", "steel"],
        hangul: &[r"철근\s*항복\s*강도", r"철근\s*강도", r"항복\s*강도", "철근"],
        units: STRESS_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::Width,
        latin: &["section width", "width", "bw", "b"],
        hangul: &[r"단면\s*폭", "폭"],
        units: LENGTH_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::Height,
        latin: &["section height", "height", "h"],
        hangul: &[r"단면\s*높이", "높이"],
        units: LENGTH_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::PhiMn,
        latin: &["phi_mn", "phimn", "φmn", "moment", "mu"],
        hangul: &[r"설계\s*휨\s*강도", r"휨\s*강도", r"휨\s*모멘트", "모멘트"],
        units: MOMENT_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::Sm,
        latin: &["section modulus", "sm"],
        hangul: &[r"단면\s*계수"],
        units: AREA_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::Bd,
        latin: &["bd"],
        hangul: &[],
        units: AREA_UNITS,
    },
    NaturalPattern {
        key: CanonicalKey::Rho,
        latin: &["rho", "ρ"],
        hangul: &["철근비"],
        units: &[],
    },
];

/// Separators accepted between a name and its number.
///
/// English words must stand alone so `h` never absorbs the tail of "his".
const SEPARATOR: &str = r"(?:[:=]|\s(?:is|of)\b|은|는|이|가|을|를)?";

/// Signed decimal; a trailing full stop stays outside the capture.
const NUMBER: &str = r"(?P<value>[-+]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+))";

static STANDARD_MATCHERS: Lazy<Vec<KeyMatcher>> = Lazy::new(|| {
    STANDARD_PATTERNS
        .iter()
        .map(|p| KeyMatcher::compile(p).expect("standard natural-language pattern must compile"))
        .collect()
});

/// A compiled matcher for a single canonical key.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    key: CanonicalKey,
    regex: Regex,
}

/// One recognized value, with the unit token when present.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalMatch {
    pub key: CanonicalKey,
    pub value: f64,
    pub unit: Option<String>,
}

impl KeyMatcher {
    /// Compiles a declarative pattern into a case-insensitive regex.
    pub fn compile(pattern: &NaturalPattern) -> Result<Self, regex::Error> {
        let mut names: Vec<String> = Vec::new();

        if !pattern.latin.is_empty() {
            // Longest first so `h` never shadows `height`.
            let mut latin: Vec<&str> = pattern.latin.to_vec();
            latin.sort_by_key(|a| std::cmp::Reverse(a.chars().count()));
            let alternatives: Vec<String> = latin.iter().map(|a| regex::escape(a)).collect();
            names.push(format!(r"(?:^|[^a-z0-9_])(?:{})", alternatives.join("|")));
        }
        if !pattern.hangul.is_empty() {
            names.push(format!("(?:{})", pattern.hangul.join("|")));
        }

        let unit = if pattern.units.is_empty() {
            String::new()
        } else {
            let mut units: Vec<&str> = pattern.units.to_vec();
            units.sort_by_key(|u| std::cmp::Reverse(u.chars().count()));
            let alternatives: Vec<String> = units.iter().map(|u| regex::escape(u)).collect();
            format!(r"(?:\s*(?P<unit>{}))?", alternatives.join("|"))
        };

        let source = format!(
            r"(?i)(?:{names})\s*{sep}\s*{num}{unit}",
            names = names.join("|"),
            sep = SEPARATOR,
            num = NUMBER,
            unit = unit,
        );

        Ok(Self {
            key: pattern.key,
            regex: Regex::new(&source)?,
        })
    }

    pub fn key(&self) -> CanonicalKey {
        self.key
    }

    /// First match in `text`; a malformed number yields no match.
    pub fn find(&self, text: &str) -> Option<NaturalMatch> {
        let caps = self.regex.captures(text)?;
        let value = caps.name("value")?;
        let raw = value.as_str();
        if continues_number(&text[value.end()..]) {
            tracing::trace!(key = %self.key, raw = %raw, "skipping malformed number");
            return None;
        }
        match raw.parse::<f64>() {
            Ok(value) => Some(NaturalMatch {
                key: self.key,
                value,
                unit: caps.name("unit").map(|u| u.as_str().to_string()),
            }),
            Err(_) => {
                tracing::trace!(key = %self.key, raw = %raw, "skipping malformed number");
                None
            }
        }
    }
}

/// True when `rest` starts another `.digits` group, as in `2.7.1`.
fn continues_number(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Runs every key matcher over free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalExtractor;

impl NaturalExtractor {
    pub fn new() -> Self {
        Self
    }

    /// All matches, in canonical key order.
    pub fn matches(&self, text: &str) -> Vec<NaturalMatch> {
        STANDARD_MATCHERS.iter().filter_map(|m| m.find(text)).collect()
    }

    pub fn extract(&self, text: &str) -> ParameterRecord {
        let found = self.matches(text);
        for m in &found {
            tracing::trace!(key = %m.key, value = m.value, unit = ?m.unit, "natural-language match");
        }
        found.into_iter().map(|m| (m.key, m.value)).collect()
    }
}
