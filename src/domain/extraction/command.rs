//! Command-syntax extraction.
//!
//! Handles messages such as:
//!
//! ```text
//! /predict fck=27 fy=400 width=300 height=500 phi_mn=120
//! /predict {"fck": 27, "fy": 400, "width": 300, "height": 500, "phi_mn": 120}
//! /predict fck:27, fy:400, b=300, h=500, mu=120
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::domain::parameters::{AliasTable, ParameterRecord};

/// Marker that introduces a command-syntax message.
pub const COMMAND_MARKER: &str = "/predict";

/// `key(=|:)value` pairs; keys may carry JSON-style quotes.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["']?([\w\-]+)["']?\s*[:=]\s*["']?([-+]?[0-9.]+)"#)
        .expect("command token pattern must compile")
});

/// Returns true if the trimmed text starts with the command marker (any case).
pub fn is_command(text: &str) -> bool {
    marker_payload(text).is_some()
}

/// The text after the command marker, trimmed.
fn marker_payload(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let head = trimmed.get(..COMMAND_MARKER.len())?;
    if head.eq_ignore_ascii_case(COMMAND_MARKER) {
        Some(trimmed[COMMAND_MARKER.len()..].trim())
    } else {
        None
    }
}

/// Parses command-syntax messages into parameter records.
#[derive(Debug, Clone)]
pub struct CommandExtractor<'a> {
    aliases: &'a AliasTable,
}

impl<'a> CommandExtractor<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Returns `None` when the marker is absent, and an empty record when
    /// the marker is present but nothing after it was recognized.
    pub fn extract(&self, text: &str) -> Option<ParameterRecord> {
        let payload = marker_payload(text)?;
        if payload.is_empty() {
            return Some(ParameterRecord::new());
        }

        if payload.starts_with('{') || payload.starts_with('[') {
            match self.extract_structured(payload) {
                Some(record) => return Some(record),
                None => tracing::debug!("structured payload rejected, falling back to tokens"),
            }
        }

        Some(self.extract_tokens(payload))
    }

    /// JSON object payload. `None` means "not a usable object".
    fn extract_structured(&self, payload: &str) -> Option<ParameterRecord> {
        let value: Value = serde_json::from_str(payload).ok()?;
        let object = value.as_object()?;

        let mut record = ParameterRecord::new();
        for (raw_key, raw_value) in object {
            let Some(key) = self.aliases.canonicalize(raw_key) else {
                tracing::trace!(raw_key = %raw_key, "ignoring unknown key");
                continue;
            };
            match coerce_number(raw_value) {
                Some(number) => {
                    record.insert(key, number);
                }
                None => tracing::trace!(key = %key, "dropping non-numeric value"),
            }
        }
        Some(record)
    }

    fn extract_tokens(&self, payload: &str) -> ParameterRecord {
        let mut record = ParameterRecord::new();
        for caps in TOKEN.captures_iter(payload) {
            let raw_key = &caps[1];
            let raw_value = &caps[2];
            let Some(key) = self.aliases.canonicalize(raw_key) else {
                tracing::trace!(raw_key = %raw_key, "ignoring unknown token");
                continue;
            };
            match raw_value.parse::<f64>() {
                Ok(number) => {
                    record.insert(key, number);
                }
                Err(_) => tracing::trace!(key = %key, raw_value = %raw_value, "dropping malformed number"),
            }
        }
        record
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
