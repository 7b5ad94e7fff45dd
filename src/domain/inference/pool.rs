//! Feature pool: the named values estimators can read during one inference.

use std::collections::HashMap;

use super::row::{FeatureRow, MISSING_VALUE};
use crate::domain::parameters::{CanonicalKey, ParameterRecord};

/// Name of the composite strength feature.
pub const COMPOSITE_FEATURE: &str = "f_idx";

/// Decimal concatenation of rounded `fck` and `fy`, divided by 1000.
///
/// `27, 400` becomes `27400 / 1000 = 27.4`. Rounding is half-to-even.
/// Returns `None` when the concatenation is not a number (negative `fy`).
pub fn composite_index(fck: f64, fy: f64) -> Option<f64> {
    let digits = format!("{}{}", rounded_integer(fck)?, rounded_integer(fy)?);
    digits.parse::<f64>().ok().map(|v| v / 1000.0)
}

/// Half-to-even rounding, `None` when the result does not fit an `i64`.
fn rounded_integer(value: f64) -> Option<i64> {
    // 2^63 is exact in f64; i64 covers [-2^63, 2^63).
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = value.round_ties_even();
    (rounded.is_finite() && (-LIMIT..LIMIT).contains(&rounded)).then(|| rounded as i64)
}

/// Mutable pool of feature values, seeded from user input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturePool {
    values: HashMap<String, f64>,
}

impl FeaturePool {
    /// Seeds the pool with the composite index and every record entry
    /// other than the two inputs folded into it.
    pub fn seed(record: &ParameterRecord) -> Self {
        let mut values = HashMap::new();

        let composite = match (record.get(CanonicalKey::Fck), record.get(CanonicalKey::Fy)) {
            (Some(fck), Some(fy)) => composite_index(fck, fy),
            _ => None,
        };
        match composite {
            Some(v) => {
                values.insert(COMPOSITE_FEATURE.to_string(), v);
            }
            None => tracing::warn!("composite index unavailable, treating {} as missing", COMPOSITE_FEATURE),
        }

        for (key, value) in record.iter() {
            if matches!(key, CanonicalKey::Fck | CanonicalKey::Fy) {
                continue;
            }
            values.insert(key.as_str().to_string(), value);
        }

        Self { values }
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.values.get(feature).copied()
    }

    /// Builds a row for exactly the given features, filling gaps with NaN.
    pub fn row_for(&self, features: &[String]) -> FeatureRow {
        let values = features
            .iter()
            .map(|f| self.get(f).unwrap_or(MISSING_VALUE))
            .collect();
        FeatureRow::new(features.to_vec(), values)
    }

    /// Writes back finite outputs; non-finite ones leave the old value.
    pub fn apply<'a>(&mut self, outputs: impl IntoIterator<Item = (&'a str, f64)>) {
        for (name, value) in outputs {
            if value.is_finite() {
                self.values.insert(name.to_string(), value);
            }
        }
    }
}
