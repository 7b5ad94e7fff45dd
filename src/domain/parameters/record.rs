//! Partial parameter records and their merge semantics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::CanonicalKey;

/// Mapping from canonical key to a numeric value.
///
/// Absence of a key means "unknown"; there is no sentinel zero. Merging is
/// key-wise override, so it is not commutative when keys overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterRecord {
    values: BTreeMap<CanonicalKey, f64>,
}

impl ParameterRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: CanonicalKey, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a value, returning the previous one.
    pub fn insert(&mut self, key: CanonicalKey, value: f64) -> Option<f64> {
        self.values.insert(key, value)
    }

    pub fn get(&self, key: CanonicalKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn contains(&self, key: CanonicalKey) -> bool {
        self.values.contains_key(&key)
    }

    /// True when the key holds a finite number.
    pub fn is_present(&self, key: CanonicalKey) -> bool {
        self.get(key).is_some_and(f64::is_finite)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in canonical declaration order.
    pub fn keys(&self) -> impl Iterator<Item = CanonicalKey> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Overrides this record with every entry of `newer`.
    pub fn merge(&mut self, newer: &ParameterRecord) {
        for (key, value) in newer.iter() {
            self.values.insert(key, value);
        }
    }

    /// Consuming variant of [`merge`](Self::merge).
    pub fn merged(mut self, newer: &ParameterRecord) -> Self {
        self.merge(newer);
        self
    }
}

impl FromIterator<(CanonicalKey, f64)> for ParameterRecord {
    fn from_iter<I: IntoIterator<Item = (CanonicalKey, f64)>>(iter: I) -> Self {
        let mut record = ParameterRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl fmt::Display for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = ParameterRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.get(CanonicalKey::Fck), None);
    }

    #[test]
    fn merge_overrides_overlapping_keys() {
        let mut old = ParameterRecord::new()
            .with(CanonicalKey::Fck, 24.0)
            .with(CanonicalKey::Fy, 400.0);
        let newer = ParameterRecord::new().with(CanonicalKey::Fck, 27.0);

        old.merge(&newer);

        assert_eq!(old.get(CanonicalKey::Fck), Some(27.0));
        assert_eq!(old.get(CanonicalKey::Fy), Some(400.0));
    }

    #[test]
    fn merge_is_not_commutative_on_overlap() {
        let a = ParameterRecord::new().with(CanonicalKey::Width, 300.0);
        let b = ParameterRecord::new().with(CanonicalKey::Width, 350.0);

        assert_eq!(a.clone().merged(&b).get(CanonicalKey::Width), Some(350.0));
        assert_eq!(b.merged(&a).get(CanonicalKey::Width), Some(300.0));
    }

    #[test]
    fn is_present_requires_finite_value() {
        let record = ParameterRecord::new()
            .with(CanonicalKey::Fck, f64::NAN)
            .with(CanonicalKey::Fy, f64::INFINITY)
            .with(CanonicalKey::Width, 300.0);

        assert!(record.contains(CanonicalKey::Fck));
        assert!(!record.is_present(CanonicalKey::Fck));
        assert!(!record.is_present(CanonicalKey::Fy));
        assert!(record.is_present(CanonicalKey::Width));
    }

    #[test]
    fn keys_iterate_in_declaration_order() {
        let record = ParameterRecord::new()
            .with(CanonicalKey::PhiMn, 120.0)
            .with(CanonicalKey::Fck, 27.0);
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec![CanonicalKey::Fck, CanonicalKey::PhiMn]);
    }

    #[test]
    fn serializes_as_flat_map() {
        let record = ParameterRecord::new()
            .with(CanonicalKey::Fck, 27.0)
            .with(CanonicalKey::PhiMn, 120.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"fck":27.0,"phi_mn":120.0}"#);
    }

    #[test]
    fn display_lists_entries() {
        let record = ParameterRecord::new().with(CanonicalKey::Fy, 400.0);
        assert_eq!(record.to_string(), "{fy=400}");
    }
}
