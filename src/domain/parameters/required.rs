//! The ordered set of keys that must be known before inference can run.

use serde::{Deserialize, Serialize};

use super::{CanonicalKey, ParameterRecord};

/// Ordered list of required canonical keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSet {
    keys: Vec<CanonicalKey>,
}

impl RequiredSet {
    pub fn new(keys: Vec<CanonicalKey>) -> Self {
        Self { keys }
    }

    /// The beam design inputs: fck, fy, width, height, phi_mn.
    pub fn standard() -> Self {
        Self::new(vec![
            CanonicalKey::Fck,
            CanonicalKey::Fy,
            CanonicalKey::Width,
            CanonicalKey::Height,
            CanonicalKey::PhiMn,
        ])
    }

    pub fn keys(&self) -> &[CanonicalKey] {
        &self.keys
    }

    pub fn contains(&self, key: CanonicalKey) -> bool {
        self.keys.contains(&key)
    }

    /// Required keys without a finite value in `record`, in declared order.
    pub fn missing(&self, record: &ParameterRecord) -> Vec<CanonicalKey> {
        self.keys
            .iter()
            .copied()
            .filter(|k| !record.is_present(*k))
            .collect()
    }

    pub fn is_complete(&self, record: &ParameterRecord) -> bool {
        self.keys.iter().all(|k| record.is_present(*k))
    }
}

impl Default for RequiredSet {
    fn default() -> Self {
        Self::standard()
    }
}
