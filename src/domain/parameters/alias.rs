//! Alias table mapping user-facing synonyms to canonical keys.
//!
//! Lookup is a case-insensitive exact match. When a raw key matches aliases
//! of two different canonical keys, the canonical key declared first wins.
//! Alias lists are curated so that does not happen in the standard table.

use once_cell::sync::Lazy;

use super::CanonicalKey;

static STANDARD: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::new(vec![
        (CanonicalKey::Fck, vec!["fck", "콘크리트", "concrete"]),
        (CanonicalKey::Fy, vec!["fy", "철근", "steel"]),
        (CanonicalKey::Width, vec!["width", "b", "bw", "단면폭", "폭"]),
        (CanonicalKey::Height, vec!["height", "h", "단면높이", "높이"]),
        (CanonicalKey::PhiMn, vec!["phi_mn", "mu", "휨모멘트", "모멘트"]),
        (CanonicalKey::Sm, vec!["Sm"]),
        (CanonicalKey::Bd, vec!["bd"]),
        (CanonicalKey::Rho, vec!["rho"]),
    ])
});

/// Immutable, ordered mapping from canonical key to its synonyms.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<(CanonicalKey, Vec<String>)>,
}

impl AliasTable {
    /// Builds a table; declaration order is the tie-break order.
    pub fn new<S: Into<String>>(entries: Vec<(CanonicalKey, Vec<S>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, aliases)| (key, aliases.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// The bilingual table shipped with the application.
    pub fn standard() -> &'static AliasTable {
        &STANDARD
    }

    /// Resolves a raw key to its canonical key, if any alias matches.
    pub fn canonicalize(&self, raw: &str) -> Option<CanonicalKey> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|a| a.to_lowercase() == needle))
            .map(|(key, _)| *key)
    }

    /// Aliases declared for a key, in declaration order.
    pub fn aliases(&self, key: CanonicalKey) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, aliases)| aliases.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over `(key, aliases)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (CanonicalKey, &[String])> {
        self.entries.iter().map(|(k, a)| (*k, a.as_slice()))
    }
}
