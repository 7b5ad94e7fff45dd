//! CanonicalKey enum naming every design parameter the chat understands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Standardized name of a beam design parameter.
///
/// Inputs (`fck`, `fy`, `width`, `height`, `phi_mn`) are supplied by the user;
/// `Sm`, `bd` and `rho` are normally predicted but may also be given as hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalKey {
    #[serde(rename = "fck")]
    Fck,
    #[serde(rename = "fy")]
    Fy,
    #[serde(rename = "width")]
    Width,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "phi_mn")]
    PhiMn,
    #[serde(rename = "Sm")]
    Sm,
    #[serde(rename = "bd")]
    Bd,
    #[serde(rename = "rho")]
    Rho,
}

impl CanonicalKey {
    /// Returns all keys in declaration order.
    pub fn all() -> &'static [CanonicalKey] {
        &[
            CanonicalKey::Fck,
            CanonicalKey::Fy,
            CanonicalKey::Width,
            CanonicalKey::Height,
            CanonicalKey::PhiMn,
            CanonicalKey::Sm,
            CanonicalKey::Bd,
            CanonicalKey::Rho,
        ]
    }

    /// The wire name, also used as the estimator feature name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalKey::Fck => "fck",
            CanonicalKey::Fy => "fy",
            CanonicalKey::Width => "width",
            CanonicalKey::Height => "height",
            CanonicalKey::PhiMn => "phi_mn",
            CanonicalKey::Sm => "Sm",
            CanonicalKey::Bd => "bd",
            CanonicalKey::Rho => "rho",
        }
    }

    /// Korean label used in prompts.
    pub fn label_ko(&self) -> &'static str {
        match self {
            CanonicalKey::Fck => "콘크리트 강도",
            CanonicalKey::Fy => "철근 항복강도",
            CanonicalKey::Width => "단면 폭",
            CanonicalKey::Height => "단면 높이",
            CanonicalKey::PhiMn => "설계 휨강도",
            CanonicalKey::Sm => "단면계수",
            CanonicalKey::Bd => "유효 단면적",
            CanonicalKey::Rho => "철근비",
        }
    }

    /// English label used in prompts.
    pub fn label_en(&self) -> &'static str {
        match self {
            CanonicalKey::Fck => "concrete strength",
            CanonicalKey::Fy => "rebar yield strength",
            CanonicalKey::Width => "section width",
            CanonicalKey::Height => "section height",
            CanonicalKey::PhiMn => "design flexural strength",
            CanonicalKey::Sm => "section modulus",
            CanonicalKey::Bd => "effective area",
            CanonicalKey::Rho => "reinforcement ratio",
        }
    }

    /// Display unit, empty for dimensionless quantities.
    pub fn unit(&self) -> &'static str {
        match self {
            CanonicalKey::Fck | CanonicalKey::Fy => "MPa",
            CanonicalKey::Width | CanonicalKey::Height => "mm",
            CanonicalKey::PhiMn => "kN·m",
            CanonicalKey::Sm | CanonicalKey::Bd => "mm²",
            CanonicalKey::Rho => "",
        }
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalKey {
    type Err = ValidationError;

    /// Parses the exact wire name; aliases go through the alias table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("canonical_key", format!("unknown key '{}'", s)))
    }
}
