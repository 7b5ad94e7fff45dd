//! Regression bundle configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Bundle configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BundleConfig {
    /// Artifact loaded into every new session, if set
    pub path: Option<PathBuf>,
}

impl BundleConfig {
    /// Validate bundle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedBundleFormat(
                path.display().to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_is_valid() {
        assert!(BundleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_json_and_yaml_paths_are_valid() {
        for path in ["model.json", "model.YAML", "dir/model.yml"] {
            let config = BundleConfig {
                path: Some(PathBuf::from(path)),
            };
            assert!(config.validate().is_ok(), "{} should be accepted", path);
        }
    }

    #[test]
    fn test_pickle_path_is_rejected() {
        let config = BundleConfig {
            path: Some(PathBuf::from("model.pkl")),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnsupportedBundleFormat("model.pkl".to_string()))
        );
    }
}
