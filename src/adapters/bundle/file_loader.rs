//! Loads regression bundles from JSON or YAML files.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::artifact::BundleArtifact;
use crate::domain::inference::{BundleError, RegressionBundle};
use crate::ports::BundleLoader;

/// Artifact encodings recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Yaml,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Result<Self, BundleError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(ArtifactFormat::Json),
            "yaml" | "yml" => Ok(ArtifactFormat::Yaml),
            other => Err(BundleError::UnsupportedFormat(if other.is_empty() {
                "(no extension)".to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

/// Filesystem adapter for the [`BundleLoader`] port.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBundleLoader;

impl FileBundleLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parses artifact text of a known format.
    pub fn parse(text: &str, format: ArtifactFormat) -> Result<RegressionBundle, BundleError> {
        let value: Value = match format {
            ArtifactFormat::Json => {
                serde_json::from_str(text).map_err(|e| BundleError::Parse(e.to_string()))?
            }
            ArtifactFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| BundleError::Parse(e.to_string()))?
            }
        };
        BundleArtifact::from_value(value)?.into_bundle()
    }
}

impl BundleLoader for FileBundleLoader {
    fn load(&self, path: &Path) -> Result<RegressionBundle, BundleError> {
        let format = ArtifactFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| BundleError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let bundle = Self::parse(&text, format)?;
        tracing::info!(
            path = %path.display(),
            targets = ?bundle.targets(),
            "regression bundle loaded"
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const YAML: &str = r#"
targets: [Sm, bd]
features_by_target:
  Sm: [f_idx, width, height]
  bd: [f_idx, width, height, Sm]
models:
  Sm:
    kind: linear
    intercept: 0.0
    coefficients: {width: 100.0, height: 10.0}
  bd:
    kind: constant
    value: 150000.0
"#;

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(ArtifactFormat::from_path(Path::new("a.json")).unwrap(), ArtifactFormat::Json);
        assert_eq!(ArtifactFormat::from_path(Path::new("a.YML")).unwrap(), ArtifactFormat::Yaml);
        assert_eq!(
            ArtifactFormat::from_path(Path::new("bundle.joblib")).unwrap_err(),
            BundleError::UnsupportedFormat("joblib".into())
        );
        assert!(ArtifactFormat::from_path(Path::new("bundle")).is_err());
    }

    #[test]
    fn loads_yaml_bundle() {
        let file = write_temp(".yaml", YAML);
        let bundle = FileBundleLoader::new().load(file.path()).unwrap();
        assert_eq!(bundle.targets(), &["Sm".to_string(), "bd".to_string()]);
        assert_eq!(bundle.features_for("bd").len(), 4);
    }

    #[test]
    fn loads_json_bundle() {
        let json = r#"{
            "targets": ["bd"],
            "features_by_target": {"bd": ["f_idx", "width", "height"]},
            "models": {"bd": {"kind": "constant", "value": 500.0}}
        }"#;
        let file = write_temp(".json", json);
        let bundle = FileBundleLoader::new().load(file.path()).unwrap();
        assert!(bundle.has_target("bd"));
    }

    #[test]
    fn missing_entry_is_structural_error() {
        let file = write_temp(".json", r#"{"targets": ["bd"], "models": {}}"#);
        assert_eq!(
            FileBundleLoader::new().load(file.path()).unwrap_err(),
            BundleError::MissingEntry("features_by_target".into())
        );
    }

    #[test]
    fn malformed_text_is_parse_error() {
        let file = write_temp(".json", "{ not json");
        assert!(matches!(
            FileBundleLoader::new().load(file.path()),
            Err(BundleError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = PathBuf::from("/definitely/not/here/bundle.json");
        assert!(matches!(
            FileBundleLoader::new().load(&path),
            Err(BundleError::Io { .. })
        ));
    }
}
