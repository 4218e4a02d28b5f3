// Analyzer configuration, loaded from JSON.
//
// Every field has a default, so an empty object (or no file at all) is a
// valid configuration. The model identifiers are informational: they name
// which sentiment/embedding capability is wired in and show up in the
// startup log line. `embedding_dim` sizes the built-in `HashedEncoder`, and
// `seed` pins the enhancement RNG for reproducible output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Identifier of the sentiment capability.
    pub sentiment_model: String,
    /// Identifier of the embedding capability.
    pub embedding_model: String,
    /// Vector length produced by the built-in encoder.
    pub embedding_dim: usize,
    /// Seed for parameter enhancement. `None` means OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            sentiment_model: "lexicon".to_string(),
            embedding_model: "hashed-ngrams".to_string(),
            embedding_dim: 384,
            seed: None,
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding_dim == 0 {
            return Err(ConfigError::Invalid(
                "embedding_dim must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.embedding_dim, 384);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_override() {
        let config = AnalyzerConfig::from_json(r#"{"seed": 42, "embedding_dim": 128}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.embedding_dim, 128);
        assert_eq!(config.sentiment_model, "lexicon");
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = AnalyzerConfig::from_json(r#"{"embedding_dim": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = AnalyzerConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = AnalyzerConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compose.json");
        std::fs::write(&path, r#"{"sentiment_model": "roberta-sentiment"}"#).unwrap();
        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.sentiment_model, "roberta-sentiment");
    }
}
