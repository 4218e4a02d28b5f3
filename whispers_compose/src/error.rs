// Error types for the mood-to-composition pipeline.
//
// `CapabilityError` is what the injected sentiment/embedding capabilities
// report. `AnalysisError` is everything that can go wrong inside
// `MoodAnalyzer::try_analyze`; `analyze` converts any of these into the
// fallback result and keeps the error as the recorded fault. `ConfigError`
// covers loading `AnalyzerConfig`.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by an external capability (sentiment scorer or encoder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("capability failed: {0}")]
    Failed(String),
}

/// Reasons mood inference can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("sentiment scoring failed: {0}")]
    Sentiment(#[source] CapabilityError),

    #[error("sentiment score {0} is outside [0, 1]")]
    InvalidSentimentScore(f32),

    #[error("text encoding failed: {0}")]
    Embedding(#[source] CapabilityError),

    #[error("embedding has {actual} dimensions, prototypes have {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("encoder returned an empty embedding")]
    EmptyEmbedding,

    #[error("mood prototypes were not built at startup")]
    PrototypesUnavailable,
}

/// Errors while loading an `AnalyzerConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
