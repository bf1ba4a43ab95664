//! Impact analysis error types.

/// Errors from analyzer construction and scoring.
#[derive(Debug, thiserror::Error)]
pub enum ImpactError {
    /// Criteria or keyword configuration rejected at construction.
    #[error("configuration error: {0}")]
    Config(#[from] garden_config::ConfigError),

    /// A scoring strategy could not score an item.
    #[error("scoring strategy '{strategy}' failed: {reason}")]
    Strategy { strategy: String, reason: String },

    /// Content could not be serialized for cache keying.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
