//! Overrides for the keyword scoring strategy.
//!
//! Every field is optional; anything left unset falls back to the built-in
//! tables in `garden-impact`. Example:
//!
//! ```toml
//! [keywords]
//! strategic_tags = ["ai_machine_learning", "robotics"]
//!
//! [keywords.metrics.market_opportunity]
//! keywords = ["市場", "market", "demand"]
//! multiplier = 2.0
//! ```

use std::collections::BTreeMap;

use garden_core::enums::Metric;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Keyword list and/or multiplier override for one content-derived metric.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KeywordOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KeywordsConfig {
    /// Per-metric overrides keyed by `snake_case` metric name.
    #[serde(default)]
    pub metrics: BTreeMap<String, KeywordOverride>,

    /// Category tags that count as a strategic fit (`vision_fit`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_tags: Option<Vec<String>>,

    /// Category tags that trigger the technology-trend recommendation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_tags: Option<Vec<String>>,

    /// Exhibition markers that count as international (`network_expansion`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_markers: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_markers: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_markers: Option<Vec<String>>,
}

impl KeywordsConfig {
    /// Resolve and validate the per-metric overrides.
    ///
    /// `vision_fit` and `network_expansion` are derived from metadata, not
    /// keywords, so overrides for them are rejected.
    pub fn metric_overrides(&self) -> Result<Vec<(Metric, &KeywordOverride)>, ConfigError> {
        let mut resolved = Vec::with_capacity(self.metrics.len());
        for (key, entry) in &self.metrics {
            let field = format!("keywords.metrics.{key}");
            let metric = Metric::from_key(key)
                .ok_or_else(|| ConfigError::invalid(&field, "unknown metric"))?;
            if matches!(metric, Metric::VisionFit | Metric::NetworkExpansion) {
                return Err(ConfigError::invalid(
                    &field,
                    "derived from metadata; use strategic_tags or global_markers instead",
                ));
            }
            if let Some(multiplier) = entry.multiplier
                && (!multiplier.is_finite() || multiplier < 0.0)
            {
                return Err(ConfigError::invalid(
                    format!("{field}.multiplier"),
                    format!("must be a finite number >= 0, got {multiplier}"),
                ));
            }
            resolved.push((metric, entry));
        }
        Ok(resolved)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metric_overrides().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn with_metric(key: &str, entry: KeywordOverride) -> KeywordsConfig {
        let mut config = KeywordsConfig::default();
        config.metrics.insert(key.to_string(), entry);
        config
    }

    #[test]
    fn default_has_no_overrides() {
        let config = KeywordsConfig::default();
        assert!(config.metric_overrides().unwrap().is_empty());
    }

    #[test]
    fn known_metric_resolves() {
        let config = with_metric(
            "user_benefit",
            KeywordOverride {
                keywords: Some(vec!["handy".into()]),
                multiplier: Some(2.0),
            },
        );
        let overrides = config.metric_overrides().unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].0, Metric::UserBenefit);
    }

    #[test]
    fn unknown_metric_rejected() {
        let config = with_metric("hype", KeywordOverride::default());
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("keywords.metrics.hype"), "{err}");
    }

    #[test]
    fn metadata_metrics_rejected() {
        let config = with_metric("vision_fit", KeywordOverride::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_multiplier_rejected() {
        let config = with_metric(
            "sustainability",
            KeywordOverride {
                keywords: None,
                multiplier: Some(-1.0),
            },
        );
        assert!(config.validate().is_err());
    }
}
