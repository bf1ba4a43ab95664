use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ImpactScore;
use crate::enums::{ActionPriority, ConfidenceLevel};

/// Provenance of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub analyzed_at: DateTime<Utc>,
    /// Number of signals the scores were derived from.
    pub data_points: u32,
    /// Scoring strategy name, or `existing_data` when a persisted score was reused.
    pub algorithm: String,
    pub version: String,
}

/// One `ImpactScore` plus its derived interpretation.
///
/// Created fresh on every analysis and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAnalysisResult {
    pub scores: ImpactScore,
    /// Never empty.
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub action_priority: ActionPriority,
    pub confidence_level: ConfidenceLevel,
    pub metadata: AnalysisMetadata,
}

impl ImpactAnalysisResult {
    #[must_use]
    pub const fn overall_score(&self) -> f64 {
        self.scores.overall_score
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.scores.confidence
    }
}
