//! Batch, ranking and report views returned by the analyzer and printed by
//! `garden` commands.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ImpactAnalysisResult;
use crate::enums::ActionPriority;

/// Outcome of one item in `batch_analyze`.
///
/// A failing item is recorded here instead of aborting the batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItemOutcome {
    Analyzed {
        id: String,
        analysis: Box<ImpactAnalysisResult>,
    },
    Failed {
        id: String,
        error: String,
    },
}

impl BatchItemOutcome {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Analyzed { id, .. } | Self::Failed { id, .. } => id,
        }
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&ImpactAnalysisResult> {
        match self {
            Self::Analyzed { analysis, .. } => Some(analysis),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// An analyzed item with an identifier, as fed into ranking and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiedAnalysis {
    pub id: String,
    pub analysis: ImpactAnalysisResult,
}

/// One row of `compare_insights` output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedInsight {
    pub id: String,
    /// 1-based, no gaps.
    pub rank: u32,
    pub overall_score: f64,
    pub confidence: f64,
    pub action_priority: ActionPriority,
}

/// Count of analyses per action priority. Every bucket is always present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PriorityDistribution {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub urgent: u32,
}

impl PriorityDistribution {
    pub const fn record(&mut self, priority: ActionPriority) {
        match priority {
            ActionPriority::Low => self.low += 1,
            ActionPriority::Medium => self.medium += 1,
            ActionPriority::High => self.high += 1,
            ActionPriority::Urgent => self.urgent += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, priority: ActionPriority) -> u32 {
        match priority {
            ActionPriority::Low => self.low,
            ActionPriority::Medium => self.medium,
            ActionPriority::High => self.high,
            ActionPriority::Urgent => self.urgent,
        }
    }
}

/// Aggregate statistics over a set of analyses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub total_items: u32,
    pub average_score: f64,
    pub priority_distribution: PriorityDistribution,
    pub top_insights: Vec<RankedInsight>,
    pub generated_at: DateTime<Utc>,
}

impl ImpactReport {
    /// Render the report as a Markdown summary.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Impact Analysis Report");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out, "Total insights: {}", self.total_items);
        let _ = writeln!(out, "Average score: {:.2}", self.average_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "## Priority distribution");
        let _ = writeln!(out);
        for priority in ActionPriority::ALL.iter().rev() {
            let _ = writeln!(
                out,
                "- {priority}: {}",
                self.priority_distribution.get(*priority)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "## Top insights");
        let _ = writeln!(out);
        if self.top_insights.is_empty() {
            let _ = writeln!(out, "(none)");
        }
        for insight in &self.top_insights {
            let _ = writeln!(
                out,
                "{}. {} (score {:.2}, {})",
                insight.rank, insight.id, insight.overall_score, insight.action_priority
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn distribution_records_each_bucket() {
        let mut dist = PriorityDistribution::default();
        dist.record(ActionPriority::High);
        dist.record(ActionPriority::High);
        dist.record(ActionPriority::Low);
        assert_eq!(dist.get(ActionPriority::High), 2);
        assert_eq!(dist.get(ActionPriority::Low), 1);
        assert_eq!(dist.get(ActionPriority::Urgent), 0);
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let report = ImpactReport {
            total_items: 0,
            average_score: 0.0,
            priority_distribution: PriorityDistribution::default(),
            top_insights: Vec::new(),
            generated_at: Utc::now(),
        };
        let text = report.render_text();
        assert!(text.contains("Total insights: 0"));
        assert!(text.contains("(none)"));
        assert!(text.contains("- urgent: 0"));
    }

    #[test]
    fn failed_outcome_serializes_with_status_tag() {
        let outcome = BatchItemOutcome::Failed {
            id: "item-3".into(),
            error: "boom".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["id"], "item-3");
        assert!(outcome.analysis().is_none());
        assert!(outcome.is_failed());
    }
}
