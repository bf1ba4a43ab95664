use garden_config::GardenConfig;
use garden_core::enums::ActionPriority;
use garden_core::responses::BatchItemOutcome;
use serde::Serialize;

use crate::cli::root_commands::InputArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::analyzer;
use crate::output::output;

/// One flattened batch outcome for table output.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    pub id: String,
    pub status: &'static str,
    pub overall_score: Option<f64>,
    pub action_priority: Option<ActionPriority>,
    pub error: Option<String>,
}

/// Handle `garden batch`.
pub fn handle(args: &InputArgs, config: &GardenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcomes = analyzer::run_batch(args, config)?;

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    if failed > 0 && !flags.quiet {
        eprintln!("{failed} of {} items failed to analyze", outcomes.len());
    }

    if flags.format == OutputFormat::Table {
        output(&summary_rows(&outcomes), flags.format)
    } else {
        output(&outcomes, flags.format)
    }
}

#[must_use]
pub fn summary_rows(outcomes: &[BatchItemOutcome]) -> Vec<BatchRow> {
    outcomes
        .iter()
        .map(|outcome| match outcome {
            BatchItemOutcome::Analyzed { id, analysis } => BatchRow {
                id: id.clone(),
                status: "analyzed",
                overall_score: Some(analysis.overall_score()),
                action_priority: Some(analysis.action_priority),
                error: None,
            },
            BatchItemOutcome::Failed { id, error } => BatchRow {
                id: id.clone(),
                status: "failed",
                overall_score: None,
                action_priority: None,
                error: Some(error.clone()),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use garden_core::entities::ContentItem;
    use garden_impact::{AnalyzeOptions, ImpactAnalyzer};

    use super::*;

    #[test]
    fn rows_mirror_outcomes() {
        let analyzer = ImpactAnalyzer::with_defaults();
        let mut outcomes = analyzer.batch_analyze(
            &[ContentItem::new("a", "market growth")],
            AnalyzeOptions::default(),
        );
        outcomes.push(BatchItemOutcome::Failed {
            id: "b".into(),
            error: "boom".into(),
        });

        let rows = summary_rows(&outcomes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, "analyzed");
        assert!(rows[0].overall_score.is_some_and(|s| s > 0.0));
        assert!(rows[0].error.is_none());
        assert_eq!(
            rows[1],
            BatchRow {
                id: "b".into(),
                status: "failed",
                overall_score: None,
                action_priority: None,
                error: Some("boom".into()),
            }
        );
    }
}
