//! Ranking and reporting across analyzed items.

use std::cmp::Ordering;

use chrono::Utc;
use garden_core::responses::{
    BatchItemOutcome, IdentifiedAnalysis, ImpactReport, PriorityDistribution, RankedInsight,
};

/// Number of entries in `ImpactReport::top_insights`.
pub const TOP_N: usize = 5;

/// Rank analyses by overall score, highest first.
///
/// Items with a zero or non-finite overall score are unranked and dropped.
/// The sort is stable, so equal scores keep their input order. Ranks are
/// 1-based without gaps.
#[must_use]
pub fn compare_insights(items: &[IdentifiedAnalysis]) -> Vec<RankedInsight> {
    let mut scored: Vec<&IdentifiedAnalysis> = items
        .iter()
        .filter(|item| {
            let score = item.analysis.overall_score();
            score.is_finite() && score > 0.0
        })
        .collect();

    scored.sort_by(|a, b| {
        b.analysis
            .overall_score()
            .partial_cmp(&a.analysis.overall_score())
            .unwrap_or(Ordering::Equal)
    });

    scored
        .into_iter()
        .zip(1u32..)
        .map(|(item, rank)| RankedInsight {
            id: item.id.clone(),
            rank,
            overall_score: item.analysis.overall_score(),
            confidence: item.analysis.confidence(),
            action_priority: item.analysis.action_priority,
        })
        .collect()
}

/// Summarize a set of analyses.
///
/// The average covers every item, unscored ones included; an empty input
/// averages to 0. Top insights are the first [`TOP_N`] of
/// [`compare_insights`].
#[must_use]
pub fn generate_report(items: &[IdentifiedAnalysis]) -> ImpactReport {
    let mut distribution = PriorityDistribution::default();
    let mut total = 0.0;
    for item in items {
        distribution.record(item.analysis.action_priority);
        let score = item.analysis.overall_score();
        if score.is_finite() {
            total += score;
        }
    }

    let total_items = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let average_score = if items.is_empty() {
        0.0
    } else {
        total / f64::from(total_items)
    };

    let mut top_insights = compare_insights(items);
    top_insights.truncate(TOP_N);

    tracing::debug!(total_items, average_score, "impact: report generated");

    ImpactReport {
        total_items,
        average_score,
        priority_distribution: distribution,
        top_insights,
        generated_at: Utc::now(),
    }
}

/// The successful analyses of a batch, in batch order.
#[must_use]
pub fn successful(outcomes: &[BatchItemOutcome]) -> Vec<IdentifiedAnalysis> {
    outcomes
        .iter()
        .filter_map(|outcome| {
            outcome.analysis().map(|analysis| IdentifiedAnalysis {
                id: outcome.id().to_string(),
                analysis: analysis.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use garden_core::entities::{AnalysisMetadata, ImpactAnalysisResult, ImpactScore};
    use garden_core::enums::{ActionPriority, ConfidenceLevel};
    use pretty_assertions::assert_eq;

    use super::*;

    fn analyzed(id: &str, overall: f64, priority: ActionPriority) -> IdentifiedAnalysis {
        IdentifiedAnalysis {
            id: id.into(),
            analysis: ImpactAnalysisResult {
                scores: ImpactScore {
                    overall_score: overall,
                    confidence: 0.7,
                    ..Default::default()
                },
                recommendations: Vec::new(),
                risk_factors: Vec::new(),
                action_priority: priority,
                confidence_level: ConfidenceLevel::Medium,
                metadata: AnalysisMetadata {
                    analyzed_at: Utc::now(),
                    data_points: 0,
                    algorithm: "test".into(),
                    version: "0".into(),
                },
            },
        }
    }

    fn ids(ranked: &[RankedInsight]) -> Vec<&str> {
        ranked.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn ranks_descending_by_score() {
        let items = vec![
            analyzed("item1", 4.2, ActionPriority::Urgent),
            analyzed("item2", 2.1, ActionPriority::Low),
            analyzed("item3", 3.8, ActionPriority::High),
        ];
        let ranked = compare_insights(&items);
        assert_eq!(ids(&ranked), vec!["item1", "item3", "item2"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(ranked[0].action_priority, ActionPriority::Urgent);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            analyzed("a", 3.0, ActionPriority::Medium),
            analyzed("b", 4.0, ActionPriority::Urgent),
            analyzed("c", 3.0, ActionPriority::Medium),
            analyzed("d", 3.0, ActionPriority::Medium),
        ];
        assert_eq!(ids(&compare_insights(&items)), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn unscored_items_are_dropped() {
        let items = vec![
            analyzed("zero", 0.0, ActionPriority::Low),
            analyzed("nan", f64::NAN, ActionPriority::Low),
            analyzed("ok", 1.2, ActionPriority::Low),
        ];
        let ranked = compare_insights(&items);
        assert_eq!(ids(&ranked), vec!["ok"]);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(compare_insights(&[]).is_empty());
    }

    #[test]
    fn report_counts_and_averages() {
        let items = vec![
            analyzed("a", 4.5, ActionPriority::Urgent),
            analyzed("b", 2.5, ActionPriority::Medium),
            analyzed("c", 0.0, ActionPriority::Low),
            analyzed("d", 3.0, ActionPriority::Medium),
        ];
        let report = generate_report(&items);

        assert_eq!(report.total_items, 4);
        assert!((report.average_score - 2.5).abs() < 1e-9);
        assert_eq!(report.priority_distribution.urgent, 1);
        assert_eq!(report.priority_distribution.medium, 2);
        assert_eq!(report.priority_distribution.low, 1);
        assert_eq!(report.priority_distribution.high, 0);
        assert_eq!(ids(&report.top_insights), vec!["a", "d", "b"]);
    }

    #[test]
    fn report_keeps_only_top_five() {
        let items: Vec<_> = (1..=8)
            .map(|i| analyzed(&format!("i{i}"), f64::from(i) / 2.0, ActionPriority::Low))
            .collect();
        let report = generate_report(&items);
        assert_eq!(report.top_insights.len(), TOP_N);
        assert_eq!(report.top_insights[0].id, "i8");
        assert_eq!(report.top_insights[4].id, "i4");
    }

    #[test]
    fn empty_report_is_zeroed() {
        let report = generate_report(&[]);
        assert_eq!(report.total_items, 0);
        assert!(report.average_score.abs() < f64::EPSILON);
        assert_eq!(report.priority_distribution, PriorityDistribution::default());
        assert!(report.top_insights.is_empty());
    }

    #[test]
    fn successful_skips_failures() {
        let ok = analyzed("ok", 3.0, ActionPriority::Medium);
        let outcomes = vec![
            BatchItemOutcome::Failed {
                id: "bad".into(),
                error: "boom".into(),
            },
            BatchItemOutcome::Analyzed {
                id: "ok".into(),
                analysis: Box::new(ok.analysis.clone()),
            },
        ];
        assert_eq!(successful(&outcomes), vec![ok]);
    }
}
